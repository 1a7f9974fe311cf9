extern crate catmull_rom_interp;

use std::error::Error;

use catmull_rom_interp::CatmullRom;

fn main() -> Result<(), Box<dyn Error>> {

    let samples = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];
    let spline = CatmullRom::new(samples)?;
    let (x_min, x_max) = spline.range();

    let number_of_steps = 50;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps)
        .map(|i| (x_min + step * i as f64).min(x_max))
        .collect();

    let result = spline.batch_interpolate(&x_vector)?;

    println!("x;y;slope");
    for (x, y) in x_vector.iter().zip(result.iter()) {
        println!("{:.2};{:.2};{:.2}", x, y, spline.slope(*x));
    }
    Ok(())
}
