extern crate catmull_rom_interp;

use std::error::Error;

use catmull_rom_interp::CatmullRom;

fn main() -> Result<(), Box<dyn Error>> {

    let spline = CatmullRom::new(vec![1.0, 0.0, -2.0, 1.0, 1.0])?;

    let x_min = -1.0;
    let x_max = 5.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.extrapolate(x));
    }
    Ok(())
}
