extern crate catmull_rom_interp;

use std::error::Error;

use catmull_rom_interp::interpolate;

fn f(t: f64) -> f64 {
    t.powi(3) + 2.0 * t.powi(2)
}

fn main() -> Result<(), Box<dyn Error>> {

    let samples: Vec<f64> = (0..100).map(|i| f(i as f64)).collect();
    let t_vector = vec![0.8, 0.9, 1.2, 3.5, 4.7, 5.9, 96.5, 99.1];

    let result = interpolate(&samples, &t_vector)?;

    println!("t;exact;interpolated;relative_error");
    for (t, y) in t_vector.iter().zip(result.iter()) {
        let exact = f(*t);
        println!("{:.2};{:.4};{:.4};{:.2e}", t, exact, y, ((y - exact) / exact).abs());
    }
    Ok(())
}
