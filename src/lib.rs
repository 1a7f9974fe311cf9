//! Catmull-Rom interpolation and extrapolation of a signal sampled at integer positions
//! `0, 1, ..., N-1`. Interior intervals use centered difference tangents, the first and last
//! interval fall back to one sided differences. Integer queries inside the sample range return
//! the samples exactly.
//!
//! # Example
//! ```
//! use catmull_rom_interp::{interpolate, CatmullRom};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let samples = vec![0.0, 1.0, 4.0, 9.0, 16.0];
//!
//! let values = interpolate(&samples, &[2.0, 2.5]).unwrap();
//! assert_eq!(values[0], 4.0);
//! assert_approx_eq!(values[1], 6.25, 1e-9);
//!
//! let spline = CatmullRom::new(samples).unwrap();
//! assert!(spline.interpolate(-1.0).is_err());
//! assert_approx_eq!(spline.extrapolate(-1.0), -3.0, 1e-9);
//! ```

mod catmull_rom;
mod polynomial;
mod query;

pub use catmull_rom::{interpolate, CatmullRom, CatmullRomError, MIN_SAMPLES};
pub use query::{Query, Region};
