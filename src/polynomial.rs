use nalgebra::{Matrix4, Vector4};

/// Cubic polynomial on one sample interval, stored in power basis
/// `c0 + c1*u + c2*u^2 + c3*u^3` of the local parameter `u`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    coefficients: Vector4<f64>,
}

impl Cubic {

    /// Builds the cubic Hermite segment through `p0` (at `u = 0`) and `p1` (at `u = 1`)
    /// with tangents `m0` and `m1`.
    pub fn from_hermite(p0: f64, p1: f64, m0: f64, m1: f64) -> Self {
        let geometry = Vector4::new(p0, m0, p1, m1);
        Cubic { coefficients: hermite_basis() * geometry }
    }

    pub fn evaluate(&self, u: f64) -> f64 {
        let c = &self.coefficients;
        ((c[3] * u + c[2]) * u + c[1]) * u + c[0]
    }

    pub fn derivative(&self, u: f64) -> f64 {
        let c = &self.coefficients;
        (3.0 * c[3] * u + 2.0 * c[2]) * u + c[1]
    }
}

// rows: power of u, columns: (p0, m0, p1, m1)
fn hermite_basis() -> Matrix4<f64> {
    Matrix4::new(
         1.0,  0.0,  0.0,  0.0,
         0.0,  1.0,  0.0,  0.0,
        -3.0, -2.0,  3.0, -1.0,
         2.0,  1.0, -2.0,  1.0,
    )
}
