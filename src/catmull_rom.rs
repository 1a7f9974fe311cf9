use thiserror::Error;

use crate::{polynomial::Cubic, query::{Query, Region}};

/// Smallest series the boundary tangent formulas are defined for.
pub const MIN_SAMPLES: usize = 3;

/// Catmull-Rom interpolant through samples `y[0..N-1]` taken at `0, 1, ..., N-1`.
///
/// Interior intervals use centered difference tangents. The first and last interval replace the
/// missing neighbor with a one sided (not halved) difference, their cubics are computed once and
/// reused for every query that falls before `1` or after `N-2`, including extrapolation.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    samples: Vec<f64>,
    left: Cubic,
    right: Cubic,
}

impl CatmullRom {
    /// # Errors
    /// [CatmullRomError::InvalidInput] when fewer than 3 samples are given.
    /// ```
    /// use catmull_rom_interp::CatmullRom;
    ///
    /// assert!(CatmullRom::new(vec![1.0, 2.0]).is_err());
    /// assert!(CatmullRom::new(vec![1.0, 2.0, 3.0]).is_ok());
    /// ```
    pub fn new(samples: Vec<f64>) -> Result<Self, CatmullRomError> {
        let n = samples.len();
        if n < MIN_SAMPLES {
            return Err(CatmullRomError::InvalidInput { got: n });
        }

        let y = &samples;
        let left = Cubic::from_hermite(
            y[0],
            y[1],
            y[1] - y[0],
            (y[2] - y[0]) / 2.0,
        );
        let right = Cubic::from_hermite(
            y[n - 2],
            y[n - 1],
            (y[n - 1] - y[n - 3]) / 2.0,
            y[n - 1] - y[n - 2],
        );

        Ok(CatmullRom { samples, left, right })
    }

    /// Value at `t`, which must lie in `[0, N-1]`.
    pub fn interpolate(&self, t: f64) -> Result<f64, CatmullRomError> {
        if self.is_in_range(t) {
            Ok(self.extrapolate(t))
        } else {
            Err(self.out_of_range(t))
        }
    }

    /// Values at all `t_vector` entries. Fails without evaluating anything if one of them lies
    /// outside `[0, N-1]`.
    pub fn batch_interpolate(&self, t_vector: &[f64]) -> Result<Vec<f64>, CatmullRomError> {
        match t_vector.iter().find(|t| !self.is_in_range(**t)) {
            Some(t) => Err(self.out_of_range(*t)),
            None => Ok(self.batch_extrapolate(t_vector)),
        }
    }

    /// Value at any `t`. Outside `[0, N-1]` the boundary cubic is continued.
    /// Integer `t` inside the range returns the sample itself.
    pub fn extrapolate(&self, t: f64) -> f64 {
        let query = Query::new(t, self.len());
        match query.sample_index() {
            Some(index) => self.samples[index],
            None => {
                let (start, u) = query.segment();
                self.cubic(query.region(), start).evaluate(u)
            }
        }
    }

    /// Same values as calling [CatmullRom::extrapolate] for every entry, in the same order.
    ///
    /// Queries are grouped by region first. Boundary groups share the precomputed cubics and
    /// consecutive middle queries on the same interval share one cubic.
    pub fn batch_extrapolate(&self, t_vector: &[f64]) -> Vec<f64> {
        let len = self.len();
        let mut results = vec![0.0; t_vector.len()];

        let mut left = Vec::new();
        let mut middle = Vec::new();
        let mut right = Vec::new();

        for (position, t) in t_vector.iter().enumerate() {
            let query = Query::new(*t, len);
            if let Some(index) = query.sample_index() {
                results[position] = self.samples[index];
                continue;
            }
            let (start, u) = query.segment();
            match query.region() {
                Region::Left => left.push((position, u)),
                Region::Middle => middle.push((position, start, u)),
                Region::Right => right.push((position, u)),
            }
        }

        for (position, u) in left {
            results[position] = self.left.evaluate(u);
        }

        let mut hint: Option<(usize, Cubic)> = None;
        for (position, start, u) in middle {
            let cubic = match hint {
                Some((hint_start, cubic)) if hint_start == start => cubic,
                _ => {
                    let cubic = self.middle_cubic(start);
                    hint = Some((start, cubic));
                    cubic
                }
            };
            results[position] = cubic.evaluate(u);
        }

        for (position, u) in right {
            results[position] = self.right.evaluate(u);
        }
        results
    }

    /// First derivative of the cubic selected for `t`. Extrapolates like [CatmullRom::extrapolate].
    pub fn slope(&self, t: f64) -> f64 {
        let query = Query::new(t, self.len());
        let (start, u) = query.segment();
        self.cubic(query.region(), start).derivative(u)
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false, construction requires at least 3 samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Interval `[0, N-1]` covered by the samples.
    pub fn range(&self) -> (f64, f64) {
        (0.0, (self.len() - 1) as f64)
    }

    fn cubic(&self, region: Region, start: usize) -> Cubic {
        match region {
            Region::Left => self.left,
            Region::Middle => self.middle_cubic(start),
            Region::Right => self.right,
        }
    }

    // 1 <= start <= N-3
    fn middle_cubic(&self, start: usize) -> Cubic {
        let y = &self.samples;
        Cubic::from_hermite(
            y[start],
            y[start + 1],
            (y[start + 1] - y[start - 1]) / 2.0,
            (y[start + 2] - y[start]) / 2.0,
        )
    }

    fn is_in_range(&self, t: f64) -> bool {
        let (min, max) = self.range();
        min <= t && t <= max
    }

    fn out_of_range(&self, t: f64) -> CatmullRomError {
        let (min, max) = self.range();
        CatmullRomError::OutOfRange { got: t, min, max }
    }
}

/// Catmull-Rom interpolation of `samples` (taken at `0, 1, ..., N-1`) at every entry of `queries`.
///
/// There is no range check: queries outside `[0, N-1]` continue the nearest boundary cubic.
/// # Errors
/// [CatmullRomError::InvalidInput] when fewer than 3 samples are given, before any query is evaluated.
pub fn interpolate(samples: &[f64], queries: &[f64]) -> Result<Vec<f64>, CatmullRomError> {
    let spline = CatmullRom::new(samples.to_vec())?;
    Ok(spline.batch_extrapolate(queries))
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatmullRomError {
    #[error("insufficient samples: got {got}, need at least 3")]
    InvalidInput { got: usize },

    #[error("query {got} out of range [{min}, {max}]")]
    OutOfRange { got: f64, min: f64, max: f64 },
}
