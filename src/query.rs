/// Part of the sample range a query falls into. Decides which tangent formulas are used.
/// - `Left` - before the second sample (`floor(t) < 1`), tangent at the first sample is one sided,
/// - `Middle` - `1 <= floor(t) <= N-3`, both tangents are centered differences,
/// - `Right` - after the third to last sample (`floor(t) > N-3`), tangent at the last sample is one sided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Left,
    Middle,
    Right,
}

/// Query point `t` decomposed against a series of `len` samples taken at `0, 1, ..., len-1`.
/// - `floor` - `floor(t)`,
/// - `frac` - `t - floor(t)`, in `[0, 1)` for finite `t`,
/// - `region` - [Region] selecting the cubic used for `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    t: f64,
    floor: f64,
    frac: f64,
    region: Region,
    len: usize,
}

impl Query {
    /// Decomposes `t` for a series of `len` samples.
    ///
    /// The left region is tested first, so it wins whenever both boundary predicates hold.
    /// NaN and negative infinity land in the left region, positive infinity in the right one.
    /// # Example
    /// ```
    /// use catmull_rom_interp::{Query, Region};
    ///
    /// let query = Query::new(4.25, 10);
    /// assert_eq!(query.floor(), 4.0);
    /// assert_eq!(query.frac(), 0.25);
    /// assert_eq!(query.region(), Region::Middle);
    ///
    /// // only 3 samples: no middle region
    /// assert_eq!(Query::new(0.5, 3).region(), Region::Left);
    /// assert_eq!(Query::new(1.5, 3).region(), Region::Right);
    /// ```
    pub fn new(t: f64, len: usize) -> Self {
        let floor = t.floor();
        let frac = t - floor;

        let region = if !(floor >= 1.0) {
            Region::Left
        } else if floor > len.saturating_sub(3) as f64 {
            Region::Right
        } else {
            Region::Middle
        };

        Query { t, floor, frac, region, len }
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn frac(&self) -> f64 {
        self.frac
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Index of the sample hit exactly by the query, if `t` is an integer inside `[0, len-1]`.
    pub fn sample_index(&self) -> Option<usize> {
        if self.frac == 0.0 && self.floor >= 0.0 && self.floor <= self.last_index() as f64 {
            Some(self.floor as usize)
        } else {
            None
        }
    }

    /// Start of the interval whose cubic is evaluated together with the local parameter `u`.
    /// Boundary regions always use the first or last interval, so `u` leaves `[0, 1)` when
    /// extrapolating.
    pub fn segment(&self) -> (usize, f64) {
        match self.region {
            Region::Left => (0, self.t),
            Region::Middle => (self.floor as usize, self.frac),
            Region::Right => {
                let start = self.len.saturating_sub(2);
                (start, self.t - start as f64)
            }
        }
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }
}
