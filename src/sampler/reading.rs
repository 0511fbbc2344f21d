use arrayvec::ArrayVec;

/// Upper bound on the events a single session counts.
pub const MAX_EVENTS: usize = 8;

type Values = ArrayVec<u64, MAX_EVENTS>;

/// Cumulative counts, one per event, each summed over every core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reading(Values);

/// Per-tick difference of two successive [`Reading`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Delta(Values);

impl Reading {
    /// The reading of a freshly reset counter set.
    ///
    /// # Panics
    ///
    /// Panics if `dims` exceeds [`MAX_EVENTS`].
    pub fn zero(dims: usize) -> Self {
        Self(zeros(dims))
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn dims(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn add(&mut self, dim: usize, count: u64) {
        self.0[dim] = self.0[dim].wrapping_add(count);
    }

    /// Element-wise `self - prev`.
    ///
    /// Counters are unsigned and 64 bits wide, a wrapped or externally reset
    /// counter shows up as a huge value rather than an error.
    pub fn delta(&self, prev: &Reading) -> Delta {
        assert_eq!(self.dims(), prev.dims());
        let values = self
            .0
            .iter()
            .zip(prev.0.iter())
            .map(|(now, then)| now.wrapping_sub(*then))
            .collect();
        Delta(values)
    }
}

fn zeros(dims: usize) -> Values {
    assert!(dims <= MAX_EVENTS, "{} events exceed the limit of {}", dims, MAX_EVENTS);
    (0..dims).map(|_| 0).collect()
}

// Collecting more than `MAX_EVENTS` values panics.
impl FromIterator<u64> for Reading {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Delta {
    /// # Panics
    ///
    /// Panics if `dims` exceeds [`MAX_EVENTS`].
    pub fn zero(dims: usize) -> Self {
        Self(zeros(dims))
    }

    pub fn values(&self) -> &[u64] {
        &self.0
    }

    pub fn dims(&self) -> usize {
        self.0.len()
    }

    /// Sums the given dimensions.
    pub fn sum(&self, dims: &[usize]) -> u64 {
        dims.iter()
            .fold(0u64, |sum, &dim| sum.saturating_add(self.0[dim]))
    }
}

impl FromIterator<u64> for Delta {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
