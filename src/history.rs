use std::collections::vec_deque::{self, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use crate::sampler::{Delta, MAX_EVENTS};

#[cfg(test)]
mod test;

/// Sliding window over the most recent deltas, oldest first.
///
/// The window always holds exactly `capacity` deltas: it starts out filled
/// with zeros so the chart has a stable width from the first frame, and every
/// push evicts the oldest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<Delta>,
    dims: usize,
}

impl History {
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `dims` exceeds
    /// [`MAX_EVENTS`](crate::sampler::MAX_EVENTS).
    pub fn new(capacity: usize, dims: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        assert!(dims <= MAX_EVENTS, "{} events exceed the limit of {}", dims, MAX_EVENTS);
        let entries = (0..capacity).map(|_| Delta::zero(dims)).collect();
        Self { entries, dims }
    }

    /// Appends `delta`, evicting the oldest one.
    pub fn push(&mut self, delta: Delta) {
        assert_eq!(delta.dims(), self.dims);
        self.entries.pop_front();
        self.entries.push_back(delta);
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values in every delta.
    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn latest(&self) -> Option<&Delta> {
        self.entries.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, Delta> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Delta;
    type IntoIter = vec_deque::Iter<'a, Delta>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// [`History`] shared between the sampler, which pushes, and the renderer,
/// which reads.
///
/// Readers take a [`snapshot`](Self::snapshot) under the lock, so they never
/// see a window in the middle of an eviction.
#[derive(Clone, Debug)]
pub struct SharedHistory(Arc<Mutex<History>>);

impl SharedHistory {
    pub fn new(history: History) -> Self {
        Self(Arc::new(Mutex::new(history)))
    }

    pub fn push(&self, delta: Delta) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(delta);
    }

    pub fn snapshot(&self) -> History {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
