//! Bounded history of scalar observations.

use std::collections::VecDeque;

/// Upper bound on storage reserved up front; larger histories grow on demand.
const PREALLOCATE_LIMIT: usize = 4096;

/// Fixed-capacity, insertion-ordered sample history.
///
/// Index 0 is the oldest retained sample. Appending at capacity evicts the
/// oldest sample before the new one is stored, so `len() <= capacity()`
/// always holds.
///
/// `Series` itself does no locking; the streaming estimator owns it behind a
/// mutex and only ever hands out copies via [`snapshot`](Self::snapshot).
#[derive(Debug, Clone)]
pub struct Series {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl Series {
    /// Create an empty series that retains at most `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            capacity,
        }
    }

    /// Append a sample, returning the evicted one when the series was full.
    pub fn append(&mut self, value: f64) -> Option<f64> {
        if self.capacity == 0 {
            return Some(value);
        }
        let evicted = if self.samples.len() >= self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(value);
        evicted
    }

    /// Drop all samples. Storage is kept.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Change the capacity, keeping only the most recent samples if the
    /// series holds more than `capacity` of them. Never allocates.
    pub fn resize(&mut self, capacity: usize) {
        if self.samples.len() > capacity {
            let excess = self.samples.len() - capacity;
            self.samples.drain(..excess);
        }
        self.samples.shrink_to(capacity);
        self.capacity = capacity;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Copy of the retained samples, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    /// Iterate over the retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_until_capacity() {
        let mut series = Series::with_capacity(4);
        assert!(series.is_empty());

        for i in 0..3 {
            assert_eq!(series.append(i as f64), None);
        }
        assert_eq!(series.len(), 3);
        assert!(!series.is_full());

        series.append(3.0);
        assert!(series.is_full());
        assert_eq!(series.snapshot(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn evicts_oldest_when_full() {
        let mut series = Series::with_capacity(3);
        series.append(1.0);
        series.append(2.0);
        series.append(3.0);

        assert_eq!(series.append(4.0), Some(1.0));
        assert_eq!(series.snapshot(), vec![2.0, 3.0, 4.0]);
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut series = Series::with_capacity(5);
        series.append(1.0);
        series.append(2.0);

        series.clear();
        assert_eq!(series.len(), 0);
        assert_eq!(series.capacity(), 5);
        assert!(series.snapshot().is_empty());

        series.clear();
        assert_eq!(series.len(), 0);
    }

    #[test]
    fn shrinking_keeps_most_recent() {
        let mut series = Series::with_capacity(6);
        for i in 0..6 {
            series.append(i as f64);
        }

        series.resize(4);
        assert_eq!(series.capacity(), 4);
        assert_eq!(series.snapshot(), vec![2.0, 3.0, 4.0, 5.0]);

        series.append(6.0);
        assert_eq!(series.snapshot(), vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn huge_capacity_is_not_reserved_up_front() {
        let mut series = Series::with_capacity(usize::MAX);
        series.append(1.0);
        series.append(2.0);
        assert_eq!(series.capacity(), usize::MAX);

        let mut series = Series::with_capacity(4);
        series.append(1.0);
        series.resize(usize::MAX);
        series.append(2.0);
        assert_eq!(series.capacity(), usize::MAX);
        assert_eq!(series.snapshot(), vec![1.0, 2.0]);
    }

    #[test]
    fn growing_keeps_everything() {
        let mut series = Series::with_capacity(3);
        for i in 0..3 {
            series.append(i as f64);
        }

        series.resize(5);
        assert_eq!(series.snapshot(), vec![0.0, 1.0, 2.0]);
        series.append(3.0);
        series.append(4.0);
        assert!(series.is_full());
        assert_eq!(series.append(5.0), Some(0.0));
    }
}
