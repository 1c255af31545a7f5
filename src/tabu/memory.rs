//! Short-term tabu memory over swap moves.

use std::collections::{HashSet, VecDeque};

/// Bounded FIFO of recently applied swap pairs.
///
/// Pairs are unordered: `(i, j)` and `(j, i)` are the same move. Once the
/// list holds `capacity` pairs, recording another evicts the oldest. A
/// capacity of zero forbids nothing.
#[derive(Debug, Clone, Default)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<(usize, usize)>, // FIFO for expiring old entries
    set: HashSet<(usize, usize)>,    // O(1) membership
}

#[inline]
fn key(i: usize, j: usize) -> (usize, usize) {
    if i <= j {
        (i, j)
    } else {
        (j, i)
    }
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` pairs.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
        }
    }

    /// Maximum number of remembered pairs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pairs currently forbidden.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is forbidden.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns `true` if the swap of `i` and `j` is forbidden.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.set.contains(&key(i, j))
    }

    /// Records the swap of `i` and `j`, evicting the oldest pair when full.
    pub fn push(&mut self, i: usize, j: usize) {
        if self.capacity == 0 {
            return;
        }
        let pair = key(i, j);
        if self.set.contains(&pair) {
            return;
        }
        if self.queue.len() >= self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.set.remove(&oldest);
            }
        }
        self.set.insert(pair);
        self.queue.push_back(pair);
    }

    /// Forgets every pair.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_membership() {
        let mut tabu = TabuList::new(3);
        tabu.push(4, 1);
        assert!(tabu.contains(1, 4));
        assert!(tabu.contains(4, 1));
        assert!(!tabu.contains(1, 2));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut tabu = TabuList::new(2);
        tabu.push(0, 1);
        tabu.push(0, 2);
        tabu.push(1, 2);
        assert_eq!(tabu.len(), 2);
        assert!(!tabu.contains(0, 1));
        assert!(tabu.contains(0, 2));
        assert!(tabu.contains(2, 1));
    }

    #[test]
    fn test_readding_same_pair_does_not_duplicate() {
        let mut tabu = TabuList::new(3);
        tabu.push(2, 5);
        tabu.push(5, 2);
        assert_eq!(tabu.len(), 1);
    }

    #[test]
    fn test_zero_capacity_forbids_nothing() {
        let mut tabu = TabuList::new(0);
        tabu.push(0, 1);
        assert!(tabu.is_empty());
        assert!(!tabu.contains(0, 1));
    }

    #[test]
    fn test_clear() {
        let mut tabu = TabuList::new(2);
        tabu.push(0, 1);
        tabu.clear();
        assert!(tabu.is_empty());
        assert!(!tabu.contains(0, 1));
        assert_eq!(tabu.capacity(), 2);
    }
}
