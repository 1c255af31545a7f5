//! Move neighborhoods and first-improvement descent.
//!
//! # Neighborhoods
//!
//! | Neighborhood | Pairs scanned | Size |
//! |--------------|---------------|------|
//! | Swap | `i < j` | N(N-1)/2 |
//! | Insert | `i != j` | N(N-1) |
//! | Reverse | `i < j` | N(N-1)/2 |
//!
//! A scan is first-improvement: whenever a move strictly lowers the
//! makespan it is kept, and the remaining pairs are evaluated against the
//! new incumbent.

use serde::{Deserialize, Serialize};

use crate::models::Solution;

/// A family of moves over job positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// Exchange two positions.
    Swap,
    /// Move one job to another position.
    Insert,
    /// Reverse a sub-range.
    Reverse,
}

impl Neighborhood {
    /// Scan order of one descent round.
    pub const ROUND: [Neighborhood; 3] = [
        Neighborhood::Swap,
        Neighborhood::Insert,
        Neighborhood::Reverse,
    ];

    /// Applies the move `(i, j)` of this neighborhood.
    #[inline]
    pub fn apply(&self, solution: &mut Solution, i: usize, j: usize) {
        match self {
            Self::Swap => solution.swap(i, j),
            Self::Insert => solution.insert(i, j),
            Self::Reverse => solution.reverse(i, j),
        }
    }

    /// Scans every move once, keeping each strict improvement.
    ///
    /// Returns `true` if `current` improved.
    pub fn scan(&self, current: &mut Solution) -> bool {
        let n = current.len();
        let mut trial = current.clone();
        let mut improved = false;

        for i in 0..n {
            for j in 0..n {
                let eligible = match self {
                    Self::Swap | Self::Reverse => i < j,
                    Self::Insert => i != j,
                };
                if !eligible {
                    continue;
                }

                self.apply(&mut trial, i, j);
                if trial.is_better_than(current) {
                    current.assign_from(&trial);
                    improved = true;
                } else {
                    trial.assign_from(current);
                }
            }
        }

        improved
    }
}

/// Repeats swap, insert and reverse scans until a full round brings no
/// improvement or `max_rounds` rounds have run.
///
/// Returns the number of rounds executed.
pub fn descend(current: &mut Solution, max_rounds: usize) -> usize {
    let mut rounds = 0;
    while rounds < max_rounds {
        rounds += 1;
        let mut improved = false;
        for neighborhood in Neighborhood::ROUND {
            improved |= neighborhood.scan(current);
        }
        if !improved {
            break;
        }
    }
    rounds
}
