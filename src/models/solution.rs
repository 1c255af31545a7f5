//! Job ordering bound to a problem instance.
//!
//! A [`Solution`] owns its permutation and a cached makespan. Every mutator
//! re-evaluates the makespan before returning, so the cache is never stale.
//!
//! # Mutators
//!
//! | Move | Effect on `perm` |
//! |------|------------------|
//! | `swap(i, j)` | exchange entries `i` and `j` |
//! | `insert(i, j)` | remove entry `i`, reinsert it at `j` |
//! | `reverse(i, j)` | reverse the closed range `[min(i,j), max(i,j)]` |
//!
//! Indices are not bounds-checked beyond the slice indexing itself; callers
//! pass positions in `[0, num_jobs)`.

use std::fmt;
use std::sync::Arc;

use super::Problem;
use crate::validation::{self, InvalidPermutation};

/// A permutation of job indices together with its makespan.
///
/// Cloning produces a fully independent copy that shares the same
/// immutable [`Problem`].
#[derive(Debug, Clone)]
pub struct Solution {
    problem: Arc<Problem>,
    permutation: Vec<usize>,
    makespan: u64,
}

impl Solution {
    /// Creates the identity ordering `[0, 1, ..., N-1]`, already evaluated.
    pub fn new(problem: Arc<Problem>) -> Self {
        let permutation: Vec<usize> = (0..problem.num_jobs()).collect();
        let makespan = problem.makespan_of(&permutation);
        Self {
            problem,
            permutation,
            makespan,
        }
    }

    /// Creates a solution from an explicit ordering.
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use u_flowshop::models::{Problem, Solution};
    ///
    /// let problem = Arc::new(Problem::new(vec![vec![2, 3, 4], vec![1, 5, 2]]).unwrap());
    /// let sol = Solution::from_permutation(problem.clone(), vec![2, 0, 1]).unwrap();
    /// assert_eq!(sol.makespan(), 14);
    ///
    /// assert!(Solution::from_permutation(problem, vec![0, 0, 1]).is_err());
    /// ```
    pub fn from_permutation(
        problem: Arc<Problem>,
        permutation: Vec<usize>,
    ) -> Result<Self, InvalidPermutation> {
        let mut solution = Self::new(problem);
        solution.set_permutation(permutation)?;
        Ok(solution)
    }

    /// The problem this solution belongs to.
    #[inline]
    pub fn problem(&self) -> &Arc<Problem> {
        &self.problem
    }

    /// Job ordering; position 0 is processed first.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Cached makespan of the current ordering.
    #[inline]
    pub fn makespan(&self) -> u64 {
        self.makespan
    }

    /// Number of jobs in the ordering.
    #[inline]
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    /// Always `false` for a constructed problem; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Replaces the ordering after validating it.
    ///
    /// On error the solution is left untouched.
    pub fn set_permutation(&mut self, permutation: Vec<usize>) -> Result<(), InvalidPermutation> {
        validation::validate_permutation(&permutation, self.problem.num_jobs())?;
        self.permutation = permutation;
        self.evaluate();
        Ok(())
    }

    /// Copies the ordering and makespan of `other` into `self`.
    ///
    /// Reuses the existing allocation; both solutions must share a problem.
    pub fn assign_from(&mut self, other: &Solution) {
        debug_assert!(Arc::ptr_eq(&self.problem, &other.problem));
        self.permutation.clone_from(&other.permutation);
        self.makespan = other.makespan;
    }

    /// Exchanges the jobs at positions `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.permutation.swap(i, j);
        self.evaluate();
    }

    /// Moves the job at position `i` to position `j`.
    ///
    /// For `i < j` the run `(i, j]` shifts one step left; for `i > j` the
    /// run `[j, i)` shifts one step right. `i == j` leaves the order as is.
    pub fn insert(&mut self, i: usize, j: usize) {
        if i < j {
            self.permutation[i..=j].rotate_left(1);
        } else if i > j {
            self.permutation[j..=i].rotate_right(1);
        }
        self.evaluate();
    }

    /// Reverses the closed range between positions `i` and `j`.
    pub fn reverse(&mut self, i: usize, j: usize) {
        let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
        self.permutation[lo..=hi].reverse();
        self.evaluate();
    }

    /// Recomputes the cached makespan.
    pub fn evaluate(&mut self) {
        self.makespan = self.problem.makespan_of(&self.permutation);
    }

    /// Returns `true` if this solution has a strictly lower makespan.
    #[inline]
    pub fn is_better_than(&self, other: &Solution) -> bool {
        self.makespan < other.makespan
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.permutation == other.permutation && self.makespan == other.makespan
    }
}

impl Eq for Solution {}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "makespan {} {:?}", self.makespan, self.permutation)
    }
}
