//! Permutation flow-shop instance and makespan objective.
//!
//! # Recurrence
//!
//! For machine `i` and position `j`:
//!
//! ```text
//! C[i][j] = max(C[i-1][j], C[i][j-1]) + p[i][perm[j]]
//! ```
//!
//! with out-of-range predecessors treated as 0. The makespan is
//! `C[M-1][N-1]`. Evaluated from scratch in O(N·M), keeping a single row of
//! completion times.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6.1

use std::fmt;

use super::loading::ProblemLoadError;
use crate::validation::{self, InvalidPermutation};

/// A permutation flow-shop instance.
///
/// Processing times are stored machine-major: `processing_times[machine][job]`.
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    num_jobs: usize,
    num_machines: usize,
    processing_times: Vec<Vec<u64>>,
}

impl Problem {
    /// Creates an instance from a machine-major processing-time matrix.
    ///
    /// # Errors
    /// - [`ProblemLoadError::InvalidDimensions`] if there are no machines or no jobs.
    /// - [`ProblemLoadError::RaggedRow`] if machine rows differ in length.
    /// - [`ProblemLoadError::TimeOverflow`] if the processing times sum past `u64::MAX`.
    ///
    /// # Example
    /// ```
    /// use u_flowshop::models::Problem;
    ///
    /// let problem = Problem::new(vec![vec![2, 3, 4], vec![1, 5, 2]]).unwrap();
    /// assert_eq!(problem.num_jobs(), 3);
    /// assert_eq!(problem.num_machines(), 2);
    /// assert_eq!(problem.calculate_makespan(&[0, 1, 2]).unwrap(), 12);
    /// ```
    pub fn new(processing_times: Vec<Vec<u64>>) -> Result<Self, ProblemLoadError> {
        let num_machines = processing_times.len();
        let num_jobs = processing_times.first().map_or(0, Vec::len);
        if num_machines == 0 || num_jobs == 0 {
            return Err(ProblemLoadError::InvalidDimensions);
        }
        if let Some(machine) = processing_times.iter().position(|row| row.len() != num_jobs) {
            return Err(ProblemLoadError::RaggedRow {
                machine,
                expected: num_jobs,
                actual: processing_times[machine].len(),
            });
        }
        let fits = processing_times
            .iter()
            .flatten()
            .try_fold(0u64, |acc, &t| acc.checked_add(t))
            .is_some();
        if !fits {
            return Err(ProblemLoadError::TimeOverflow);
        }

        Ok(Self {
            num_jobs,
            num_machines,
            processing_times,
        })
    }

    /// Number of jobs (N).
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Number of machines (M).
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Full processing-time matrix, `[machine][job]`.
    #[inline]
    pub fn processing_times(&self) -> &[Vec<u64>] {
        &self.processing_times
    }

    /// Processing time of `job` on `machine`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn processing_time(&self, machine: usize, job: usize) -> u64 {
        self.processing_times[machine][job]
    }

    /// Sum of a job's processing times over all machines.
    pub fn total_processing_time(&self, job: usize) -> u64 {
        self.processing_times.iter().map(|row| row[job]).sum()
    }

    /// Mean of a job's processing times over all machines.
    pub fn mean_processing_time(&self, job: usize) -> f64 {
        self.total_processing_time(job) as f64 / self.num_machines as f64
    }

    /// Computes the makespan of a job ordering.
    ///
    /// # Errors
    /// Returns [`InvalidPermutation`] if the ordering does not have
    /// exactly `num_jobs` entries or references a job out of range.
    /// Duplicates are not rejected here.
    pub fn calculate_makespan(&self, permutation: &[usize]) -> Result<u64, InvalidPermutation> {
        validation::check_shape(permutation, self.num_jobs)?;
        Ok(self.makespan_of(permutation))
    }

    /// Makespan without the shape check. Callers guarantee the precondition.
    ///
    /// Cannot overflow: every completion time is bounded by the sum of all
    /// processing times, which [`Problem::new`] checks fits in `u64`.
    pub(crate) fn makespan_of(&self, permutation: &[usize]) -> u64 {
        // completion[j] holds C[i-1][j] on entry to machine row i
        let mut completion = vec![0u64; permutation.len()];
        for row in &self.processing_times {
            let mut prev_job = 0u64;
            for (slot, &job) in completion.iter_mut().zip(permutation) {
                let finish = (*slot).max(prev_job) + row[job];
                *slot = finish;
                prev_job = finish;
            }
        }
        completion.last().copied().unwrap_or(0)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} jobs, {} machines", self.num_jobs, self.num_machines)
    }
}
