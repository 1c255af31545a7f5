//! Permutation validation.
//!
//! A job ordering is valid when it is a bijection on `[0, num_jobs)`:
//! - exactly `num_jobs` entries
//! - every entry in range
//! - no job repeated, no job missing
//!
//! Checks run in that order and stop at the first failure.

use std::fmt;

/// A job ordering that is not a permutation of the problem's jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPermutation {
    /// The ordering has the wrong number of entries.
    WrongLength {
        /// Number of jobs in the problem.
        expected: usize,
        /// Number of entries supplied.
        actual: usize,
    },
    /// A job index is outside `[0, num_jobs)`.
    OutOfRange {
        /// The offending job index.
        job: usize,
        /// Number of jobs in the problem.
        num_jobs: usize,
    },
    /// A job appears more than once.
    Duplicate {
        /// The repeated job.
        job: usize,
    },
    /// A job does not appear at all.
    Missing {
        /// The absent job.
        job: usize,
    },
}

impl fmt::Display for InvalidPermutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => write!(
                f,
                "Invalid permutation size: got {actual}, expected {expected}"
            ),
            Self::OutOfRange { job, num_jobs } => write!(
                f,
                "Invalid job index in permutation: {job} (problem has {num_jobs} jobs)"
            ),
            Self::Duplicate { job } => write!(f, "Duplicate job in permutation: {job}"),
            Self::Missing { job } => write!(f, "Missing job in permutation: {job}"),
        }
    }
}

impl std::error::Error for InvalidPermutation {}

/// Checks only the length and index range of an ordering.
///
/// This is the precondition of the makespan recurrence; it does not look
/// for duplicates.
pub fn check_shape(permutation: &[usize], num_jobs: usize) -> Result<(), InvalidPermutation> {
    if permutation.len() != num_jobs {
        return Err(InvalidPermutation::WrongLength {
            expected: num_jobs,
            actual: permutation.len(),
        });
    }
    match permutation.iter().find(|&&job| job >= num_jobs) {
        Some(&job) => Err(InvalidPermutation::OutOfRange { job, num_jobs }),
        None => Ok(()),
    }
}

/// Validates that `permutation` is a bijection on `[0, num_jobs)`.
///
/// # Example
///
/// ```
/// use u_flowshop::validation::{validate_permutation, InvalidPermutation};
///
/// assert!(validate_permutation(&[2, 0, 1], 3).is_ok());
/// assert_eq!(
///     validate_permutation(&[0, 0, 1], 3),
///     Err(InvalidPermutation::Duplicate { job: 0 })
/// );
/// ```
pub fn validate_permutation(
    permutation: &[usize],
    num_jobs: usize,
) -> Result<(), InvalidPermutation> {
    check_shape(permutation, num_jobs)?;

    let mut present = vec![false; num_jobs];
    for &job in permutation {
        if present[job] {
            return Err(InvalidPermutation::Duplicate { job });
        }
        present[job] = true;
    }

    // a duplicate-free ordering of the right length has no gaps
    match present.iter().position(|&p| !p) {
        Some(job) => Err(InvalidPermutation::Missing { job }),
        None => Ok(()),
    }
}

/// Returns `true` if `permutation` is a bijection on `[0, num_jobs)`.
#[inline]
pub fn is_permutation(permutation: &[usize], num_jobs: usize) -> bool {
    validate_permutation(permutation, num_jobs).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation() {
        assert!(validate_permutation(&[1, 2, 0], 3).is_ok());
        assert!(validate_permutation(&[0], 1).is_ok());
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            validate_permutation(&[0, 1], 3),
            Err(InvalidPermutation::WrongLength {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            validate_permutation(&[0, 1, 2, 3], 3),
            Err(InvalidPermutation::WrongLength {
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            validate_permutation(&[0, 3, 1], 3),
            Err(InvalidPermutation::OutOfRange { job: 3, num_jobs: 3 })
        );
    }

    #[test]
    fn test_duplicate() {
        assert_eq!(
            validate_permutation(&[2, 1, 2], 3),
            Err(InvalidPermutation::Duplicate { job: 2 })
        );
    }

    #[test]
    fn test_check_shape_ignores_duplicates() {
        assert!(check_shape(&[1, 1, 1], 3).is_ok());
        assert!(!is_permutation(&[1, 1, 1], 3));
    }

    #[test]
    fn test_error_messages() {
        let err = InvalidPermutation::WrongLength {
            expected: 5,
            actual: 4,
        };
        assert_eq!(err.to_string(), "Invalid permutation size: got 4, expected 5");
        assert!(InvalidPermutation::Missing { job: 7 }.to_string().contains('7'));
    }
}
