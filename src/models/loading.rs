//! Flow-shop instance loading.
//!
//! # Format
//!
//! ```text
//! <num_jobs> <num_machines>
//! p[0][0] p[0][1] ... p[0][N-1]      (machine 0)
//! ...
//! p[M-1][0] ...       p[M-1][N-1]    (machine M-1)
//! ```
//!
//! Whitespace-separated non-negative integers; blank lines are skipped.
//! Each machine record must hold exactly `num_jobs` values and nothing may
//! follow the last record.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use super::Problem;

/// Errors raised while building a [`Problem`] from instance data.
#[derive(Debug)]
pub enum ProblemLoadError {
    /// An I/O error occurred while reading the input.
    Io(std::io::Error),
    /// The input ended before all machine records were read.
    UnexpectedEof,
    /// A token is not a non-negative integer.
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The job or machine count is zero, or the header is malformed.
    InvalidDimensions,
    /// A machine record has the wrong number of values.
    RowLength {
        /// 1-based line number.
        line: usize,
        /// Expected number of values (`num_jobs`).
        expected: usize,
        /// Values found on the line.
        actual: usize,
    },
    /// Non-blank content follows the last machine record.
    TrailingData {
        /// 1-based line number.
        line: usize,
    },
    /// Rows of an in-memory matrix differ in length.
    RaggedRow {
        /// Index of the first mismatching machine row.
        machine: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the mismatching row.
        actual: usize,
    },
    /// The processing times sum past `u64::MAX`.
    TimeOverflow,
}

impl fmt::Display for ProblemLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Not enough lines in input"),
            Self::Parse { line, token } => {
                write!(f, "Could not parse '{token}' on line {line} as a processing time")
            }
            Self::InvalidDimensions => {
                write!(f, "Job and machine counts must be positive integers")
            }
            Self::RowLength {
                line,
                expected,
                actual,
            } => write!(f, "Line {line} has {actual} values, expected {expected}"),
            Self::TrailingData { line } => write!(f, "Unexpected data on line {line}"),
            Self::RaggedRow {
                machine,
                expected,
                actual,
            } => write!(
                f,
                "Machine {machine} has {actual} processing times, expected {expected}"
            ),
            Self::TimeOverflow => write!(f, "Sum of processing times overflows u64"),
        }
    }
}

impl std::error::Error for ProblemLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProblemLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

fn parse_line(line_no: usize, line: &str) -> Result<Vec<u64>, ProblemLoadError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<u64>().map_err(|_| ProblemLoadError::Parse {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

impl Problem {
    /// Reads an instance from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ProblemLoadError> {
        let mut records = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if !line.trim().is_empty() {
                records.push((idx + 1, line));
            }
        }
        let mut records = records.into_iter();

        let (header_no, header) = records.next().ok_or(ProblemLoadError::UnexpectedEof)?;
        let dims = parse_line(header_no, &header)?;
        let (num_jobs, num_machines) = match dims.as_slice() {
            [n, m] if *n > 0 && *m > 0 => (*n as usize, *m as usize),
            _ => return Err(ProblemLoadError::InvalidDimensions),
        };

        let mut processing_times = Vec::new();
        for _ in 0..num_machines {
            let (line_no, line) = records.next().ok_or(ProblemLoadError::UnexpectedEof)?;
            let row = parse_line(line_no, &line)?;
            if row.len() != num_jobs {
                return Err(ProblemLoadError::RowLength {
                    line: line_no,
                    expected: num_jobs,
                    actual: row.len(),
                });
            }
            processing_times.push(row);
        }

        if let Some((line, _)) = records.next() {
            return Err(ProblemLoadError::TrailingData { line });
        }

        Problem::new(processing_times)
    }

    /// Reads an instance from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProblemLoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads an instance from an unbuffered source.
    pub fn from_read<R: Read>(source: R) -> Result<Self, ProblemLoadError> {
        Self::from_reader(BufReader::new(source))
    }
}

impl FromStr for Problem {
    type Err = ProblemLoadError;

    /// Parses an instance from text.
    ///
    /// ```
    /// use u_flowshop::models::Problem;
    ///
    /// let problem: Problem = "3 2\n2 3 4\n1 5 2\n".parse().unwrap();
    /// assert_eq!(problem.num_jobs(), 3);
    /// assert_eq!(problem.processing_time(1, 1), 5);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_instance() {
        let p: Problem = "3 2\n2 3 4\n1 5 2".parse().unwrap();
        assert_eq!(p.num_jobs(), 3);
        assert_eq!(p.num_machines(), 2);
        assert_eq!(p.processing_times(), &[vec![2u64, 3, 4], vec![1, 5, 2]]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let p: Problem = "\n2 1\n\n  7 8  \n\n".parse().unwrap();
        assert_eq!(p.processing_times(), &[vec![7u64, 8]]);
    }

    #[test]
    fn test_missing_row() {
        let err = "3 2\n2 3 4\n".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemLoadError::UnexpectedEof));
    }

    #[test]
    fn test_short_and_long_rows() {
        let err = "3 2\n2 3\n1 5 2".parse::<Problem>().unwrap_err();
        assert!(matches!(
            err,
            ProblemLoadError::RowLength {
                line: 2,
                expected: 3,
                actual: 2
            }
        ));
        let err = "3 1\n2 3 4 5".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemLoadError::RowLength { actual: 4, .. }));
    }

    #[test]
    fn test_huge_machine_count_needs_rows() {
        let err = "3 100000000000000
1 2 3
".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemLoadError::UnexpectedEof));
    }

    #[test]
    fn test_overflowing_times() {
        let err = "2 1
18446744073709551615 1".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemLoadError::TimeOverflow));
        assert_eq!(err.to_string(), "Sum of processing times overflows u64");
    }

    #[test]
    fn test_trailing_line() {
        let err = "1 1\n4\n9".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemLoadError::TrailingData { line: 3 }));
    }

    #[test]
    fn test_bad_tokens() {
        let err = "2 1\n4 -1".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemLoadError::Parse { line: 2, .. }));
        assert!(matches!(
            "0 3\n".parse::<Problem>(),
            Err(ProblemLoadError::InvalidDimensions)
        ));
        assert!(matches!(
            "3\n1 2 3".parse::<Problem>(),
            Err(ProblemLoadError::InvalidDimensions)
        ));
        assert!(matches!("".parse::<Problem>(), Err(ProblemLoadError::UnexpectedEof)));
    }

    #[test]
    fn test_missing_file() {
        let err = Problem::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ProblemLoadError::Io(_)));
    }
}
