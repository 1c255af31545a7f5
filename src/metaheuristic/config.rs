//! Hyper-parameter validation errors.

use std::fmt;

/// A hyper-parameter outside its admissible range.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Parameter name as it appears in the config record.
    pub parameter: &'static str,
    /// Human-readable description of the admissible range.
    pub message: String,
}

impl ConfigError {
    pub(crate) fn new(parameter: &'static str, message: impl Into<String>) -> Self {
        Self {
            parameter,
            message: message.into(),
        }
    }

    /// Fails unless `value` lies in the open interval `(lo, hi)`.
    pub(crate) fn check_open(
        parameter: &'static str,
        value: f64,
        lo: f64,
        hi: f64,
    ) -> Result<(), Self> {
        if value > lo && value < hi {
            Ok(())
        } else {
            Err(Self::new(
                parameter,
                format!("must be in ({lo}, {hi}), got {value}"),
            ))
        }
    }

    /// Fails unless `value` lies in `[lo, hi)` (or `[lo, hi]` when `closed`).
    pub(crate) fn check_from(
        parameter: &'static str,
        value: f64,
        lo: f64,
        hi: f64,
        closed: bool,
    ) -> Result<(), Self> {
        let upper_ok = if closed { value <= hi } else { value < hi };
        if value >= lo && upper_ok {
            Ok(())
        } else {
            let bracket = if closed { ']' } else { ')' };
            Err(Self::new(
                parameter,
                format!("must be in [{lo}, {hi}{bracket}, got {value}"),
            ))
        }
    }

    /// Fails unless `value` is finite.
    pub(crate) fn check_finite(parameter: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::new(parameter, format!("must be finite, got {value}")))
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid parameter '{}': {}", self.parameter, self.message)
    }
}

impl std::error::Error for ConfigError {}
