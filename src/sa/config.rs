//! Simulated annealing configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::InitialSolution;
use crate::metaheuristic::ConfigError;

/// Configuration parameters for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use u_flowshop::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.99);
/// assert!(config.validate().is_ok());
/// assert!(config.with_cooling_rate(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaConfig {
    /// Number of neighbor evaluations.
    pub max_iterations: usize,
    /// Starting temperature. Must be positive and finite.
    pub initial_temperature: f64,
    /// Geometric cooling factor applied once per iteration, in `(0, 1)`.
    pub cooling_rate: f64,
    /// Starting solution.
    pub initial: InitialSolution,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            initial: InitialSolution::Neh,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the starting solution.
    pub fn with_initial(mut self, initial: InitialSolution) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the temperature schedule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_open(
            "initial_temperature",
            self.initial_temperature,
            0.0,
            f64::INFINITY,
        )?;
        ConfigError::check_open("cooling_rate", self.cooling_rate, 0.0, 1.0)
    }
}
