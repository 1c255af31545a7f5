//! Ant colony configuration.

use serde::{Deserialize, Serialize};

use crate::metaheuristic::ConfigError;

/// Configuration parameters for Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use u_flowshop::aco::AcoConfig;
///
/// let config = AcoConfig::default().with_num_ants(10).with_evaporation_rate(0.3);
/// assert!(config.validate().is_ok());
/// assert!(config.with_evaporation_rate(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Ants per iteration (at least 1).
    pub num_ants: usize,
    /// Number of colony iterations.
    pub max_iterations: usize,
    /// Fraction of pheromone lost per iteration, in `[0, 1)`.
    pub evaporation_rate: f64,
    /// Pheromone exponent.
    pub alpha: f64,
    /// Heuristic exponent.
    pub beta: f64,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            max_iterations: 100,
            evaporation_rate: 0.1,
            alpha: 1.0,
            beta: 2.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks colony size, evaporation and exponents.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_ants == 0 {
            return Err(ConfigError::new("num_ants", "must be at least 1, got 0"));
        }
        ConfigError::check_from("evaporation_rate", self.evaporation_rate, 0.0, 1.0, false)?;
        ConfigError::check_finite("alpha", self.alpha)?;
        ConfigError::check_finite("beta", self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(AcoConfig::default().validate().is_ok());
        assert!(AcoConfig::default().with_evaporation_rate(0.0).validate().is_ok());

        let cases = [
            (AcoConfig::default().with_num_ants(0), "num_ants"),
            (AcoConfig::default().with_evaporation_rate(1.0), "evaporation_rate"),
            (AcoConfig::default().with_evaporation_rate(-0.5), "evaporation_rate"),
            (AcoConfig::default().with_alpha(f64::NAN), "alpha"),
            (AcoConfig::default().with_beta(f64::INFINITY), "beta"),
        ];
        for (config, parameter) in cases {
            assert_eq!(config.validate().unwrap_err().parameter, parameter);
        }
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let config: AcoConfig =
            serde_json::from_str(r#"{ "num_ants": 5, "beta": 3.0 }"#).unwrap();
        assert_eq!(config.num_ants, 5);
        assert_eq!(config.beta, 3.0);
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.evaporation_rate, 0.1);
        assert_eq!(config.max_iterations, 100);
    }
}
