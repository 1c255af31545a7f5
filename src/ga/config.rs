//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::metaheuristic::ConfigError;

/// Configuration parameters for the Genetic Algorithm.
///
/// # Examples
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(40)
///     .with_mutation_rate(0.2);
/// assert!(config.validate().is_ok());
/// assert!(config.with_population_size(1).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of individuals (at least 2).
    pub population_size: usize,
    /// Number of generations.
    pub max_generations: usize,
    /// Per-individual probability of a swap mutation, in `[0, 1]`.
    pub mutation_rate: f64,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            mutation_rate: 0.1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks population size and mutation probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::new(
                "population_size",
                format!("must be at least 2, got {}", self.population_size),
            ));
        }
        ConfigError::check_from("mutation_rate", self.mutation_rate, 0.0, 1.0, true)
    }
}
