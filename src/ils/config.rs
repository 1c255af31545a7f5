//! Iterated local search configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::InitialSolution;

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use u_flowshop::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_max_iterations(20)
///     .with_perturbation_strength(5);
/// assert_eq!(config.max_iterations, 20);
/// assert_eq!(config.perturbation_strength, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IlsConfig {
    /// Number of perturb-and-descend cycles.
    pub max_iterations: usize,
    /// Random swaps applied per perturbation.
    pub perturbation_strength: usize,
    /// Round cap of each embedded local search.
    pub local_search_iterations: usize,
    /// Starting solution.
    pub initial: InitialSolution,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            perturbation_strength: 3,
            local_search_iterations: 1000,
            initial: InitialSolution::Neh,
            seed: None,
        }
    }
}

impl IlsConfig {
    /// Sets the number of perturb-and-descend cycles.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of random swaps per perturbation.
    pub fn with_perturbation_strength(mut self, k: usize) -> Self {
        self.perturbation_strength = k;
        self
    }

    /// Sets the round cap of the embedded local search.
    pub fn with_local_search_iterations(mut self, n: usize) -> Self {
        self.local_search_iterations = n;
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
}
