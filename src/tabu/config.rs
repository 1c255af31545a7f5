//! Tabu search configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::InitialSolution;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_flowshop::tabu::TabuConfig;
///
/// let config = TabuConfig::default().with_tabu_list_size(0);
/// assert_eq!(config.tabu_list_size, 0);
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuConfig {
    /// Number of neighborhood scans.
    pub max_iterations: usize,
    /// How many recent swap pairs stay forbidden (0 disables the memory).
    pub tabu_list_size: usize,
    /// Starting solution.
    pub initial: InitialSolution,
    /// Random seed (None for OS entropy). Used only by random starts.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_list_size: 10,
            initial: InitialSolution::Neh,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_list_size(mut self, size: usize) -> Self {
        self.tabu_list_size = size;
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
