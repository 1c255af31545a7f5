//! Local search configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::InitialSolution;

/// Configuration parameters for first-improvement local search.
///
/// # Examples
///
/// ```
/// use u_flowshop::constructive::InitialSolution;
/// use u_flowshop::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(50)
///     .with_initial(InitialSolution::Random);
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.initial, InitialSolution::Random);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSearchConfig {
    /// Maximum number of improvement rounds (swap, insert and reverse scans).
    pub max_iterations: usize,
    /// Starting solution.
    pub initial: InitialSolution,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial: InitialSolution::Neh,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of improvement rounds.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_uses_defaults() {
        let config: LocalSearchConfig =
            serde_json::from_str(r#"{ "max_iterations": 5 }"#).unwrap();
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.initial, InitialSolution::Neh);
        assert_eq!(config.seed, None);
    }
}
