//! Common optimizer contract.
//!
//! Every strategy in this crate implements [`Metaheuristic`]: a timed
//! `solve()` that records the best solution it observed, plus accessors for
//! that solution and the wall-clock time of the last run. The trait is
//! object safe, so heterogeneous strategies can be driven from one list.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_flowshop::models::Problem;
//! use u_flowshop::metaheuristic::Metaheuristic;
//! use u_flowshop::local_search::{LocalSearch, LocalSearchConfig};
//! use u_flowshop::sa::{SaConfig, SimulatedAnnealing};
//!
//! let problem = Arc::new(Problem::new(vec![vec![2, 3, 4], vec![1, 5, 2]]).unwrap());
//! let mut runs: Vec<Box<dyn Metaheuristic>> = vec![
//!     Box::new(LocalSearch::new(problem.clone(), LocalSearchConfig::default())),
//!     Box::new(SimulatedAnnealing::new(problem, SaConfig::default().with_seed(7)).unwrap()),
//! ];
//! for run in &mut runs {
//!     let best = run.solve();
//!     assert!(best.makespan() <= 12);
//! }
//! ```

mod config;

pub use config::ConfigError;

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Solution;

/// A search strategy over job orderings.
pub trait Metaheuristic {
    /// Display name of the strategy (e.g., "Tabu Search").
    fn name(&self) -> &'static str;

    /// Runs the search and returns the best solution found.
    ///
    /// Records the best solution and the elapsed wall-clock time; repeated
    /// calls start a fresh run.
    fn solve(&mut self) -> Solution;

    /// Best solution of the last run (the identity ordering before any run).
    fn best_solution(&self) -> &Solution;

    /// Wall-clock duration of the last run (zero before any run).
    fn execution_time(&self) -> Duration;

    /// Result record for external reporting.
    fn report(&self) -> RunReport {
        RunReport::new(self.name(), self.best_solution(), self.execution_time())
    }
}

/// Outcome of one optimizer run, as consumed by reporting layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Strategy name.
    pub algorithm: String,
    /// Final job ordering.
    pub permutation: Vec<usize>,
    /// Makespan of `permutation`.
    pub makespan: u64,
    /// Elapsed time of the run, in seconds.
    pub execution_time_secs: f64,
}

impl RunReport {
    /// Builds a report from a solution and its run time.
    pub fn new(algorithm: impl Into<String>, solution: &Solution, elapsed: Duration) -> Self {
        Self {
            algorithm: algorithm.into(),
            permutation: solution.permutation().to_vec(),
            makespan: solution.makespan(),
            execution_time_secs: elapsed.as_secs_f64(),
        }
    }
}

/// Builds the default random source: seeded when `seed` is set, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Draws two distinct positions uniformly from `[0, len)`.
///
/// Returns `None` when `len < 2`.
pub fn distinct_pair<R: Rng>(len: usize, rng: &mut R) -> Option<(usize, usize)> {
    if len < 2 {
        return None;
    }
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    Some((i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::small_problem;
    use std::sync::Arc;

    #[test]
    fn test_distinct_pair() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(distinct_pair(0, &mut rng), None);
        assert_eq!(distinct_pair(1, &mut rng), None);
        for _ in 0..200 {
            let (i, j) = distinct_pair(4, &mut rng).unwrap();
            assert!(i < 4 && j < 4);
            assert_ne!(i, j);
        }
    }

    #[test]
    fn test_distinct_pair_covers_all_pairs() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut seen = [[false; 3]; 3];
        for _ in 0..500 {
            let (i, j) = distinct_pair(3, &mut rng).unwrap();
            seen[i][j] = true;
        }
        for (i, row) in seen.iter().enumerate() {
            for (j, &hit) in row.iter().enumerate() {
                assert_eq!(hit, i != j, "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = seeded_rng(Some(9)).random();
        let b: u64 = seeded_rng(Some(9)).random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_report() {
        let sol = Solution::new(Arc::new(small_problem()));
        let report = RunReport::new("Test", &sol, Duration::from_millis(1500));
        assert_eq!(report.algorithm, "Test");
        assert_eq!(report.permutation, vec![0, 1, 2]);
        assert_eq!(report.makespan, 12);
        assert!((report.execution_time_secs - 1.5).abs() < 1e-9);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["makespan"], 12);
        assert_eq!(json["algorithm"], "Test");
    }
}
