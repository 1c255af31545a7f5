//! First-improvement local search.
//!
//! Starts from a constructive solution and repeatedly scans the swap,
//! insert and reverse neighborhoods until a full round finds nothing
//! better or the round cap is reached.
//!
//! # Submodules
//!
//! - [`neighborhood`]: move families, single scans and the descent loop

mod config;
pub mod neighborhood;

pub use config::LocalSearchConfig;
pub use neighborhood::{descend, Neighborhood};

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::metaheuristic::{seeded_rng, Metaheuristic};
use crate::models::{Problem, Solution};

/// Iterative improvement over the three neighborhoods.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_flowshop::local_search::{LocalSearch, LocalSearchConfig};
/// use u_flowshop::metaheuristic::Metaheuristic;
/// use u_flowshop::models::Problem;
///
/// let problem = Arc::new(Problem::new(vec![vec![2, 3, 4], vec![1, 5, 2]]).unwrap());
/// let mut ls = LocalSearch::new(problem, LocalSearchConfig::default());
/// assert_eq!(ls.solve().makespan(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct LocalSearch<R = SmallRng> {
    problem: Arc<Problem>,
    config: LocalSearchConfig,
    rng: R,
    best: Solution,
    execution_time: Duration,
}

impl LocalSearch<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config.seed`.
    pub fn new(problem: Arc<Problem>, config: LocalSearchConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> LocalSearch<R> {
    /// Creates the optimizer with an explicit random source.
    pub fn with_rng(problem: Arc<Problem>, config: LocalSearchConfig, rng: R) -> Self {
        let best = Solution::new(problem.clone());
        Self {
            problem,
            config,
            rng,
            best,
            execution_time: Duration::ZERO,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }
}

impl<R: Rng> Metaheuristic for LocalSearch<R> {
    fn name(&self) -> &'static str {
        "Local Search"
    }

    #[tracing::instrument(level = "debug", name = "Local Search", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();

        let mut current = self.config.initial.build(&self.problem, &mut self.rng);
        let initial = current.makespan();
        let rounds = descend(&mut current, self.config.max_iterations);

        self.best = current;
        self.execution_time = start.elapsed();
        tracing::debug!(
            "LS: {} -> {} after {} rounds in {:?}",
            initial,
            self.best.makespan(),
            rounds,
            self.execution_time
        );
        self.best.clone()
    }

    fn best_solution(&self) -> &Solution {
        &self.best
    }

    fn execution_time(&self) -> Duration {
        self.execution_time
    }
}
