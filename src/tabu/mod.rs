//! Tabu Search over the swap neighborhood.
//!
//! Every iteration scores all swap neighbors of the best solution, skips
//! the pairs held in the [`TabuList`], and applies the cheapest remaining
//! swap (first found on ties) to the working solution. The applied pair
//! becomes tabu. There is no aspiration criterion: when every pair is
//! tabu the iteration makes no move.
//!
//! # Reference
//! Glover (1989), "Tabu Search, Part I"

mod config;
pub mod memory;

pub use config::TabuConfig;
pub use memory::TabuList;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::metaheuristic::{seeded_rng, Metaheuristic};
use crate::models::{Problem, Solution};

/// Best non-tabu swap `(i, j, makespan)` around `solution`.
fn best_admissible_swap(solution: &Solution, tabu: &TabuList) -> Option<(usize, usize, u64)> {
    let n = solution.len();
    let mut trial = solution.clone();
    let mut chosen: Option<(usize, usize, u64)> = None;

    for i in 0..n {
        for j in (i + 1)..n {
            if tabu.contains(i, j) {
                continue;
            }
            trial.swap(i, j);
            let makespan = trial.makespan();
            trial.assign_from(solution);

            if chosen.map_or(true, |(_, _, best)| makespan < best) {
                chosen = Some((i, j, makespan));
            }
        }
    }

    chosen
}

/// Swap-move tabu search with a FIFO short-term memory.
#[derive(Debug, Clone)]
pub struct TabuSearch<R = SmallRng> {
    problem: Arc<Problem>,
    config: TabuConfig,
    rng: R,
    best: Solution,
    execution_time: Duration,
}

impl TabuSearch<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config.seed`.
    pub fn new(problem: Arc<Problem>, config: TabuConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> TabuSearch<R> {
    /// Creates the optimizer with an explicit random source.
    pub fn with_rng(problem: Arc<Problem>, config: TabuConfig, rng: R) -> Self {
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
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }
}

impl<R: Rng> Metaheuristic for TabuSearch<R> {
    fn name(&self) -> &'static str {
        "Tabu Search"
    }

    #[tracing::instrument(level = "debug", name = "Tabu Search", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();

        let mut current = self.config.initial.build(&self.problem, &mut self.rng);
        let mut best = current.clone();
        let mut tabu = TabuList::new(self.config.tabu_list_size);
        let mut stalled = 0usize;

        for iteration in 0..self.config.max_iterations {
            let Some((i, j, _)) = best_admissible_swap(&best, &tabu) else {
                stalled += 1;
                continue;
            };

            current.swap(i, j);
            tabu.push(i, j);

            if current.is_better_than(&best) {
                tracing::trace!(
                    "Tabu: new best {} at iteration {} via ({}, {})",
                    current.makespan(),
                    iteration,
                    i,
                    j
                );
                best.assign_from(&current);
            }
        }

        self.best = best;
        self.execution_time = start.elapsed();
        tracing::debug!(
            "Tabu: best makespan {} ({} iterations without admissible move) in {:?}",
            self.best.makespan(),
            stalled,
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
