//! Iterated Local Search.
//!
//! Alternates a random perturbation of the current solution with a full
//! local-search descent. The result is kept only if it beats the best
//! solution so far; otherwise the run rolls back to the pre-perturbation
//! state.
//!
//! # Reference
//! Lourenço, Martin & Stützle (2003), "Iterated Local Search"

mod config;

pub use config::IlsConfig;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::local_search::descend;
use crate::metaheuristic::{seeded_rng, Metaheuristic};
use crate::models::{Problem, Solution};

/// Perturb, descend, accept-if-better.
#[derive(Debug, Clone)]
pub struct IteratedLocalSearch<R = SmallRng> {
    problem: Arc<Problem>,
    config: IlsConfig,
    rng: R,
    best: Solution,
    execution_time: Duration,
}

impl IteratedLocalSearch<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config.seed`.
    pub fn new(problem: Arc<Problem>, config: IlsConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> IteratedLocalSearch<R> {
    /// Creates the optimizer with an explicit random source.
    pub fn with_rng(problem: Arc<Problem>, config: IlsConfig, rng: R) -> Self {
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
    pub fn config(&self) -> &IlsConfig {
        &self.config
    }
}

/// Applies `strength` random swaps; a draw of two equal positions is a no-op.
pub fn perturb<R: Rng>(solution: &mut Solution, strength: usize, rng: &mut R) {
    let n = solution.len();
    for _ in 0..strength {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i != j {
            solution.swap(i, j);
        }
    }
}

impl<R: Rng> Metaheuristic for IteratedLocalSearch<R> {
    fn name(&self) -> &'static str {
        "Iterated Local Search"
    }

    #[tracing::instrument(level = "debug", name = "ILS Search", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();

        let mut current = self.config.initial.build(&self.problem, &mut self.rng);
        let mut best = current.clone();
        let mut previous = current.clone();
        tracing::debug!("ILS: initial makespan {}", best.makespan());

        for iteration in 0..self.config.max_iterations {
            previous.assign_from(&current);
            perturb(&mut current, self.config.perturbation_strength, &mut self.rng);
            descend(&mut current, self.config.local_search_iterations);

            if current.is_better_than(&best) {
                tracing::trace!(
                    "ILS: new best {} at iteration {}",
                    current.makespan(),
                    iteration
                );
                best.assign_from(&current);
            } else {
                current.assign_from(&previous);
            }
        }

        self.best = best;
        self.execution_time = start.elapsed();
        tracing::debug!(
            "ILS: best makespan {} in {:?}",
            self.best.makespan(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::neh;
    use crate::models::fixtures::{random_problem, shared, small_problem};
    use crate::validation::is_permutation;
    use rand::SeedableRng;

    #[test]
    fn test_ils_small() {
        let config = IlsConfig::default().with_max_iterations(10).with_seed(42);
        let mut ils = IteratedLocalSearch::new(shared(small_problem()), config);
        assert_eq!(ils.solve().makespan(), 11);
    }

    #[test]
    fn test_never_worse_than_neh() {
        let problem = shared(random_problem(12, 4, 7));
        let neh_makespan = problem.calculate_makespan(&neh(&problem)).unwrap();
        let config = IlsConfig::default().with_max_iterations(15).with_seed(42);
        let mut ils = IteratedLocalSearch::new(problem, config);
        let best = ils.solve();
        assert!(best.makespan() <= neh_makespan);
        assert!(is_permutation(best.permutation(), 12));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let problem = shared(random_problem(10, 3, 4));
        let config = IlsConfig::default().with_max_iterations(8).with_seed(5);
        let a = IteratedLocalSearch::new(problem.clone(), config.clone()).solve();
        let b = IteratedLocalSearch::new(problem, config).solve();
        assert_eq!(a, b);
    }

    #[test]
    fn test_perturb_keeps_permutation() {
        let problem = shared(random_problem(7, 2, 4));
        let mut sol = Solution::new(problem.clone());
        let mut rng = SmallRng::seed_from_u64(42);
        perturb(&mut sol, 20, &mut rng);
        assert!(is_permutation(sol.permutation(), 7));
        assert_eq!(
            sol.makespan(),
            problem.calculate_makespan(sol.permutation()).unwrap()
        );
    }

    #[test]
    fn test_perturb_single_job() {
        let problem = shared(Problem::new(vec![vec![3]]).unwrap());
        let mut sol = Solution::new(problem);
        let mut rng = SmallRng::seed_from_u64(42);
        perturb(&mut sol, 5, &mut rng);
        assert_eq!(sol.permutation(), &[0]);
    }
}
