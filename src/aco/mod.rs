//! Ant Colony Optimization for job ordering.
//!
//! Each ant starts from a uniformly random job and repeatedly appends an
//! unvisited job `j` after the last job `i` with probability proportional
//! to `τ(i,j)^α · η(i,j)^β`. After all ants have built their tours, the
//! trail evaporates and every ant deposits `1 / makespan` on each pair of
//! consecutive jobs in both directions. The best tour across the whole run
//! is returned.
//!
//! # Submodules
//!
//! - [`pheromone`]: trail matrix and the static heuristic
//!
//! # Reference
//! Dorigo & Stützle (2004), "Ant Colony Optimization"

mod config;
pub mod pheromone;

pub use config::AcoConfig;
pub use pheromone::{heuristic_matrix, PheromoneMatrix};

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::metaheuristic::{seeded_rng, ConfigError, Metaheuristic};
use crate::models::{Problem, Solution};

const INITIAL_PHEROMONE: f64 = 1.0;

/// Ant system over job successions.
#[derive(Debug, Clone)]
pub struct AntColony<R = SmallRng> {
    problem: Arc<Problem>,
    config: AcoConfig,
    rng: R,
    heuristic: Vec<Vec<f64>>,
    pheromone: PheromoneMatrix,
    best: Solution,
    execution_time: Duration,
}

impl AntColony<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] for an empty colony, an evaporation rate
    /// outside `[0, 1)` or non-finite exponents.
    pub fn new(problem: Arc<Problem>, config: AcoConfig) -> Result<Self, ConfigError> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> AntColony<R> {
    /// Creates the optimizer with an explicit random source.
    ///
    /// # Errors
    /// See [`AntColony::new`].
    pub fn with_rng(problem: Arc<Problem>, config: AcoConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = problem.num_jobs();
        let best = Solution::new(problem.clone());
        Ok(Self {
            problem,
            config,
            rng,
            heuristic: Vec::new(),
            pheromone: PheromoneMatrix::new(n, INITIAL_PHEROMONE),
            best,
            execution_time: Duration::ZERO,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Trail of the last run (uniform before any run).
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Builds one ant's tour.
    fn construct_tour(&mut self) -> Vec<usize> {
        let n = self.problem.num_jobs();
        let mut tour = Vec::with_capacity(n);
        let mut unvisited: Vec<usize> = (0..n).collect();

        let first = unvisited.remove(self.rng.random_range(0..n));
        tour.push(first);

        let mut weights = Vec::with_capacity(n);
        while !unvisited.is_empty() {
            let last = tour[tour.len() - 1];
            weights.clear();
            weights.extend(unvisited.iter().map(|&j| {
                self.pheromone.get(last, j).powf(self.config.alpha)
                    * self.heuristic[last][j].powf(self.config.beta)
            }));

            let slot = roulette(&weights, &mut self.rng)
                .unwrap_or_else(|| self.rng.random_range(0..unvisited.len()));
            tour.push(unvisited.remove(slot));
        }
        tour
    }
}

/// Roulette-wheel selection over unnormalized `weights`.
///
/// Returns the first index whose cumulative weight reaches a uniform draw
/// scaled to the total, or `None` when the total is not positive or
/// rounding leaves no index selected.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    let target = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        cumulative += weight;
        if target <= cumulative {
            return Some(index);
        }
    }
    None
}

impl<R: Rng> Metaheuristic for AntColony<R> {
    fn name(&self) -> &'static str {
        "Ant Colony Optimization"
    }

    #[tracing::instrument(level = "debug", name = "ACO Search", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();

        self.heuristic = heuristic_matrix(&self.problem);
        self.pheromone = PheromoneMatrix::new(self.problem.num_jobs(), INITIAL_PHEROMONE);
        let mut best = Solution::new(self.problem.clone());
        let mut ants: Vec<Solution> = Vec::with_capacity(self.config.num_ants);

        for iteration in 0..self.config.max_iterations {
            ants.clear();
            for _ in 0..self.config.num_ants {
                let tour = self.construct_tour();
                match Solution::from_permutation(self.problem.clone(), tour) {
                    Ok(ant) => {
                        if ant.is_better_than(&best) {
                            tracing::trace!(
                                "ACO: new best {} at iteration {}",
                                ant.makespan(),
                                iteration
                            );
                            best.assign_from(&ant);
                        }
                        ants.push(ant);
                    }
                    Err(err) => tracing::warn!("ACO: skipping malformed tour: {}", err),
                }
            }

            self.pheromone.evaporate(self.config.evaporation_rate);
            for ant in &ants {
                let amount = 1.0 / ant.makespan().max(1) as f64;
                self.pheromone.deposit_tour(ant.permutation(), amount);
            }
        }

        self.best = best;
        self.execution_time = start.elapsed();
        tracing::debug!(
            "ACO: best makespan {} in {:?}",
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
    use crate::constructive::random_permutation;
    use crate::models::fixtures::{random_problem, shared, small_problem};
    use crate::validation::is_permutation;
    use rand::SeedableRng;

    #[test]
    fn test_aco_small() {
        let mut aco =
            AntColony::new(shared(small_problem()), AcoConfig::default().with_seed(42)).unwrap();
        assert!(aco.solve().makespan() <= 12);
        assert_eq!(aco.name(), "Ant Colony Optimization");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let problem = shared(small_problem());
        assert!(AntColony::new(problem.clone(), AcoConfig::default().with_num_ants(0)).is_err());
        assert!(AntColony::new(problem, AcoConfig::default().with_evaporation_rate(1.0)).is_err());
    }

    #[test]
    fn test_pheromone_stays_symmetric_and_positive() {
        let problem = shared(random_problem(8, 3, 4));
        let config = AcoConfig::default()
            .with_num_ants(5)
            .with_max_iterations(30)
            .with_evaporation_rate(0.5)
            .with_seed(42);
        let mut aco = AntColony::new(problem, config).unwrap();
        aco.solve();
        assert!(aco.pheromone().is_symmetric());
        assert!(aco.pheromone().min_value() > 0.0);
    }

    #[test]
    fn test_tours_are_permutations() {
        let problem = shared(random_problem(9, 3, 6));
        let mut aco = AntColony::new(problem, AcoConfig::default().with_seed(42)).unwrap();
        aco.heuristic = heuristic_matrix(&aco.problem);
        for _ in 0..50 {
            assert!(is_permutation(&aco.construct_tour(), 9));
        }
    }

    #[test]
    fn test_never_worse_than_identity() {
        let problem = shared(random_problem(10, 4, 12));
        let identity = Solution::new(problem.clone()).makespan();
        let config = AcoConfig::default().with_max_iterations(20).with_seed(42);
        let mut aco = AntColony::new(problem, config).unwrap();
        assert!(aco.solve().makespan() <= identity);
    }

    #[test]
    fn test_beats_random_sampling() {
        let problem = shared(random_problem(10, 4, 12));
        let mut rng = SmallRng::seed_from_u64(42);
        let random_mean: f64 = (0..30)
            .map(|_| {
                problem
                    .calculate_makespan(&random_permutation(10, &mut rng))
                    .unwrap() as f64
            })
            .sum::<f64>()
            / 30.0;
        let mut aco = AntColony::new(problem, AcoConfig::default().with_seed(42)).unwrap();
        assert!((aco.solve().makespan() as f64) < random_mean);
    }

    #[test]
    fn test_zero_iterations_returns_identity() {
        let problem = shared(random_problem(5, 2, 1));
        let config = AcoConfig::default().with_max_iterations(0).with_seed(1);
        let mut aco = AntColony::new(problem, config).unwrap();
        assert_eq!(aco.solve().permutation(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_roulette() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(roulette(&[0.0, 1.0, 0.0], &mut rng), Some(1));
        assert_eq!(roulette(&[f64::NAN, 1.0], &mut rng), None);
        assert_eq!(roulette(&[0.0, 0.0, 0.0], &mut rng), None);
        assert_eq!(roulette(&[], &mut rng), None);

        let hits = (0..1000)
            .filter(|_| roulette(&[1.0, 3.0], &mut rng) == Some(1))
            .count();
        assert!((650..850).contains(&hits), "hits {hits}");
    }

    #[test]
    fn test_vanishing_weights_pick_uniformly() {
        // Distinct job means keep every off-diagonal η at most 1/3, so η^β underflows to 0.
        let problem = shared(Problem::new(vec![vec![1, 3, 6, 10]]).unwrap());
        let config = AcoConfig::default().with_beta(1e6).with_seed(42);
        let mut aco = AntColony::new(problem, config).unwrap();
        aco.heuristic = heuristic_matrix(&aco.problem);

        let mut second = [0usize; 4];
        for _ in 0..200 {
            let tour = aco.construct_tour();
            assert!(is_permutation(&tour, 4));
            second[tour[1]] += 1;
        }
        assert!(second.iter().all(|&count| count > 0), "{second:?}");
    }

    #[test]
    fn test_heuristic_built_inside_timed_run() {
        let problem = shared(random_problem(6, 2, 3));
        let config = AcoConfig::default().with_max_iterations(2).with_seed(42);
        let mut aco = AntColony::new(problem, config).unwrap();
        assert!(aco.heuristic.is_empty());
        aco.solve();
        assert_eq!(aco.heuristic.len(), 6);
    }

    #[test]
    fn test_single_job_instance() {
        let problem = shared(Problem::new(vec![vec![3], vec![4]]).unwrap());
        let mut aco = AntColony::new(problem, AcoConfig::default().with_seed(7)).unwrap();
        assert_eq!(aco.solve().makespan(), 7);
    }
}
