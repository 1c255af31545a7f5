//! Permutation genetic algorithm.
//!
//! A fixed-size population of random orderings evolves for a fixed number
//! of generations:
//!
//! 1. **Selection**: binary tournament fills a new population.
//! 2. **Crossover**: adjacent pairs are replaced by their order-crossover
//!    children (an odd last individual passes through).
//! 3. **Mutation**: each individual is swap-mutated with probability
//!    `mutation_rate`.
//!
//! The result is the best member of the final population. There is no
//! elitism, so the result can be worse than an earlier generation's best.
//!
//! # Submodules
//!
//! - [`operators`]: selection, crossover and mutation

mod config;
pub mod operators;

pub use config::GaConfig;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::constructive::random_permutation;
use crate::metaheuristic::{seeded_rng, ConfigError, Metaheuristic};
use crate::models::{Problem, Solution};
use operators::{random_order_crossover, swap_mutation, tournament_select};

/// Generational GA with tournament selection, order crossover and swap mutation.
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<R = SmallRng> {
    problem: Arc<Problem>,
    config: GaConfig,
    rng: R,
    best: Solution,
    execution_time: Duration,
}

impl GeneticAlgorithm<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the population is too small or the
    /// mutation rate is not a probability.
    pub fn new(problem: Arc<Problem>, config: GaConfig) -> Result<Self, ConfigError> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> GeneticAlgorithm<R> {
    /// Creates the optimizer with an explicit random source.
    ///
    /// # Errors
    /// See [`GeneticAlgorithm::new`].
    pub fn with_rng(problem: Arc<Problem>, config: GaConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let best = Solution::new(problem.clone());
        Ok(Self {
            problem,
            config,
            rng,
            best,
            execution_time: Duration::ZERO,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    fn initial_population(&mut self) -> Vec<Solution> {
        let n = self.problem.num_jobs();
        (0..self.config.population_size)
            .map(|_| {
                let mut individual = Solution::new(self.problem.clone());
                if let Err(err) = individual.set_permutation(random_permutation(n, &mut self.rng)) {
                    tracing::warn!("GA: random individual rejected: {}", err);
                }
                individual
            })
            .collect()
    }

    fn next_generation(&mut self, population: &[Solution]) -> Vec<Solution> {
        let mut offspring: Vec<Solution> = (0..population.len())
            .map(|_| population[tournament_select(population, &mut self.rng)].clone())
            .collect();

        for pair in offspring.chunks_exact_mut(2) {
            let (c1, c2) =
                random_order_crossover(pair[0].permutation(), pair[1].permutation(), &mut self.rng);
            for (individual, child) in pair.iter_mut().zip([c1, c2]) {
                if let Err(err) = individual.set_permutation(child) {
                    tracing::warn!("GA: crossover child rejected, keeping parent: {}", err);
                }
            }
        }

        for individual in &mut offspring {
            if self.rng.random_bool(self.config.mutation_rate) {
                swap_mutation(individual, &mut self.rng);
            }
        }

        offspring
    }
}

fn fittest(population: &[Solution]) -> Option<&Solution> {
    population.iter().min_by_key(|s| s.makespan())
}

impl<R: Rng> Metaheuristic for GeneticAlgorithm<R> {
    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    #[tracing::instrument(level = "debug", name = "GA Search", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();

        let mut population = self.initial_population();
        for generation in 0..self.config.max_generations {
            population = self.next_generation(&population);
            if let Some(leader) = fittest(&population) {
                tracing::trace!("GA: generation {} leader {}", generation, leader.makespan());
            }
        }

        self.best = fittest(&population)
            .cloned()
            .unwrap_or_else(|| Solution::new(self.problem.clone()));
        self.execution_time = start.elapsed();
        tracing::debug!(
            "GA: best makespan {} after {} generations in {:?}",
            self.best.makespan(),
            self.config.max_generations,
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
