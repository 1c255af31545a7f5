//! Simulated Annealing.
//!
//! Each iteration swaps two distinct random positions of the current
//! solution. Improvements are always accepted; a worse neighbor with
//! makespan increase `Δ` is accepted with probability `exp(-Δ / T)`
//! (Metropolis). The temperature cools geometrically once per iteration.
//! The best solution is tracked separately from the accepted trajectory.
//!
//! # Reference
//! Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;

pub use config::SaConfig;

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::metaheuristic::{distinct_pair, seeded_rng, ConfigError, Metaheuristic};
use crate::models::{Problem, Solution};

/// Metropolis acceptance of a move with makespan change `delta` at `temperature`.
#[inline]
pub fn accept<R: Rng>(delta: i64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0 {
        return true;
    }
    let probability = (-(delta as f64) / temperature).exp();
    rng.random::<f64>() < probability
}

/// Swap-neighborhood simulated annealing with geometric cooling.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<R = SmallRng> {
    problem: Arc<Problem>,
    config: SaConfig,
    rng: R,
    best: Solution,
    execution_time: Duration,
}

impl SimulatedAnnealing<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the temperature schedule is invalid.
    pub fn new(problem: Arc<Problem>, config: SaConfig) -> Result<Self, ConfigError> {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> SimulatedAnnealing<R> {
    /// Creates the optimizer with an explicit random source.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the temperature schedule is invalid.
    pub fn with_rng(problem: Arc<Problem>, config: SaConfig, rng: R) -> Result<Self, ConfigError> {
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
    pub fn config(&self) -> &SaConfig {
        &self.config
    }
}

impl<R: Rng> Metaheuristic for SimulatedAnnealing<R> {
    fn name(&self) -> &'static str {
        "Simulated Annealing"
    }

    #[tracing::instrument(level = "debug", name = "SA Search", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();

        let mut current = self.config.initial.build(&self.problem, &mut self.rng);
        let mut best = current.clone();
        let mut neighbor = current.clone();
        let mut temperature = self.config.initial_temperature;
        let mut accepted = 0usize;

        for iteration in 0..self.config.max_iterations {
            if let Some((i, j)) = distinct_pair(current.len(), &mut self.rng) {
                neighbor.assign_from(&current);
                neighbor.swap(i, j);

                let delta = neighbor.makespan() as i64 - current.makespan() as i64;
                if accept(delta, temperature, &mut self.rng) {
                    current.assign_from(&neighbor);
                    accepted += 1;
                    if current.is_better_than(&best) {
                        tracing::trace!(
                            "SA: new best {} at iteration {} (T={:.4})",
                            current.makespan(),
                            iteration,
                            temperature
                        );
                        best.assign_from(&current);
                    }
                }
            }
            temperature = (temperature * self.config.cooling_rate).max(f64::MIN_POSITIVE);
        }

        self.best = best;
        self.execution_time = start.elapsed();
        tracing::debug!(
            "SA: best makespan {} ({} moves accepted, final T={:.3e}) in {:?}",
            self.best.makespan(),
            accepted,
            temperature,
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
    use crate::constructive::{neh, InitialSolution};
    use crate::models::fixtures::{random_problem, shared, small_problem};
    use crate::validation::is_permutation;
    use rand::SeedableRng;

    #[test]
    fn test_sa_small() {
        let mut sa =
            SimulatedAnnealing::new(shared(small_problem()), SaConfig::default().with_seed(42))
                .unwrap();
        let best = sa.solve();
        assert!(best.makespan() <= 12);
        assert_eq!(sa.name(), "Simulated Annealing");
    }

    #[test]
    fn test_rejects_invalid_config() {
        let problem = shared(small_problem());
        let config = SaConfig::default().with_cooling_rate(1.0);
        let err = SimulatedAnnealing::new(problem.clone(), config).unwrap_err();
        assert_eq!(err.parameter, "cooling_rate");
        assert!(SimulatedAnnealing::new(problem, SaConfig::default().with_initial_temperature(0.0))
            .is_err());
    }

    #[test]
    fn test_never_worse_than_initial() {
        let problem = shared(random_problem(15, 5, 13));
        let neh_makespan = problem.calculate_makespan(&neh(&problem)).unwrap();
        let mut sa = SimulatedAnnealing::new(problem, SaConfig::default().with_seed(42)).unwrap();
        let best = sa.solve();
        assert!(best.makespan() <= neh_makespan);
        assert!(is_permutation(best.permutation(), 15));
    }

    #[test]
    fn test_improves_random_start() {
        let problem = shared(random_problem(15, 5, 13));
        let config = SaConfig::default()
            .with_initial(InitialSolution::Random)
            .with_initial_temperature(10.0)
            .with_max_iterations(3000)
            .with_cooling_rate(0.999);

        let mut rng = SmallRng::seed_from_u64(42);
        let start = InitialSolution::Random.build(&problem, &mut rng);

        let mut sa =
            SimulatedAnnealing::with_rng(problem, config, SmallRng::seed_from_u64(42)).unwrap();
        assert!(sa.solve().makespan() <= start.makespan());
    }

    #[test]
    fn test_metropolis_acceptance() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(accept(-5, 1e-9, &mut rng));
        // Equal makespan is always accepted: exp(0) = 1.
        assert!((0..100).all(|_| accept(0, 1.0, &mut rng)));
        // Near-zero temperature rejects every worsening move.
        assert!((0..100).all(|_| !accept(1, f64::MIN_POSITIVE, &mut rng)));

        let hits = (0..2000).filter(|_| accept(1, 1.0, &mut rng)).count();
        let rate = hits as f64 / 2000.0;
        assert!((rate - (-1.0f64).exp()).abs() < 0.05, "rate {rate}");
    }

    #[test]
    fn test_single_job_runs_to_completion() {
        let problem = shared(Problem::new(vec![vec![5], vec![6]]).unwrap());
        let mut sa = SimulatedAnnealing::new(problem, SaConfig::default().with_seed(1)).unwrap();
        assert_eq!(sa.solve().makespan(), 11);
    }
}
