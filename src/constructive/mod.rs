//! Constructive heuristics.
//!
//! Builds complete orderings without search. [`Constructive`] runs every
//! [`ConstructiveRule`] and keeps the best; [`InitialSolution`] is how the
//! improvement strategies choose their starting point.
//!
//! # Submodules
//!
//! - [`rules`]: NEH, SPT and random ordering rules
//!
//! # Reference
//! Framinan, Gupta & Leisten (2004), "A review and classification of
//! heuristics for permutation flow-shop scheduling with makespan objective"

pub mod rules;

pub use rules::{neh, random_permutation, shortest_processing_time, ConstructiveRule};

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::metaheuristic::{seeded_rng, Metaheuristic};
use crate::models::{Problem, Solution};

/// Starting point of an improvement strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialSolution {
    /// NEH ordering.
    #[default]
    Neh,
    /// Best of all constructive rules.
    Best,
    /// Uniformly random ordering.
    Random,
}

impl InitialSolution {
    /// Builds the starting solution.
    pub fn build<R: Rng>(&self, problem: &Arc<Problem>, rng: &mut R) -> Solution {
        match self {
            Self::Neh => solution_from_rule(problem, ConstructiveRule::Neh, rng),
            Self::Random => solution_from_rule(problem, ConstructiveRule::Random, rng),
            Self::Best => best_of_rules(problem, &ConstructiveRule::ALL, rng),
        }
    }
}

/// Evaluates one rule's ordering, falling back to the identity if it is rejected.
fn solution_from_rule<R: Rng>(
    problem: &Arc<Problem>,
    rule: ConstructiveRule,
    rng: &mut R,
) -> Solution {
    let mut solution = Solution::new(problem.clone());
    if let Err(err) = solution.set_permutation(rule.build(problem, rng)) {
        tracing::warn!("Constructive: {} candidate rejected: {}", rule.name(), err);
    }
    solution
}

/// Runs each rule and keeps the lowest makespan; rejected candidates are skipped.
///
/// If every candidate is rejected the identity ordering is returned.
pub fn best_of_rules<R: Rng>(
    problem: &Arc<Problem>,
    rules: &[ConstructiveRule],
    rng: &mut R,
) -> Solution {
    let mut best: Option<Solution> = None;
    for &rule in rules {
        let mut candidate = Solution::new(problem.clone());
        match candidate.set_permutation(rule.build(problem, rng)) {
            Ok(()) => {
                tracing::trace!("Constructive: {} -> {}", rule.name(), candidate.makespan());
                let improves = match &best {
                    Some(b) => candidate.is_better_than(b),
                    None => true,
                };
                if improves {
                    best = Some(candidate);
                }
            }
            Err(err) => {
                tracing::warn!("Constructive: skipping {} candidate: {}", rule.name(), err);
            }
        }
    }
    best.unwrap_or_else(|| Solution::new(problem.clone()))
}

/// Constructive configuration.
///
/// # Examples
///
/// ```
/// use u_flowshop::constructive::ConstructiveConfig;
///
/// let config = ConstructiveConfig::default().with_seed(3);
/// assert_eq!(config.seed, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructiveConfig {
    /// Random seed for the random rule (None for OS entropy).
    pub seed: Option<u64>,
}

impl ConstructiveConfig {
    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Best-of-rules constructive optimizer.
///
/// Runs NEH, random and SPT, evaluates each, and returns the best.
#[derive(Debug, Clone)]
pub struct Constructive<R = SmallRng> {
    problem: Arc<Problem>,
    rng: R,
    best: Solution,
    execution_time: Duration,
}

impl Constructive<SmallRng> {
    /// Creates the optimizer with an RNG seeded from `config`.
    pub fn new(problem: Arc<Problem>, config: ConstructiveConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self::with_rng(problem, config, rng)
    }
}

impl<R: Rng> Constructive<R> {
    /// Creates the optimizer with an explicit random source.
    pub fn with_rng(problem: Arc<Problem>, _config: ConstructiveConfig, rng: R) -> Self {
        let best = Solution::new(problem.clone());
        Self {
            problem,
            rng,
            best,
            execution_time: Duration::ZERO,
        }
    }
}

impl<R: Rng> Metaheuristic for Constructive<R> {
    fn name(&self) -> &'static str {
        "Constructive"
    }

    #[tracing::instrument(level = "debug", name = "Constructive", skip(self))]
    fn solve(&mut self) -> Solution {
        let start = Instant::now();
        self.best = best_of_rules(&self.problem, &ConstructiveRule::ALL, &mut self.rng);
        self.execution_time = start.elapsed();

        tracing::debug!(
            "Constructive: best makespan {} in {:?}",
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
    use crate::models::fixtures::{random_problem, shared, small_problem};
    use rand::SeedableRng;

    #[test]
    fn test_constructive_small() {
        let config = ConstructiveConfig::default().with_seed(42);
        let mut c = Constructive::new(shared(small_problem()), config);
        assert_eq!(c.best_solution().makespan(), 12);
        assert_eq!(c.execution_time(), Duration::ZERO);

        let best = c.solve();
        assert_eq!(best.makespan(), 11);
        assert_eq!(c.best_solution(), &best);
        assert_eq!(c.report().algorithm, "Constructive");
    }

    #[test]
    fn test_best_is_no_worse_than_each_rule() {
        let problem = shared(random_problem(10, 4, 5));
        let mut rng = SmallRng::seed_from_u64(42);
        let best = best_of_rules(&problem, &ConstructiveRule::ALL, &mut rng);
        let neh_makespan = problem.calculate_makespan(&neh(&problem)).unwrap();
        let spt_makespan = problem
            .calculate_makespan(&shortest_processing_time(&problem))
            .unwrap();
        assert!(best.makespan() <= neh_makespan);
        assert!(best.makespan() <= spt_makespan);
    }

    #[test]
    fn test_best_of_no_rules_is_identity() {
        let problem = shared(small_problem());
        let mut rng = SmallRng::seed_from_u64(42);
        let best = best_of_rules(&problem, &[], &mut rng);
        assert_eq!(best.permutation(), &[0, 1, 2]);
    }

    #[test]
    fn test_initial_solution_variants() {
        let problem = shared(random_problem(8, 3, 9));
        let mut rng = SmallRng::seed_from_u64(42);
        let from_neh = InitialSolution::Neh.build(&problem, &mut rng);
        assert_eq!(from_neh.permutation(), neh(&problem).as_slice());

        let best = InitialSolution::Best.build(&problem, &mut rng);
        assert!(best.makespan() <= from_neh.makespan());

        let random = InitialSolution::Random.build(&problem, &mut rng);
        assert_eq!(random.len(), 8);
        assert_eq!(InitialSolution::default(), InitialSolution::Neh);
    }

    #[test]
    fn test_single_job_instance() {
        let problem = shared(Problem::new(vec![vec![2], vec![9]]).unwrap());
        let mut c = Constructive::new(problem, ConstructiveConfig::default().with_seed(1));
        let best = c.solve();
        assert_eq!(best.permutation(), &[0]);
        assert_eq!(best.makespan(), 11);
    }
}
