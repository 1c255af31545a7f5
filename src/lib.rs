//! Permutation flow-shop optimization for the U-Engine ecosystem.
//!
//! Every job visits machines `0..M` in the same order and every machine
//! processes jobs in the same order, so a schedule is a single permutation
//! of jobs. This crate minimizes the makespan of that permutation with
//! constructive rules and a family of metaheuristics that share one
//! [`Metaheuristic`] contract.
//!
//! # Modules
//!
//! - **`models`**: `Problem` (processing-time matrix, makespan) and
//!   `Solution` (permutation with cached makespan), plus instance loading
//! - **`validation`**: permutation integrity checks
//! - **`metaheuristic`**: the optimizer trait, run reports, config errors
//! - **`constructive`**: NEH, SPT and random orderings
//! - **`local_search`**: first-improvement descent over swap, insert and reverse moves
//! - **`ils`**: Iterated Local Search
//! - **`sa`**: Simulated Annealing
//! - **`tabu`**: Tabu Search over swap moves
//! - **`ga`**: Genetic Algorithm with order crossover
//! - **`aco`**: Ant Colony Optimization
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use u_flowshop::models::Problem;
//! use u_flowshop::metaheuristic::Metaheuristic;
//! use u_flowshop::tabu::{TabuConfig, TabuSearch};
//!
//! let problem: Problem = "3 2\n2 3 4\n1 5 2\n".parse().unwrap();
//! assert_eq!(problem.calculate_makespan(&[0, 1, 2]).unwrap(), 12);
//!
//! let mut tabu = TabuSearch::new(Arc::new(problem), TabuConfig::default());
//! let best = tabu.solve();
//! assert_eq!(best.makespan(), 11);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Taillard (1993), "Benchmarks for basic scheduling problems"
//! - Ruiz & Maroto (2005), "A comprehensive review and evaluation of
//!   permutation flowshop heuristics"

pub mod aco;
pub mod constructive;
pub mod ga;
pub mod ils;
pub mod local_search;
pub mod metaheuristic;
pub mod models;
pub mod sa;
pub mod tabu;
pub mod validation;

pub use metaheuristic::{ConfigError, Metaheuristic, RunReport};
pub use models::{Problem, ProblemLoadError, Solution};
pub use validation::InvalidPermutation;
