//! Constructive ordering rules.
//!
//! # Rules
//!
//! - **NEH**: jobs by decreasing total work, each inserted at the position
//!   of least makespan (Nawaz, Enscore & Ham, 1983).
//! - **SPT**: jobs by increasing mean processing time.
//! - **Random**: uniformly shuffled identity.
//!
//! # Reference
//! Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//! n-job flow-shop sequencing problem"

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Problem;

/// A rule that builds a complete job ordering from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstructiveRule {
    /// Nawaz–Enscore–Ham insertion.
    Neh,
    /// Shortest (mean) processing time first.
    ShortestProcessingTime,
    /// Uniformly random ordering.
    Random,
}

impl ConstructiveRule {
    /// All rules, in the order `Constructive` tries them.
    pub const ALL: [ConstructiveRule; 3] = [
        ConstructiveRule::Neh,
        ConstructiveRule::Random,
        ConstructiveRule::ShortestProcessingTime,
    ];

    /// Short rule name (e.g., "NEH").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Neh => "NEH",
            Self::ShortestProcessingTime => "SPT",
            Self::Random => "Random",
        }
    }

    /// Builds an ordering using this rule.
    pub fn build<R: Rng>(&self, problem: &Problem, rng: &mut R) -> Vec<usize> {
        match self {
            Self::Neh => neh(problem),
            Self::ShortestProcessingTime => shortest_processing_time(problem),
            Self::Random => random_permutation(problem.num_jobs(), rng),
        }
    }
}

/// NEH insertion heuristic.
///
/// Jobs are taken by decreasing total processing time (ties: higher job
/// index first). Each job is tried at every position of the partial
/// sequence; a trial is scored on a full-length candidate where the
/// not-yet-placed jobs follow in ascending index order. The first position
/// with the lowest makespan wins.
///
/// With fewer than two jobs the identity ordering is returned.
///
/// # Example
/// ```
/// use u_flowshop::models::Problem;
/// use u_flowshop::constructive::neh;
///
/// let problem = Problem::new(vec![vec![2, 3, 4], vec![1, 5, 2]]).unwrap();
/// let order = neh(&problem);
/// assert_eq!(order, vec![1, 0, 2]);
/// assert_eq!(problem.calculate_makespan(&order).unwrap(), 11);
/// ```
pub fn neh(problem: &Problem) -> Vec<usize> {
    let n = problem.num_jobs();
    if n < 2 {
        return (0..n).collect();
    }

    let totals: Vec<u64> = (0..n).map(|j| problem.total_processing_time(j)).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| totals[b].cmp(&totals[a]).then(b.cmp(&a)));

    let mut partial = Vec::with_capacity(n);
    partial.push(order[0]);
    let mut placed = vec![false; n];
    placed[order[0]] = true;

    let mut candidate = Vec::with_capacity(n);
    for &job in &order[1..] {
        placed[job] = true;
        let mut best_pos = 0;
        let mut best_makespan = u64::MAX;

        for pos in 0..=partial.len() {
            candidate.clear();
            candidate.extend_from_slice(&partial[..pos]);
            candidate.push(job);
            candidate.extend_from_slice(&partial[pos..]);
            candidate.extend((0..n).filter(|&j| !placed[j]));

            let makespan = problem.makespan_of(&candidate);
            if makespan < best_makespan {
                best_makespan = makespan;
                best_pos = pos;
            }
        }

        partial.insert(best_pos, job);
    }

    partial
}

/// Orders jobs by increasing mean processing time; ties keep index order.
pub fn shortest_processing_time(problem: &Problem) -> Vec<usize> {
    let means: Vec<f64> = (0..problem.num_jobs())
        .map(|j| problem.mean_processing_time(j))
        .collect();
    let mut order: Vec<usize> = (0..problem.num_jobs()).collect();
    order.sort_by(|&a, &b| means[a].total_cmp(&means[b]));
    order
}

/// Uniformly shuffled identity ordering of `num_jobs` jobs.
pub fn random_permutation<R: Rng>(num_jobs: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..num_jobs).collect();
    order.shuffle(rng);
    order
}
