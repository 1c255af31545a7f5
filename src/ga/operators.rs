//! Genetic operators over job permutations.
//!
//! # Operators
//!
//! - **Selection**: binary tournament with replacement.
//! - **Crossover**: order crossover (OX). A segment `[start, start+length)`
//!   is copied verbatim; the remaining positions are filled in wrap-around
//!   order starting right after the segment, taking the other parent's
//!   unused genes from its first position onward.
//! - **Mutation**: swap two distinct random positions.
//!
//! # Reference
//! Davis (1985), "Applying adaptive algorithms to epistatic domains"

use rand::Rng;

use crate::metaheuristic::distinct_pair;
use crate::models::Solution;

// ======================== Selection ========================

/// Binary tournament: draws two indices with replacement and returns the
/// one with the lower makespan (the first draw on ties).
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_select<R: Rng>(population: &[Solution], rng: &mut R) -> usize {
    let a = rng.random_range(0..population.len());
    let b = rng.random_range(0..population.len());
    if population[b].is_better_than(&population[a]) {
        b
    } else {
        a
    }
}

// ======================== Crossover ========================

/// Order crossover with an explicit segment.
///
/// `length` is clamped so the segment fits inside the parents. The first
/// child keeps `p1`'s segment and the second keeps `p2`'s.
///
/// # Example
/// ```
/// use u_flowshop::ga::operators::order_crossover;
///
/// let (c1, c2) = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 2);
/// assert_eq!(c1, vec![0, 1, 2, 4, 3]);
/// assert_eq!(c2, vec![4, 3, 2, 0, 1]);
/// ```
pub fn order_crossover(
    p1: &[usize],
    p2: &[usize],
    start: usize,
    length: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = p1.len();
    if n == 0 || start >= n {
        return (p1.to_vec(), p2.to_vec());
    }
    let length = length.min(n - start);
    (
        ox_build_child(p1, p2, start, length),
        ox_build_child(p2, p1, start, length),
    )
}

/// Order crossover with a random segment.
///
/// `start` and `length` are each drawn uniformly from `[0, n)`; `length`
/// is then clamped to `n - start`.
pub fn random_order_crossover<R: Rng>(
    p1: &[usize],
    p2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = p1.len();
    if n == 0 {
        return (p1.to_vec(), p2.to_vec());
    }
    let start = rng.random_range(0..n);
    let length = rng.random_range(0..n);
    order_crossover(p1, p2, start, length)
}

fn ox_build_child(template: &[usize], donor: &[usize], start: usize, length: usize) -> Vec<usize> {
    let n = template.len();
    let end = start + length;
    let mut child = template.to_vec();

    let mut in_segment = vec![false; n];
    for &gene in &template[start..end] {
        in_segment[gene] = true;
    }
    let mut donor_genes = donor.iter().copied().filter(|&g| !in_segment[g]);

    for offset in 0..n {
        let pos = (end + offset) % n;
        if (start..end).contains(&pos) {
            continue;
        }
        if let Some(gene) = donor_genes.next() {
            child[pos] = gene;
        }
    }
    child
}

// ======================== Mutation ========================

/// Swap mutation: exchanges two distinct random positions.
///
/// No-op for fewer than two jobs.
pub fn swap_mutation<R: Rng>(solution: &mut Solution, rng: &mut R) {
    if let Some((i, j)) = distinct_pair(solution.len(), rng) {
        solution.swap(i, j);
    }
}
