//! Pheromone and heuristic matrices for ant colony construction.

use crate::models::Problem;

/// Dense `n × n` pheromone trail over job pairs.
///
/// Deposits are made on both `(a, b)` and `(b, a)`, so the trail stays
/// symmetric when it starts uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n × n` matrix with every entry set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            values: vec![initial; n * n],
        }
    }

    /// Side length.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns `true` for a zero-sized matrix.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Trail strength on the edge `from → to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.n + to]
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for value in &mut self.values {
            *value *= keep;
        }
    }

    /// Adds `amount` to `(a, b)` and `(b, a)`.
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.values[a * self.n + b] += amount;
        self.values[b * self.n + a] += amount;
    }

    /// Deposits `amount` on every consecutive pair of `tour`.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        for edge in tour.windows(2) {
            self.deposit(edge[0], edge[1], amount);
        }
    }

    /// Returns `true` if `get(a, b) == get(b, a)` for all pairs.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|a| (a + 1..self.n).all(|b| self.get(a, b) == self.get(b, a)))
    }

    /// Smallest entry (`+inf` for an empty matrix).
    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Static desirability `1 / (1 + |mean(j) - mean(i)|)` of following job
/// `i` with job `j`, where `mean` is the mean processing time across
/// machines.
pub fn heuristic_matrix(problem: &Problem) -> Vec<Vec<f64>> {
    let means: Vec<f64> = (0..problem.num_jobs())
        .map(|j| problem.mean_processing_time(j))
        .collect();
    means
        .iter()
        .map(|&mi| means.iter().map(|&mj| 1.0 / (1.0 + (mj - mi).abs())).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::small_problem;

    #[test]
    fn test_deposit_is_symmetric() {
        let mut tau = PheromoneMatrix::new(4, 1.0);
        tau.deposit_tour(&[2, 0, 3, 1], 0.5);
        assert!(tau.is_symmetric());
        assert_eq!(tau.get(2, 0), 1.5);
        assert_eq!(tau.get(0, 2), 1.5);
        assert_eq!(tau.get(1, 3), 1.5);
        assert_eq!(tau.get(2, 1), 1.0);
    }

    #[test]
    fn test_evaporate() {
        let mut tau = PheromoneMatrix::new(3, 2.0);
        tau.evaporate(0.25);
        assert_eq!(tau.get(1, 2), 1.5);
        assert_eq!(tau.min_value(), 1.5);
        tau.evaporate(0.0);
        assert_eq!(tau.get(0, 0), 1.5);
    }

    #[test]
    fn test_heuristic_matrix() {
        // Means: job0 1.5, job1 4.0, job2 3.0.
        let eta = heuristic_matrix(&small_problem());
        assert_eq!(eta[0][0], 1.0);
        assert!((eta[0][1] - 1.0 / 3.5).abs() < 1e-12);
        assert!((eta[1][2] - 0.5).abs() < 1e-12);
        assert_eq!(eta[1][2], eta[2][1]);
    }
}
