//! Exact search over every visiting order.
//!
//! O(n!) time; only sensible for a handful of points.

use super::permutation::next_permutation;
use crate::{DistanceMatrix, Tour};

/// Best tour seen so far during enumeration.
#[derive(Debug)]
struct Incumbent {
    cost: f64,
    order: Vec<usize>,
}

impl Incumbent {
    fn new() -> Self {
        Self {
            cost: f64::INFINITY,
            order: Vec::new(),
        }
    }

    /// Strict `<`: on ties the earlier permutation stays.
    fn consider(&mut self, order: &[usize], cost: f64) {
        if cost < self.cost {
            self.cost = cost;
            self.order.clear();
            self.order.extend_from_slice(order);
        }
    }

    fn into_tour(self) -> Tour {
        Tour::new(self.order, self.cost)
    }
}

#[tsp_3d_derive::timer("solver.exhaustive")]
pub fn solve(matrix: &DistanceMatrix) -> Tour {
    let n = matrix.len();
    if n < 2 {
        return Tour::trivial(n);
    }

    let mut perm: Vec<usize> = (0..n).collect();
    let mut best = Incumbent::new();
    let mut visited: u64 = 0;
    loop {
        best.consider(&perm, matrix.cycle_length(&perm));
        visited += 1;
        if !next_permutation(&mut perm) {
            break;
        }
    }

    log::debug!(
        "solver.exhaustive: n={n} permutations={visited} best={:.3}",
        best.cost
    );
    best.into_tour()
}
