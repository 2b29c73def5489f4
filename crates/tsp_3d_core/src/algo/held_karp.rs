//! Held-Karp dynamic program over subsets of visited nodes.
//!
//! `cost[mask][u]` is the shortest path that starts at node 0, visits exactly
//! the nodes in `mask` (which always contains node 0) and ends at `u`.
//! O(n²·2ⁿ) time and O(n·2ⁿ) space.

use crate::{DistanceMatrix, Error, MAX_HELD_KARP_NODES, Result, Tour};

const START: usize = 0;
const NO_PARENT: u8 = u8::MAX;

/// Dense `2^n × n` tables addressed by `(mask, node)`.
struct SubsetTable {
    n: usize,
    cost: Vec<f64>,
    parent: Vec<u8>,
}

impl SubsetTable {
    fn new(n: usize) -> Self {
        let cells = (1usize << n) * n;
        Self {
            n,
            cost: vec![f64::INFINITY; cells],
            parent: vec![NO_PARENT; cells],
        }
    }

    #[inline]
    fn idx(&self, mask: u32, node: usize) -> usize {
        mask as usize * self.n + node
    }

    #[inline]
    fn cost(&self, mask: u32, node: usize) -> f64 {
        self.cost[self.idx(mask, node)]
    }

    #[inline]
    fn parent(&self, mask: u32, node: usize) -> Option<usize> {
        match self.parent[self.idx(mask, node)] {
            NO_PARENT => None,
            p => Some(p as usize),
        }
    }

    /// Zero-cost entry with no predecessor.
    fn seed(&mut self, mask: u32, node: usize) {
        let idx = self.idx(mask, node);
        self.cost[idx] = 0.0;
        self.parent[idx] = NO_PARENT;
    }

    /// Stores `candidate` if it strictly improves the cell.
    #[inline]
    fn relax(&mut self, mask: u32, node: usize, candidate: f64, from: usize) {
        let idx = self.idx(mask, node);
        if candidate < self.cost[idx] {
            self.cost[idx] = candidate;
            self.parent[idx] = from as u8;
        }
    }
}

#[inline]
fn contains(mask: u32, node: usize) -> bool {
    mask & (1 << node) != 0
}

#[tsp_3d_derive::timer("solver.held_karp")]
pub fn solve(matrix: &DistanceMatrix) -> Result<Tour> {
    let n = matrix.len();
    if n > MAX_HELD_KARP_NODES {
        return Err(Error::invalid_input(format!(
            "held-karp supports at most {MAX_HELD_KARP_NODES} points, got {n}"
        )));
    }
    if n < 2 {
        return Ok(Tour::trivial(n));
    }

    let full: u32 = (1u32 << n) - 1;
    let mut table = SubsetTable::new(n);
    table.seed(1 << START, START);

    // Subsets without the start node are never reachable.
    for mask in (1..=full).filter(|m| contains(*m, START)) {
        for u in (0..n).filter(|&u| contains(mask, u)) {
            let base = table.cost(mask, u);
            if !base.is_finite() {
                continue;
            }
            for v in (0..n).filter(|&v| !contains(mask, v)) {
                table.relax(mask | (1 << v), v, base + matrix.get(u, v), u);
            }
        }
    }

    let mut best_cost = f64::INFINITY;
    let mut last = None;
    for i in (0..n).filter(|&i| i != START) {
        let candidate = table.cost(full, i) + matrix.get(i, START);
        if candidate < best_cost {
            best_cost = candidate;
            last = Some(i);
        }
    }
    let Some(mut node) = last else {
        return Err(Error::invalid_data(
            "held-karp found no finite tour (non-finite distances?)",
        ));
    };

    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    loop {
        order.push(node);
        let parent = table.parent(mask, node);
        mask &= !(1 << node);
        match parent {
            Some(p) => node = p,
            None => break,
        }
    }
    order.reverse();

    log::debug!("solver.held_karp: n={n} subsets={} best={best_cost:.3}", full as u64 + 1);
    Ok(Tour::new(order, best_cost))
}
