//! Greedy nearest-neighbor construction.
//!
//! O(n²) time, O(n) memory, no optimality guarantee. Distances are computed
//! on demand.

use crate::{Tour, Waypoint};

const START: usize = 0;

#[tsp_3d_derive::timer("solver.nearest_neighbor")]
pub fn solve(points: &[Waypoint]) -> Tour {
    let n = points.len();
    if n == 0 {
        return Tour::trivial(0);
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = START;
    let mut total = 0.0;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        // Falls back to the first unvisited node if no distance compares
        // smaller, which only happens with NaN coordinates.
        let mut next = None;
        let mut best = f64::INFINITY;
        for candidate in (0..n).filter(|&j| !visited[j]) {
            let d = points[current].dist(&points[candidate]);
            if next.is_none() || d < best {
                best = d;
                next = Some(candidate);
            }
        }
        let Some(next) = next else {
            break;
        };

        total += best;
        visited[next] = true;
        order.push(next);
        current = next;
    }

    total += points[current].dist(&points[START]);
    log::debug!("solver.nearest_neighbor: n={n} cost={total:.3}");
    Tour::new(order, total)
}
