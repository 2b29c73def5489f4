use crate::{Error, Result, Waypoint};

/// A closed tour: node indices in visiting order plus the cycle length.
/// The edge from the last node back to the first is implicit.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    pub fn new(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// The only tour over fewer than two nodes: `[]` or `[0]`, cost zero.
    pub fn trivial(n: usize) -> Self {
        debug_assert!(n < 2);
        Self::new((0..n).collect(), 0.0)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Recomputes the cycle length straight from the coordinates.
    pub fn measure(points: &[Waypoint], order: &[usize]) -> f64 {
        let n = order.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| points[order[i]].dist(&points[order[(i + 1) % n]]))
            .sum()
    }

    /// Checks that the order is a permutation of `0..n`.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.order.len() != n {
            return Err(Error::invalid_data(format!(
                "tour visits {} nodes, expected {n}",
                self.order.len()
            )));
        }

        let mut seen = vec![false; n];
        for &node in &self.order {
            if node >= n {
                return Err(Error::invalid_data(format!(
                    "tour node {node} is out of range for {n} points"
                )));
            }
            if seen[node] {
                return Err(Error::invalid_data(format!(
                    "tour visits node {node} more than once"
                )));
            }
            seen[node] = true;
        }

        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(Error::invalid_data(format!(
                "tour cost {} is not a finite non-negative length",
                self.cost
            )));
        }
        Ok(())
    }

    pub fn metrics(&self, points: &[Waypoint]) -> TourMetrics {
        let n = self.len();

        if n < 2 {
            log::info!("metrics: n={n} so there's nothing to report");
            return TourMetrics {
                n,
                ..TourMetrics::default()
            };
        }

        let edges: Vec<f64> = (0..n)
            .map(|i| points[self.order[i]].dist(&points[self.order[(i + 1) % n]]))
            .collect();
        let total: f64 = edges.iter().sum();
        let longest = edges.iter().copied().fold(0.0_f64, f64::max);
        let shortest = edges.iter().copied().fold(f64::INFINITY, f64::min);
        let average = total / n as f64;

        log::info!(
            "metrics: n={n} total={total:.3} longest={longest:.3} shortest={shortest:.3} avg={average:.3}"
        );

        TourMetrics {
            n,
            total,
            longest,
            shortest,
            average,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TourMetrics {
    pub n: usize,
    pub total: f64,
    pub longest: f64,
    pub shortest: f64,
    pub average: f64,
}
