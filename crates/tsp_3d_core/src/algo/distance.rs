use crate::Waypoint;

/// Dense symmetric table of Euclidean distances, row-major.
///
/// Each unordered pair is measured once and mirrored, so `get(a, b)` and
/// `get(b, a)` are bit-identical.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    pub fn new(points: &[Waypoint]) -> Self {
        let n = points.len();
        let mut cells = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].dist(&points[j]);
                cells[i * n + j] = d;
                cells[j * n + i] = d;
            }
        }
        Self { n, cells }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.n + to]
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Length of the closed cycle through `order`, including the edge from the
    /// last node back to the first. Zero for fewer than two nodes.
    pub fn cycle_length(&self, order: &[usize]) -> f64 {
        let n = order.len();
        if n < 2 {
            return 0.0;
        }
        let open: f64 = order.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(order[n - 1], order[0])
    }
}
