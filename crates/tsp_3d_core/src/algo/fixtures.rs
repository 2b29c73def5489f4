use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{DistanceMatrix, Tour, Waypoint};

pub(crate) const EPSILON: f64 = 1e-9;

/// Points with ids offset from their index so id/index mix-ups show up.
pub(crate) fn random_points(seed: u64, n: usize) -> Vec<Waypoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|idx| {
            Waypoint::new(
                100 + idx as i64,
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
            )
        })
        .collect()
}

pub(crate) fn collinear(n: usize) -> Vec<Waypoint> {
    (0..n)
        .map(|idx| Waypoint::new(idx as i64 + 1, idx as f64, 0.0, 0.0))
        .collect()
}

pub(crate) fn right_triangle() -> Vec<Waypoint> {
    vec![
        Waypoint::new(1, 0.0, 0.0, 0.0),
        Waypoint::new(2, 3.0, 0.0, 0.0),
        Waypoint::new(3, 3.0, 4.0, 0.0),
    ]
}

pub(crate) fn matrix(points: &[Waypoint]) -> DistanceMatrix {
    DistanceMatrix::new(points)
}

/// Permutation check plus an independent recomputation of the cost.
pub(crate) fn assert_valid_tour(points: &[Waypoint], tour: &Tour) {
    tour.validate(points.len()).expect("tour should be a permutation");
    let measured = Tour::measure(points, tour.order());
    assert!(
        (measured - tour.cost()).abs() < EPSILON,
        "reported cost {} differs from measured {measured}",
        tour.cost()
    );
}
