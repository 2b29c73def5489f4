use crate::{
    DistanceMatrix, Error, MAX_EXHAUSTIVE_NODES, MAX_HELD_KARP_NODES, Result, SolverInput,
    SolverOptions, Strategy, Tour, Waypoint,
    algo::{exhaustive, held_karp, nearest_neighbor},
    constants::{DEFAULT_EXHAUSTIVE_BELOW, DEFAULT_HELD_KARP_MAX},
};

/// Point-count boundaries for `Strategy::Auto`.
///
/// `n < exhaustive_below` runs exhaustive search, `n <= held_karp_max` runs
/// Held-Karp, anything larger runs nearest neighbor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Thresholds {
    exhaustive_below: usize,
    held_karp_max: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            exhaustive_below: DEFAULT_EXHAUSTIVE_BELOW,
            held_karp_max: DEFAULT_HELD_KARP_MAX,
        }
    }
}

impl Thresholds {
    pub fn new(exhaustive_below: usize, held_karp_max: usize) -> Result<Self> {
        if exhaustive_below > MAX_EXHAUSTIVE_NODES + 1 {
            return Err(Error::invalid_input(format!(
                "exhaustive-below must be <= {} (exhaustive search is capped at {MAX_EXHAUSTIVE_NODES} points), got {exhaustive_below}",
                MAX_EXHAUSTIVE_NODES + 1
            )));
        }
        if held_karp_max > MAX_HELD_KARP_NODES {
            return Err(Error::invalid_input(format!(
                "held-karp-max must be <= {MAX_HELD_KARP_NODES}, got {held_karp_max}"
            )));
        }
        Ok(Self {
            exhaustive_below,
            held_karp_max,
        })
    }

    pub fn from_options(options: &SolverOptions) -> Result<Self> {
        Self::new(options.exhaustive_below, options.held_karp_max)
    }

    /// Concrete solver for `n` points. Never returns `Strategy::Auto`.
    pub fn select(&self, n: usize) -> Strategy {
        if n < self.exhaustive_below {
            Strategy::Exhaustive
        } else if n <= self.held_karp_max {
            Strategy::HeldKarp
        } else {
            Strategy::NearestNeighbor
        }
    }
}

/// A solved tour and the solver that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub strategy: Strategy,
    pub tour: Tour,
}

/// Solves `input` with the strategy and thresholds from `options`.
pub fn solve_tour(input: &SolverInput, options: &SolverOptions) -> Result<Solution> {
    let thresholds = Thresholds::from_options(options)?;
    solve_with(input.points(), options.strategy, thresholds)
}

#[tsp_3d_derive::timer("dispatch")]
pub fn solve_with(
    points: &[Waypoint],
    strategy: Strategy,
    thresholds: Thresholds,
) -> Result<Solution> {
    let n = points.len();
    let strategy = match strategy {
        Strategy::Auto => thresholds.select(n),
        forced => forced,
    };
    check_capacity(strategy, n)?;
    if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
        return Err(Error::invalid_input(format!(
            "waypoint {} has non-finite coordinates",
            bad.id
        )));
    }

    log::info!("dispatch: n={n} strategy={strategy}");
    // Matrices only for the node-capped exact solvers.
    let tour = match strategy {
        Strategy::Exhaustive => exhaustive::solve(&DistanceMatrix::new(points)),
        Strategy::HeldKarp => held_karp::solve(&DistanceMatrix::new(points))?,
        Strategy::NearestNeighbor => nearest_neighbor::solve(points),
        Strategy::Auto => unreachable!("auto is resolved before solving"),
    };
    log::info!(
        "dispatch: done n={n} strategy={strategy} cost={:.3}",
        tour.cost()
    );

    Ok(Solution { strategy, tour })
}

fn check_capacity(strategy: Strategy, n: usize) -> Result<()> {
    let cap = match strategy {
        Strategy::Exhaustive => MAX_EXHAUSTIVE_NODES,
        Strategy::HeldKarp => MAX_HELD_KARP_NODES,
        Strategy::NearestNeighbor | Strategy::Auto => return Ok(()),
    };
    if n > cap {
        return Err(Error::invalid_input(format!(
            "strategy {strategy} supports at most {cap} points, got {n}"
        )));
    }
    Ok(())
}
