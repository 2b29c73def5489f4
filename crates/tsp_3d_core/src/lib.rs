//! Shortest closed tours over small sets of 3D waypoints.
//! Dispatches by point count between exhaustive search, Held-Karp dynamic
//! programming, and the nearest-neighbor heuristic.

mod algo;
mod constants;
mod error;
mod io;
pub mod logging;
mod node;
mod tour;

pub(crate) use io::options;

pub use algo::dispatch::{Solution, Thresholds, solve_tour, solve_with};
pub use algo::distance::DistanceMatrix;
pub use algo::{exhaustive, held_karp, nearest_neighbor};
pub use constants::{MAX_EXHAUSTIVE_NODES, MAX_HELD_KARP_NODES};
pub use error::{Error, Result};
pub use io::input::SolverInput;
pub use io::options::{LogFormat, LogLevel, SolverOptions, Strategy};
pub use io::output::{CostFormat, TourOutput, write_output};
pub use node::Waypoint;
pub use tour::{Tour, TourMetrics};
