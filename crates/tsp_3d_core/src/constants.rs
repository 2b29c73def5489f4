/// Largest point count Held-Karp accepts. The DP tables hold `n * 2^n`
/// entries, so 20 nodes is roughly 20M cells.
pub const MAX_HELD_KARP_NODES: usize = 20;
/// Largest point count exhaustive search accepts (12! tours).
pub const MAX_EXHAUSTIVE_NODES: usize = 12;

pub(crate) const DEFAULT_EXHAUSTIVE_BELOW: usize = 8;
pub(crate) const DEFAULT_HELD_KARP_MAX: usize = 15;

pub(crate) const DEFAULT_INPUT_PATH: &str = "waypoints.txt";
pub(crate) const DEFAULT_OUTPUT_PATH: &str = "path.txt";
pub(crate) const STDIO_PATH: &str = "-";

pub(crate) const RECORD_FIELDS: usize = 4;
