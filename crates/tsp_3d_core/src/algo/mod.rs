pub mod dispatch;
pub mod distance;
pub mod exhaustive;
pub mod held_karp;
pub mod nearest_neighbor;
mod permutation;

#[cfg(test)]
pub(crate) mod fixtures;
