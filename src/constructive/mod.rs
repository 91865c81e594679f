//! Constructive heuristics for building per-vehicle routes.
//!
//! - [`contiguous_split`] / [`block_slice`] — Contiguous ⌈n/v⌉ blocks, O(n)
//! - [`round_robin`] — Deal points to vehicles in turn, O(n)
//! - [`by_priority`] — Stable high-to-low priority sort, O(n log n)
//! - [`nearest_neighbor_order`] — Greedy nearest-neighbor ordering, O(n²)

mod assignment;
mod nearest_neighbor;

pub use assignment::{block_slice, by_priority, contiguous_split, round_robin};
pub use nearest_neighbor::nearest_neighbor_order;
