//! Genetic variant components.
//!
//! - [`Partition`] — Shuffled round-robin assignment with inverse-distance fitness
//! - [`evolve`] — Generational sampling that keeps the fittest partition seen
//! - [`GeneticParams`] — Generation count and population size

mod chromosome;
mod search;

pub use chromosome::Partition;
pub use search::{evolve, GeneticParams};
