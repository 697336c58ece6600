//! Idiom chain solving
//!
//! Builds the character adjacency graph and searches it for shortest chains.

mod engine;
mod graph;

pub use engine::{Path, solve};
pub use graph::IdiomGraph;
