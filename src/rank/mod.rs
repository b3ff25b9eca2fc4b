// src/rank/mod.rs
pub mod collect;
pub mod pagerank;

pub use collect::{collect, RankedEntry};
pub use pagerank::{RankEngine, RankResult};
