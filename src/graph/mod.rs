// src/graph/mod.rs
//! Link-graph ingestion: dump decoding, link extraction and parallel assembly.

pub mod adjacency;
pub mod builder;
pub mod cancel;
pub mod dump;
pub mod links;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use dump::{DumpReader, PageRecord};
