pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod index;
pub mod output;
pub mod pipeline;
pub mod rank;

pub use error::{RankError, Result};
pub use pipeline::{Pipeline, RunReport};
