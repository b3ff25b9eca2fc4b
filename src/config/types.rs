// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings accepted in `wikirank.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankToml {
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default)]
    pub damping: Option<f64>,
    #[serde(default)]
    pub parallelism: Option<usize>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Immutable run configuration handed to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub root: PathBuf,
    pub iterations: usize,
    pub damping: f64,
    pub parallelism: usize,
    pub output: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            iterations: default_iterations(),
            damping: default_damping(),
            parallelism: default_parallelism(),
            output: None,
        }
    }
}

pub const CONFIG_FILE: &str = "wikirank.toml";
pub const OUTPUT_FILE: &str = "pagerank.txt";

const fn default_iterations() -> usize { 50 }
const fn default_damping() -> f64 { 0.9 }

/// Gets a reasonable worker count based on available CPUs.
fn default_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().min(8))
        .unwrap_or(4)
}
