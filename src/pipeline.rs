// src/pipeline.rs
//! End-to-end driver: discovery, title index, graph, ranking, collection.

use tracing::info;

use crate::config::PipelineConfig;
use crate::discovery::{self, CorpusFiles};
use crate::error::Result;
use crate::graph::GraphBuilder;
use crate::index::TitleIndex;
use crate::rank::{self, RankEngine, RankedEntry};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub ranked: Vec<RankedEntry>,
    pub articles: usize,
    pub links: usize,
    pub dangling: usize,
    pub index_files: usize,
    pub page_files: usize,
    pub mass: f64,
}

pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Discovers the corpus under the configured root and ranks it.
    ///
    /// # Errors
    /// Returns the first fatal error from validation, discovery, indexing or
    /// ingestion. Nothing partial is returned.
    pub fn run(&self) -> Result<RunReport> {
        self.config.validate()?;
        let files = discovery::discover(&self.config.root)?;
        self.run_files(&files)
    }

    /// Ranks an explicit set of index and page files.
    ///
    /// # Errors
    /// See [`Pipeline::run`].
    pub fn run_files(&self, files: &CorpusFiles) -> Result<RunReport> {
        self.config.validate()?;

        // The index must be complete before any worker resolves a link.
        let index = TitleIndex::build(&files.index_files)?;
        let graph = GraphBuilder::new(&index, self.config.parallelism).build(&files.page_files)?;

        let links = graph.edge_count();
        let dangling = graph.dangling_nodes().count();
        let result = RankEngine::new(self.config.damping, self.config.iterations).run(graph);
        let mass = result.mass();

        info!("collecting pagerank");
        let ranked = rank::collect(&index, &result.scores);

        Ok(RunReport {
            articles: index.len(),
            links,
            dangling,
            index_files: files.index_files.len(),
            page_files: files.page_files.len(),
            mass,
            ranked,
        })
    }
}
