// src/graph/builder.rs
//! Parallel construction of the article link graph.
//!
//! Each page-dump file is handled by one worker, which resolves every page and
//! link against the title index and accumulates a private partial graph. The
//! partials are merged on the calling thread, in file order, once the pool has
//! drained. No worker ever touches shared mutable state apart from the
//! cancellation token.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use super::adjacency::AdjacencyGraph;
use super::cancel::CancelToken;
use super::dump::DumpReader;
use super::links;
use crate::error::{RankError, Result};
use crate::index::{TitleId, TitleIndex};

/// Edges produced by a single dump file.
#[derive(Debug, Default)]
struct PartialGraph {
    records: Vec<(TitleId, Vec<TitleId>)>,
}

pub struct GraphBuilder<'a> {
    index: &'a TitleIndex,
    parallelism: usize,
}

impl<'a> GraphBuilder<'a> {
    #[must_use]
    pub fn new(index: &'a TitleIndex, parallelism: usize) -> Self {
        Self {
            index,
            parallelism: parallelism.max(1),
        }
    }

    /// Parses every dump file with a pool of `parallelism` workers.
    ///
    /// The first failing file stops the remaining workers at their next page
    /// boundary, and its error is returned. No partial graph escapes.
    ///
    /// # Errors
    /// Returns `Io`, `Xml` or `Dump` for unreadable or malformed files, and
    /// `UnknownTitle` when a page's own title is missing from the index.
    pub fn build(&self, page_files: &[PathBuf]) -> Result<AdjacencyGraph> {
        info!(
            files = page_files.len(),
            workers = self.parallelism,
            "ingesting page dumps"
        );
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.parallelism)
            .thread_name(|i| format!("wikirank-ingest-{i}"))
            .build()?;

        let cancel = CancelToken::new();
        let partials: Vec<Option<PartialGraph>> = pool.install(|| {
            page_files
                .par_iter()
                .map(|path| self.run_worker(path, &cancel))
                .collect()
        });

        if let Some(err) = cancel.into_failure() {
            return Err(err);
        }

        let graph = self.merge(partials.into_iter().flatten());
        info!(
            articles = graph.node_count(),
            links = graph.edge_count(),
            "link graph built"
        );
        Ok(graph)
    }

    fn run_worker(&self, path: &Path, cancel: &CancelToken) -> Option<PartialGraph> {
        if cancel.is_cancelled() {
            return None;
        }
        let outcome = DumpReader::open(path).and_then(|pages| self.ingest(pages, cancel));
        match outcome {
            Ok(partial) => partial,
            Err(err) => {
                cancel.fail(err);
                None
            }
        }
    }

    /// Resolves every page in one dump. Returns `Ok(None)` if another worker
    /// cancelled the run midway.
    fn ingest<R: BufRead>(
        &self,
        mut pages: DumpReader<R>,
        cancel: &CancelToken,
    ) -> Result<Option<PartialGraph>> {
        info!("loading page {}", pages.path().display());
        let mut partial = PartialGraph::default();
        let mut resolved = 0usize;

        while let Some(page) = pages.next_page()? {
            if cancel.is_cancelled() {
                debug!("cancelled while reading {}", pages.path().display());
                return Ok(None);
            }
            let source = self
                .index
                .id(&page.title)
                .ok_or_else(|| RankError::UnknownTitle {
                    title: page.title.clone(),
                    path: pages.path().to_path_buf(),
                })?;
            let targets: Vec<TitleId> = links::extract(&page.text)
                .filter_map(|target| self.index.id(&target))
                .collect();
            resolved += targets.len();
            partial.records.push((source, targets));
        }

        debug!(
            pages = partial.records.len(),
            links = resolved,
            "finished page dump {}",
            pages.path().display()
        );
        Ok(Some(partial))
    }

    fn merge(&self, partials: impl Iterator<Item = PartialGraph>) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::with_nodes(self.index.len());
        for partial in partials {
            for (source, targets) in partial.records {
                graph.extend_edges(source, targets);
            }
        }
        graph
    }
}
