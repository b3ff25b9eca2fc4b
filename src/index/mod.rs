// src/index/mod.rs
//! The title index: a dense bijection between article titles and node ids.
//!
//! Index files are plain text, one `namespace:id:title` record per line. The
//! namespace and page id are discarded; the title is entity-decoded and gets a
//! dense id. When a title repeats, the later occurrence wins, so ids follow the
//! order of each title's last occurrence across all files.

pub mod entities;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{RankError, Result};

/// Dense article identifier in `[0, N)`.
pub type TitleId = u32;

/// Immutable title ↔ id mapping, shared read-only once built.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    ids: HashMap<String, TitleId>,
    titles: Vec<String>,
}

impl TitleIndex {
    /// Loads every index file in order and builds the index.
    ///
    /// # Errors
    /// Returns `Io` if a file cannot be read and `Malformed` if a line does not
    /// carry a `namespace:id:title` record.
    pub fn build(paths: &[PathBuf]) -> Result<Self> {
        let mut builder = IndexBuilder::default();
        for path in paths {
            builder.load_file(path)?;
        }
        let index = builder.finish();
        info!(titles = index.len(), "title index built");
        Ok(index)
    }

    /// Builds an index from already-decoded titles, applying the same
    /// last-occurrence-wins rule as [`TitleIndex::build`].
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = IndexBuilder::default();
        for title in titles {
            builder.push(title.into());
        }
        builder.finish()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    #[must_use]
    pub fn id(&self, title: &str) -> Option<TitleId> {
        self.ids.get(title).copied()
    }

    #[must_use]
    pub fn title(&self, id: TitleId) -> Option<&str> {
        self.titles.get(id as usize).map(String::as_str)
    }

    /// Iterates `(id, title)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TitleId, &str)> {
        self.titles
            .iter()
            .enumerate()
            .map(|(id, title)| (id as TitleId, title.as_str()))
    }
}

/// Extracts the raw (still entity-encoded) title from an index line.
///
/// The title is everything after the second colon, so titles that contain
/// colons themselves (`Category:Physics`) survive intact.
#[must_use]
pub fn parse_index_line(line: &str) -> Option<&str> {
    let line = line
        .strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l));
    let (_namespace, rest) = line.split_once(':')?;
    let (_page_id, title) = rest.split_once(':')?;
    Some(title)
}

/// Accumulates titles, tombstoning earlier slots of repeated titles so the
/// final ids stay dense.
#[derive(Default)]
struct IndexBuilder {
    latest: HashMap<String, usize>,
    slots: Vec<Option<String>>,
}

impl IndexBuilder {
    fn load_file(&mut self, path: &Path) -> Result<()> {
        info!("loading index {}", path.display());
        let file = File::open(path).map_err(|e| RankError::io(path, e))?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        let mut line_no = 0;
        let before = self.slots.len();

        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| RankError::io(path, e))?;
            if read == 0 {
                break;
            }
            line_no += 1;
            if line.trim_end_matches(['\r', '\n']).is_empty() {
                continue;
            }
            let raw = parse_index_line(&line).ok_or_else(|| RankError::Malformed {
                path: path.to_path_buf(),
                line: line_no,
                reason: "expected `namespace:id:title`".to_string(),
            })?;
            if self.slots.len() >= TitleId::MAX as usize {
                return Err(RankError::Malformed {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: "title index exceeds u32 capacity".to_string(),
                });
            }
            self.push(entities::decode(raw).into_owned());
        }

        debug!(
            records = self.slots.len() - before,
            "finished index {}",
            path.display()
        );
        Ok(())
    }

    fn push(&mut self, title: String) {
        let slot = self.slots.len();
        if let Some(previous) = self.latest.insert(title.clone(), slot) {
            self.slots[previous] = None;
        }
        self.slots.push(Some(title));
    }

    fn finish(self) -> TitleIndex {
        let titles: Vec<String> = self.slots.into_iter().flatten().collect();
        let ids = titles
            .iter()
            .enumerate()
            .map(|(id, title)| (title.clone(), id as TitleId))
            .collect();
        TitleIndex { ids, titles }
    }
}
