// src/discovery.rs
use crate::error::{RankError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// Index and page-dump files found under a corpus root, each sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusFiles {
    pub index_files: Vec<PathBuf>,
    pub page_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Index,
    Pages,
}

/// Walks `root` recursively and classifies dump files by name.
///
/// # Errors
/// Returns `Io` if the root or any directory below it cannot be read.
pub fn discover(root: &Path) -> Result<CorpusFiles> {
    if !root.is_dir() {
        return Err(RankError::io(
            root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "corpus root is not a directory"),
        ));
    }

    let mut files = CorpusFiles::default();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        match classify(entry.path()) {
            Some(FileRole::Index) => files.index_files.push(entry.into_path()),
            Some(FileRole::Pages) => files.page_files.push(entry.into_path()),
            None => {}
        }
    }
    files.index_files.sort();
    files.page_files.sort();

    info!(
        index_files = files.index_files.len(),
        page_files = files.page_files.len(),
        "discovered corpus under {}",
        root.display()
    );
    if files.page_files.is_empty() {
        warn!("no page dumps found under {}", root.display());
    }
    Ok(files)
}

/// A file name containing `index` is an index file; otherwise one containing
/// `xml` is a page dump.
#[must_use]
pub fn classify(path: &Path) -> Option<FileRole> {
    let name = path.file_name()?.to_string_lossy();
    if name.contains("index") {
        Some(FileRole::Index)
    } else if name.contains("xml") {
        Some(FileRole::Pages)
    } else {
        None
    }
}
