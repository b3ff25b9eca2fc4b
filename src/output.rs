// src/output.rs
//! Tab-separated ranking output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{RankError, Result};
use crate::rank::RankedEntry;

/// Formats one output line: `Title\tScore\n` with six decimals.
#[must_use]
pub fn format_entry(entry: &RankedEntry) -> String {
    format!("{}\t{:.6}\n", entry.title, entry.score)
}

/// Writes the ranking to `path`.
///
/// The data goes to a sibling `.tmp` file first and is renamed into place, so
/// `path` only ever holds a complete ranking.
///
/// # Errors
/// Returns `Io` if the file cannot be written or renamed.
pub fn write_ranking(path: &Path, entries: &[RankedEntry]) -> Result<()> {
    let tmp = tmp_path(path);
    write_lines(&tmp, entries).map_err(|e| RankError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| RankError::io(path, e))?;
    info!(entries = entries.len(), "wrote ranking to {}", path.display());
    Ok(())
}

fn write_lines(path: &Path, entries: &[RankedEntry]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for entry in entries {
        out.write_all(format_entry(entry).as_bytes())?;
    }
    out.flush()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
