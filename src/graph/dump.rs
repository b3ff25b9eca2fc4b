// src/graph/dump.rs
//! Streaming reader for MediaWiki page dumps.
//!
//! Yields one [`PageRecord`] at a time so a multi-gigabyte dump is never held
//! in memory. Elements are matched by local name, which makes the export
//! namespace irrelevant. Only `page/title` and `page/revision/text` are read;
//! when a page carries several revisions the last one wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{RankError, Result};

/// A single article as found in a dump file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub title: String,
    pub text: String,
}

#[derive(Clone, Copy)]
enum Field {
    Title,
    Text,
}

pub struct DumpReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    path: PathBuf,
    finished: bool,
}

impl DumpReader<BufReader<File>> {
    /// Opens a dump file for streaming.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| RankError::io(path, e))?;
        Ok(Self::from_reader(BufReader::new(file), path))
    }
}

impl<R: BufRead> DumpReader<R> {
    pub fn from_reader(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader: Reader::from_reader(inner),
            buf: Vec::new(),
            path: path.into(),
            finished: false,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads up to and including the next `<page>` element.
    ///
    /// # Errors
    /// Returns `Xml` for malformed XML and `Dump` for a page without a title
    /// or a document that ends inside a page.
    pub fn next_page(&mut self) -> Result<Option<PageRecord>> {
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|source| RankError::Xml {
                    source,
                    path: self.path.clone(),
                })?;
            match event {
                Event::Start(e) if e.local_name().as_ref() == b"page" => {}
                Event::Empty(e) if e.local_name().as_ref() == b"page" => {
                    return Err(RankError::dump(&self.path, "<page> without <title>"));
                }
                Event::Eof => return Ok(None),
                _ => continue,
            }
            return self.read_page().map(Some);
        }
    }

    fn read_page(&mut self) -> Result<PageRecord> {
        let mut depth = 0usize;
        let mut in_revision = false;
        let mut capture: Option<(Field, usize)> = None;
        let mut title: Option<String> = None;
        let mut text: Option<String> = None;

        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|source| RankError::Xml {
                    source,
                    path: self.path.clone(),
                })?;

            match event {
                Event::Start(e) => {
                    let name = e.local_name();
                    match (depth, name.as_ref()) {
                        (0, b"title") => {
                            title = Some(String::new());
                            capture = Some((Field::Title, depth));
                        }
                        (0, b"revision") => in_revision = true,
                        (1, b"text") if in_revision => {
                            text = Some(String::new());
                            capture = Some((Field::Text, depth));
                        }
                        _ => {}
                    }
                    depth += 1;
                }
                Event::Empty(e) => match (depth, e.local_name().as_ref()) {
                    (0, b"title") => title = Some(String::new()),
                    (1, b"text") if in_revision => text = Some(String::new()),
                    _ => {}
                },
                Event::Text(e) => {
                    if let Some((field, _)) = capture {
                        let decoded = e.unescape().map_err(|source| RankError::Xml {
                            source: source.into(),
                            path: self.path.clone(),
                        })?;
                        push_field(field, &mut title, &mut text, &decoded);
                    }
                }
                Event::CData(e) => {
                    if let Some((field, _)) = capture {
                        let raw = e.into_inner();
                        let decoded = std::str::from_utf8(&raw)
                            .map_err(|_| RankError::dump(&self.path, "CDATA is not valid UTF-8"))?;
                        push_field(field, &mut title, &mut text, decoded);
                    }
                }
                Event::End(_) => {
                    if depth == 0 {
                        let title = title
                            .ok_or_else(|| RankError::dump(&self.path, "<page> without <title>"))?;
                        return Ok(PageRecord {
                            title,
                            text: text.unwrap_or_default(),
                        });
                    }
                    depth -= 1;
                    if matches!(capture, Some((_, d)) if d == depth) {
                        capture = None;
                    }
                    if depth == 0 {
                        in_revision = false;
                    }
                }
                Event::Eof => {
                    return Err(RankError::dump(
                        &self.path,
                        "unexpected end of file inside <page>",
                    ));
                }
                _ => {}
            }
        }
    }
}

fn push_field(field: Field, title: &mut Option<String>, text: &mut Option<String>, chunk: &str) {
    let target = match field {
        Field::Title => title,
        Field::Text => text,
    };
    target.get_or_insert_with(String::new).push_str(chunk);
}

impl<R: BufRead> Iterator for DumpReader<R> {
    type Item = Result<PageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = self.next_page().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.finished = true;
        }
        next
    }
}
