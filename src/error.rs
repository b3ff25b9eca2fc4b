// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("malformed index line {line} in {path}: {reason}")]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("XML decode error in {path}: {source}")]
    Xml {
        source: quick_xml::Error,
        path: PathBuf,
    },

    #[error("invalid page dump {path}: {reason}")]
    Dump { path: PathBuf, reason: String },

    #[error("page title {title:?} in {path} is missing from the title index")]
    UnknownTitle { title: String, path: PathBuf },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("could not start ingestion workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Coarse classification used to pick a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Integrity,
    Config,
}

impl RankError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    pub(crate) fn dump(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Dump {
            path: path.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::ThreadPool(_) => ErrorKind::Io,
            Self::Malformed { .. } | Self::Xml { .. } | Self::Dump { .. } => ErrorKind::Parse,
            Self::UnknownTitle { .. } => ErrorKind::Integrity,
            Self::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

// Gracefully convert WalkDir errors, keeping the path that failed.
impl From<walkdir::Error> for RankError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from);
        match e.into_io_error() {
            Some(source) => Self::Io { source, path },
            None => Self::Io {
                source: std::io::Error::other("filesystem loop detected"),
                path,
            },
        }
    }
}
