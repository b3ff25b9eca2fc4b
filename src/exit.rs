// src/exit.rs
//! Standardized process exit codes for `wikirank`.
//!
//! Provides a stable contract for batch scripts driving the ranker.

use std::process::Termination;

use crate::error::{ErrorKind, RankError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Ranking completed and the output file was written.
    Success = 0,
    /// Generic error (IO, worker pool).
    Error = 1,
    /// Bad configuration or a malformed index/dump file.
    InvalidInput = 2,
    /// A dump page is not present in the title index.
    IntegrityFailure = 3,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&RankError> for RankExit {
    fn from(err: &RankError) -> Self {
        match err.kind() {
            ErrorKind::Io => Self::Error,
            ErrorKind::Parse | ErrorKind::Config => Self::InvalidInput,
            ErrorKind::Integrity => Self::IntegrityFailure,
        }
    }
}

impl From<&anyhow::Error> for RankExit {
    fn from(err: &anyhow::Error) -> Self {
        err.downcast_ref::<RankError>().map_or(Self::Error, Self::from)
    }
}
