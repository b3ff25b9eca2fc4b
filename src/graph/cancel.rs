// src/graph/cancel.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crate::error::RankError;

/// Shared stop signal for ingestion workers.
///
/// The first failure is kept; later ones are dropped, since they are usually
/// consequences of the same bad input or of the shutdown itself.
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
    failure: OnceLock<RankError>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Records `err` if it is the first failure and signals every worker.
    pub fn fail(&self, err: RankError) {
        let _ = self.failure.set(err);
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn into_failure(self) -> Option<RankError> {
        self.failure.into_inner()
    }
}
