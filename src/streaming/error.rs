use thiserror::Error;
use tracing::{error, warn};

use crate::engine::EngineError;
use crate::io::IoError;

/// A script row that could not be replayed
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The row could not be read or parsed into an operation
    #[error("unreadable row: {0}")]
    Row(#[from] IoError),

    /// The operation parsed but the accounts rejected it
    #[error("rejected operation: {0}")]
    Rejected(#[from] EngineError),
}

/// What the replay does after an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Abort,
}

/// Decides whether a replay survives a bad row or a rejected operation
pub trait ErrorPolicy: Send + Sync {
    fn on_error(&self, error: ReplayError) -> Flow;
}

/// Log at warn and keep going
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn on_error(&self, error: ReplayError) -> Flow {
        warn!(%error, "Skipping script row");
        Flow::Continue
    }
}

/// Stop at the first bad row or rejected operation
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn on_error(&self, error: ReplayError) -> Flow {
        error!(%error, "Aborting replay");
        Flow::Abort
    }
}

/// Keep going without logging
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn on_error(&self, _error: ReplayError) -> Flow {
        Flow::Continue
    }
}
