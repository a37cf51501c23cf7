//! Simulation error type.
//!
//! Sub-crates may reuse `BtError` directly or define their own error enums
//! (as `bt-render` does for terminal failures).  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `bt-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("grid expects {expected} cells, pool has {got}")]
    GridShape { expected: usize, got: usize },
}

/// Shorthand result type for all `bt-*` crates.
pub type BtResult<T> = Result<T, BtError>;
