//! Unified error type for store operations.
//!
//! A genuinely absent snapshot is not an error: reads return `Ok(None)` so
//! callers can tell "no baseline yet" apart from a backend failure.

use thiserror::Error;

/// Convenient alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Root error type for snapshot persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document-store driver failure (connect, read, write, drop).
    #[error("storage backend error: {0}")]
    Backend(#[from] mongodb::error::Error),

    /// A stored document does not have the expected shape.
    #[error("malformed stored document: {0}")]
    Corrupt(String),

    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("in-memory store lock poisoned")]
    Poisoned,
}
