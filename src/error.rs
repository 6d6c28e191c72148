//! Invocation-level error hierarchy.
//!
//! Member-crate failures propagate here via `From`; the CLI layer decides
//! abort-vs-report. `NoBaseline` is not an error: the store signals it with
//! `Ok(None)` and `show` prints a notice instead of a comparison table.

use github_search::ProviderError;
use snapshot_store::StoreError;
use thiserror::Error;

/// Convenient alias for invocation results.
pub type AppResult<T> = Result<T, AppError>;

/// Root error type for one invocation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Search call failed; the invocation aborts with no partial report.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Persistence engine unreachable or a read/write/drop failed.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The provider returned zero matches. Almost always a malformed query,
    /// so it is a user-visible failure rather than an empty report.
    #[error("search returned no repositories; check the query filter")]
    EmptyResultSet,

    /// An explicitly requested snapshot is absent (fatal for `compare`).
    #[error("snapshot '{name}' not found under container '{container}'")]
    SnapshotNotFound { container: String, name: String },

    /// Configuration problems (bad URLs, empty values).
    #[error("config error: {0}")]
    Config(String),
}
