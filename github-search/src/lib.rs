//! GitHub repository search provider.
//!
//! One endpoint is used (as of 2025):
//! - GET /search/repositories?q=...&sort=stars
//!
//! The rest of the application only consumes the result shape
//! (title / star count / description); the client is a black box behind
//! [`SearchProvider`].

mod client;
mod errors;
mod types;

pub use client::{GitHubSearchClient, SearchProvider};
pub use errors::{ProviderError, ProviderResult};
pub use types::{RepoHit, SearchConfig, SearchFilter};
