//! starwatch: track GitHub search results over time and report star deltas.
//!
//! Wiring lives here; the heavy lifting is in the member crates:
//! `github-search` (provider), `snapshot-store` (persistence) and
//! `delta-engine` (comparison + rendering).

pub mod cli;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod words;
