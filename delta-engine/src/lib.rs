//! Delta computation between a current result set and a stored baseline.
//!
//! Pure logic: no I/O, no clock. The store hands in a [`Snapshot`] baseline,
//! the provider hands in the current title → star-count mapping, and this
//! crate produces per-title deltas plus the aggregate summary and their
//! textual rendering.

mod compare;
mod render;

pub use compare::{Comparison, DeltaRecord, Extreme, Summary, compare};
pub use render::{delta_line, render_report};
