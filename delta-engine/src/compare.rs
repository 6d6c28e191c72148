//! Single-pass delta computation and aggregation.

use std::collections::HashMap;

use snapshot_store::Snapshot;
use tracing::debug;

/// One title's movement between baseline and current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaRecord {
    pub title: String,
    pub baseline: u64,
    pub current: u64,
    /// `current - baseline`, signed.
    pub delta: i64,
}

/// A summary extreme (most/fewest gained) with its owning title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extreme {
    pub title: String,
    pub delta: i64,
}

/// Aggregate statistics over the emitted deltas.
///
/// Extremes and average are `None` when no title was present in both sets,
/// so an empty comparison never reads as a zero delta.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub most_gained: Option<Extreme>,
    pub least_gained: Option<Extreme>,
    pub total: i64,
    /// `total / count`, truncating; `None` when `count == 0`.
    pub average: Option<i64>,
    pub count: usize,
}

/// Comparison output: deltas in baseline stored order plus the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub deltas: Vec<DeltaRecord>,
    pub summary: Summary,
}

/// Compares a current title → star-count mapping against a baseline snapshot.
///
/// Iterates baseline records in stored order and emits a [`DeltaRecord`] for
/// each title also present in `current`. Titles only in the baseline, or
/// only in the current set, are excluded from both the delta sequence and
/// the summary.
///
/// Tie-breaks: `most_gained` keeps the first-seen title (strict `>`),
/// `least_gained` keeps the last-seen title (`<=`). The asymmetry is
/// long-standing observable behavior.
pub fn compare(current: &HashMap<String, u64>, baseline: &Snapshot) -> Comparison {
    let mut deltas = Vec::new();
    let mut summary = Summary::default();

    for record in &baseline.records {
        let Some(&current_stars) = current.get(&record.title) else {
            continue;
        };
        let delta = current_stars as i64 - record.stars as i64;

        if summary.most_gained.as_ref().is_none_or(|m| delta > m.delta) {
            summary.most_gained = Some(Extreme {
                title: record.title.clone(),
                delta,
            });
        }
        if summary.least_gained.as_ref().is_none_or(|m| delta <= m.delta) {
            summary.least_gained = Some(Extreme {
                title: record.title.clone(),
                delta,
            });
        }

        summary.total += delta;
        summary.count += 1;
        deltas.push(DeltaRecord {
            title: record.title.clone(),
            baseline: record.stars,
            current: current_stars,
            delta,
        });
    }

    if summary.count > 0 {
        summary.average = Some(summary.total / summary.count as i64);
    }

    debug!(
        "Compared {} current titles against baseline '{}': {} deltas",
        current.len(),
        baseline.name,
        summary.count
    );
    Comparison { deltas, summary }
}
