//! Per-invocation orchestration: provider → name codec → store → engine.
//!
//! All state is constructor-injected; one tracker instance per invocation,
//! no process-wide singletons. Sequencing per run: one provider call, one
//! store read, optionally one store write.

use chrono::Utc;
use delta_engine::{compare, render_report};
use github_search::{RepoHit, SearchFilter, SearchProvider};
use snapshot_store::{
    DEFAULT_SNAPSHOT, MetricRecord, SnapshotStore, StoreBackend, container_name,
};
use std::collections::HashMap;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::words::WordTally;

/// Notice printed instead of a comparison table on the first-ever run for a
/// query identity.
pub const NO_BASELINE_NOTICE: &str =
    "No stored results for this query yet; run `commit` to record a baseline.";

/// Orchestrates one invocation against injected provider and store backend.
pub struct StarsTracker {
    provider: SearchProvider,
    backend: StoreBackend,
    words: WordTally,
}

impl StarsTracker {
    pub fn new(provider: SearchProvider, backend: StoreBackend) -> Self {
        Self {
            provider,
            backend,
            words: WordTally::new(),
        }
    }

    /// Runs the query and renders the delta report against the stored
    /// baseline, or the no-baseline notice on a first run.
    pub async fn show(&mut self, filter: &SearchFilter) -> AppResult<String> {
        let hits = self.fetch_current(filter).await?;
        let store = self.store_for(filter);

        match store.read(DEFAULT_SNAPSHOT).await? {
            Some(baseline) => {
                let mut out = format!("Results for the time: {}\n\n", baseline.captured_at);
                out.push_str(&render_report(&compare(&current_map(&hits), &baseline)));
                Ok(out)
            }
            None => Ok(NO_BASELINE_NOTICE.to_owned()),
        }
    }

    /// Runs the query and persists the result as the new baseline, replacing
    /// any prior snapshot under the same name.
    pub async fn commit(&mut self, filter: &SearchFilter, name: Option<&str>) -> AppResult<()> {
        let hits = self.fetch_current(filter).await?;
        let records: Vec<MetricRecord> = hits
            .iter()
            .map(|hit| MetricRecord::new(hit.full_name.clone(), hit.stargazers_count))
            .collect();

        let name = name.unwrap_or(DEFAULT_SNAPSHOT);
        info!("Storing {} records as snapshot '{}'", records.len(), name);
        self.store_for(filter)
            .write(name, Utc::now(), &records)
            .await?;
        Ok(())
    }

    /// Compares the current query result against the default snapshot stored
    /// under another identity container. A missing snapshot is fatal here,
    /// unlike the first-run case in [`StarsTracker::show`].
    pub async fn compare_with(
        &mut self,
        filter: &SearchFilter,
        container: &str,
    ) -> AppResult<String> {
        let hits = self.fetch_current(filter).await?;
        let store = self.backend.container(container);

        let baseline = store.read(DEFAULT_SNAPSHOT).await?.ok_or_else(|| {
            AppError::SnapshotNotFound {
                container: container.to_owned(),
                name: DEFAULT_SNAPSHOT.to_owned(),
            }
        })?;

        let mut out = format!("Results for the time: {}\n\n", baseline.captured_at);
        out.push_str(&render_report(&compare(&current_map(&hits), &baseline)));
        Ok(out)
    }

    /// Enumerates snapshot names under the query's identity container.
    pub async fn list(&self, filter: &SearchFilter) -> AppResult<Vec<String>> {
        Ok(self.store_for(filter).list_names().await?)
    }

    /// Runs the query and returns the description word-frequency tally.
    pub async fn popular_words(&mut self, filter: &SearchFilter) -> AppResult<Vec<(String, usize)>> {
        self.fetch_current(filter).await?;
        Ok(self.words.popular())
    }

    /// One provider call; zero matches is the fatal `EmptyResultSet`
    /// condition, never silently an empty report.
    async fn fetch_current(&mut self, filter: &SearchFilter) -> AppResult<Vec<RepoHit>> {
        let hits = self.provider.search(&filter.to_search_string()).await?;
        if hits.is_empty() {
            return Err(AppError::EmptyResultSet);
        }
        for hit in &hits {
            if let Some(description) = &hit.description {
                self.words.observe_description(description);
            }
        }
        Ok(hits)
    }

    fn store_for(&self, filter: &SearchFilter) -> SnapshotStore {
        let container = container_name(&filter.language, &filter.query, &filter.stars);
        self.backend.container(&container)
    }
}

fn current_map(hits: &[RepoHit]) -> HashMap<String, u64> {
    hits.iter()
        .map(|hit| (hit.full_name.clone(), hit.stargazers_count))
        .collect()
}
