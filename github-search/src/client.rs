//! Search client facade w/o async-trait or dynamic trait objects.
//!
//! `SearchProvider` is an enum with concrete implementations: the real
//! GitHub client and a fixed-result variant for tests and offline runs.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::errors::{ProviderError, ProviderResult};
use crate::types::{RepoHit, SearchConfig, SearchResponse};

/// GitHub REST search client.
#[derive(Debug, Clone)]
pub struct GitHubSearchClient {
    http: Client,
    base_api: String,
}

impl GitHubSearchClient {
    /// Constructs a client from generic config. The token, when present, is
    /// attached as a default `Bearer` header.
    pub fn from_config(cfg: &SearchConfig) -> ProviderResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &cfg.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ProviderError::Config(format!("invalid token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent("starwatch/0.1")
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_api: cfg.base_api.clone(),
        })
    }

    /// Runs one search, sorted by stars, single result page.
    pub async fn search(&self, query: &str) -> ProviderResult<Vec<RepoHit>> {
        let url = format!("{}/search/repositories", self.base_api);
        info!("Request to GitHub: {}", query);

        let resp: SearchResponse = self
            .http
            .get(url)
            .query(&[("q", query), ("sort", "stars")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("GitHub returned {} repositories", resp.items.len());
        Ok(resp.items)
    }
}

/// Concrete search provider (enum-dispatch).
#[derive(Debug, Clone)]
pub enum SearchProvider {
    GitHub(GitHubSearchClient),
    /// Canned results, for tests and offline runs.
    Fixed(Vec<RepoHit>),
}

impl SearchProvider {
    /// Constructs the real GitHub-backed provider.
    pub fn github(cfg: &SearchConfig) -> ProviderResult<Self> {
        Ok(Self::GitHub(GitHubSearchClient::from_config(cfg)?))
    }

    /// Runs one search and returns the ordered result page.
    pub async fn search(&self, query: &str) -> ProviderResult<Vec<RepoHit>> {
        match self {
            Self::GitHub(c) => c.search(query).await,
            Self::Fixed(hits) => {
                debug!("Fixed provider serving {} hits for '{}'", hits.len(), query);
                Ok(hits.clone())
            }
        }
    }
}
