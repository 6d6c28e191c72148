//! Runtime configuration from environment variables and CLI overrides.

use github_search::SearchConfig;

use crate::error::{AppError, AppResult};

const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";

/// Invocation configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string (`MONGO_URL`, `--mongo-url`).
    pub mongo_url: String,
    /// Search provider settings (`GITHUB_TOKEN`, `GITHUB_API`).
    pub search: SearchConfig,
    /// Run against the in-memory backend instead of MongoDB.
    pub use_memory: bool,
}

impl AppConfig {
    /// Builds the config from the process environment, applying CLI
    /// overrides where given.
    pub fn load(mongo_url_override: Option<&str>, use_memory: bool) -> Self {
        let mut search = SearchConfig::new_default();
        search.token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        if let Ok(base) = std::env::var("GITHUB_API") {
            search.base_api = base;
        }

        let mongo_url = mongo_url_override
            .map(ToOwned::to_owned)
            .or_else(|| std::env::var("MONGO_URL").ok())
            .unwrap_or_else(|| DEFAULT_MONGO_URL.to_owned());

        Self {
            mongo_url,
            search,
            use_memory,
        }
    }

    /// Validates config values.
    pub fn validate(&self) -> AppResult<()> {
        if !self.use_memory && self.mongo_url.trim().is_empty() {
            return Err(AppError::Config("mongo_url is empty".into()));
        }
        if self.search.base_api.trim().is_empty() {
            return Err(AppError::Config("search base_api is empty".into()));
        }
        Ok(())
    }
}
