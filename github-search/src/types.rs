//! Request/response models for the search endpoint.

use serde::Deserialize;

/// Runtime configuration for the search client.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// API base, e.g. `https://api.github.com`.
    pub base_api: String,
    /// Optional personal access token; searches work unauthenticated at a
    /// lower rate limit.
    pub token: Option<String>,
    /// Bounded request timeout in seconds.
    pub timeout_secs: u64,
}

impl SearchConfig {
    pub fn new_default() -> Self {
        Self {
            base_api: "https://api.github.com".to_owned(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// User-facing query parameters.
///
/// All three fields feed the snapshot identity; only `language` and `stars`
/// feed the search string itself (the free-text field has always been an
/// identity-only discriminator).
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Language qualifier, e.g. `rust`. Empty = any language.
    pub language: String,
    /// Free-text query component.
    pub query: String,
    /// Star-range qualifier, e.g. `>1000` or `500..1000`.
    pub stars: String,
}

impl SearchFilter {
    /// Builds the GitHub search string, `language:<L> stars:<range>`.
    pub fn to_search_string(&self) -> String {
        let mut q = String::new();
        if !self.language.is_empty() {
            q.push_str(&format!("language:{} ", self.language));
        }
        q.push_str(&format!("stars:{}", self.stars));
        q
    }
}

/// One repository from the search result page.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepoHit {
    /// `owner/name`, unique within a result page.
    pub full_name: String,
    pub stargazers_count: u64,
    #[serde(default)]
    pub description: Option<String>,
}

/// Wire shape of `GET /search/repositories`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub items: Vec<RepoHit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_string_with_language() {
        let filter = SearchFilter {
            language: "go".into(),
            query: String::new(),
            stars: ">1000".into(),
        };
        assert_eq!(filter.to_search_string(), "language:go stars:>1000");
    }

    #[test]
    fn search_string_without_language() {
        let filter = SearchFilter {
            language: String::new(),
            query: "web".into(),
            stars: "500..1000".into(),
        };
        // Free text participates in identity only, not in the search string.
        assert_eq!(filter.to_search_string(), "stars:500..1000");
    }
}
