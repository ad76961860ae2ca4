//! Search endpoint client
//!
//! One GET per query; the body is expected to be a JSON array of
//! suggestion objects.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use serde_json::Value;

use super::urls::{resolve_url, search_url};
use crate::config::SearchConfig;
use crate::error::{AppError, SearchError};
use crate::suggestion::SuggestionItem;

/// Anything that can answer a query with a suggestion list
///
/// The worker runs requests through this seam so tests can substitute a
/// scripted backend for the HTTP client.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, SearchError>> + Send;
}

/// HTTP client for the search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client for `config.base_url` + `config.endpoint`
    pub fn new(config: &SearchConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::HttpClient(e.to_string()))?;
        Self::with_http(config, http)
    }

    /// Build a client around an already configured `reqwest::Client`
    pub fn with_http(config: &SearchConfig, http: reqwest::Client) -> Result<Self, AppError> {
        let endpoint = resolve_url(&config.base_url, &config.endpoint)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run one search
    pub async fn fetch(&self, query: &str) -> Result<Vec<SuggestionItem>, SearchError> {
        fetch_url(&self.http, search_url(&self.endpoint, query)).await
    }
}

impl SearchBackend for SearchClient {
    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SuggestionItem>, SearchError>> + Send {
        let http = self.http.clone();
        let url = search_url(&self.endpoint, query);
        async move { fetch_url(&http, url).await }
    }
}

async fn fetch_url(http: &reqwest::Client, url: Url) -> Result<Vec<SuggestionItem>, SearchError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| SearchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status {
            code: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::Network(e.to_string()))?;

    parse_suggestions(&body)
}

/// Decode a search response body
///
/// Anything other than a JSON array decodes to an empty list. Array
/// elements that are not suggestion objects are skipped.
pub fn parse_suggestions(body: &str) -> Result<Vec<SuggestionItem>, SearchError> {
    let value: Value = serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    let Value::Array(entries) = value else {
        log::debug!("Search response is not an array, treating as no matches");
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<SuggestionItem>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                log::debug!("Skipping malformed suggestion: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
