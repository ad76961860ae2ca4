use reqwest::Url;

use crate::error::AppError;

/// Resolve `path` against `base`
///
/// Absolute paths replace the base path, so `/api/search` against
/// `http://host/app/` yields `http://host/api/search`.
pub fn resolve_url(base: &str, path: &str) -> Result<Url, AppError> {
    let invalid = |url: &str, reason: String| AppError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    let base_url = Url::parse(base).map_err(|e| invalid(base, e.to_string()))?;
    if base_url.cannot_be_a_base() {
        return Err(invalid(base, "cannot be used as a base URL".to_string()));
    }
    base_url.join(path).map_err(|e| invalid(path, e.to_string()))
}

/// `<endpoint>?q=<query>` with the query form-encoded
pub fn search_url(endpoint: &Url, query: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().append_pair("q", query);
    url
}

/// `<detail endpoint>?id=<artist id>` with the id form-encoded
pub fn detail_url(detail_endpoint: &Url, artist_id: &str) -> Url {
    let mut url = detail_endpoint.clone();
    url.query_pairs_mut().append_pair("id", artist_id);
    url
}

/// Origin-relative form of a URL: `/artist?id=42`
pub fn detail_path(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
#[path = "urls_tests.rs"]
mod urls_tests;
