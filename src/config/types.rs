// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_ENDPOINT: &str = "/api/search";
pub const DEFAULT_DETAIL_PATH: &str = "/artist";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_VISIBLE: usize = 10;

/// Search endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Origin every relative path below is resolved against
    pub base_url: String,
    /// Path of the search endpoint, queried as `<endpoint>?q=<query>`
    pub endpoint: String,
    /// Path of the detail page, opened as `<detail_path>?id=<artistId>`
    pub detail_path: String,
    /// Quiet period after the last keystroke before a search is sent
    pub debounce_ms: u64,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            detail_path: DEFAULT_DETAIL_PATH.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Results popup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown at once; longer result lists scroll with the selection
    pub max_visible: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}
