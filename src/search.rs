//! Search module
//!
//! HTTP access to the search endpoint: URL building, request dispatch and
//! decoding of the JSON suggestion list.

mod client;
mod urls;

pub use client::{SearchBackend, SearchClient, parse_suggestions};
pub use urls::{detail_path, detail_url, resolve_url, search_url};
