//! HTML rendering of the suggestion list
//!
//! Item text and type come straight from the search backend and are always
//! escaped; they are never interpolated into markup as-is.

use reqwest::Url;

use crate::search::{detail_path, detail_url};
use crate::suggestion::SuggestionItem;

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// One `sugg-item` option row
pub fn render_suggestion_html(item: &SuggestionItem, detail_endpoint: &Url) -> String {
    let href = detail_path(&detail_url(detail_endpoint, &item.artist_id));
    format!(
        r#"<div class="sugg-item" role="option" data-href="{}"><span>{}</span> <span class="sugg-tag">{}</span></div>"#,
        escape_html(&href),
        escape_html(&item.text),
        escape_html(&item.kind)
    )
}

/// All rows, one per line, in response order
pub fn render_suggestions_html(items: &[SuggestionItem], detail_endpoint: &Url) -> String {
    items
        .iter()
        .map(|item| render_suggestion_html(item, detail_endpoint))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
