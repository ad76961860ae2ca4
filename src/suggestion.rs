//! Suggestion items returned by the search endpoint

use serde::{Deserialize, Deserializer};

/// A single search match: display text, a category tag and the artist it leads to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionItem {
    #[serde(default)]
    pub text: String,
    /// Category tag shown next to the text ("artist", "member", "TRACK", ...)
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(rename = "artistId", deserialize_with = "artist_id_as_string")]
    pub artist_id: String,
}

impl SuggestionItem {
    pub fn new(text: impl Into<String>, kind: impl Into<String>, artist_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
            artist_id: artist_id.into(),
        }
    }
}

/// Backends disagree on whether ids are strings or integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawArtistId {
    Text(String),
    Number(serde_json::Number),
}

fn artist_id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawArtistId::deserialize(deserializer)? {
        RawArtistId::Text(id) => id,
        RawArtistId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
