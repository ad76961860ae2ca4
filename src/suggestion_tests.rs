//! Tests for SuggestionItem decoding

use super::*;
use proptest::prelude::*;

#[test]
fn test_decodes_string_artist_id() {
    let item: SuggestionItem =
        serde_json::from_str(r#"{"text":"Song A","type":"TRACK","artistId":"42"}"#).unwrap();
    assert_eq!(item, SuggestionItem::new("Song A", "TRACK", "42"));
}

#[test]
fn test_decodes_integer_artist_id() {
    let item: SuggestionItem =
        serde_json::from_str(r#"{"text":"Queen","type":"artist/band","artistId":1}"#).unwrap();
    assert_eq!(item.artist_id, "1");
    assert_eq!(item.kind, "artist/band");
}

#[test]
fn test_missing_text_and_type_default_to_empty() {
    let item: SuggestionItem = serde_json::from_str(r#"{"artistId":"7"}"#).unwrap();
    assert_eq!(item.text, "");
    assert_eq!(item.kind, "");
}

#[test]
fn test_missing_artist_id_is_rejected() {
    let result = serde_json::from_str::<SuggestionItem>(r#"{"text":"Orphan","type":"member"}"#);
    assert!(result.is_err());
}

#[test]
fn test_boolean_artist_id_is_rejected() {
    let result = serde_json::from_str::<SuggestionItem>(r#"{"text":"x","type":"y","artistId":true}"#);
    assert!(result.is_err());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let item: SuggestionItem = serde_json::from_str(
        r#"{"text":"Björk","type":"artist/band","artistId":107,"score":0.9}"#,
    )
    .unwrap();
    assert_eq!(item.text, "Björk");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_integer_ids_round_trip_as_decimal(id in 0u64..1_000_000u64) {
        let json = format!(r#"{{"text":"t","type":"k","artistId":{}}}"#, id);
        let item: SuggestionItem = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(item.artist_id, id.to_string());
    }
}
