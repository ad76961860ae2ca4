//! Tests for results popup rendering

use super::*;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use insta::assert_snapshot;

use crate::search::resolve_url;
use crate::test_utils::test_helpers::items;
use crate::worker::SearchResponse;

const TEST_WIDTH: u16 = 60;
const TEST_HEIGHT: u16 = 15;

fn showing(entries: &[(&str, &str, &str)]) -> AutocompleteWidget {
    let start = Instant::now();
    let mut widget = AutocompleteWidget::new(300, resolve_url("http://localhost:8080", "/artist").unwrap());
    widget.on_input("abc", start);
    let request = widget.poll_debounce(start + Duration::from_millis(300)).unwrap();
    widget.apply_response(SearchResponse {
        request_id: request.request_id,
        query: request.query,
        outcome: Ok(items(entries)),
    });
    widget
}

fn render(widget: &AutocompleteWidget, input_area: Rect, max_visible: usize) -> (Buffer, LayoutRegions) {
    render_sized(widget, TEST_WIDTH, TEST_HEIGHT, input_area, max_visible)
}

fn render_sized(
    widget: &AutocompleteWidget,
    width: u16,
    height: u16,
    input_area: Rect,
    max_visible: usize,
) -> (Buffer, LayoutRegions) {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut regions = LayoutRegions::new();
    terminal
        .draw(|f| render_popup(widget, f, input_area, max_visible, &mut regions))
        .unwrap();
    (terminal.backend().buffer().clone(), regions)
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
        .collect()
}

fn area_text(buffer: &Buffer, area: Rect) -> String {
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered_artists(count: usize) -> Vec<(String, String, String)> {
    (0..count)
        .map(|i| (format!("Artist {:02}", i), "artist".to_string(), i.to_string()))
        .collect()
}

fn as_refs(entries: &[(String, String, String)]) -> Vec<(&str, &str, &str)> {
    entries
        .iter()
        .map(|(a, b, c)| (a.as_str(), b.as_str(), c.as_str()))
        .collect()
}

fn input_area() -> Rect {
    Rect::new(0, 0, TEST_WIDTH, 3)
}

#[test]
fn test_hidden_widget_draws_nothing() {
    let widget = AutocompleteWidget::new(300, resolve_url("http://localhost:8080", "/artist").unwrap());

    let (buffer, regions) = render(&widget, input_area(), 10);

    assert_eq!(regions.results, None);
    assert!(row_text(&buffer, 4).trim().is_empty());
}

#[test]
fn test_single_row_shows_text_and_tag() {
    let widget = showing(&[("Song A", "TRACK", "42")]);

    let (buffer, regions) = render(&widget, input_area(), 10);

    assert!(row_text(&buffer, 3).contains("1 match"));
    assert!(row_text(&buffer, 4).contains("► Song A [TRACK]"));
    assert_eq!(regions.results.map(|r| (r.x, r.y)), Some((2, 3)));
    assert_eq!(regions.first_row, 0);
    assert_eq!(regions.row_count, 1);
}

#[test]
fn test_rows_in_response_order_with_aligned_tags() {
    let widget = showing(&[("Queen", "artist/band", "1"), ("Freddie Mercury", "member", "1")]);

    let (buffer, regions) = render(&widget, input_area(), 10);

    assert!(row_text(&buffer, 3).contains("2 matches"));
    assert!(row_text(&buffer, 4).contains("► Queen           [artist/band]"));
    assert!(row_text(&buffer, 5).contains("  Freddie Mercury [member]"));
    assert_eq!(regions.row_count, 2);
}

#[test]
fn test_control_characters_are_stripped() {
    let widget = showing(&[("Evil\u{1b}[31mRed\u{7}", "ty\npe", "1")]);

    let (buffer, _) = render(&widget, input_area(), 10);

    let row = row_text(&buffer, 4);
    assert!(row.contains("Evil[31mRed [type]"));
    assert!(!row.contains('\u{1b}'));
}

#[test]
fn test_long_list_scrolls_with_selection() {
    let entries = numbered_artists(15);
    let mut widget = showing(&as_refs(&entries));
    for _ in 0..7 {
        widget.select_next();
    }

    let (buffer, regions) = render(&widget, input_area(), 5);

    assert_eq!(regions.first_row, 3);
    assert_eq!(regions.row_count, 5);
    assert!(row_text(&buffer, 4).contains("  Artist 03"));
    assert!(row_text(&buffer, 8).contains("► Artist 07"));
}

#[test]
fn test_no_room_below_input_skips_popup() {
    let widget = showing(&[("Song A", "TRACK", "42")]);
    let bottom_input = Rect::new(0, TEST_HEIGHT - 3, TEST_WIDTH, 3);

    let (_, regions) = render(&widget, bottom_input, 10);

    assert_eq!(regions.results, None);
    assert_eq!(regions.row_count, 0);
}

#[test]
fn test_sanitize_keeps_unicode() {
    assert_eq!(sanitize_for_terminal("Björk\t"), "Björk");
    assert_eq!(sanitize_for_terminal("Sigur Rós"), "Sigur Rós");
}

#[test]
fn test_short_terminal_keeps_selection_drawn() {
    let entries = numbered_artists(8);
    let mut widget = showing(&as_refs(&entries));
    for _ in 0..6 {
        widget.select_next();
    }
    // Three lines below the input: one row plus the border
    let input = Rect::new(0, 9, TEST_WIDTH, 3);

    let (buffer, regions) = render(&widget, input, 10);

    assert_eq!(widget.selected_index(), 6);
    assert_eq!(regions.first_row, 6);
    assert_eq!(regions.row_count, 1);
    assert!(row_text(&buffer, 13).contains("► Artist 06"));
}

#[test]
fn test_short_terminal_rows_match_available_space() {
    let entries = numbered_artists(8);
    let widget = showing(&as_refs(&entries));
    let input = Rect::new(0, 8, TEST_WIDTH, 3);

    let (buffer, regions) = render(&widget, input, 10);

    assert_eq!(regions.results.map(|r| r.height), Some(4));
    assert_eq!(regions.first_row, 0);
    assert_eq!(regions.row_count, 2);
    assert!(row_text(&buffer, 12).contains("► Artist 00"));
    assert!(row_text(&buffer, 13).contains("  Artist 01"));
}

#[test]
fn test_very_long_text_still_draws_capped_popup() {
    let long_text = "x".repeat(70_000);
    let widget = showing(&[(long_text.as_str(), "artist", "1")]);

    let (_, regions) = render(&widget, input_area(), 10);

    let popup = regions.results.expect("popup drawn");
    assert_eq!(popup.width, TEST_WIDTH - 4);
    assert_eq!(regions.row_count, 1);
}

#[test]
fn snapshot_single_row_popup() {
    let widget = showing(&[("Song A", "TRACK", "42")]);
    let input = Rect::new(0, 0, 30, 3);

    let (buffer, regions) = render_sized(&widget, 30, 6, input, 10);

    let popup = regions.results.expect("popup drawn");
    assert_snapshot!(area_text(&buffer, popup), @r"
    ┌ 1 match ───────┐
    │► Song A [TRACK]│
    └────────────────┘
    ");
}
