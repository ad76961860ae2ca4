//! Results popup rendering
//!
//! Draws the suggestion rows directly under the input field and records the
//! popup's position for mouse hit-testing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::AutocompleteWidget;
use crate::layout::LayoutRegions;
use crate::widgets::popup;

// Results popup display constants
const MAX_POPUP_WIDTH: u16 = 70;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_BORDER_WIDTH: u16 = 2;
const POPUP_OFFSET_X: u16 = 2;
const SELECTION_MARKER_WIDTH: usize = 2;
const TAG_SPACING: usize = 1;

/// Drop control characters so backend text cannot move the cursor or
/// restyle the terminal
pub fn sanitize_for_terminal(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Render the results popup below the input field
///
/// Updates `regions` with what was drawn; a hidden widget (or no room
/// under the input) leaves no popup region behind.
pub fn render_popup(
    widget: &AutocompleteWidget,
    frame: &mut Frame,
    input_area: Rect,
    max_visible: usize,
    regions: &mut LayoutRegions,
) {
    regions.clear_results();
    if !widget.is_visible() || widget.items().is_empty() {
        return;
    }

    // Rows that fit between the input and the bottom of the frame
    let space_below = frame.area().bottom().saturating_sub(input_area.bottom());
    let fitting_rows = max_visible.min(space_below.saturating_sub(POPUP_BORDER_HEIGHT) as usize);
    if fitting_rows == 0 {
        return;
    }

    let window = widget.visible_window(fitting_rows);
    let rows: Vec<(String, String)> = widget.items()[window.clone()]
        .iter()
        .map(|item| {
            (
                sanitize_for_terminal(&item.text),
                format!("[{}]", sanitize_for_terminal(&item.kind)),
            )
        })
        .collect();

    let max_text_width = rows.iter().map(|(text, _)| text.width()).max().unwrap_or(0);
    let max_tag_width = rows.iter().map(|(_, tag)| tag.width()).max().unwrap_or(0);
    let content_width = SELECTION_MARKER_WIDTH + max_text_width + TAG_SPACING + max_tag_width;

    let popup_width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_WIDTH)
        .min(MAX_POPUP_WIDTH);
    let popup_height = u16::try_from(rows.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);
    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height <= POPUP_BORDER_HEIGHT || popup_area.width <= POPUP_BORDER_WIDTH {
        return;
    }

    let drawn = rows.len();
    let list_items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(offset, (text, tag))| {
            let padding = " ".repeat(max_text_width.saturating_sub(text.width()));
            let line = if window.start + offset == widget.selected_index() {
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}", text, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {}", tag),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", text, padding),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(
                        format!(" {}", tag),
                        Style::default().fg(Color::Yellow).bg(Color::Black),
                    ),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    let total = widget.items().len();
    let title = if total == 1 {
        " 1 match ".to_string()
    } else {
        format!(" {} matches ", total)
    };

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    regions.results = Some(popup_area);
    regions.first_row = window.start;
    regions.row_count = drawn;
}

#[cfg(test)]
#[path = "widget_render_tests.rs"]
mod widget_render_tests;
