use std::ops::Range;
use std::time::Instant;

use reqwest::Url;

use super::debouncer::Debouncer;
use crate::layout::Region;
use crate::search::{detail_path, detail_url};
use crate::suggestion::SuggestionItem;
use crate::worker::{SearchRequest, SearchResponse};

/// Where the widget is in its show/hide cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Nothing scheduled, nothing shown
    Idle,
    /// Debounce timer running
    Pending,
    /// Request dispatched, waiting for its response
    AwaitingResponse,
    /// Results popup visible
    ShowingResults,
}

/// Detail page chosen by activating a suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub artist_id: String,
    /// Origin-relative form, e.g. `/artist?id=42`
    pub path: String,
    /// Absolute URL of the detail page
    pub url: String,
}

/// Search-as-you-type widget state
#[derive(Debug)]
pub struct AutocompleteWidget {
    debouncer: Debouncer,
    /// Trimmed query waiting for the debounce timer
    pending_query: Option<String>,
    /// Id of the last request handed out
    last_request_id: u64,
    /// Id whose response may still be shown; cleared by empty input
    awaiting: Option<u64>,
    items: Vec<SuggestionItem>,
    visible: bool,
    selected: usize,
    detail_endpoint: Url,
}

impl AutocompleteWidget {
    /// Create a widget with the given quiet period and detail page endpoint
    pub fn new(debounce_ms: u64, detail_endpoint: Url) -> Self {
        Self {
            debouncer: Debouncer::new(debounce_ms),
            pending_query: None,
            last_request_id: 0,
            awaiting: None,
            items: Vec::new(),
            visible: false,
            selected: 0,
            detail_endpoint,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&SuggestionItem> {
        if self.visible {
            self.items.get(self.selected)
        } else {
            None
        }
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn phase(&self) -> WidgetPhase {
        if self.debouncer.is_pending() {
            WidgetPhase::Pending
        } else if self.awaiting.is_some() {
            WidgetPhase::AwaitingResponse
        } else if self.visible {
            WidgetPhase::ShowingResults
        } else {
            WidgetPhase::Idle
        }
    }

    /// Handle a change of the input text
    ///
    /// An empty (after trimming) query hides the results, cancels the timer
    /// and invalidates any request still in flight. Anything else restarts
    /// the debounce timer for the new text.
    pub fn on_input(&mut self, raw_text: &str, now: Instant) {
        let query = raw_text.trim();
        if query.is_empty() {
            self.hide();
            self.debouncer.cancel();
            self.pending_query = None;
            self.awaiting = None;
            return;
        }

        self.pending_query = Some(query.to_string());
        self.debouncer.schedule(now);
    }

    /// Fire the debounce timer if it is due
    ///
    /// Returns the request to dispatch, tagged with a fresh sequence number
    /// that becomes the only one whose response will be accepted.
    pub fn poll_debounce(&mut self, now: Instant) -> Option<SearchRequest> {
        if !self.debouncer.fire(now) {
            return None;
        }
        let query = self.pending_query.take()?;

        self.last_request_id = self.last_request_id.wrapping_add(1);
        self.awaiting = Some(self.last_request_id);

        Some(SearchRequest {
            query,
            request_id: self.last_request_id,
        })
    }

    /// Apply a worker response
    ///
    /// Responses for anything but the latest dispatched request are dropped.
    /// Returns whether the response was applied.
    pub fn apply_response(&mut self, response: SearchResponse) -> bool {
        if self.awaiting != Some(response.request_id) {
            log::debug!(
                "Discarding stale response {} (awaiting {:?})",
                response.request_id,
                self.awaiting
            );
            return false;
        }
        self.awaiting = None;

        match response.outcome {
            Ok(items) if !items.is_empty() => self.show(items),
            Ok(_) => self.hide(),
            Err(e) => {
                log::warn!("Search for {:?} failed: {}", response.query, e);
                self.hide();
            }
        }
        true
    }

    /// Hide the results and drop them
    pub fn hide(&mut self) {
        self.visible = false;
        self.items.clear();
        self.selected = 0;
    }

    fn show(&mut self, items: Vec<SuggestionItem>) {
        self.items = items;
        self.visible = true;
        self.selected = 0;
    }

    /// Escape hides the results regardless of focus
    pub fn on_escape(&mut self) {
        if self.visible {
            self.hide();
        }
    }

    /// Handle a left click on `region` (`None` = outside input and results)
    ///
    /// Clicking a row navigates; clicking outside hides; clicks on the
    /// input or the popup frame change nothing.
    pub fn on_click(&mut self, region: Option<Region>) -> Option<Navigation> {
        match region {
            Some(Region::ResultRow(index)) => self.activate(index),
            Some(Region::Input) | Some(Region::Results) => None,
            None => {
                if self.visible {
                    self.hide();
                }
                None
            }
        }
    }

    /// Navigation target for the row at `index`
    pub fn activate(&self, index: usize) -> Option<Navigation> {
        if !self.visible {
            return None;
        }
        let item = self.items.get(index)?;
        let url = detail_url(&self.detail_endpoint, &item.artist_id);
        Some(Navigation {
            artist_id: item.artist_id.clone(),
            path: detail_path(&url),
            url: url.to_string(),
        })
    }

    pub fn activate_selected(&self) -> Option<Navigation> {
        self.activate(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.visible && !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }

    pub fn select_previous(&mut self) {
        if self.visible && !self.items.is_empty() {
            self.selected = if self.selected == 0 {
                self.items.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Indices of the rows shown in a popup of `max_visible` lines
    ///
    /// The window starts at the top and slides just far enough to keep the
    /// selection on screen.
    pub fn visible_window(&self, max_visible: usize) -> Range<usize> {
        let max_visible = max_visible.max(1);
        let start = (self.selected + 1).saturating_sub(max_visible);
        let end = (start + max_visible).min(self.items.len());
        start..end
    }
}

#[cfg(test)]
#[path = "widget_state_tests.rs"]
mod widget_state_tests;
