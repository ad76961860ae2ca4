use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use crate::config::Config;
use crate::error::AppError;
use crate::layout::LayoutRegions;
use crate::search::resolve_url;
use crate::widget::{AutocompleteWidget, Navigation};
use crate::worker::{SearchRequest, SearchResponse};

/// Longest the event loop waits for input before checking the worker again
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub textarea: TextArea<'static>,
    pub widget: AutocompleteWidget,
    pub regions: LayoutRegions,
    pub max_visible: usize,
    /// One-off message for the help line (config warnings)
    pub notice: Option<String>,
    pub navigation: Option<Navigation>,
    pub should_quit: bool,
    request_tx: Option<UnboundedSender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
}

impl App {
    /// Create a new App from configuration
    ///
    /// Fails only when the configured base URL or detail path cannot form a
    /// valid URL.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Artist, member, location or date");

        let detail_endpoint = resolve_url(&config.search.base_url, &config.search.detail_path)?;

        Ok(Self {
            textarea,
            widget: AutocompleteWidget::new(config.search.debounce_ms, detail_endpoint),
            regions: LayoutRegions::new(),
            max_visible: config.display.max_visible.max(1),
            notice: None,
            navigation: None,
            should_quit: false,
            request_tx: None,
            response_rx: None,
        })
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Drop the request sender so the worker thread can exit
    pub fn close_channels(&mut self) {
        self.request_tx = None;
        self.response_rx = None;
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Detail page chosen before quitting, if any
    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Advance timers and apply finished searches
    ///
    /// Called once per event loop iteration, whether or not input arrived.
    pub fn tick(&mut self, now: Instant) {
        self.drain_responses();

        if let Some(request) = self.widget.poll_debounce(now) {
            self.dispatch(request);
        }
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.widget
            .debouncer()
            .remaining(now)
            .map_or(MAX_POLL_INTERVAL, |remaining| remaining.min(MAX_POLL_INTERVAL))
    }

    fn dispatch(&mut self, request: SearchRequest) {
        let Some(tx) = &self.request_tx else {
            log::debug!("No search worker, dropping request {}", request.request_id);
            return;
        };

        log::debug!("Sending search {} for {:?}", request.request_id, request.query);
        if tx.send(request).is_err() {
            log::warn!("Search worker is gone, searches disabled");
            self.request_tx = None;
        }
    }

    fn drain_responses(&mut self) {
        let Some(rx) = &self.response_rx else {
            return;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    self.widget.apply_response(response);
                }
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    return;
                }
            }
        }
    }

    /// Record the chosen detail page and stop the event loop
    pub(super) fn navigate(&mut self, navigation: Navigation) {
        log::debug!("Navigating to {}", navigation.url);
        self.navigation = Some(navigation);
        self.should_quit = true;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
