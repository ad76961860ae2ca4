use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click::handle_click;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text, now),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application without a selection
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.widget.on_escape(),
            KeyCode::Down => self.widget.select_next(),
            KeyCode::Up => self.widget.select_previous(),
            KeyCode::Enter => {
                if let Some(navigation) = self.widget.activate_selected() {
                    self.navigate(navigation);
                }
            }
            // Single-line input: never let the textarea open a new line
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                if self.textarea.input(key) {
                    self.on_text_changed(now);
                }
            }
        }
    }

    /// Handle bracketed paste: newlines are flattened into spaces
    pub fn handle_paste_event(&mut self, text: String, now: Instant) {
        let flattened = text.replace(['\r', '\n'], " ");
        if flattened.is_empty() {
            return;
        }
        self.textarea.insert_str(flattened);
        self.on_text_changed(now);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.regions, mouse.column, mouse.row);
            handle_click(self, region);
        }
    }

    fn on_text_changed(&mut self, now: Instant) {
        self.notice = None;
        let query = self.query().to_string();
        self.widget.on_input(&query, now);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
