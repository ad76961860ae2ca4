use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::widget::WidgetPhase;
use crate::widget::widget_render;

const HELP_TEXT: &str = " Esc hide · ↑↓ select · Enter open · Ctrl+C quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, help_area) = (layout[0], layout[2]);

        self.render_input(frame, input_area);
        self.render_help_line(frame, help_area);

        widget_render::render_popup(
            &self.widget,
            frame,
            input_area,
            self.max_visible,
            &mut self.regions,
        );
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        self.regions.input = Some(area);

        let border_color = match self.widget.phase() {
            WidgetPhase::Pending | WidgetPhase::AwaitingResponse => Color::Yellow,
            WidgetPhase::ShowingResults => Color::Cyan,
            WidgetPhase::Idle => Color::DarkGray,
        };
        if let Some(block) = self.textarea.block().cloned() {
            self.textarea
                .set_block(block.border_style(Style::default().fg(border_color)));
        }

        frame.render_widget(&self.textarea, area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(notice) => Line::from(Span::styled(
                format!(" {}", notice),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
