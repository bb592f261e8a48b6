//! # TitleBar Component
//!
//! Top line of the screen: application name plus the active translation.
//!
//! Stateless. It receives everything as props, so tests build one with a
//! literal and render it into a `TestBackend`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const TITLE: &str = "📖 Bible Reader";

/// Top title bar.
///
/// # Props
///
/// - `translation`: translation code requested from the lookup service
///   (e.g. "kjv"); hidden when empty
pub struct TitleBar {
    pub translation: String,
}

impl TitleBar {
    pub fn new(translation: String) -> Self {
        Self { translation }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_style = Style::default()
            .fg(Color::Rgb(0xFA, 0xFA, 0xFA))
            .bg(Color::Rgb(0x7D, 0x56, 0xF4))
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled(format!(" {TITLE} "), title_style)];
        if !self.translation.is_empty() {
            spans.push(Span::styled(
                format!("  {}", self.translation.to_uppercase()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
