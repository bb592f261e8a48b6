//! # StatusLine Component
//!
//! One line under the breadcrumb: a spinner while a lookup is in flight,
//! otherwise the last error (if any).

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// Braille spinner frames, advanced at ~12 fps by the event loop.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusLine {
    /// Reference being fetched, if any. Takes priority over `error`.
    pub loading: Option<String>,
    pub error: Option<String>,
    pub spinner_frame: usize,
}

impl StatusLine {
    fn line(&self) -> Line<'static> {
        if let Some(reference) = &self.loading {
            let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            return Line::from(vec![
                Span::styled(
                    format!("{frame} "),
                    Style::default().fg(Color::Rgb(0x7D, 0x56, 0xF4)),
                ),
                Span::raw(format!("Loading {reference}...")),
            ]);
        }
        if let Some(error) = &self.error {
            return Line::styled(
                format!("Error: {error}"),
                Style::default()
                    .fg(Color::Rgb(0xFF, 0x00, 0x00))
                    .add_modifier(Modifier::BOLD),
            );
        }
        Line::default()
    }
}

impl Component for StatusLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(status: &StatusLine) -> String {
        status
            .line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_loading_shows_spinner_and_reference() {
        let status = StatusLine {
            loading: Some("John 3:16".to_string()),
            error: Some("stale".to_string()),
            spinner_frame: 11,
        };
        let text = text(&status);
        assert!(text.starts_with(SPINNER_FRAMES[1]));
        assert!(text.contains("Loading John 3:16..."));
        assert!(!text.contains("stale"));
    }

    #[test]
    fn test_error_line() {
        let status = StatusLine {
            loading: None,
            error: Some("API returned status 500".to_string()),
            spinner_frame: 0,
        };
        assert_eq!(text(&status), "Error: API returned status 500");
    }

    #[test]
    fn test_idle_is_blank() {
        let status = StatusLine {
            loading: None,
            error: None,
            spinner_frame: 0,
        };
        assert_eq!(text(&status), "");
    }
}
