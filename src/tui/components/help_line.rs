//! Bottom key-hint line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpContext {
    /// A list without filtering.
    List,
    /// The book list, which accepts `/`.
    FilterableList,
    /// Typing into the book filter.
    Filtering,
    Reading,
}

pub struct HelpLine {
    pub context: HelpContext,
}

impl HelpLine {
    pub fn text(&self) -> &'static str {
        match self.context {
            HelpContext::List => "enter: select • esc: back • q: quit",
            HelpContext::FilterableList => "enter: select • /: filter • esc: back • q: quit",
            HelpContext::Filtering => "type to filter • enter: select • esc: clear filter",
            HelpContext::Reading => "j/k/h/l: scroll • p/n: prev/next verse • esc: back • q: quit",
        }
    }
}

impl Component for HelpLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Rgb(0x62, 0x62, 0x62))),
            area,
        );
    }
}
