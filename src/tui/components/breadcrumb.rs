//! # Breadcrumb Component
//!
//! One line showing the selection path, e.g.
//! `📍 Old Testament > Genesis > Chapter 1 > Verse 1`. Truncated with an
//! ellipsis when the terminal is too narrow.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

const PREFIX: &str = "📍 ";
const SEPARATOR: &str = " > ";
const ELLIPSIS: &str = "...";

const STYLE: Style = Style::new()
    .fg(Color::Rgb(0xFF, 0xA5, 0x00))
    .add_modifier(Modifier::BOLD);

pub struct Breadcrumb<'a> {
    pub crumbs: &'a [String],
}

impl<'a> Breadcrumb<'a> {
    pub fn new(crumbs: &'a [String]) -> Self {
        Self { crumbs }
    }
}

impl Component for Breadcrumb<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = fit_breadcrumb(self.crumbs, usize::from(area.width));
        frame.render_widget(Span::styled(text, STYLE), area);
    }
}

/// The breadcrumb text, cut to at most `width` display columns.
///
/// Returns an empty string when there is nothing selected yet.
pub fn fit_breadcrumb(crumbs: &[String], width: usize) -> String {
    if crumbs.is_empty() {
        return String::new();
    }
    let full = format!("{PREFIX}{}", crumbs.join(SEPARATOR));
    if full.width() <= width {
        return full;
    }

    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for c in full.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if width >= ELLIPSIS.width() {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_path_renders_nothing() {
        assert_eq!(fit_breadcrumb(&[], 80), "");
    }

    #[test]
    fn test_full_path_fits() {
        let path = crumbs(&["Old Testament", "Genesis", "Chapter 1", "Verse 1"]);
        assert_eq!(
            fit_breadcrumb(&path, 80),
            "📍 Old Testament > Genesis > Chapter 1 > Verse 1"
        );
    }

    #[test]
    fn test_narrow_width_truncates_with_ellipsis() {
        let path = crumbs(&["New Testament", "1 Thessalonians", "Chapter 4"]);
        let text = fit_breadcrumb(&path, 20);
        assert!(text.ends_with("..."));
        assert!(text.width() <= 20);
        assert!(text.starts_with("📍 New"));
    }

    #[test]
    fn test_renders_orange_bold() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let path = crumbs(&["Old Testament", "Genesis"]);
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|f| Breadcrumb::new(&path).render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let cell = &buffer[(5, 0)];
        assert_eq!(cell.fg, Color::Rgb(0xFF, 0xA5, 0x00));
        assert!(cell.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_tiny_width() {
        let path = crumbs(&["Old Testament"]);
        assert!(fit_breadcrumb(&path, 2).width() <= 2);
    }
}
