//! Verse lookup → ratatui `Text` formatter.
//!
//! Pure functions: the same result and width always give the same text, so
//! the reading pane can simply re-run [`format`] after a resize.
//!
//! ```text
//! John 3:16                           ← reference (yellow, bold, underlined)
//!
//! Translation: King James Version
//!
//! ╭──────────────────────────────╮
//! │                              │
//! │  16 For God so loved the     │    ← one block per verse
//! │  world, that he gave ...     │
//! │                              │
//! ╰──────────────────────────────╯
//!
//! Note: Public Domain                 ← translator note (dim)
//! ```

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::lookup::FetchResult;

/// Border (2) + horizontal padding (4) around each verse block.
pub const DECORATION_WIDTH: usize = 6;
/// Text never wraps narrower than this, however small the terminal.
pub const MIN_TEXT_WIDTH: usize = 40;
/// Blank columns between the border and the text on each side.
const PAD_H: usize = 2;

const VERSE_COLOR: Color = Color::Rgb(0x04, 0xB5, 0x75);
const REFERENCE_COLOR: Color = Color::Rgb(0xFF, 0xFF, 0x00);
const NOTE_COLOR: Color = Color::Rgb(0x62, 0x62, 0x62);

/// Usable text width for a pane `target_width` columns wide.
pub fn text_width(target_width: usize) -> usize {
    target_width
        .saturating_sub(DECORATION_WIDTH)
        .max(MIN_TEXT_WIDTH)
}

/// Greedy whitespace word wrap.
///
/// Tokens are split on runs of whitespace and re-joined with single spaces.
/// No line exceeds `width` unless it holds a single longer word, which is
/// kept whole on its own line. Never hyphenates.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![normalized];
    }

    let options = textwrap::Options::new(width)
        .break_words(false)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
        .word_splitter(textwrap::WordSplitter::NoHyphenation)
        .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);

    textwrap::wrap(&normalized, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// Lay out a lookup result for a pane `target_width` columns wide.
pub fn format(result: &FetchResult, target_width: usize) -> Text<'static> {
    let width = text_width(target_width);
    let mut lines: Vec<Line<'static>> = Vec::new();

    let reference = result.reference.trim();
    if !reference.is_empty() {
        let style = Style::default()
            .fg(REFERENCE_COLOR)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        lines.extend(
            wrap_text(reference, width)
                .into_iter()
                .map(|l| Line::styled(l, style)),
        );
        lines.push(Line::default());
    }

    let translation = result.translation_name.trim();
    if !translation.is_empty() {
        lines.extend(
            wrap_text(&format!("Translation: {translation}"), width)
                .into_iter()
                .map(Line::raw),
        );
        lines.push(Line::default());
    }

    if !result.verses.is_empty() {
        for verse in &result.verses {
            let body = wrap_text(&format!("{} {}", verse.verse, verse.text), width);
            lines.extend(bordered_block(&body, width));
            lines.push(Line::default());
        }
    } else if !result.text.trim().is_empty() {
        lines.extend(bordered_block(&wrap_text(&result.text, width), width));
        lines.push(Line::default());
    }

    if let Some(note) = result.note() {
        let style = Style::default().fg(NOTE_COLOR);
        lines.extend(
            wrap_text(&format!("Note: {note}"), width)
                .into_iter()
                .map(|l| Line::styled(l, style)),
        );
    }

    Text::from(lines)
}

/// Rounded border with one blank row and two blank columns of padding.
fn bordered_block(body: &[String], width: usize) -> Vec<Line<'static>> {
    let style = Style::default().fg(VERSE_COLOR);
    let inner = width + PAD_H * 2;
    let rule = "─".repeat(inner);
    let blank_row = Line::styled(format!("│{}│", " ".repeat(inner)), style);

    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::styled(format!("╭{rule}╮"), style));
    lines.push(blank_row.clone());
    for text in body {
        let fill = width.saturating_sub(text.width());
        lines.push(Line::from(vec![
            Span::styled(format!("│{}", " ".repeat(PAD_H)), style),
            Span::styled(text.clone(), style),
            Span::styled(format!("{}│", " ".repeat(fill + PAD_H)), style),
        ]));
    }
    lines.push(blank_row);
    lines.push(Line::styled(format!("╰{rule}╯"), style));
    lines
}
