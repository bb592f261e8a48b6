//! # Passage View Component
//!
//! Scrollable reading pane for the current lookup result.
//!
//! The formatted text is cached per (passage revision, content width), so a
//! resize reflows the passage once and ordinary redraws reuse the cached
//! `Text`. Scroll position is reset whenever a different passage is shown.
//!
//! Verse blocks never shrink below the minimum text width, so on a narrow
//! pane the canvas is wider than the viewport and `h`/`l` pan sideways.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::text::Text;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::Passage;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::passage;

struct FormattedPassage {
    revision: u64,
    width: u16,
    text: Text<'static>,
    height: u16,
    /// Widest rendered line, in columns
    columns: u16,
}

/// Scroll and layout state for the reading pane.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct PassageViewState {
    pub scroll_state: ScrollViewState,
    cache: Option<FormattedPassage>,
    /// Last known viewport size (for scroll clamping between frames)
    pub viewport_height: u16,
    pub viewport_width: u16,
}

impl PassageViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_state = ScrollViewState::default();
    }

    fn content_height(&self) -> u16 {
        self.cache.as_ref().map_or(0, |c| c.height)
    }

    /// Canvas width: the pane's content width, or the widest line if wider.
    fn canvas_width(&self) -> u16 {
        self.cache
            .as_ref()
            .map_or(0, |c| c.columns.max(c.width))
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
        let max_x = self.canvas_width().saturating_sub(self.viewport_width);
        let current = self.scroll_state.offset();
        if current.y > max_y || current.x > max_x {
            self.scroll_state.set_offset(Position {
                x: current.x.min(max_x),
                y: current.y.min(max_y),
            });
        }
    }

    /// Reflow `passage` for `width` unless the cache already holds it.
    fn ensure_formatted(&mut self, passage: &Passage, width: u16) {
        let fresh = self
            .cache
            .as_ref()
            .is_some_and(|c| c.revision == passage.revision && c.width == width);
        if fresh {
            return;
        }
        if self
            .cache
            .as_ref()
            .is_some_and(|c| c.revision != passage.revision)
        {
            self.reset_scroll();
        }
        let text = passage::format(&passage.result, usize::from(width));
        let height = u16::try_from(text.height()).unwrap_or(u16::MAX);
        let columns = u16::try_from(text.width()).unwrap_or(u16::MAX);
        log::debug!(
            "Reflowed passage revision {} at width {} ({} rows, {} columns)",
            passage.revision,
            width,
            height,
            columns
        );
        self.cache = Some(FormattedPassage {
            revision: passage.revision,
            width,
            text,
            height,
            columns,
        });
    }
}

impl EventHandler for PassageViewState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
                self.scroll_state.scroll_up();
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
                self.scroll_state.scroll_down();
            }
            TuiEvent::CursorLeft | TuiEvent::InputChar('h') => self.scroll_state.scroll_left(),
            TuiEvent::CursorRight | TuiEvent::InputChar('l') => self.scroll_state.scroll_right(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::Home => self.scroll_state.scroll_to_top(),
            TuiEvent::End => {
                let max_y = self.content_height().saturating_sub(self.viewport_height);
                let x = self.scroll_state.offset().x;
                self.scroll_state.set_offset(Position { x, y: max_y });
            }
            _ => {}
        }
        self.clamp_scroll();
        None
    }
}

/// Transient render wrapper for the reading pane.
pub struct PassageView<'a> {
    state: &'a mut PassageViewState,
    passage: Option<&'a Passage>,
}

impl<'a> PassageView<'a> {
    pub fn new(state: &'a mut PassageViewState, passage: Option<&'a Passage>) -> Self {
        Self { state, passage }
    }
}

impl Component for PassageView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(passage) = self.passage else {
            return;
        };

        // Leave the last column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        self.state.ensure_formatted(passage, content_width);
        let canvas_width = self.state.canvas_width();
        // The horizontal scrollbar takes the bottom row when it shows
        let bar_rows = u16::from(canvas_width > area.width);
        self.state.viewport_height = area.height.saturating_sub(bar_rows);
        self.state.viewport_width = content_width;
        self.state.clamp_scroll();

        let Some(cached) = self.state.cache.as_ref() else {
            return;
        };

        let mut scroll_view = ScrollView::new(Size::new(canvas_width, cached.height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Automatic);
        scroll_view.render_widget(
            Paragraph::new(cached.text.clone()),
            Rect::new(0, 0, canvas_width, cached.height),
        );

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
