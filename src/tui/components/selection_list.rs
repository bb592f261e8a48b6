//! # Selection List Component
//!
//! The focusable list shown at every level except reading: testaments,
//! books, chapters or verses. Each entry renders as a title line and a dim
//! description line.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SelectionListState` lives in `TuiState` and is rebuilt whenever the
//!   navigation level changes
//! - `SelectionList` is created each frame with borrowed state
//!
//! ## Filtering
//!
//! Lists built with `filterable` (the book list) accept `/` to start an
//! incremental, case-insensitive substring filter on item titles. While the
//! filter is open, printable keys edit it, `Backspace` deletes, and `Esc`
//! closes it. A second `Esc` then goes back a level as usual.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::core::action::Choice;
use crate::core::menu::{Menu, MenuItem};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const DIM: Color = Color::Rgb(0x62, 0x62, 0x62);
/// Rows each entry occupies (title + description).
const ITEM_HEIGHT: usize = 2;

/// Events emitted by the selection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    Select(Choice),
    Back,
}

/// Persistent state for the selection list.
pub struct SelectionListState {
    pub menu: Menu,
    /// `Some` while the filter prompt is open, even if still empty.
    filter: Option<String>,
    /// Indices into `menu.items` that pass the filter, in menu order.
    visible: Vec<usize>,
    pub list_state: ListState,
    /// Entries per page, refreshed on every render.
    page_size: usize,
}

impl SelectionListState {
    /// A fresh list with the cursor on `focus` (clamped to the last item).
    pub fn new(menu: Menu, focus: usize) -> Self {
        let visible = (0..menu.items.len()).collect();
        let mut state = Self {
            menu,
            filter: None,
            visible,
            list_state: ListState::default(),
            page_size: 10,
        };
        state.select_row(focus);
        state
    }

    pub fn is_filtering(&self) -> bool {
        self.filter.is_some()
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.visible.iter().filter_map(|&i| self.menu.items.get(i))
    }

    /// The highlighted entry, if the visible list is non-empty.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.selected_index()
            .and_then(|index| self.menu.items.get(index))
    }

    fn selected_index(&self) -> Option<usize> {
        self.list_state
            .selected()
            .and_then(|row| self.visible.get(row).copied())
    }

    fn select_row(&mut self, row: usize) {
        if self.visible.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(row.min(self.visible.len() - 1)));
        }
    }

    fn move_by(&mut self, delta: isize) {
        let current = self.list_state.selected().unwrap_or(0);
        self.select_row(current.saturating_add_signed(delta));
    }

    /// Recompute `visible`, keeping the cursor on the same entry when it
    /// survives the filter.
    fn apply_filter(&mut self) {
        let keep = self.selected_index();
        let needle = self.filter.as_deref().unwrap_or("").to_lowercase();
        self.visible = self
            .menu
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.title.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        let row = keep
            .and_then(|k| self.visible.iter().position(|&i| i == k))
            .unwrap_or(0);
        self.select_row(row);
    }
}

impl EventHandler for SelectionListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        if let Some(filter) = self.filter.as_mut() {
            match event {
                TuiEvent::InputChar(c) => {
                    filter.push(*c);
                    self.apply_filter();
                    return None;
                }
                TuiEvent::Backspace => {
                    filter.pop();
                    self.apply_filter();
                    return None;
                }
                TuiEvent::Escape => {
                    self.filter = None;
                    self.apply_filter();
                    return None;
                }
                _ => {}
            }
        }

        let page = self.page_size.max(1) as isize;
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp | TuiEvent::InputChar('k') => {
                self.move_by(-1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown | TuiEvent::InputChar('j') => {
                self.move_by(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_by(-page);
                None
            }
            TuiEvent::PageDown => {
                self.move_by(page);
                None
            }
            TuiEvent::Home => {
                self.select_row(0);
                None
            }
            TuiEvent::End => {
                self.select_row(usize::MAX);
                None
            }
            TuiEvent::InputChar('/') if self.menu.filterable => {
                self.filter = Some(String::new());
                None
            }
            TuiEvent::Submit => self.selected_item().map(|item| ListEvent::Select(item.choice)),
            TuiEvent::Escape | TuiEvent::Backspace => Some(ListEvent::Back),
            _ => None,
        }
    }
}

/// Transient render wrapper for the selection list.
pub struct SelectionList<'a> {
    state: &'a mut SelectionListState,
}

impl<'a> SelectionList<'a> {
    pub fn new(state: &'a mut SelectionListState) -> Self {
        Self { state }
    }
}

impl Component for SelectionList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIM))
            .title(Span::styled(
                format!(" {} ", self.state.menu.title),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));

        if let Some(filter) = self.state.filter() {
            block = block.title_bottom(Line::from(vec![
                Span::styled(" Filter: ", Style::default().fg(ACCENT)),
                Span::raw(format!("{filter}▏ ")),
            ]));
        }

        let inner_height = usize::from(area.height.saturating_sub(2));
        self.state.page_size = (inner_height / ITEM_HEIGHT).max(1);

        if self.state.visible.is_empty() {
            let empty = Paragraph::new("No matches.")
                .style(Style::default().fg(DIM))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .visible_items()
            .map(|item| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        item.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        item.description.clone(),
                        Style::default().fg(DIM),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(ACCENT))
            .highlight_symbol("▌ ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::testaments;
    use crate::core::menu::menu;
    use crate::core::state::Level;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn old_testament_books(focus: usize) -> SelectionListState {
        let testament = &testaments()[0];
        SelectionListState::new(menu(&Level::Book { testament }).unwrap(), focus)
    }

    fn type_str(state: &mut SelectionListState, text: &str) {
        for c in text.chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_new_places_cursor_on_focus() {
        let state = old_testament_books(4);
        assert_eq!(state.selected_item().unwrap().title, "Deuteronomy");
    }

    #[test]
    fn test_focus_is_clamped() {
        let state = old_testament_books(500);
        assert_eq!(state.selected_item().unwrap().title, "Malachi");
    }

    #[test]
    fn test_cursor_movement_stays_in_bounds() {
        let mut state = old_testament_books(0);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.list_state.selected(), Some(0));
        state.handle_event(&TuiEvent::InputChar('j'));
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected_item().unwrap().title, "Leviticus");
        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected_item().unwrap().title, "Malachi");
        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.selected_item().unwrap().title, "Malachi");
        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.selected_item().unwrap().title, "Genesis");
    }

    #[test]
    fn test_submit_emits_selected_choice() {
        let mut state = old_testament_books(1);
        let event = state.handle_event(&TuiEvent::Submit);
        let Some(ListEvent::Select(Choice::Book(book))) = event else {
            panic!("expected a book selection, got {event:?}");
        };
        assert_eq!(book.name, "Exodus");
    }

    #[test]
    fn test_escape_and_backspace_go_back() {
        let mut state = old_testament_books(0);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ListEvent::Back));
        assert_eq!(state.handle_event(&TuiEvent::Backspace), Some(ListEvent::Back));
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = old_testament_books(0);
        state.handle_event(&TuiEvent::InputChar('/'));
        assert!(state.is_filtering());
        type_str(&mut state, "SAM");
        let titles: Vec<&str> = state.visible_items().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["1 Samuel", "2 Samuel"]);
        assert_eq!(state.selected_item().unwrap().title, "1 Samuel");
    }

    #[test]
    fn test_filter_backspace_and_escape() {
        let mut state = old_testament_books(0);
        state.handle_event(&TuiEvent::InputChar('/'));
        type_str(&mut state, "jobx");
        assert_eq!(state.visible_items().count(), 0);
        assert!(state.selected_item().is_none());
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);

        // Backspace edits the filter instead of going back
        assert_eq!(state.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(state.filter(), Some("job"));
        assert_eq!(state.selected_item().unwrap().title, "Job");

        // First Esc closes the filter, second goes back
        assert_eq!(state.handle_event(&TuiEvent::Escape), None);
        assert!(!state.is_filtering());
        assert_eq!(state.visible_items().count(), 39);
        assert_eq!(state.selected_item().unwrap().title, "Job");
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(ListEvent::Back));
    }

    #[test]
    fn test_filter_then_select() {
        let mut state = old_testament_books(0);
        state.handle_event(&TuiEvent::InputChar('/'));
        type_str(&mut state, "psa");
        let event = state.handle_event(&TuiEvent::Submit);
        assert!(matches!(event, Some(ListEvent::Select(Choice::Book(b))) if b.name == "Psalms"));
    }

    #[test]
    fn test_slash_ignored_on_unfilterable_list() {
        let mut state = SelectionListState::new(menu(&Level::Testament).unwrap(), 0);
        state.handle_event(&TuiEvent::InputChar('/'));
        assert!(!state.is_filtering());
    }

    #[test]
    fn test_render_shows_title_and_items() {
        let backend = TestBackend::new(50, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = SelectionListState::new(menu(&Level::Testament).unwrap(), 0);

        terminal
            .draw(|f| SelectionList::new(&mut state).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Select Testament"));
        assert!(text.contains("Old Testament"));
        assert!(text.contains("27 books from Matthew to Revelation"));
        // 12 rows - 2 border rows = 5 two-line entries
        assert_eq!(state.page_size, 5);
    }
}
