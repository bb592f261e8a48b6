use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, NavState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Breadcrumb, HelpContext, HelpLine, PassageView, SelectionList, StatusLine, TitleBar,
};

/// ```text
/// ┌──────────────────────────────┐
/// │ 📖 Bible Reader  KJV         │ title
/// │ 📍 Old Testament > Genesis   │ breadcrumb
/// │ ⠹ Loading Genesis 1:1...     │ status
/// │ ╭ Select Chapter ─────────╮  │
/// │ │ ...                     │  │ list or reading pane
/// │ ╰─────────────────────────╯  │
/// │ enter: select • esc: back    │ help
/// └──────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, crumb_area, status_area, main_area, help_area] =
        layout.areas(frame.area());

    TitleBar::new(tui.translation.clone()).render(frame, title_area);

    let crumbs = app.breadcrumb();
    Breadcrumb::new(&crumbs).render(frame, crumb_area);

    StatusLine {
        loading: app.pending.map(|p| p.reference()),
        error: app.error.as_ref().map(ToString::to_string),
        spinner_frame,
    }
    .render(frame, status_area);

    if app.state() == NavState::Reading {
        PassageView::new(&mut tui.passage, app.passage.as_ref()).render(frame, main_area);
    } else if let Some(selection) = tui.selection.as_mut() {
        SelectionList::new(selection).render(frame, main_area);
    }

    HelpLine {
        context: tui.help_context(app),
    }
    .render(frame, help_area);
}

impl TuiState {
    /// Which key hints apply right now.
    pub fn help_context(&self, app: &App) -> HelpContext {
        if app.state() == NavState::Reading {
            return HelpContext::Reading;
        }
        match &self.selection {
            Some(s) if s.is_filtering() => HelpContext::Filtering,
            Some(s) if s.menu.filterable => HelpContext::FilterableList,
            _ => HelpContext::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Choice, update};
    use crate::core::catalog::{find_book, testaments};
    use crate::test_support::genesis_1_1;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn apply(app: App, action: Action) -> App {
        update(app, action).0
    }

    #[test]
    fn test_initial_screen() {
        let app = App::new();
        let mut tui = TuiState::new("kjv".to_string());
        tui.sync(&app);

        let text = render(&app, &mut tui);
        assert!(text.contains("Bible Reader"));
        assert!(text.contains("Select Testament"));
        assert!(text.contains("New Testament"));
        assert!(text.contains("enter: select"));
        assert!(!text.contains("📍"));
    }

    #[test]
    fn test_loading_then_reading_screen() {
        let mut app = App::new();
        let mut tui = TuiState::new("kjv".to_string());
        app = apply(app, Action::Select(Choice::Testament(&testaments()[0])));
        app = apply(app, Action::Select(Choice::Book(find_book("Genesis").unwrap())));
        app = apply(app, Action::Select(Choice::Chapter(1)));
        app = apply(app, Action::Select(Choice::Verse(1)));
        tui.sync(&app);

        let text = render(&app, &mut tui);
        assert!(text.contains("Loading Genesis 1:1..."));
        assert!(text.contains("Genesis > Chapter 1 > Verse 1"));

        app = apply(
            app,
            Action::FetchCompleted {
                reference: "Genesis 1:1".to_string(),
                result: Ok(genesis_1_1()),
            },
        );
        tui.sync(&app);

        let text = render(&app, &mut tui);
        assert!(text.contains("1 In the beginning God created the heaven and the earth."));
        assert!(text.contains("p/n: prev/next verse"));
        assert!(!text.contains("Loading"));
    }

    #[test]
    fn test_help_context_follows_filter() {
        let mut app = App::new();
        let mut tui = TuiState::new(String::new());
        app = apply(app, Action::Select(Choice::Testament(&testaments()[1])));
        tui.sync(&app);
        assert_eq!(tui.help_context(&app), HelpContext::FilterableList);

        tui.handle_event(&crate::tui::event::TuiEvent::InputChar('/'), &app);
        assert_eq!(tui.help_context(&app), HelpContext::Filtering);
        let text = render(&app, &mut tui);
        assert!(text.contains("Filter:"));
    }
}
