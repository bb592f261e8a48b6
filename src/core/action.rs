//! # Actions
//!
//! Everything that can happen in Lectio becomes an `Action`.
//! User picks "Genesis"? That's `Action::Select(Choice::Book(..))`.
//! The lookup service answers? That's `Action::FetchCompleted { .. }`.
//!
//! `update()` takes the current state snapshot and an action, then returns the
//! next snapshot plus at most one `Effect` for the adapter to carry out.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! App + Action  →  update()  →  (App', Effect)
//! ```
//!
//! ## Transitions
//!
//! | Level     | Select                          | Back           |
//! |-----------|---------------------------------|----------------|
//! | Testament | → Book                          | quit           |
//! | Book      | → Chapter                       | → Testament    |
//! | Chapter   | → Verse                         | → Book         |
//! | Verse     | fetch, then → Reading           | → Chapter      |
//! | Reading   | (p/n step between verses)       | → Verse        |
//!
//! While a fetch is in flight every action except `Quit` and the completion
//! itself is ignored.

use log::{debug, info, warn};

use crate::core::catalog::{self, Book, Testament};
use crate::core::state::{
    App, AppError, Direction, Level, NavError, Passage, Position, chapter_label, verse_label,
};
use crate::lookup::{FetchError, FetchResult};

/// The payload of a selectable list item, one variant per list-bearing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Testament(&'static Testament),
    Book(&'static Book),
    Chapter(u16),
    Verse(u16),
}

impl Choice {
    pub fn label(&self) -> String {
        match self {
            Choice::Testament(t) => t.name.to_string(),
            Choice::Book(b) => b.name.to_string(),
            Choice::Chapter(n) => chapter_label(*n),
            Choice::Verse(n) => verse_label(*n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Confirm an item from the current level's list.
    Select(Choice),
    /// Leave the current level (quits from the top level).
    Back,
    /// Move to the neighbouring verse while reading.
    Step(Direction),
    /// The lookup for `reference` finished.
    FetchCompleted {
        reference: String,
        result: Result<FetchResult, FetchError>,
    },
    Quit,
}

/// Work the adapter must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Look up this reference and report back with `Action::FetchCompleted`.
    Fetch(String),
    Quit,
}

pub fn update(app: App, action: Action) -> (App, Effect) {
    match action {
        Action::Quit => {
            info!("Quit requested");
            (app, Effect::Quit)
        }
        Action::FetchCompleted { reference, result } => complete_fetch(app, &reference, result),
        _ if app.is_loading() => {
            debug!("Input ignored while a fetch is in flight");
            (app, Effect::None)
        }
        Action::Select(choice) => select(app, choice),
        Action::Back => back(app),
        Action::Step(direction) => step(app, direction),
    }
}

fn select(mut app: App, choice: Choice) -> (App, Effect) {
    let next = match (app.level, choice) {
        (Level::Testament, Choice::Testament(testament)) => Level::Book { testament },
        (Level::Book { testament }, Choice::Book(book)) if testament.books.contains(book) => {
            Level::Chapter { testament, book }
        }
        (Level::Chapter { testament, book }, Choice::Chapter(chapter))
            if (1..=catalog::chapter_count(book)).contains(&chapter) =>
        {
            Level::Verse {
                testament,
                book,
                chapter,
                attempted: None,
            }
        }
        (
            Level::Verse {
                testament,
                book,
                chapter,
                ..
            },
            Choice::Verse(verse),
        ) if (1..=catalog::approx_verse_count(book.name, chapter)).contains(&verse) => {
            let target = Position {
                testament,
                book,
                chapter,
                verse,
            };
            app.level = Level::Verse {
                testament,
                book,
                chapter,
                attempted: None,
            };
            app.focus = usize::from(verse - 1);
            return begin_fetch(app, target);
        }
        (level, choice) => {
            let err = NavError::InvalidSelection {
                state: level.state(),
                choice: choice.label(),
            };
            warn!("{}", err);
            app.error = Some(AppError::Nav(err));
            return (app, Effect::None);
        }
    };

    debug!("Entering {}", next.state().label());
    app.level = next;
    app.focus = 0;
    app.error = None;
    (app, Effect::None)
}

fn back(mut app: App) -> (App, Effect) {
    let (previous, focus) = match app.level {
        Level::Testament => {
            info!("Back from the top level, quitting");
            return (app, Effect::Quit);
        }
        Level::Book { testament } => (Level::Testament, index_of_testament(testament)),
        Level::Chapter { testament, book } => (Level::Book { testament }, index_of_book(testament, book)),
        Level::Verse {
            testament,
            book,
            chapter,
            ..
        } => (Level::Chapter { testament, book }, usize::from(chapter.saturating_sub(1))),
        Level::Reading { at } => (
            Level::Verse {
                testament: at.testament,
                book: at.book,
                chapter: at.chapter,
                attempted: None,
            },
            usize::from(at.verse.saturating_sub(1)),
        ),
    };

    debug!("Back to {}", previous.state().label());
    app.level = previous;
    app.focus = focus;
    app.passage = None;
    app.error = None;
    (app, Effect::None)
}

fn step(app: App, direction: Direction) -> (App, Effect) {
    let Level::Reading { at } = app.level else {
        debug!("{:?} ignored outside reading", direction);
        return (app, Effect::None);
    };

    match at.step(direction) {
        Some(target) => begin_fetch(app, target),
        None => {
            debug!("{:?} from {} clamped at book edge", direction, at.reference());
            (app, Effect::None)
        }
    }
}

fn begin_fetch(mut app: App, target: Position) -> (App, Effect) {
    let reference = target.reference();
    info!("Requesting {}", reference);
    app.pending = Some(target);
    app.error = None;
    (app, Effect::Fetch(reference))
}

fn complete_fetch(
    mut app: App,
    reference: &str,
    result: Result<FetchResult, FetchError>,
) -> (App, Effect) {
    let Some(target) = app.pending else {
        warn!("Completion for {} arrived with no fetch in flight", reference);
        return (app, Effect::None);
    };
    if target.reference() != reference {
        warn!(
            "Completion for {} does not match in-flight {}",
            reference,
            target.reference()
        );
        return (app, Effect::None);
    }

    app.pending = None;
    match result {
        Ok(result) => {
            info!("Loaded {}", reference);
            app.passage = Some(Passage {
                revision: app.next_revision,
                result,
            });
            app.next_revision += 1;
            app.level = Level::Reading { at: target };
            app.error = None;
        }
        Err(e) => {
            warn!("Lookup for {} failed: {}", reference, e);
            app.passage = None;
            app.level = Level::Verse {
                testament: target.testament,
                book: target.book,
                chapter: target.chapter,
                attempted: Some(target.verse),
            };
            app.focus = usize::from(target.verse.saturating_sub(1));
            app.error = Some(AppError::Fetch(e));
        }
    }
    (app, Effect::None)
}

fn index_of_testament(testament: &Testament) -> usize {
    catalog::testaments()
        .iter()
        .position(|t| t == testament)
        .unwrap_or(0)
}

fn index_of_book(testament: &Testament, book: &Book) -> usize {
    testament.books.iter().position(|b| b == book).unwrap_or(0)
}
