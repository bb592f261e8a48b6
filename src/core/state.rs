//! # Application State
//!
//! Core navigation state for Lectio. Domain logic only, no TUI types.
//!
//! ```text
//! App
//! ├── level: Level              // where the user is, with the path that got there
//! ├── focus: usize              // list row to highlight when a level is entered
//! ├── pending: Option<Position> // fetch in flight (the loading flag)
//! ├── passage: Option<Passage>  // last successful lookup, shown while Reading
//! └── error: Option<AppError>   // visible error line
//! ```
//!
//! The selection path lives inside `Level`, so a field that has not been
//! chosen yet (say, the chapter while picking a book) cannot be read.
//! The breadcrumb is derived from that path rather than stored beside it.
//!
//! State changes only happen through `update(app, action)` in action.rs.

use std::fmt;

use crate::core::catalog::{self, Book, Testament};
use crate::lookup::{FetchError, FetchResult};

/// The bare navigation state, without the selection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Testament,
    Book,
    Chapter,
    Verse,
    Reading,
}

impl NavState {
    /// Number of breadcrumb entries this state carries.
    pub fn depth(self) -> usize {
        match self {
            NavState::Testament => 0,
            NavState::Book => 1,
            NavState::Chapter => 2,
            NavState::Verse => 3,
            NavState::Reading => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavState::Testament => "testament selection",
            NavState::Book => "book selection",
            NavState::Chapter => "chapter selection",
            NavState::Verse => "verse selection",
            NavState::Reading => "reading",
        }
    }
}

/// Direction of a verse-to-verse move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// A fully resolved verse: the complete selection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub testament: &'static Testament,
    pub book: &'static Book,
    pub chapter: u16,
    pub verse: u16,
}

impl Position {
    /// The lookup reference, e.g. "Genesis 1:1".
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book.name, self.chapter, self.verse)
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        vec![
            self.testament.name.to_string(),
            self.book.name.to_string(),
            chapter_label(self.chapter),
            verse_label(self.verse),
        ]
    }

    /// The neighbouring verse in `direction`, rolling over chapter boundaries
    /// within the book. `None` at the first verse of chapter 1 and at the
    /// last verse of the last chapter.
    pub fn step(&self, direction: Direction) -> Option<Position> {
        let max = catalog::approx_verse_count(self.book.name, self.chapter);
        let target = i32::from(self.verse) + direction.delta();

        if target < 1 {
            if self.chapter <= 1 {
                return None;
            }
            let chapter = self.chapter - 1;
            Some(Position {
                chapter,
                verse: catalog::approx_verse_count(self.book.name, chapter),
                ..*self
            })
        } else if target > i32::from(max) {
            if self.chapter >= catalog::chapter_count(self.book) {
                return None;
            }
            Some(Position {
                chapter: self.chapter + 1,
                verse: 1,
                ..*self
            })
        } else {
            Some(Position {
                verse: target as u16,
                ..*self
            })
        }
    }
}

pub fn chapter_label(chapter: u16) -> String {
    format!("Chapter {chapter}")
}

pub fn verse_label(verse: u16) -> String {
    format!("Verse {verse}")
}

/// The active level together with the choices that led to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Testament,
    Book {
        testament: &'static Testament,
    },
    Chapter {
        testament: &'static Testament,
        book: &'static Book,
    },
    Verse {
        testament: &'static Testament,
        book: &'static Book,
        chapter: u16,
        /// Verse whose lookup just failed; kept in the breadcrumb so the
        /// user can see what was attempted.
        attempted: Option<u16>,
    },
    Reading {
        at: Position,
    },
}

impl Level {
    pub fn state(&self) -> NavState {
        match self {
            Level::Testament => NavState::Testament,
            Level::Book { .. } => NavState::Book,
            Level::Chapter { .. } => NavState::Chapter,
            Level::Verse { .. } => NavState::Verse,
            Level::Reading { .. } => NavState::Reading,
        }
    }

    pub fn breadcrumb(&self) -> Vec<String> {
        match *self {
            Level::Testament => Vec::new(),
            Level::Book { testament } => vec![testament.name.to_string()],
            Level::Chapter { testament, book } => {
                vec![testament.name.to_string(), book.name.to_string()]
            }
            Level::Verse {
                testament,
                book,
                chapter,
                attempted,
            } => {
                let mut crumbs = vec![
                    testament.name.to_string(),
                    book.name.to_string(),
                    chapter_label(chapter),
                ];
                crumbs.extend(attempted.map(verse_label));
                crumbs
            }
            Level::Reading { at } => at.breadcrumb(),
        }
    }
}

/// A successful lookup on display. `revision` changes with every new passage
/// so views can tell when their cached layout is stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Passage {
    pub revision: u64,
    pub result: FetchResult,
}

/// Internal consistency faults in navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The chosen item does not belong to the list of the current level.
    InvalidSelection { state: NavState, choice: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidSelection { state, choice } => {
                write!(f, "invalid selection: {choice} during {}", state.label())
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Anything that ends up on the error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Fetch(FetchError),
    Nav(NavError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch(e) => e.fmt(f),
            AppError::Nav(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, PartialEq)]
pub struct App {
    pub level: Level,
    pub focus: usize,
    pub pending: Option<Position>,
    pub passage: Option<Passage>,
    pub error: Option<AppError>,
    /// Revision handed to the next passage.
    pub(crate) next_revision: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            level: Level::Testament,
            focus: 0,
            pending: None,
            passage: None,
            error: None,
            next_revision: 1,
        }
    }

    pub fn state(&self) -> NavState {
        self.level.state()
    }

    /// True while a lookup is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The trail shown above the view. While loading it already names the
    /// verse being fetched.
    pub fn breadcrumb(&self) -> Vec<String> {
        match self.pending {
            Some(target) => target.breadcrumb(),
            None => self.level.breadcrumb(),
        }
    }
}
