//! Selectable item lists, one pure builder per list-bearing level.
//!
//! Lists are rebuilt from the catalog every time a level is entered; nothing
//! here is cached between levels.

use crate::core::action::Choice;
use crate::core::catalog::{self, Book, Testament};
use crate::core::state::{Level, chapter_label, verse_label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub description: String,
    pub choice: Choice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub title: String,
    pub items: Vec<MenuItem>,
    /// Whether the list offers incremental filtering.
    pub filterable: bool,
}

/// The list for `level`, or `None` while reading.
pub fn menu(level: &Level) -> Option<Menu> {
    match *level {
        Level::Testament => Some(testament_menu()),
        Level::Book { testament } => Some(book_menu(testament)),
        Level::Chapter { book, .. } => Some(chapter_menu(book)),
        Level::Verse { book, chapter, .. } => Some(verse_menu(book, chapter)),
        Level::Reading { .. } => None,
    }
}

fn testament_menu() -> Menu {
    let items = catalog::testaments()
        .iter()
        .map(|t| MenuItem {
            title: t.name.to_string(),
            description: t.summary.to_string(),
            choice: Choice::Testament(t),
        })
        .collect();
    Menu {
        title: "Select Testament".to_string(),
        items,
        filterable: false,
    }
}

fn book_menu(testament: &'static Testament) -> Menu {
    let items = testament
        .books
        .iter()
        .map(|b| MenuItem {
            title: b.name.to_string(),
            description: format!("{} chapters", catalog::chapter_count(b)),
            choice: Choice::Book(b),
        })
        .collect();
    Menu {
        title: format!("Select Book from {}", testament.name),
        items,
        filterable: true,
    }
}

fn chapter_menu(book: &'static Book) -> Menu {
    let items = (1..=catalog::chapter_count(book))
        .map(|n| MenuItem {
            title: chapter_label(n),
            description: format!("~{} verses", catalog::approx_verse_count(book.name, n)),
            choice: Choice::Chapter(n),
        })
        .collect();
    Menu {
        title: format!("Select Chapter from {}", book.name),
        items,
        filterable: false,
    }
}

fn verse_menu(book: &'static Book, chapter: u16) -> Menu {
    let items = (1..=catalog::approx_verse_count(book.name, chapter))
        .map(|n| MenuItem {
            title: verse_label(n),
            description: format!("{} {}:{}", book.name, chapter, n),
            choice: Choice::Verse(n),
        })
        .collect();
    Menu {
        title: format!("Select Verse from {} Chapter {}", book.name, chapter),
        items,
        filterable: false,
    }
}
