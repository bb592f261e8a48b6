//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: application name and translation
//! - `Breadcrumb`: the selection path
//! - `StatusLine`: loading spinner or last error
//! - `HelpLine`: key hints for the current mode
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a thin wrapper borrows it each frame:
//! - `SelectionListState` / `SelectionList`: the focusable list, with filtering
//! - `PassageViewState` / `PassageView`: the scrollable reading pane
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top bar)
//! ├── breadcrumb.rs      (selection path)
//! ├── status_line.rs     (spinner / error)
//! ├── selection_list.rs  (testament, book, chapter and verse lists)
//! ├── passage_view.rs    (reading pane)
//! └── help_line.rs       (key hints)
//! ```

mod breadcrumb;
mod help_line;
pub mod passage_view;
pub mod selection_list;
mod status_line;
mod title_bar;

pub use breadcrumb::Breadcrumb;
pub use help_line::{HelpContext, HelpLine};
pub use passage_view::{PassageView, PassageViewState};
pub use selection_list::{ListEvent, SelectionList, SelectionListState};
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
