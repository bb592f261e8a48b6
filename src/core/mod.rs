//! # Core Application Logic
//!
//! This module contains Lectio's navigation logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (books)      │
//!                    │  • State (App snapshot) │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Menu (list builders) │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │   Lookup   │
//!           │  Adapter   │─── Effect ──▶│  (reqwest) │
//!           │ (ratatui)  │◀── Action ───│            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the fixed testament/book/chapter table
//! - [`state`]: the `App` snapshot and the typed selection path
//! - [`action`]: the `Action` enum and `update()`
//! - [`menu`]: per-level selectable lists
//! - [`config`]: optional config file and its resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod menu;
pub mod state;
