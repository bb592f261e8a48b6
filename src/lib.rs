//! Lectio: a terminal navigator for reading the Bible one verse at a time.
//!
//! - [`core`]: pure navigation state machine
//! - [`lookup`]: verse lookup service client
//! - [`tui`]: ratatui adapter and event loop

pub mod core;
pub mod lookup;
pub mod tui;

#[cfg(test)]
pub mod test_support;
