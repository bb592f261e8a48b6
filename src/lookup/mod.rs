//! # Verse Lookup
//!
//! Resolves a "Book Chapter:Verse" reference into text through a
//! [`VerseSource`]. The production source is [`BibleApiClient`]; tests swap in
//! canned sources or point the client at a mock server.

pub mod bible_api;
pub mod source;
pub mod types;

pub use bible_api::BibleApiClient;
pub use source::{FetchError, VerseSource};
pub use types::{FetchResult, VerseEntry};
