//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::lookup::{FetchError, FetchResult, VerseEntry, VerseSource};

/// The lookup service's answer for "Genesis 1:1" in the KJV.
pub fn genesis_1_1() -> FetchResult {
    FetchResult {
        reference: "Genesis 1:1".to_string(),
        verses: vec![VerseEntry {
            book_id: "GEN".to_string(),
            book_name: "Genesis".to_string(),
            chapter: 1,
            verse: 1,
            text: "In the beginning God created the heaven and the earth.\n".to_string(),
        }],
        text: "In the beginning God created the heaven and the earth.\n".to_string(),
        translation_id: "kjv".to_string(),
        translation_name: "King James Version".to_string(),
        translation_note: "Public Domain".to_string(),
    }
}

/// A source that answers every lookup with the same result.
pub struct StaticSource {
    result: FetchResult,
}

impl StaticSource {
    pub fn new(result: FetchResult) -> Self {
        Self { result }
    }
}

#[async_trait]
impl VerseSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _reference: &str) -> Result<FetchResult, FetchError> {
        Ok(self.result.clone())
    }
}

/// A source whose every lookup fails with the same error.
pub struct FailingSource {
    error: FetchError,
}

impl FailingSource {
    pub fn new(error: FetchError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl VerseSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _reference: &str) -> Result<FetchResult, FetchError> {
        Err(self.error.clone())
    }
}
