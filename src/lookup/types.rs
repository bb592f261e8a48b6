use serde::{Deserialize, Serialize};

/// A single verse as returned by the lookup service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct VerseEntry {
    /// Service-side book identifier (e.g. "GEN"). A string, not a number.
    #[serde(default)]
    pub book_id: String,
    #[serde(default)]
    pub book_name: String,
    #[serde(default)]
    pub chapter: u16,
    #[serde(default)]
    pub verse: u16,
    #[serde(default)]
    pub text: String,
}

/// The payload of one verse lookup.
///
/// Consumed once by the passage formatter and replaced wholesale by the
/// next successful lookup. Missing fields deserialize as empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchResult {
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub verses: Vec<VerseEntry>,
    /// Flat body, used when `verses` is empty.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub translation_id: String,
    #[serde(default)]
    pub translation_name: String,
    #[serde(default)]
    pub translation_note: String,
}

impl FetchResult {
    /// True when the service answered with neither a headline reference nor a body.
    pub fn is_empty(&self) -> bool {
        self.reference.trim().is_empty() && self.text.trim().is_empty()
    }

    /// The translator note, if one was supplied.
    pub fn note(&self) -> Option<&str> {
        let note = self.translation_note.trim();
        (!note.is_empty()).then_some(note)
    }
}
