use std::fmt;

use async_trait::async_trait;

use super::types::FetchResult;

/// Errors that can occur while looking up a verse.
///
/// None of these are retried automatically; the navigator surfaces them and
/// waits for the user to navigate again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure, including the request timeout.
    Transport(String),
    /// The service answered with a non-success status code.
    BadStatus { status: u16 },
    /// The body was not the expected JSON payload.
    Parse(String),
    /// Well-formed payload with neither a reference nor any text.
    NotFound { reference: String },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "failed to fetch verse: {msg}"),
            FetchError::BadStatus { status } => write!(f, "API returned status {status}"),
            FetchError::Parse(msg) => write!(f, "failed to parse response: {msg}"),
            FetchError::NotFound { reference } => write!(f, "verse not found: {reference}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can resolve a "Book Chapter:Verse" reference into text.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &str;

    async fn fetch(&self, reference: &str) -> Result<FetchResult, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_mentions_code() {
        let err = FetchError::BadStatus { status: 500 };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_not_found_mentions_reference() {
        let err = FetchError::NotFound {
            reference: "Jude 2:1".to_string(),
        };
        assert_eq!(err.to_string(), "verse not found: Jude 2:1");
    }
}
