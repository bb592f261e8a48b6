//! bible-api.com client.
//!
//! `GET {base_url}/{reference}?translation={id}` with the reference as a
//! single percent-encoded path segment, e.g. `/John%203:16?translation=kjv`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Url;

use super::source::{FetchError, VerseSource};
use super::types::FetchResult;

pub const DEFAULT_BASE_URL: &str = "https://bible-api.com";
pub const DEFAULT_TRANSLATION: &str = "kjv";
/// Budget for a whole request, connect through body.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct BibleApiClient {
    base_url: String,
    translation: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl BibleApiClient {
    pub fn new(base_url: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            translation: translation.into(),
            timeout: FETCH_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Override the request timeout. Only tests need anything but the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn lookup_url(&self, reference: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| FetchError::Transport(format!("invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .push(reference.trim());
        url.query_pairs_mut()
            .append_pair("translation", &self.translation);
        Ok(url)
    }
}

impl Default for BibleApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TRANSLATION)
    }
}

fn transport_error(e: reqwest::Error, timeout: Duration) -> FetchError {
    if e.is_timeout() {
        FetchError::Transport(format!("request timed out after {}s", timeout.as_secs_f32()))
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[async_trait]
impl VerseSource for BibleApiClient {
    fn name(&self) -> &str {
        "bible-api"
    }

    async fn fetch(&self, reference: &str) -> Result<FetchResult, FetchError> {
        let url = self.lookup_url(reference)?;
        info!("Fetching {} from {}", reference, url);

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        debug!("Lookup response status: {}", status);
        if !status.is_success() {
            warn!("Lookup for {} failed with status {}", reference, status);
            return Err(FetchError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;
        let result: FetchResult =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        if result.is_empty() {
            warn!("Lookup for {} returned an empty payload", reference);
            return Err(FetchError::NotFound {
                reference: reference.to_string(),
            });
        }

        debug!(
            "Lookup for {} returned {} verse(s), {} body bytes",
            reference,
            result.verses.len(),
            body.len()
        );
        Ok(result)
    }
}
