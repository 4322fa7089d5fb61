//! HTTP client for fetching career-site pages.

use std::time::Duration;

use crate::errors::FetchError;
use crate::user_agent::get_user_agent;

/// Fetches listing and detail pages as rendered HTML.
///
/// Sends browser-like headers and a randomized user agent so career sites
/// serve the same markup a visitor would get. One underlying `reqwest::Client`
/// with a 30-second timeout is reused for every request in a run.
pub struct FetchClient {
    http: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// Fetches a URL and returns its body as text, failing on non-success
    /// statuses.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .http
            .get(url)
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .header("upgrade-insecure-requests", "1")
            .header("cache-control", "no-cache")
            .header("pragma", "no-cache")
            .send()
            .await?;

        if !resp.status().is_success() {
            tracing::error!("Request to {} failed with status {}", url, resp.status());
            return Err(FetchError::HttpStatus {
                status: resp.status(),
            });
        }

        Ok(resp.text().await?)
    }
}
