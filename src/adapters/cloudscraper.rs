use crate::domain::model::FetchOutcome;
use crate::domain::ports::HttpTransport;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use cloudscraper_rs::CloudScraper;
use std::fmt::Display;
use url::Url;

/// Transport that detects and solves Cloudflare challenges (v1/v2/v3 and
/// Turnstile) before handing back the origin's answer. The scraper manages
/// its own browser profile and clearance cookies.
pub struct CloudScraperTransport {
    scraper: CloudScraper,
}

impl CloudScraperTransport {
    pub fn new() -> Result<Self> {
        let scraper = CloudScraper::new().map_err(challenge_error)?;
        Ok(Self { scraper })
    }
}

fn challenge_error(e: impl Display) -> FetchError {
    FetchError::Challenge {
        message: e.to_string(),
    }
}

#[async_trait]
impl HttpTransport for CloudScraperTransport {
    async fn get(&self, url: &Url) -> Result<FetchOutcome> {
        tracing::debug!("GET {} (challenge-solving client)", url);
        let response = self.scraper.get(url.as_str()).await.map_err(challenge_error)?;

        let status = u16::from(response.status());
        let body = response.text().await.map_err(challenge_error)?;

        tracing::debug!("Response status: {} ({} bytes)", status, body.len());
        Ok(FetchOutcome { status, body })
    }
}
