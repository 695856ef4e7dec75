use crate::domain::model::FetchOutcome;
use crate::domain::ports::{ConfigProvider, HttpTransport};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use url::Url;

/// Plain browser-like client: desktop headers, a session cookie jar, rustls.
/// It does not solve challenges; see `CloudScraperTransport` for that.
pub fn build_client<C: ConfigProvider + ?Sized>(config: &C) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, header_value("accept", config.accept())?);
    if !config.accept_language().is_empty() {
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value("accept_language", config.accept_language())?,
        );
    }

    let client = Client::builder()
        .user_agent(config.user_agent())
        .default_headers(headers)
        .cookie_store(true)
        .use_rustls_tls()
        .build()?;

    Ok(client)
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| FetchError::InvalidConfigValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Not a valid header value: {}", e),
    })
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<FetchOutcome> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!("Response status: {} ({} bytes)", status, body.len());
        Ok(FetchOutcome { status, body })
    }
}
