#[cfg(feature = "cloudscraper")]
use crate::adapters::cloudscraper::CloudScraperTransport;
#[cfg(not(feature = "cloudscraper"))]
use crate::adapters::http::ReqwestTransport;
use crate::core::{Account, ConfigProvider, FetchOutcome, HttpTransport};
use crate::utils::error::{FetchError, Result};
use std::io::Write;
use url::Url;

/// Query string of the post listing, in wire order.
pub const STATUSES_QUERY: [(&str, &str); 3] = [
    ("exclude_replies", "true"),
    ("only_replies", "false"),
    ("with_muted", "true"),
];

pub struct Fetcher<T: HttpTransport, C: ConfigProvider> {
    transport: T,
    config: C,
}

/// Transport used by `Fetcher::new`.
#[cfg(feature = "cloudscraper")]
pub type DefaultTransport = CloudScraperTransport;
#[cfg(not(feature = "cloudscraper"))]
pub type DefaultTransport = ReqwestTransport;

impl<C: ConfigProvider> Fetcher<DefaultTransport, C> {
    #[cfg(feature = "cloudscraper")]
    pub fn new(config: C) -> Result<Self> {
        let transport = CloudScraperTransport::new()?;
        Ok(Self { transport, config })
    }

    #[cfg(not(feature = "cloudscraper"))]
    pub fn new(config: C) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: HttpTransport, C: ConfigProvider> Fetcher<T, C> {
    pub fn with_transport(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base}/api/v1/accounts/{id}/statuses?exclude_replies=true&only_replies=false&with_muted=true`
    pub fn statuses_url(&self) -> Result<Url> {
        let mut url = self.api_url(&["accounts", self.config.account_id(), "statuses"])?;
        url.query_pairs_mut().extend_pairs(STATUSES_QUERY.iter());
        Ok(url)
    }

    pub fn lookup_url(&self, acct: &str) -> Result<Url> {
        let mut url = self.api_url(&["accounts", "lookup"])?;
        url.query_pairs_mut().append_pair("acct", acct);
        Ok(url)
    }

    fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(self.config.base_url())?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidConfigValue {
                field: "base_url".to_string(),
                value: self.config.base_url().to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }

    /// Issues the single GET and returns status and body untouched.
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let url = self.statuses_url()?;
        tracing::info!("Fetching statuses for account {}", self.config.account_id());

        let outcome = self.transport.get(&url).await?;
        if !outcome.is_success() {
            tracing::warn!("Statuses request returned HTTP {}", outcome.status);
        }

        Ok(outcome)
    }

    /// Fetches, then writes the status line and the body line to `out`.
    /// Nothing is written when the request fails.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<FetchOutcome> {
        let outcome = self.fetch().await?;
        write_outcome(out, &outcome)?;
        Ok(outcome)
    }

    pub async fn lookup_account(&self, acct: &str) -> Result<Account> {
        let acct = acct.trim();
        if acct.is_empty() {
            return Err(FetchError::Validation {
                message: "acct cannot be empty".to_string(),
            });
        }
        let url = self.lookup_url(acct)?;

        let response = self.transport.get(&url).await?;
        if response.status != 200 {
            tracing::warn!("Account lookup for {} returned HTTP {}", acct, response.status);
            return Err(FetchError::Lookup {
                acct: acct.to_string(),
                status: response.status,
            });
        }

        let account: Account = serde_json::from_str(&response.body)?;
        tracing::debug!("Resolved {} to account id {}", acct, account.id);
        Ok(account)
    }
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &FetchOutcome) -> Result<()> {
    writeln!(out, "{}", outcome.status)?;
    writeln!(out, "{}", outcome.body)?;
    out.flush()?;
    Ok(())
}
