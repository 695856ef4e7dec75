use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_numeric_id, validate_url, Validate,
};

pub const DEFAULT_BASE_URL: &str = "https://truthsocial.com";
pub const DEFAULT_ACCOUNT_ID: &str = "107780257626128497";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";
pub const DEFAULT_ACCEPT: &str = "application/json, text/plain, */*";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Fixed request settings. The binary always uses `FetcherConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub account_id: String,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

impl FetcherConfig {
    /// Same defaults, pointed at another host (used against mock servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Validate for FetcherConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_numeric_id("account_id", &self.account_id)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_non_empty_string("accept", &self.accept)?;
        Ok(())
    }
}

impl ConfigProvider for FetcherConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn account_id(&self) -> &str {
        &self.account_id
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn accept(&self) -> &str {
        &self.accept
    }

    fn accept_language(&self) -> &str {
        &self.accept_language
    }
}
