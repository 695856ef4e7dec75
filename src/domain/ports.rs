use crate::domain::model::FetchOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn account_id(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn accept(&self) -> &str;
    fn accept_language(&self) -> &str;
}

/// Performs a single GET. Non-2xx statuses are returned, not raised;
/// only a failure to obtain any response is an error.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<FetchOutcome>;
}
