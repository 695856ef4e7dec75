pub mod fetcher;

pub use crate::domain::model::{Account, FetchOutcome};
pub use crate::domain::ports::{ConfigProvider, HttpTransport};
pub use crate::utils::error::Result;
