pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cloudscraper")]
pub use adapters::cloudscraper::CloudScraperTransport;
pub use adapters::http::ReqwestTransport;
pub use config::FetcherConfig;
pub use core::fetcher::{write_outcome, DefaultTransport, Fetcher};
pub use utils::error::{FetchError, Result};
