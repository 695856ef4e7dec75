// Adapters layer: concrete implementations of the domain ports.

#[cfg(feature = "cloudscraper")]
pub mod cloudscraper;
pub mod http;
