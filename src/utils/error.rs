use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Challenge client failed: {message}")]
    Challenge { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Account lookup for '{acct}' returned HTTP {status}")]
    Lookup { acct: String, status: u16 },
}

impl FetchError {
    /// Short message suitable for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            FetchError::Http(e) if e.is_connect() => {
                "Could not connect to the server".to_string()
            }
            FetchError::Http(e) if e.is_timeout() => "The request timed out".to_string(),
            FetchError::Http(_) => "The HTTP request failed".to_string(),
            FetchError::Challenge { message } => {
                format!("The anti-bot challenge could not be passed: {}", message)
            }
            FetchError::InvalidUrl(e) => format!("The endpoint URL is malformed: {}", e),
            FetchError::Io(e) => format!("Could not write the response: {}", e),
            FetchError::Serialization(_) => {
                "The server response could not be decoded".to_string()
            }
            FetchError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            FetchError::Validation { message } => message.clone(),
            FetchError::Lookup { acct, status } => {
                format!("No account found for {} (HTTP {})", acct, status)
            }
        }
    }

    /// 2 for configuration problems, 1 for everything that fails at run time.
    pub fn exit_code(&self) -> i32 {
        match self {
            FetchError::InvalidConfigValue { .. } | FetchError::InvalidUrl(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
