use thiserror::Error;

/// Everything that can stop a request. Row level problems are not in here, see
/// [`crate::Warning`].
#[derive(Debug, Error)]
pub enum FantasyError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} was not successful, status: {status}")]
    BadStatus { url: String, status: u16 },

    /// The message is meant for the end user as is.
    #[error("{0}")]
    Validation(String),

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Invalid selector {selector}: {message}")]
    Selector { selector: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FantasyError {
    /// True for transport failures and unusable responses.
    pub fn is_fetch(&self) -> bool {
        matches!(self, FantasyError::Fetch { .. } | FantasyError::BadStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, FantasyError>;
