use thiserror::Error;

/// Failure talking to the foods backend.
///
/// The dashboard treats every variant the same way: the request failed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(u16),

    /// Only produced by the in-memory backend used in tests.
    #[cfg(test)]
    #[error("Backend unavailable")]
    Unavailable,
}

pub type Result<T> = std::result::Result<T, ApiError>;
