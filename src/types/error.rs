//! Error types

use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The pinned remote document could not be fetched: connection error,
    /// timeout or a body that could not be read.
    #[error("Failed to fetch schema from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with anything other than 2xx
    #[error("Failed to fetch schema from {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Failed to write schema to {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl SchemaError {
    pub fn fetch_failed(url: &str, source: reqwest::Error) -> Self {
        Self::FetchFailed {
            url: url.to_string(),
            source,
        }
    }

    /// Both remote failure variants, for callers that treat them alike
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. } | Self::HttpStatus { .. })
    }

    pub fn write_failed(path: &str, err: impl std::fmt::Display) -> Self {
        Self::WriteFailed {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}
