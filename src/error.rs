//! Error types for the NBA shot chart CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShotsError>;

#[derive(Error, Debug)]
pub enum ShotsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error fetching {resource}: {source}")]
    Fetch {
        resource: &'static str,
        source: reqwest::Error,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API base URL not provided and {env_var} environment variable not set")]
    MissingBaseUrl { env_var: String },

    #[error("Invalid clock time '{input}': expected mm:ss with minutes in 0..=12")]
    InvalidClockTime { input: String },

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Invalid game location '{input}': expected 'home' or 'away'")]
    InvalidLocation { input: String },
}

impl ShotsError {
    /// Tag a transport failure with the resource being fetched so the CLI
    /// can name it in the user-visible message.
    pub fn fetch(resource: &'static str, source: reqwest::Error) -> Self {
        ShotsError::Fetch { resource, source }
    }
}
