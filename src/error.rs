//! Error types for codejson

use crate::submit::Phase;
use thiserror::Error;

/// Result type alias for codejson operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the user
#[derive(Debug, Error)]
pub enum Error {
    /// No URL was supplied
    #[error("Please enter a GitHub repository URL")]
    EmptyUrl,

    /// The URL did not have the `github.com/owner/repo` shape
    #[error(
        "Invalid GitHub URL format. Please enter a valid GitHub repository URL ->(https://github.com/username/repository)"
    )]
    InvalidUrl(String),

    /// GitHub answered with a non-success status
    #[error("GitHub API error ({status}): {status_text}")]
    Api {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// The request could not be sent or completed
    #[error("network error talking to GitHub: {0}")]
    Transport(String),

    /// Repository metadata could not be fetched
    #[error("Could not fetch repository information. Please check the URL and try again.")]
    RepositoryUnavailable,

    /// No API token is available for write calls
    #[error("No API key in submitted data!")]
    MissingToken,

    /// The generated document has no usable `repositoryURL`
    #[error("code.json does not contain a repositoryURL field")]
    MissingRepositoryUrl,

    /// The form collaborator is not ready to receive a submission
    #[error("Form interface not initialized. Please refresh and try again.")]
    FormNotInitialized(String),

    /// The form collaborator rejected the submission
    #[error("Error filling form fields with repository data. Please refresh and try again")]
    FormFill(String),

    /// The schema document is missing or malformed
    #[error("schema error: {0}")]
    Schema(String),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// A pull-request workflow step failed
    #[error("{}: {source}", .step.failure_message())]
    Workflow {
        /// Step that failed
        step: Phase,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Authentication error
    #[error("authentication error: {0}")]
    Auth(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Transport("failed to connect to the GitHub API".to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
