//! Error types for the users endpoint.

use thiserror::Error;

/// Errors that can occur while fetching the users listing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection or transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Users endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not a JSON array of users
    #[error("Failed to decode users: {0}")]
    Decode(#[from] serde_json::Error),
}
