//! Errors returned by [`crate::UserService`] implementations.

use forms::UserId;

/// Failure talking to the users backend.
///
/// The backend defines no error body, so every non-2xx response collapses to
/// [`ApiError::Status`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("the server responded with status {status}")]
    Status { status: u16 },
    #[error("user {id} was not found")]
    NotFound { id: UserId },
    #[error("unexpected response from the server: {0}")]
    Decode(#[from] serde_json::Error),
}
