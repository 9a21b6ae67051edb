//! Review error types.

use thiserror::Error;

use crate::remote::RemoteError;

/// Review errors
#[derive(Debug, Error)]
pub enum ReviewsError {
    /// Backend call failed
    #[error("backend error: {0}")]
    Remote(#[from] RemoteError),

    /// Review content is empty after trimming
    #[error("empty review")]
    EmptyContent,
}

/// Result type for review operations
pub type ReviewsResult<T> = Result<T, ReviewsError>;
