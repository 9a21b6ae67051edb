//! Chat error types.

use thiserror::Error;

use crate::remote::RemoteError;

/// Chat errors
#[derive(Debug, Error)]
pub enum ChatError {
    /// Backend call failed
    #[error("backend error: {0}")]
    Remote(#[from] RemoteError),

    /// Message content is empty after trimming
    #[error("empty message")]
    EmptyMessage,
}

/// Result type for chat operations
pub type ChatResult<T> = Result<T, ChatError>;
