//! Remote call error types.

use thiserror::Error;

/// Errors surfaced by calls across the backend boundary.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// A remote procedure rejected the call.
    #[error("remote procedure {procedure} failed: {message}")]
    Rpc { procedure: String, message: String },

    /// The transport layer failed before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// A single-row query matched nothing.
    #[error("row not found in {0}")]
    NotFound(&'static str),

    /// A response payload did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A change-feed subscription ended on the backend side.
    #[error("change feed closed")]
    FeedClosed,
}

impl RemoteError {
    /// Get a client-safe error message that doesn't leak transport or
    /// payload internals.
    pub fn client_message(&self) -> String {
        match self {
            RemoteError::Transport(_) | RemoteError::Decode(_) => {
                "Internal error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for remote calls.
pub type RemoteResult<T> = Result<T, RemoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_sanitizes_transport_details() {
        let err = RemoteError::Transport("connect ECONNREFUSED 10.0.0.3:5432".to_string());
        assert_eq!(err.client_message(), "Internal error");
    }

    #[test]
    fn test_client_message_keeps_rpc_rejections() {
        let err = RemoteError::Rpc {
            procedure: "join_bet".to_string(),
            message: "bet is closed".to_string(),
        };
        assert_eq!(
            err.client_message(),
            "remote procedure join_bet failed: bet is closed"
        );
    }
}
