//! Wallet error types.

use thiserror::Error;

use crate::profiles::Bones;
use crate::remote::RemoteError;

/// Wallet errors
#[derive(Debug, Error)]
pub enum WalletError {
    /// Backend call failed
    #[error("backend error: {0}")]
    Remote(#[from] RemoteError),

    /// Amount must be strictly positive
    #[error("invalid amount: {0}")]
    InvalidAmount(Bones),

    /// Insufficient balance
    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Bones, required: Bones },
}

impl WalletError {
    /// Get a client-safe error message that doesn't leak backend internals.
    pub fn client_message(&self) -> String {
        match self {
            WalletError::Remote(remote) => remote.client_message(),
            _ => self.to_string(),
        }
    }
}

/// Result type for wallet operations
pub type WalletResult<T> = Result<T, WalletError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_message_passes_through_validation_errors() {
        let err = WalletError::InsufficientBalance {
            available: 5,
            required: 10,
        };
        assert_eq!(
            err.client_message(),
            "insufficient balance: available 5, required 10"
        );
    }

    #[test]
    fn test_client_message_sanitizes_remote_transport() {
        let err = WalletError::Remote(RemoteError::Transport("tls handshake".to_string()));
        assert_eq!(err.client_message(), "Internal error");
    }
}
