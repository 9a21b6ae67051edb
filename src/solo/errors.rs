//! Solo game error types.

use thiserror::Error;

use crate::cards::CardError;
use crate::profiles::Bones;
use crate::remote::RemoteError;
use crate::wallet::WalletError;

/// Solo game errors
#[derive(Debug, Error)]
pub enum SoloError {
    /// Deck ran out mid-round
    #[error(transparent)]
    Cards(#[from] CardError),

    /// Wallet flow failed
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Backend call failed
    #[error("backend error: {0}")]
    Remote(#[from] RemoteError),

    /// Wager must be strictly positive
    #[error("invalid wager: {0}")]
    InvalidWager(Bones),

    /// Wager exceeds the available balance
    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Bones, required: Bones },
}

/// Result type for solo game operations
pub type SoloResult<T> = Result<T, SoloError>;
