//! Bet error types.

use thiserror::Error;

use crate::profiles::Bones;
use crate::remote::RemoteError;

/// Bet errors
#[derive(Debug, Error)]
pub enum BetsError {
    /// Backend call failed
    #[error("backend error: {0}")]
    Remote(#[from] RemoteError),

    /// Title is empty after trimming
    #[error("title is required")]
    EmptyTitle,

    /// Prize must be strictly positive
    #[error("invalid prize amount: {0}")]
    InvalidPrize(Bones),

    /// Stake must be strictly positive
    #[error("invalid stake: {0}")]
    InvalidStake(Bones),

    /// Close time is not after the start time
    #[error("close time must be after start time")]
    InvalidWindow,
}

/// Result type for bet operations
pub type BetsResult<T> = Result<T, BetsError>;
