//! Wallet data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profiles::{Bones, UserId};

/// Default page size for transaction listings.
pub const DEFAULT_TX_LIMIT: usize = 50;

/// A ledger row written by the backend for every balance change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTx {
    pub id: i64,
    pub user_id: UserId,
    pub delta: Bones,
    pub reason: String,
    pub ref_type: Option<String>,
    pub ref_id: Option<i64>,
    pub meta: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for WalletTx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:+} bones ({})", self.delta, self.reason)
    }
}

/// Reference a delta back to the row that caused it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxRef {
    pub ref_type: String,
    pub ref_id: Option<i64>,
}

impl TxRef {
    pub fn new(ref_type: impl Into<String>, ref_id: Option<i64>) -> Self {
        Self {
            ref_type: ref_type.into(),
            ref_id,
        }
    }
}

/// Parameters of one `wallet_apply_delta` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeltaRequest {
    pub user_id: UserId,
    pub delta: Bones,
    pub reason: String,
    pub ref_type: Option<String>,
    pub ref_id: Option<i64>,
    pub meta: Option<serde_json::Value>,
}
