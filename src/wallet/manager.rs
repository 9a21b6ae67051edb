//! Client-side wallet flows over the remote seam.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::{
    errors::{WalletError, WalletResult},
    models::{DEFAULT_TX_LIMIT, DeltaRequest, TxRef, WalletTx},
};
use crate::profiles::{Bones, UserId};
use crate::remote::RemoteResult;

/// Remote calls the wallet makes. `balance` reads the profile row's
/// `bones` column; `apply_delta` invokes the `wallet_apply_delta`
/// procedure (atomic on the backend) and returns the new balance;
/// `subscribe` taps the change feed for one user's ledger inserts.
#[async_trait]
pub trait WalletRemote: Send + Sync {
    async fn balance(&self, user_id: UserId) -> RemoteResult<Bones>;

    /// Newest-first page of ledger rows.
    async fn transactions(&self, user_id: UserId, limit: usize) -> RemoteResult<Vec<WalletTx>>;

    async fn apply_delta(&self, request: &DeltaRequest) -> RemoteResult<Bones>;

    async fn subscribe(&self, user_id: UserId) -> RemoteResult<mpsc::Receiver<WalletTx>>;
}

/// Wallet manager
#[derive(Clone)]
pub struct WalletManager {
    remote: Arc<dyn WalletRemote>,
}

impl WalletManager {
    pub fn new(remote: Arc<dyn WalletRemote>) -> Self {
        Self { remote }
    }

    /// Current balance in bones.
    pub async fn balance(&self, user_id: UserId) -> WalletResult<Bones> {
        let balance = self.remote.balance(user_id).await?;
        debug!("user {user_id} balance is {balance} bones");
        Ok(balance)
    }

    /// Most recent transactions, default page size.
    pub async fn transactions(&self, user_id: UserId) -> WalletResult<Vec<WalletTx>> {
        self.transactions_with_limit(user_id, DEFAULT_TX_LIMIT).await
    }

    pub async fn transactions_with_limit(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> WalletResult<Vec<WalletTx>> {
        Ok(self.remote.transactions(user_id, limit).await?)
    }

    /// Apply a delta with no backing row (`ref_type` is `manual`).
    /// Returns the new balance.
    pub async fn adjust(
        &self,
        user_id: UserId,
        delta: Bones,
        reason: &str,
        meta: Option<serde_json::Value>,
    ) -> WalletResult<Bones> {
        let request = DeltaRequest {
            user_id,
            delta,
            reason: reason.to_string(),
            ref_type: Some("manual".to_string()),
            ref_id: None,
            meta,
        };
        self.apply(request).await
    }

    /// Apply a delta tied to a specific row (bet stake, bet payout, ...).
    pub async fn apply_with_ref(
        &self,
        user_id: UserId,
        delta: Bones,
        reason: &str,
        tx_ref: TxRef,
        meta: Option<serde_json::Value>,
    ) -> WalletResult<Bones> {
        let request = DeltaRequest {
            user_id,
            delta,
            reason: reason.to_string(),
            ref_type: Some(tx_ref.ref_type),
            ref_id: tx_ref.ref_id,
            meta,
        };
        self.apply(request).await
    }

    async fn apply(&self, request: DeltaRequest) -> WalletResult<Bones> {
        let new_balance = self.remote.apply_delta(&request).await?;
        info!(
            "applied {:+} bones to user {} ({}), new balance {new_balance}",
            request.delta, request.user_id, request.reason
        );
        Ok(new_balance)
    }

    /// Credit the wallet. The amount must be strictly positive.
    pub async fn deposit(&self, user_id: UserId, amount: Bones) -> WalletResult<Bones> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount(amount));
        }
        self.adjust(user_id, amount, "deposit", None).await
    }

    /// Debit the wallet. Rejected locally when the amount is not positive
    /// or exceeds the available balance; the backend enforces the same
    /// floor atomically.
    pub async fn withdraw(&self, user_id: UserId, amount: Bones) -> WalletResult<Bones> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount(amount));
        }
        let available = self.remote.balance(user_id).await?;
        if amount > available {
            return Err(WalletError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        self.adjust(user_id, -amount, "withdraw", None).await
    }

    /// Realtime feed of this user's ledger inserts.
    pub async fn subscribe(&self, user_id: UserId) -> WalletResult<mpsc::Receiver<WalletTx>> {
        Ok(self.remote.subscribe(user_id).await?)
    }
}
