//! Client-side bet flows over the remote seam.

use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use super::{
    errors::{BetsError, BetsResult},
    models::{Bet, BetId, BetParticipant, BetStats, NewBet},
};
use crate::profiles::{Bones, UserId};
use crate::remote::RemoteResult;

/// Default stake used when joining a bet from the detail screen.
pub const DEFAULT_STAKE: Bones = 1;

/// Remote calls the bet screens make. Mutations go through the
/// `create_bet_with_prize`, `join_bet`, and `settle_bet` procedures;
/// reads hit the stats and participant-detail views.
#[async_trait]
pub trait BetsRemote: Send + Sync {
    async fn create_bet_with_prize(&self, input: &NewBet) -> RemoteResult<Bet>;

    /// All bets from the stats view, close time ascending.
    async fn list_bets(&self) -> RemoteResult<Vec<BetStats>>;

    async fn get_bet(&self, bet_id: BetId) -> RemoteResult<BetStats>;

    /// Participants of one bet, stake descending.
    async fn list_participants(&self, bet_id: BetId) -> RemoteResult<Vec<BetParticipant>>;

    async fn join_bet(&self, bet_id: BetId, user_id: UserId, stake: Bones) -> RemoteResult<()>;

    async fn settle_bet(&self, bet_id: BetId) -> RemoteResult<()>;
}

/// Bets manager
#[derive(Clone)]
pub struct BetsManager {
    remote: Arc<dyn BetsRemote>,
}

impl BetsManager {
    pub fn new(remote: Arc<dyn BetsRemote>) -> Self {
        Self { remote }
    }

    /// Create a bet funded from the creator's wallet.
    ///
    /// # Errors
    ///
    /// * `BetsError::EmptyTitle` - Title blank after trimming
    /// * `BetsError::InvalidPrize` - Prize not strictly positive
    /// * `BetsError::InvalidWindow` - Close time not after start time
    pub async fn create(&self, input: NewBet) -> BetsResult<Bet> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(BetsError::EmptyTitle);
        }
        if input.prize_amount <= 0 {
            return Err(BetsError::InvalidPrize(input.prize_amount));
        }
        if let (Some(starts_at), Some(closes_at)) = (input.starts_at, input.closes_at) {
            if closes_at <= starts_at {
                return Err(BetsError::InvalidWindow);
            }
        }
        let input = NewBet {
            title: title.to_string(),
            ..input
        };
        let bet = self.remote.create_bet_with_prize(&input).await?;
        info!("user {} created bet {} ({})", bet.created_by, bet.id, bet.title);
        Ok(bet)
    }

    pub async fn list(&self) -> BetsResult<Vec<BetStats>> {
        let bets = self.remote.list_bets().await?;
        debug!("listed {} bets", bets.len());
        Ok(bets)
    }

    pub async fn get(&self, bet_id: BetId) -> BetsResult<BetStats> {
        Ok(self.remote.get_bet(bet_id).await?)
    }

    pub async fn participants(&self, bet_id: BetId) -> BetsResult<Vec<BetParticipant>> {
        Ok(self.remote.list_participants(bet_id).await?)
    }

    /// Join with the default one-bone stake.
    pub async fn join(&self, bet_id: BetId, user_id: UserId) -> BetsResult<()> {
        self.join_with_stake(bet_id, user_id, DEFAULT_STAKE).await
    }

    pub async fn join_with_stake(
        &self,
        bet_id: BetId,
        user_id: UserId,
        stake: Bones,
    ) -> BetsResult<()> {
        if stake <= 0 {
            return Err(BetsError::InvalidStake(stake));
        }
        self.remote.join_bet(bet_id, user_id, stake).await?;
        info!("user {user_id} joined bet {bet_id} with stake {stake}");
        Ok(())
    }

    /// Request settlement. Payout distribution happens inside the
    /// backend's `settle_bet` procedure.
    pub async fn settle(&self, bet_id: BetId) -> BetsResult<()> {
        self.remote.settle_bet(bet_id).await?;
        info!("requested settlement of bet {bet_id}");
        Ok(())
    }
}
