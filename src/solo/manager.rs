//! Round orchestration: balance check, play, record.

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::{
    errors::{SoloError, SoloResult},
    models::{GameType, NewGameResult, RoundOutcome},
    round::{Round, SoloRound},
};
use crate::cards::Deck;
use crate::profiles::{Bones, UserId};
use crate::remote::RemoteResult;
use crate::wallet::WalletManager;

/// Remote call that records a finished round.
#[async_trait]
pub trait GamesRemote: Send + Sync {
    async fn insert_game_result(&self, result: &NewGameResult) -> RemoteResult<()>;
}

/// Solo game manager
#[derive(Clone)]
pub struct SoloManager {
    wallet: WalletManager,
    games: Arc<dyn GamesRemote>,
}

impl SoloManager {
    pub fn new(wallet: WalletManager, games: Arc<dyn GamesRemote>) -> Self {
        Self { wallet, games }
    }

    /// Play one round: check the wager against the live balance, deal from
    /// a fresh shuffled deck, then record the result.
    ///
    /// # Errors
    ///
    /// * `SoloError::InvalidWager` - Wager not strictly positive
    /// * `SoloError::InsufficientBalance` - Wager above the balance
    pub async fn play(
        &self,
        user_id: UserId,
        game_type: GameType,
        wager: Bones,
    ) -> SoloResult<RoundOutcome> {
        if wager <= 0 {
            return Err(SoloError::InvalidWager(wager));
        }
        let available = self.wallet.balance(user_id).await?;
        if wager > available {
            return Err(SoloError::InsufficientBalance {
                available,
                required: wager,
            });
        }

        let mut deck = Deck::new();
        deck.shuffle();
        let outcome = Round::from(game_type).play(&mut deck, wager)?;
        self.record(user_id, &outcome).await?;
        Ok(outcome)
    }

    /// Apply the net delta, then insert the result row. The wallet moves
    /// first so the ledger never shows a result without its payout.
    async fn record(&self, user_id: UserId, outcome: &RoundOutcome) -> SoloResult<()> {
        let reason = format!("solo:{}", outcome.game_type);
        let meta = serde_json::json!({
            "won": outcome.won,
            "score": outcome.score,
            "wager": outcome.wager,
            "payout": outcome.payout,
            "round_id": outcome.round_id,
        });
        self.wallet
            .adjust(user_id, outcome.net(), &reason, Some(meta))
            .await?;

        self.games
            .insert_game_result(&NewGameResult {
                user_id,
                game_type: outcome.game_type,
                won: outcome.won,
                score: outcome.score,
                bet_amount: outcome.wager,
                payout: outcome.payout,
            })
            .await?;

        info!(
            "user {user_id} played {}: wager {}, payout {}",
            outcome.game_type, outcome.wager, outcome.payout
        );
        Ok(())
    }
}
