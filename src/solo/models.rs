//! Solo game data models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::cards::{Card, HandEvaluation};
use crate::profiles::{Bones, UserId};

/// The solo game variants.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GameType {
    #[serde(rename = "solo_five_card")]
    FiveCard,
    #[serde(rename = "solo_high_card")]
    HighCard,
    #[serde(rename = "solo_pair_plus")]
    PairPlus,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::FiveCard => "solo_five_card",
            Self::HighCard => "solo_high_card",
            Self::PairPlus => "solo_pair_plus",
        };
        write!(f, "{repr}")
    }
}

/// Everything a finished round produced. Payouts are gross: a push
/// returns exactly the wager, a loss pays 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Client-generated correlation id carried into the wallet metadata.
    pub round_id: Uuid,
    pub game_type: GameType,
    pub won: bool,
    /// Variant-specific margin: comparison sign for five-card, rank
    /// difference for high-card, category score for pair-plus.
    pub score: i64,
    pub wager: Bones,
    pub payout: Bones,
    pub player: Vec<Card>,
    pub dealer: Vec<Card>,
    pub player_eval: Option<HandEvaluation>,
    pub dealer_eval: Option<HandEvaluation>,
}

impl RoundOutcome {
    /// Net wallet movement for the round.
    pub fn net(&self) -> Bones {
        self.payout - self.wager
    }

    /// A push: the round was not won but the wager came back.
    pub fn is_push(&self) -> bool {
        !self.won && self.payout == self.wager
    }
}

/// Row inserted into the game-result log after a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResult {
    pub user_id: UserId,
    pub game_type: GameType,
    pub won: bool,
    pub score: i64,
    pub bet_amount: Bones,
    pub payout: Bones,
}
