//! Bet data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::profiles::{Bones, UserId};

/// Bet ID type
pub type BetId = i64;

/// Bet lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Open,
    Closed,
    Settled,
    Canceled,
}

impl BetStatus {
    pub fn is_open(self) -> bool {
        matches!(self, BetStatus::Open)
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BetStatus::Open => write!(f, "open"),
            BetStatus::Closed => write!(f, "closed"),
            BetStatus::Settled => write!(f, "settled"),
            BetStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// A bet row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bet {
    pub id: BetId,
    pub title: String,
    pub description: Option<String>,
    pub status: BetStatus,
    pub created_by: UserId,
    pub starts_at: Option<DateTime<Utc>>,
    pub closes_at: Option<DateTime<Utc>>,
    pub odds_decimal: Option<f64>,
    pub prize_amount: Bones,
    pub settled_at: Option<DateTime<Utc>>,
}

impl Bet {
    /// Whether settlement can be requested: not already settled and the
    /// close time has passed. The backend re-checks this inside
    /// `settle_bet`.
    pub fn can_settle(&self, now: DateTime<Utc>) -> bool {
        self.status != BetStatus::Settled
            && self.closes_at.is_some_and(|closes_at| closes_at <= now)
    }
}

/// Bet row as served by the stats view, with the participant count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetStats {
    #[serde(flatten)]
    pub bet: Bet,
    pub participants_count: i64,
}

/// A participant row from the detail view, joined with profile fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetParticipant {
    pub bet_id: BetId,
    pub user_id: UserId,
    pub stake: Bones,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}

/// Input to `create_bet_with_prize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBet {
    pub created_by: UserId,
    pub title: String,
    pub description: Option<String>,
    pub prize_amount: Bones,
    pub starts_at: Option<DateTime<Utc>>,
    pub closes_at: Option<DateTime<Utc>>,
    pub odds_decimal: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn bet(status: BetStatus, closes_at: Option<DateTime<Utc>>) -> Bet {
        Bet {
            id: 1,
            title: "Winner of the next hand".to_string(),
            description: None,
            status,
            created_by: 1,
            starts_at: None,
            closes_at,
            odds_decimal: None,
            prize_amount: 100,
            settled_at: None,
        }
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BetStatus::Open).unwrap(), "\"open\"");
        assert_eq!(
            serde_json::from_str::<BetStatus>("\"settled\"").unwrap(),
            BetStatus::Settled
        );
    }

    #[test]
    fn test_can_settle_only_after_close() {
        let now = Utc::now();
        let open_past = bet(BetStatus::Open, Some(now - Duration::minutes(5)));
        let open_future = bet(BetStatus::Open, Some(now + Duration::minutes(5)));
        let never_closes = bet(BetStatus::Open, None);
        assert!(open_past.can_settle(now));
        assert!(!open_future.can_settle(now));
        assert!(!never_closes.can_settle(now));
    }

    #[test]
    fn test_can_settle_rejects_settled_bets() {
        let now = Utc::now();
        let settled = bet(BetStatus::Settled, Some(now - Duration::minutes(5)));
        assert!(!settled.can_settle(now));
    }

    #[test]
    fn test_stats_flattens_bet_fields() {
        let stats = BetStats {
            bet: bet(BetStatus::Open, None),
            participants_count: 3,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["title"], "Winner of the next hand");
        assert_eq!(value["participants_count"], 3);
    }
}
