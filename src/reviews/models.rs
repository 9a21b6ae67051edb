//! Review data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bets::BetId;
use crate::profiles::UserId;

/// A review row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub bet_id: BetId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Review row as served by the detail view, joined with author names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDetail {
    #[serde(flatten)]
    pub review: Review,
    pub username: Option<String>,
    pub nickname: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_flattens_review_fields() {
        let detail = ReviewDetail {
            review: Review {
                id: 4,
                bet_id: 2,
                user_id: 9,
                content: "easy money".to_string(),
                created_at: Utc::now(),
            },
            username: Some("alice_a".to_string()),
            nickname: None,
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["content"], "easy money");
        assert_eq!(value["username"], "alice_a");
    }
}
