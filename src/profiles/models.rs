//! Profile data models and shared id/currency aliases.

use serde::{Deserialize, Serialize};

/// User ID type
pub type UserId = i64;

/// Type alias for amounts of the app currency ("bones"). Deltas are
/// signed; balances never go negative on the backend side.
pub type Bones = i64;

/// Public profile row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
    /// Current wallet balance; mutated only by the backend's
    /// `wallet_apply_delta` procedure.
    pub bones: Bones,
}

impl Profile {
    /// Name to show in listings: nickname, then username, then the id.
    pub fn display_name(&self) -> String {
        self.nickname
            .clone()
            .or_else(|| self.username.clone())
            .unwrap_or_else(|| format!("user {}", self.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_nickname() {
        let profile = Profile {
            user_id: 7,
            username: Some("alice_a".to_string()),
            nickname: Some("Alice".to_string()),
            avatar_url: None,
            bones: 100,
        };
        assert_eq!(profile.display_name(), "Alice");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let profile = Profile {
            user_id: 7,
            username: None,
            nickname: None,
            avatar_url: None,
            bones: 0,
        };
        assert_eq!(profile.display_name(), "user 7");
    }
}
