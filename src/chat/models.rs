//! Chat data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profiles::{Profile, UserId};

/// Messages scanned when composing the conversation list.
pub const CONVERSATION_SCAN_LIMIT: usize = 200;

/// Default page size for a thread fetch.
pub const DEFAULT_THREAD_LIMIT: usize = 50;

/// Default page size for the peer directory.
pub const DEFAULT_PEERS_LIMIT: usize = 100;

/// The other side of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Peer {
    pub user_id: UserId,
    pub username: Option<String>,
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<Profile> for Peer {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id,
            username: profile.username,
            nickname: profile.nickname,
            avatar_url: profile.avatar_url,
        }
    }
}

impl Peer {
    /// Placeholder peer for a user whose profile row is missing.
    pub fn unknown(user_id: UserId) -> Self {
        Self {
            user_id,
            username: None,
            nickname: None,
            avatar_url: None,
        }
    }
}

/// A message row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Whether this message belongs to the thread between `a` and `b`.
    pub fn in_thread(&self, a: UserId, b: UserId) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

/// A conversation entry: the peer plus the latest message exchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub peer: Peer,
    pub last_message: ChatMessage,
}
