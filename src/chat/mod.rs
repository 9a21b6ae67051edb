//! Peer-to-peer chat.
//!
//! Messages are plain rows; delivery and ordering are the backend's
//! concern. The client composes conversation listings from a recent
//! message window, validates outgoing content, and narrows the global
//! message insert feed down to a single thread.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{ChatError, ChatResult};
pub use manager::{ChatManager, ChatRemote};
pub use models::{
    CONVERSATION_SCAN_LIMIT, ChatMessage, Conversation, DEFAULT_PEERS_LIMIT,
    DEFAULT_THREAD_LIMIT, Peer,
};
