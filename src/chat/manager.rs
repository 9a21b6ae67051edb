//! Client-side chat flows over the remote seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::{
    errors::{ChatError, ChatResult},
    models::{
        CONVERSATION_SCAN_LIMIT, ChatMessage, Conversation, DEFAULT_PEERS_LIMIT,
        DEFAULT_THREAD_LIMIT, Peer,
    },
};
use crate::profiles::{Profile, ProfilesRemote, UserId};
use crate::remote::RemoteResult;

/// Remote calls the chat screens make. The message feed is global; thread
/// filtering happens on the client.
#[async_trait]
pub trait ChatRemote: Send + Sync {
    /// Newest-first messages where `user_id` is sender or receiver.
    async fn recent_messages(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> RemoteResult<Vec<ChatMessage>>;

    /// Newest-first messages between the two users, optionally only those
    /// created before `before`.
    async fn thread_messages(
        &self,
        user_id: UserId,
        peer_id: UserId,
        limit: usize,
        before: Option<DateTime<Utc>>,
    ) -> RemoteResult<Vec<ChatMessage>>;

    /// Insert a message row and return it as stored.
    async fn send_message(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        content: &str,
    ) -> RemoteResult<ChatMessage>;

    /// Subscribe to all message inserts visible to this client.
    async fn subscribe_messages(&self) -> RemoteResult<mpsc::Receiver<ChatMessage>>;
}

/// Chat manager
#[derive(Clone)]
pub struct ChatManager {
    remote: Arc<dyn ChatRemote>,
    profiles: Arc<dyn ProfilesRemote>,
}

impl ChatManager {
    pub fn new(remote: Arc<dyn ChatRemote>, profiles: Arc<dyn ProfilesRemote>) -> Self {
        Self { remote, profiles }
    }

    /// Recent conversations: one entry per peer, carrying the latest
    /// message exchanged with them, newest conversation first.
    pub async fn conversations(&self, user_id: UserId) -> ChatResult<Vec<Conversation>> {
        let messages = self
            .remote
            .recent_messages(user_id, CONVERSATION_SCAN_LIMIT)
            .await?;

        // Messages arrive newest first, so the first hit per peer is the
        // latest one; keep the discovery order.
        let mut latest_by_peer: Vec<(UserId, ChatMessage)> = Vec::new();
        for message in messages {
            let peer_id = if message.sender_id == user_id {
                message.receiver_id
            } else {
                message.sender_id
            };
            if !latest_by_peer.iter().any(|(id, _)| *id == peer_id) {
                latest_by_peer.push((peer_id, message));
            }
        }
        if latest_by_peer.is_empty() {
            return Ok(Vec::new());
        }

        let peer_ids: Vec<UserId> = latest_by_peer.iter().map(|(id, _)| *id).collect();
        let profiles = self.profiles.profiles(&peer_ids).await?;
        let mut by_id: HashMap<UserId, Profile> = profiles
            .into_iter()
            .map(|profile| (profile.user_id, profile))
            .collect();

        debug!("composed {} conversations for user {user_id}", peer_ids.len());
        Ok(latest_by_peer
            .into_iter()
            .map(|(peer_id, last_message)| Conversation {
                peer: by_id
                    .remove(&peer_id)
                    .map(Peer::from)
                    .unwrap_or_else(|| Peer::unknown(peer_id)),
                last_message,
            })
            .collect())
    }

    /// Peers available to start a new chat with, excluding the caller.
    pub async fn peers(&self, user_id: UserId, search: Option<&str>) -> ChatResult<Vec<Peer>> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());
        let profiles = self
            .profiles
            .profiles_except(user_id, search, DEFAULT_PEERS_LIMIT)
            .await?;
        Ok(profiles.into_iter().map(Peer::from).collect())
    }

    /// Latest page of a thread, newest first.
    pub async fn thread(&self, user_id: UserId, peer_id: UserId) -> ChatResult<Vec<ChatMessage>> {
        self.thread_before(user_id, peer_id, None).await
    }

    /// Page backwards through a thread from a timestamp cursor.
    pub async fn thread_before(
        &self,
        user_id: UserId,
        peer_id: UserId,
        before: Option<DateTime<Utc>>,
    ) -> ChatResult<Vec<ChatMessage>> {
        Ok(self
            .remote
            .thread_messages(user_id, peer_id, DEFAULT_THREAD_LIMIT, before)
            .await?)
    }

    /// Send a message. Content is trimmed; blank messages are rejected
    /// without a remote call.
    pub async fn send(
        &self,
        user_id: UserId,
        peer_id: UserId,
        content: &str,
    ) -> ChatResult<ChatMessage> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(self.remote.send_message(user_id, peer_id, content).await?)
    }

    /// Realtime feed of one thread: the global insert feed narrowed to
    /// messages between the two users.
    pub async fn subscribe_thread(
        &self,
        user_id: UserId,
        peer_id: UserId,
    ) -> ChatResult<mpsc::Receiver<ChatMessage>> {
        let mut feed = self.remote.subscribe_messages().await?;
        let (tx, rx) = mpsc::channel(64);
        tokio::spawn(async move {
            while let Some(message) = feed.recv().await {
                if !message.in_thread(user_id, peer_id) {
                    continue;
                }
                if tx.send(message).await.is_err() {
                    break;
                }
            }
        });
        Ok(rx)
    }
}
