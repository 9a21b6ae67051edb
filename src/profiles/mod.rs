//! Player profiles.
//!
//! A profile row carries the public identity shown in chat and bet
//! listings plus the `bones` balance column the wallet reads. Profiles
//! are owned by the backend; this module only models the rows and the
//! lookups the client performs.

pub mod models;

pub use models::{Bones, Profile, UserId};

use crate::remote::RemoteResult;
use async_trait::async_trait;

/// Profile lookups performed against the backend.
#[async_trait]
pub trait ProfilesRemote: Send + Sync {
    /// Fetch a single profile row.
    async fn profile(&self, user_id: UserId) -> RemoteResult<Profile>;

    /// Fetch profile rows for a set of users (chat peer display).
    async fn profiles(&self, user_ids: &[UserId]) -> RemoteResult<Vec<Profile>>;

    /// List profiles other than `user_id`, nickname ascending, optionally
    /// filtered by a nickname substring.
    async fn profiles_except(
        &self,
        user_id: UserId,
        search: Option<&str>,
        limit: usize,
    ) -> RemoteResult<Vec<Profile>>;
}
