//! Client-side review flows over the remote seam.

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use super::{
    errors::{ReviewsError, ReviewsResult},
    models::{Review, ReviewDetail},
};
use crate::bets::BetId;
use crate::profiles::UserId;
use crate::remote::RemoteResult;

/// Remote calls the review list makes.
#[async_trait]
pub trait ReviewsRemote: Send + Sync {
    /// Reviews of one bet from the detail view, newest first.
    async fn list_reviews(&self, bet_id: BetId) -> RemoteResult<Vec<ReviewDetail>>;

    /// Insert through the `add_review` procedure.
    async fn add_review(
        &self,
        bet_id: BetId,
        user_id: UserId,
        content: &str,
    ) -> RemoteResult<Review>;
}

/// Reviews manager
#[derive(Clone)]
pub struct ReviewsManager {
    remote: Arc<dyn ReviewsRemote>,
}

impl ReviewsManager {
    pub fn new(remote: Arc<dyn ReviewsRemote>) -> Self {
        Self { remote }
    }

    pub async fn list(&self, bet_id: BetId) -> ReviewsResult<Vec<ReviewDetail>> {
        Ok(self.remote.list_reviews(bet_id).await?)
    }

    /// Add a review. Content is trimmed; blank reviews are rejected
    /// without a remote call.
    pub async fn add(
        &self,
        bet_id: BetId,
        user_id: UserId,
        content: &str,
    ) -> ReviewsResult<Review> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ReviewsError::EmptyContent);
        }
        let review = self.remote.add_review(bet_id, user_id, content).await?;
        info!("user {user_id} reviewed bet {bet_id}");
        Ok(review)
    }
}
