use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::like::{GetLikeStatusQuery, LikeActionBody, LikeStatus};

impl ForumClient {
    pub async fn get_like_status(
        &self,
        query: &GetLikeStatusQuery,
    ) -> Result<LikeStatus, ForumClientError> {
        self.get_json_query("like_status", query).await
    }

    /// Apply a like/dislike to the post or comment `id` (per `body.flag`).
    pub async fn like_action(
        &self,
        id: u32,
        body: &LikeActionBody,
    ) -> Result<LikeStatus, ForumClientError> {
        self.put_json(&format!("like_action/{id}"), body).await
    }
}
