use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::extended::GetDatasExtended;
use models::post::{GetPostsQuery, PostInfo, PostToCreate, PostToUpdate, SetPostStatusBody};
use models::verification::VerificationTargetWrapper;

impl ForumClient {
    pub async fn create_post(
        &self,
        body: &VerificationTargetWrapper<PostToCreate>,
    ) -> Result<PostInfo, ForumClientError> {
        self.post_json("post", body).await
    }

    pub async fn update_post(
        &self,
        id: u32,
        body: &VerificationTargetWrapper<PostToUpdate>,
    ) -> Result<PostInfo, ForumClientError> {
        self.put_json(&format!("post/{id}"), body).await
    }

    pub async fn delete_post(&self, id: u32) -> Result<(), ForumClientError> {
        self.delete_unit(&format!("post/{id}")).await
    }

    /// Listing endpoint; `content` is stripped from every returned post.
    pub async fn get_posts_no_content(
        &self,
        query: &GetPostsQuery,
    ) -> Result<GetDatasExtended<PostInfo>, ForumClientError> {
        self.get_json_query("posts", query).await
    }

    pub async fn get_post(&self, id: u32) -> Result<PostInfo, ForumClientError> {
        self.get_json(&format!("post/{id}")).await
    }

    pub async fn set_post_status(
        &self,
        id: u32,
        body: &SetPostStatusBody,
    ) -> Result<(), ForumClientError> {
        self.put_unit(&format!("post_status/{id}"), body).await
    }
}
