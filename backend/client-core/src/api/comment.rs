use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::comment::{
    CommentInfo, CommentToCreate, CommentToUpdate, GetCommentsQuery, SetCommentStatusBody,
};
use models::extended::GetDatasExtended;
use models::verification::VerificationTargetWrapper;

impl ForumClient {
    pub async fn create_comment(
        &self,
        body: &VerificationTargetWrapper<CommentToCreate>,
    ) -> Result<CommentInfo, ForumClientError> {
        self.post_json("comment", body).await
    }

    pub async fn update_comment(
        &self,
        id: u32,
        body: &VerificationTargetWrapper<CommentToUpdate>,
    ) -> Result<CommentInfo, ForumClientError> {
        self.put_json(&format!("comment/{id}"), body).await
    }

    pub async fn delete_comment(&self, id: u32) -> Result<(), ForumClientError> {
        self.delete_unit(&format!("comment/{id}")).await
    }

    pub async fn get_comment(&self, id: u32) -> Result<CommentInfo, ForumClientError> {
        self.get_json(&format!("comment/{id}")).await
    }

    pub async fn get_comments(
        &self,
        query: &GetCommentsQuery,
    ) -> Result<GetDatasExtended<CommentInfo>, ForumClientError> {
        self.get_json_query("comments", query).await
    }

    pub async fn set_comment_status(
        &self,
        id: u32,
        body: &SetCommentStatusBody,
    ) -> Result<(), ForumClientError> {
        self.put_unit(&format!("comment_status/{id}"), body).await
    }
}
