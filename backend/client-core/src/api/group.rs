use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::extended::GetDatasExtended;
use models::group::{GetGroupsQuery, Group, GroupToCreateUpdate, SetGroupStatusBody};
use models::verification::VerificationTargetWrapper;

impl ForumClient {
    pub async fn create_group(
        &self,
        body: &VerificationTargetWrapper<GroupToCreateUpdate>,
    ) -> Result<Group, ForumClientError> {
        self.post_json("group", body).await
    }

    pub async fn update_group(
        &self,
        id: u32,
        body: &VerificationTargetWrapper<GroupToCreateUpdate>,
    ) -> Result<Group, ForumClientError> {
        self.put_json(&format!("group/{id}"), body).await
    }

    pub async fn get_group(&self, id: u32) -> Result<Group, ForumClientError> {
        self.get_json(&format!("group/{id}")).await
    }

    pub async fn get_groups(
        &self,
        query: &GetGroupsQuery,
    ) -> Result<GetDatasExtended<Group>, ForumClientError> {
        self.get_json_query("groups", query).await
    }

    pub async fn set_group_status(
        &self,
        id: u32,
        body: &SetGroupStatusBody,
    ) -> Result<(), ForumClientError> {
        self.put_unit(&format!("group_status/{id}"), body).await
    }
}
