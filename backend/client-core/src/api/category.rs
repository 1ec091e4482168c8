use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::category::{
    Category, CategoryToCreate, CategoryToUpdate, GetCategoriesQuery, SetCategoryStatusBody,
};
use models::extended::GetDatasExtended;
use models::verification::VerificationTargetWrapper;

impl ForumClient {
    pub async fn get_categories(
        &self,
        query: &GetCategoriesQuery,
    ) -> Result<GetDatasExtended<Category>, ForumClientError> {
        self.get_json_query("categories", query).await
    }

    pub async fn get_category(&self, id: u32) -> Result<Category, ForumClientError> {
        self.get_json(&format!("category/{id}")).await
    }

    pub async fn create_category(
        &self,
        body: &VerificationTargetWrapper<CategoryToCreate>,
    ) -> Result<Category, ForumClientError> {
        self.post_json("category", body).await
    }

    pub async fn update_category(
        &self,
        id: u32,
        body: &VerificationTargetWrapper<CategoryToUpdate>,
    ) -> Result<Category, ForumClientError> {
        self.put_json(&format!("category/{id}"), body).await
    }

    pub async fn set_category_status(
        &self,
        id: u32,
        body: &SetCategoryStatusBody,
    ) -> Result<Category, ForumClientError> {
        self.put_json(&format!("category_status/{id}"), body).await
    }
}
