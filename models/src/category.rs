use crate::ContentType;
use crate::user::{SafeUserInfo, UserType};

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CategoryStatus {
    Active,
    Archived,
    Stopped,
}

/// A forum category. The three `*_level` fields are the minimum
/// [`UserType`] required to read, post, or comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub description_content_type: ContentType,
    pub status: CategoryStatus,
    pub read_level: UserType,
    pub write_level: UserType,
    pub comment_level: UserType,
    pub moderator_ids: Vec<u32>,
    pub group_ids: Vec<u32>,
    pub total_post: u32,
}

impl Category {
    /// Whether `user` moderates this category. Administrators moderate
    /// everything.
    pub fn has_manage_permission(&self, user: &SafeUserInfo) -> bool {
        user.user_type == UserType::Administrator || self.moderator_ids.contains(&user.id)
    }

    /// Whether a user of `level` may open this category at all.
    pub fn readable_by(&self, level: UserType) -> bool {
        level >= self.read_level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryToCreate {
    pub title: String,
    pub description: String,
    pub description_content_type: ContentType,
    pub status: CategoryStatus,
    pub read_level: UserType,
    pub write_level: UserType,
    pub comment_level: UserType,
    pub moderator_ids: Vec<u32>,
    pub group_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryToUpdate {
    pub title: String,
    pub description: String,
    pub description_content_type: ContentType,
    pub status: CategoryStatus,
    pub read_level: UserType,
    pub write_level: UserType,
    pub comment_level: UserType,
    pub moderator_ids: Vec<u32>,
    pub group_ids: Vec<u32>,
    pub total_post: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GetCategoriesSort {
    Id,
    Title,
    TotalPost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCategoriesQuery {
    pub index: u32,
    pub limit: u32,
    pub sort: GetCategoriesSort,
    pub desc: bool,
    pub extended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCategoryStatusBody {
    pub status: CategoryStatus,
}
