use crate::ContentType;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PostStatus {
    Active,
    Archived,
    Banned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum PostAlgorithmOrder {
    Hot,
    Views,
    Likes,
    Newest,
}

/// A post as returned by the server. `content` is omitted by the listing
/// endpoint and present on single-post fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostInfo {
    pub id: u32,
    pub created_by_id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub content_type: ContentType,
    pub likes: u32,
    pub dislikes: u32,
    pub views: u32,
    pub total_comment: u32,
    pub total_comment_post: u32,
    pub last_comment_at: u32,
    pub last_comment_by_id: u32,
    pub category_id: u32,
    pub tags: Vec<String>,
    pub created_at: u32,
    pub last_edit_at: u32,
    pub last_edit_by_id: u32,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostToCreate {
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub category_id: u32,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostToUpdate {
    pub title: String,
    pub content: String,
    pub content_type: ContentType,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPostsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u32>,
    pub sort: PostAlgorithmOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub index: u32,
    pub limit: u32,
    pub extended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_order_enable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPostStatusBody {
    pub status: PostStatus,
}
