use crate::ContentType;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CommentStatus {
    Active,
    Banned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentInfo {
    pub id: u32,
    pub parent_id: u32,
    pub created_at: u32,
    pub last_comment_at: u32,
    pub created_by_id: u32,
    pub last_comment_by_id: u32,
    pub last_edit_at: u32,
    pub last_edit_by_id: u32,
    pub content: String,
    pub content_type: ContentType,
    pub category_id: u32,
    pub post_id: u32,
    pub reply_user_id: u32,
    pub reply_comment_id: u32,
    pub likes: u32,
    pub dislikes: u32,
    pub status: CommentStatus,
    pub total_comment: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentToCreate {
    pub content: String,
    pub content_type: ContentType,
    pub post_id: u32,
    pub reply_comment_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_index: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentToUpdate {
    pub content: String,
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_index: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GetCommentsSort {
    Id,
    Likes,
    Dislikes,
    TotalPost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetCommentsQuery {
    pub post_id: u32,
    pub parent_id: u32,
    pub index: u32,
    pub limit: u32,
    pub sort: GetCommentsSort,
    pub desc: bool,
    pub extended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_order_enable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCommentStatusBody {
    pub status: CommentStatus,
}
