use crate::ContentType;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GroupStatus {
    Active,
    OnlyComment,
    Observer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub description_content_type: ContentType,
    pub status: GroupStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupToCreateUpdate {
    pub title: String,
    pub description: String,
    pub description_content_type: ContentType,
    pub status: GroupStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GetGroupsSort {
    Id,
    Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGroupsQuery {
    pub index: u32,
    pub limit: u32,
    pub sort: GetGroupsSort,
    pub desc: bool,
    pub extended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetGroupStatusBody {
    pub status: GroupStatus,
}
