use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Which entity kind a like status refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum LikeStatusFlag {
    TargetPost,
    TargetComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum LikeAction {
    Like,
    Dislike,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeStatus {
    pub flag: LikeStatusFlag,
    pub flag_ref_id: u32,
    pub created_by_id: u32,
    pub created_at: u32,
    pub is_like: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetLikeStatusQuery {
    pub flag_ref_id: u32,
    pub flag: LikeStatusFlag,
    pub created_by_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeActionBody {
    pub flag: LikeStatusFlag,
    pub action: LikeAction,
}
