use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum UserNotificationType {
    Comment,
    ReplyComment,
    LikePost,
    DislikePost,
    LikeComment,
    DislikeComment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNotification {
    pub id: u32,
    pub ref_id: u32,
    pub target_user_id: u32,
    pub created_by_id: u32,
    pub created_at: u32,
    pub n_type: UserNotificationType,
    pub readed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUserNotificationsQuery {
    pub index: u32,
    pub limit: u32,
    pub extended: bool,
    pub only_unread: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetUserNotificationReadedQuery {
    pub id: u32,
    pub readed: bool,
}
