use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum UserStatus {
    Active,
    Banned,
    OnlyComment,
    Observer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum UserType {
    Guest,
    General,
    Administrator,
}

/// Full user record, only ever returned to the account owner
/// (login and revert responses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u32,
    pub email: String,
    pub username: String,
    pub alias: String,
    pub password: String,
    pub group_ids: Vec<u32>,
    pub status: UserStatus,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub signature: String,
    pub created_at: u32,
    pub total_post: u32,
    pub total_comment: u32,
}

/// Public user record with credentials-derived fields stripped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeUserInfo {
    pub id: u32,
    pub username: String,
    pub alias: String,
    pub group_ids: Vec<u32>,
    pub status: UserStatus,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub signature: String,
    pub created_at: u32,
    pub total_post: u32,
    pub total_comment: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserToCreate {
    pub email: String,
    pub username: String,
    pub password: String,
    pub alias: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserToUpdate {
    pub email: String,
    pub username: String,
    pub password: String,
    pub alias: String,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum GetUsersSort {
    Id,
    Username,
    Alias,
    UserType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetUsersQuery {
    pub index: u32,
    pub limit: u32,
    pub sort: GetUsersSort,
    pub desc: bool,
    pub extended: bool,
}

/// Login credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToLoginUser {
    pub username: String,
    pub password: String,
}

/// Issue-session response: the opaque token plus the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthAndUser {
    pub auth: String,
    pub user: UserInfo,
}

/// Query carrying the opaque token for the invalidate/restore endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAuthQuery {
    pub auth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetUserStatusBody {
    pub status: UserStatus,
}
