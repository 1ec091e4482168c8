//! Structured API errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// The server's error-code table. Blocks are spaced per subsystem so codes
/// stay stable as variants are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum DetailErrorCode {
    InternalError = 10000,
    UnsupportedApi,
    IpAddressNotFound,
    TooManyRequests,
    FetchLimit,

    GetVerificationError = 10100,
    VerificationFailed,
    VerificationNotFound,

    LoginRequired = 10200,
    NoLoginRequired,
    NoPermission,
    AuthorizationRevertFailed,
    AuthorizationRequiredInUpdate,

    CreateUserFailed = 10300,
    UsernameAlreadyContain,
    UpdateUserFailed,
    UsernameNotFound,
    UserNotFound,
    PasswordNotMatch,

    PostNotFound = 10400,
    TagsExceedMaximum,

    CategoryNotFound = 10500,
    CategoryAlreadyContain,

    GroupAlreadyContain = 10600,
    GroupNotFound,

    SaveFileFailed = 10700,
    StaticFileNotFound,

    CommentNotFound = 10800,
    SamePostCommentRequired,
    ReplyCommentRequired,
    SameParentCommentRequired,
    ReplyCommentMissing,

    IllegalText = 10900,
    EmailAlreadyContain,
    TooManyTags,
    UneditableTime,

    BannedStatus = 11000,
    CategoryArchived,
    CategoryStopped,
    PostArchived,
}

/// The `{code, msg}` error value surfaced to callers.
///
/// Server-raised errors carry a [`DetailErrorCode`]. Two synthetic codes
/// exist only on the client side:
///
/// - `0`: the failure had no parseable `{code, msg}` body (transport
///   failure, undecodable payload); `msg` holds the raw payload.
/// - `-1`: a local precondition failed before any request was sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDetailError {
    pub code: i64,
    pub msg: String,
}

impl ApiDetailError {
    pub fn new(code: i64, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Lower a raw error payload into a detail error.
    ///
    /// A body that parses as `{code, msg}` is taken as-is; anything else
    /// becomes code `0` with the payload itself as the message.
    pub fn from_payload(payload: &str) -> Self {
        serde_json::from_str(payload).unwrap_or_else(|_| Self::new(0, payload))
    }

    pub fn is(&self, code: DetailErrorCode) -> bool {
        self.code == code as i64
    }
}

impl fmt::Display for ApiDetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}: {}", self.code, self.msg)
    }
}
