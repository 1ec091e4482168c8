use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// What kind of object an upload slot is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum SignedFlag {
    UserAvatar,
    PostCover,
    CategoryCover,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPresignedUrlQuery {
    pub signed_flag: SignedFlag,
    pub filename: String,
}

/// `presigned_url` receives the PUT upload; `object_url` is the public
/// address of the object afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPresignedUrlResult {
    pub object_url: String,
    pub presigned_url: String,
}
