//! List responses and their optional sideloaded entities.

use crate::category::Category;
use crate::comment::CommentInfo;
use crate::group::Group;
use crate::like::LikeStatus;
use crate::post::PostInfo;
use crate::user::SafeUserInfo;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One page of a listing plus the total count across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSlice<T> {
    pub items: Vec<T>,
    pub total: u32,
}

/// A listing page with the related entities the server sideloads when the
/// query asked for `extended`.
///
/// The maps are keyed by entity id. Which maps are present depends on the
/// endpoint; absent maps deserialize as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetDatasExtended<T> {
    pub data: ListSlice<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<HashMap<u32, PostInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<HashMap<u32, CommentInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<HashMap<u32, Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<HashMap<u32, Group>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<HashMap<u32, SafeUserInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_like_status: Option<HashMap<u32, LikeStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments_like_status: Option<HashMap<u32, LikeStatus>>,
}

impl<T> GetDatasExtended<T> {
    pub fn post(&self, id: u32) -> Option<&PostInfo> {
        self.posts.as_ref()?.get(&id)
    }

    pub fn comment(&self, id: u32) -> Option<&CommentInfo> {
        self.comments.as_ref()?.get(&id)
    }

    pub fn category(&self, id: u32) -> Option<&Category> {
        self.categories.as_ref()?.get(&id)
    }

    pub fn group(&self, id: u32) -> Option<&Group> {
        self.groups.as_ref()?.get(&id)
    }

    pub fn user(&self, id: u32) -> Option<&SafeUserInfo> {
        self.users.as_ref()?.get(&id)
    }

    pub fn post_like_status(&self, id: u32) -> Option<&LikeStatus> {
        self.posts_like_status.as_ref()?.get(&id)
    }

    pub fn comment_like_status(&self, id: u32) -> Option<&LikeStatus> {
        self.comments_like_status.as_ref()?.get(&id)
    }
}
