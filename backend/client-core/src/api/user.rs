//! User endpoints, including the three session operations the auth state
//! machine drives: issue (`login_user`), invalidate (`logout_user`), and
//! restore (`revert_user`).

use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::extended::GetDatasExtended;
use models::user::{
    AuthAndUser, GetUsersQuery, SafeUserInfo, SetUserStatusBody, ToLoginUser, UserAuthQuery,
    UserInfo, UserToCreate, UserToUpdate,
};
use models::verification::VerificationTargetWrapper;

impl ForumClient {
    /// Register a new account. The response carries a live session token.
    pub async fn create_user(
        &self,
        body: &VerificationTargetWrapper<UserToCreate>,
    ) -> Result<AuthAndUser, ForumClientError> {
        self.post_json("user", body).await
    }

    pub async fn update_user(
        &self,
        id: u32,
        body: &VerificationTargetWrapper<UserToUpdate>,
    ) -> Result<UserInfo, ForumClientError> {
        self.put_json(&format!("user/{id}"), body).await
    }

    pub async fn get_users(
        &self,
        query: &GetUsersQuery,
    ) -> Result<GetDatasExtended<SafeUserInfo>, ForumClientError> {
        self.get_json_query("users", query).await
    }

    pub async fn get_user(&self, id: u32) -> Result<SafeUserInfo, ForumClientError> {
        self.get_json(&format!("user/{id}")).await
    }

    /// Issue a session for `body.target`'s credentials.
    pub async fn login_user(
        &self,
        body: &VerificationTargetWrapper<ToLoginUser>,
    ) -> Result<AuthAndUser, ForumClientError> {
        self.post_json("login_user", body).await
    }

    /// Invalidate the session behind `auth` server-side.
    pub async fn logout_user(&self, auth: &str) -> Result<(), ForumClientError> {
        let query = UserAuthQuery {
            auth: auth.to_string(),
        };
        self.get_unit_query("logout_user", &query).await
    }

    /// Restore the session behind `auth`, returning its user record.
    pub async fn revert_user(&self, auth: &str) -> Result<UserInfo, ForumClientError> {
        let query = UserAuthQuery {
            auth: auth.to_string(),
        };
        self.get_json_query("revert_user", &query).await
    }

    pub async fn set_user_status(
        &self,
        id: u32,
        body: &SetUserStatusBody,
    ) -> Result<(), ForumClientError> {
        self.put_unit(&format!("user_status/{id}"), body).await
    }
}
