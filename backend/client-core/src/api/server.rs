use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::server::ServerInfo;

impl ForumClient {
    /// Server-published configuration; the auth session consults
    /// `auth_active_days` from here when persisting tokens.
    pub async fn get_server_info(&self) -> Result<ServerInfo, ForumClientError> {
        self.get_json("server_info").await
    }
}
