use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::verification::VerificationKeyPicture;

impl ForumClient {
    /// Fetch a fresh human-verification challenge.
    pub async fn get_verification(&self) -> Result<VerificationKeyPicture, ForumClientError> {
        self.get_json("verification").await
    }
}
