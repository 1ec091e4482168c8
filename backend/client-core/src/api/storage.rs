use crate::api::ForumClient;
use crate::error::forum_client::ForumClientError;

use models::storage::{GetPresignedUrlQuery, GetPresignedUrlResult};

use url::Url;

impl ForumClient {
    /// Ask the server for a presigned upload slot.
    pub async fn get_presign_put_url(
        &self,
        query: &GetPresignedUrlQuery,
    ) -> Result<GetPresignedUrlResult, ForumClientError> {
        self.get_json_query("presign_put_url", query).await
    }

    /// PUT raw bytes to a presigned URL from [`Self::get_presign_put_url`].
    ///
    /// The presigned URL is absolute (it may point at an object store, not
    /// the API host), so it is parsed as-is instead of joined onto the base
    /// URL. The usual header set still applies; local storage backends
    /// check `x-authorization` on upload.
    pub async fn upload_file(
        &self,
        presigned_url: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ForumClientError> {
        let url = Url::parse(presigned_url)?;
        let response = self
            .prepare_request(self.client.put(url).body(bytes))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
