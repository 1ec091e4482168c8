//! HTTP plumbing shared by every API wrapper module.
//!
//! [`ForumClient`] is a thin fetch wrapper around [`reqwest::Client`]: it
//! resolves the base URL, injects the per-request header set once per
//! request, and maps non-success responses into structured errors. The
//! per-resource endpoint wrappers live in the submodules and are all
//! `impl ForumClient` blocks.
//!
//! There is deliberately no retry, backoff, or caching at this layer; a
//! single failed round trip is terminal for that call.

pub mod category;
pub mod comment;
pub mod group;
pub mod like;
pub mod notification;
pub mod post;
pub mod server;
pub mod storage;
pub mod user;
pub mod verification;

use crate::auth::token_store::TokenStore;
use crate::error::forum_client::ForumClientError;

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Header carrying the opaque auth token.
pub const AUTHORIZATION_HEADER_KEY: &str = "x-authorization";
/// Client address forwarded to the server when this client acts as a relay.
pub const FORWARDED_FOR_HEADER_KEY: &str = "x-forwarded-for";
/// Rate-limit bypass key issued to trusted deployments.
pub const BYPASS_KEY_HEADER_KEY: &str = "x-bypass-key";

/// HTTP client for the forum API.
///
/// Holds the resolved base URL, the underlying connection pool, and the
/// header-injection policy. `Clone` is cheap and clones share the pool and
/// the token store.
#[derive(Clone)]
pub struct ForumClient {
    base_url: Url,
    client: Client,
    tokens: TokenStore,
    pub forwarded_for: Option<String>,
    pub bypass_key: Option<String>,
}

impl ForumClient {
    /// Create a client against `base_url_str` (e.g. [`crate::FORUM_SERVER_BASE_URL`]).
    ///
    /// The base URL must end with a trailing slash so endpoint paths join
    /// underneath it.
    pub fn new(base_url_str: &str, tokens: TokenStore) -> Result<Self, ForumClientError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self {
            base_url,
            client,
            tokens,
            forwarded_for: None,
            bypass_key: None,
        })
    }

    /// The token store this client reads its `x-authorization` header from.
    pub fn token_store(&self) -> &TokenStore {
        &self.tokens
    }

    fn endpoint(&self, path: &str) -> Result<Url, ForumClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Resolve the header-injection policy for one request.
    ///
    /// The token is re-read from the store on every call, so a login or
    /// logout between two requests is picked up without rebuilding the
    /// client.
    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        let mut request = request;
        if let Some(token) = self.tokens.get() {
            request = request.header(AUTHORIZATION_HEADER_KEY, token.as_str());
        }
        if let Some(addr) = &self.forwarded_for {
            request = request.header(FORWARDED_FOR_HEADER_KEY, addr);
        }
        if let Some(key) = &self.bypass_key {
            request = request.header(BYPASS_KEY_HEADER_KEY, key);
        }
        request
    }

    /// Pass through success responses; lower anything else to
    /// [`ForumClientError::Api`] with the parsed `{code, msg}` body.
    async fn check_status(response: Response) -> Result<Response, ForumClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let payload = response.text().await.unwrap_or_default();
        Err(ForumClientError::api(status.as_u16(), &payload))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ForumClientError> {
        let payload = response.text().await?;
        Ok(serde_json::from_str(&payload)?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self.prepare_request(self.client.get(url)).send().await?;
        Self::decode(Self::check_status(response).await?).await
    }

    pub(crate) async fn get_json_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .prepare_request(self.client.get(url).query(query))
            .send()
            .await?;
        Self::decode(Self::check_status(response).await?).await
    }

    pub(crate) async fn get_unit_query<Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<(), ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .prepare_request(self.client.get(url).query(query))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .prepare_request(self.client.post(url).json(body))
            .send()
            .await?;
        Self::decode(Self::check_status(response).await?).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .prepare_request(self.client.put(url).json(body))
            .send()
            .await?;
        Self::decode(Self::check_status(response).await?).await
    }

    pub(crate) async fn put_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self
            .prepare_request(self.client.put(url).json(body))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ForumClientError> {
        let url = self.endpoint(path)?;
        let response = self.prepare_request(self.client.delete(url)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}
