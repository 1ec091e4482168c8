//! Client-side session state.
//!
//! [`AuthSession`] owns the current-user and last-error cells and is the
//! only mutator of both. It orchestrates the three remote session
//! operations (issue, invalidate, restore) against the persisted
//! [`TokenStore`]:
//!
//! - `Anonymous`: no user loaded
//! - `Authenticating`: a login or revert round trip is in flight
//! - `Authenticated`: user loaded; a token was validated at some point
//! - back to `Anonymous` on logout or any failure
//!
//! # Thread Safety
//!
//! `AuthSession` is `Clone` and all clones share the same state. Reads go
//! through `RwLock` read guards and never block on each other. Mutations
//! are plain last-write-wins assignments with no mutual exclusion across an
//! operation's await points: two session operations racing each other is
//! outside the supported contract (UI flows issue them serially), and the
//! worst outcome is a stale user/error value, never a torn one.
//!
//! # Failure Surfacing
//!
//! Operations return `bool` and never raise. Every failure is lowered into
//! the shared `{code, msg}` error cell for the UI to render; the cell is
//! cleared at the start of each operation.

pub mod guard;
pub mod token_store;

pub use token_store::TokenStore;

use crate::api::ForumClient;
use crate::error::CoreError;

use models::detail_error::ApiDetailError;
use models::server::ServerInfo;
use models::user::{ToLoginUser, UserInfo};
use models::verification::{VerificationKey, VerificationTargetWrapper};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::RwLock;

/// Token expiry applied when the server's `auth_active_days` cannot be
/// fetched.
pub const DEFAULT_AUTH_ACTIVE_DAYS: u32 = 1;

const NO_AUTH_SAVED_CODE: i64 = -1;
const NO_AUTH_SAVED_MSG: &str = "No authorization saved.";

/// Process-wide session context, passed by reference (or cloned) to every
/// consumer instead of living in a hidden global.
#[derive(Clone)]
pub struct AuthSession {
    client: ForumClient,

    /// Present iff authenticated.
    current_user: Arc<RwLock<Option<UserInfo>>>,

    /// Error from the most recent failed operation, if any.
    last_error: Arc<RwLock<Option<ApiDetailError>>>,

    /// Server config, fetched lazily once and cached for token expiry.
    server_info: Arc<RwLock<Option<ServerInfo>>>,
}

impl AuthSession {
    pub fn new(client: ForumClient) -> Self {
        Self {
            client,
            current_user: Arc::new(RwLock::new(None)),
            last_error: Arc::new(RwLock::new(None)),
            server_info: Arc::new(RwLock::new(None)),
        }
    }

    /// Session against [`crate::FORUM_SERVER_BASE_URL`] with the token
    /// store under the platform config directory.
    pub fn with_defaults() -> Result<Self, CoreError> {
        let tokens = TokenStore::from_default_dir()?;
        let client = ForumClient::new(crate::FORUM_SERVER_BASE_URL, tokens)?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &ForumClient {
        &self.client
    }

    /// The token store shared with the HTTP client's header injection.
    pub fn token_store(&self) -> &TokenStore {
        self.client.token_store()
    }

    pub async fn current_user(&self) -> Option<UserInfo> {
        self.current_user.read().await.clone()
    }

    pub async fn last_error(&self) -> Option<ApiDetailError> {
        self.last_error.read().await.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current_user.read().await.is_some()
    }

    async fn clear_last_error(&self) {
        *self.last_error.write().await = None;
    }

    async fn set_last_error(&self, detail: ApiDetailError) {
        warn!("Session operation failed: {}", detail);
        *self.last_error.write().await = Some(detail);
    }

    /// Server config, fetched on first use and cached for the session's
    /// lifetime. `None` when the fetch fails; callers fall back to
    /// defaults.
    async fn server_info_once(&self) -> Option<ServerInfo> {
        if let Some(info) = self.server_info.read().await.clone() {
            return Some(info);
        }
        match self.client.get_server_info().await {
            Ok(info) => {
                *self.server_info.write().await = Some(info.clone());
                Some(info)
            }
            Err(error) => {
                warn!("Could not fetch server info: {}", error);
                None
            }
        }
    }

    /// Persist `token` with the server-configured expiry.
    ///
    /// Persistence failures are logged and swallowed: the remote session is
    /// already live at this point, and the in-memory session stays usable
    /// for the rest of the process.
    async fn save_token(&self, token: &str) {
        let days = self
            .server_info_once()
            .await
            .map(|info| info.auth_active_days)
            .unwrap_or(DEFAULT_AUTH_ACTIVE_DAYS);

        if let Err(error) = self.token_store().set(token, days) {
            warn!("Failed to persist auth token: {}", error);
        }
    }

    /// Issue a session from credentials plus an optional verification proof.
    ///
    /// On success the returned user becomes the current user and the
    /// returned token is persisted. On failure the error cell gets the
    /// server's `{code, msg}` (or a code-0 fallback) and any existing token
    /// is left in place.
    pub async fn login(
        &self,
        credentials: ToLoginUser,
        verification: Option<VerificationKey>,
    ) -> bool {
        self.clear_last_error().await;

        let body = VerificationTargetWrapper {
            target: credentials,
            verification,
        };

        match self.client.login_user(&body).await {
            Ok(anu) => {
                info!("Logged in as '{}' (id {})", anu.user.username, anu.user.id);
                *self.current_user.write().await = Some(anu.user);
                self.save_token(&anu.auth).await;
                true
            }
            Err(error) => {
                self.set_last_error(error.detail()).await;
                false
            }
        }
    }

    /// Invalidate the current session.
    ///
    /// Without a stored token this is a local precondition failure: no
    /// remote call, error code `-1`. With one, the remote invalidation is
    /// best-effort notification - the local session and token are cleared
    /// regardless of the remote outcome, and the operation reports success
    /// based on that local clearing.
    pub async fn logout(&self) -> bool {
        self.clear_last_error().await;

        let Some(token) = self.token_store().get() else {
            self.set_last_error(ApiDetailError::new(NO_AUTH_SAVED_CODE, NO_AUTH_SAVED_MSG))
                .await;
            return false;
        };

        if let Err(error) = self.client.logout_user(token.as_str()).await {
            self.set_last_error(error.detail()).await;
        }

        *self.current_user.write().await = None;
        self.token_store().remove();
        info!("Logged out locally");
        true
    }

    /// Restore a session from the persisted token (e.g. on startup, or when
    /// navigation finds a token without a loaded session).
    ///
    /// A `manual_token` overwrites the stored one first. Without any token
    /// this is a silent no-op returning `false`. A rejected or undecodable
    /// restore clears both the token and the session, so a known-bad token
    /// is never retried.
    pub async fn revert(&self, manual_token: Option<&str>) -> bool {
        if let Some(token) = manual_token {
            self.save_token(token).await;
        }

        self.clear_last_error().await;

        let Some(token) = self.token_store().get() else {
            return false;
        };

        match self.client.revert_user(token.as_str()).await {
            Ok(user) => {
                info!("Session restored for '{}' (id {})", user.username, user.id);
                *self.current_user.write().await = Some(user);
                true
            }
            Err(error) => {
                if error.status().is_some_and(|status| status.is_auth_rejection()) {
                    info!(
                        "Stored auth token ({} bytes) rejected by server, discarding",
                        token.len()
                    );
                }
                self.set_last_error(error.detail()).await;
                self.token_store().remove();
                *self.current_user.write().await = None;
                false
            }
        }
    }
}
