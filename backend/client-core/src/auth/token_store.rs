//! Persisted auth token with whole-day expiry.
//!
//! The browser build of this client keeps the token in an `authorization`
//! cookie; here it lives in a single JSON record under a configurable
//! directory. Token contents are opaque pass-through - nothing validates or
//! inspects them.

use crate::error::token_store::TokenStoreError;

use common::{ErrorLocation, RedactedAuthToken};

use std::fs;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Name of the persisted record, fixed by the wire contract.
pub const AUTH_TOKEN_NAME: &str = "authorization";

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct TokenRecord {
    token: String,
    /// Unix seconds after which the record reads as absent.
    expires_at: u64,
}

/// File-backed store for the opaque auth token.
///
/// `Clone` is cheap; clones share the same on-disk location. Expired or
/// undecodable records are deleted on read, so a bad record is only ever
/// reported absent once.
#[derive(Debug, Clone)]
pub struct TokenStore {
    dir: Arc<PathBuf>,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
        }
    }

    /// Store under the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns [`TokenStoreError::NoStoreDir`] when the platform exposes no
    /// config directory (some containerized environments).
    pub fn from_default_dir() -> Result<Self, TokenStoreError> {
        let base = dirs::config_dir().ok_or_else(|| TokenStoreError::NoStoreDir {
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(Self::new(base.join("forum-client")))
    }

    fn record_path(&self) -> PathBuf {
        self.dir.join(AUTH_TOKEN_NAME)
    }

    /// Current token, or `None` when nothing usable is stored.
    pub fn get(&self) -> Option<RedactedAuthToken> {
        let contents = fs::read_to_string(self.record_path()).ok()?;

        let record: TokenRecord = match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(error) => {
                warn!("Discarding undecodable auth record: {}", error);
                self.remove();
                return None;
            }
        };

        if unix_now() >= record.expires_at {
            debug!("Stored auth token expired, removing");
            self.remove();
            return None;
        }

        Some(RedactedAuthToken::new(record.token))
    }

    /// Persist `token` for `expiry_days` whole days, replacing any previous
    /// record.
    pub fn set(&self, token: &str, expiry_days: u32) -> Result<(), TokenStoreError> {
        fs::create_dir_all(self.dir.as_ref()).map_err(|e| TokenStoreError::Write {
            path: self.dir.as_ref().clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let record = TokenRecord {
            token: token.to_string(),
            expires_at: unix_now() + u64::from(expiry_days) * SECONDS_PER_DAY,
        };

        let json = serde_json::to_string_pretty(&record).map_err(|e| {
            TokenStoreError::Serialize {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let path = self.record_path();
        let temp_path = self.dir.join(format!("{AUTH_TOKEN_NAME}.tmp"));

        fs::write(&temp_path, json).map_err(|e| TokenStoreError::Write {
            path: temp_path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic rename, so a crash never leaves a torn record.
        fs::rename(&temp_path, &path).map_err(|e| TokenStoreError::Write {
            path: path.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!("Auth token persisted for {} day(s)", expiry_days);
        Ok(())
    }

    /// Delete any stored token. A missing record is not an error.
    pub fn remove(&self) {
        if let Err(error) = fs::remove_file(self.record_path()) {
            if error.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove auth record: {}", error);
            }
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
