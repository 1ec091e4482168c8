use serde::{Deserialize, Serialize};

/// Server-published configuration consumed by clients.
///
/// `auth_active_days` drives the expiry of persisted auth tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub editable_seconds: u32,
    pub open_register: bool,
    pub custom_post_cover_supported: bool,
    pub auth_active_days: u32,
}
