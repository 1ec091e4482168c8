pub mod api;
pub mod auth;
pub mod error;

#[cfg(test)]
mod tests;

pub use api::ForumClient;
pub use auth::AuthSession;
pub use auth::token_store::TokenStore;

pub const FORUM_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const FORUM_SERVER_PORT: u16 = 6688;

/// Default API root when the embedding application does not supply one.
pub const FORUM_SERVER_BASE_URL: &str = const_format::concatcp!(
    "http://",
    FORUM_SERVER_HOSTNAME,
    ":",
    FORUM_SERVER_PORT,
    "/api/"
);
