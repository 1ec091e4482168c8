pub mod forum_client;
pub mod token_store;

pub use forum_client::ForumClientError;
pub use token_store::TokenStoreError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] forum_client::ForumClientError),

    #[error(transparent)]
    TokenStore(#[from] token_store::TokenStoreError),
}
