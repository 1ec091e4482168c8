use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TokenStoreError {
    #[error("Failed to write auth record at {}: {source} {location}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to encode auth record: {reason} {location}")]
    Serialize {
        reason: String,
        location: ErrorLocation,
    },

    #[error("No platform config directory available {location}")]
    NoStoreDir { location: ErrorLocation },
}
