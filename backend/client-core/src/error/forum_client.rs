use common::{ErrorLocation, HttpStatusCode};
use models::detail_error::ApiDetailError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ForumClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("API Error: HTTP {status} - {detail} {location}")]
    Api {
        status: HttpStatusCode,
        detail: ApiDetailError,
        location: ErrorLocation,
    },
}

impl ForumClientError {
    /// Build the [`ForumClientError::Api`] variant from a non-success
    /// response's status and raw body.
    #[track_caller]
    pub(crate) fn api(status: u16, payload: &str) -> Self {
        ForumClientError::Api {
            status: HttpStatusCode(status),
            detail: ApiDetailError::from_payload(payload),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Lower any failure to the `{code, msg}` shape the session state holds.
    ///
    /// Structured server errors pass through; transport and decode failures
    /// become code `0` with the error text as the message.
    pub fn detail(&self) -> ApiDetailError {
        match self {
            ForumClientError::Api { detail, .. } => detail.clone(),
            other => ApiDetailError::new(0, other.to_string()),
        }
    }

    /// HTTP status, when the failure got as far as a response.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ForumClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ForumClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ForumClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ForumClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ForumClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ForumClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ForumClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
