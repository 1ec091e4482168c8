//! Shared plumbing for the forum client workspace.
//!
//! This crate holds the small pieces every other crate leans on:
//!
//! - **error location capture**: [`ErrorLocation`] records the file, line,
//!   and column an error was raised from, so every error variant in the
//!   workspace can carry its origin.
//! - **status categorization**: [`HttpStatusCode`] classifies response codes
//!   without parsing error message strings.
//! - **token redaction**: [`RedactedAuthToken`] wraps the opaque auth token
//!   so it never leaks through `Debug` or log output, and is zeroized when
//!   dropped.
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting helpers with no domain knowledge
//! - **models**: pure data structures mirroring the server wire contract
//! - **client-core**: API wrappers and session logic operating on both

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedAuthToken;
