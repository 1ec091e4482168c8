//! Domain models for the forum client.
//!
//! This crate contains pure data structures mirroring the forum server's
//! wire contract. Models have no business logic - they're just data that can
//! be passed between layers.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: API wrappers and session logic operating on models
//! - the embedding application: wiring everything together
//!
//! ## Wire conventions
//!
//! The server encodes every enum as an integer, ids and counters as `u32`,
//! and timestamps as unix seconds. Enums here therefore derive
//! `Serialize_repr`/`Deserialize_repr` instead of serde's default
//! string-tagged representation.

pub mod category;
pub mod comment;
pub mod detail_error;
pub mod extended;
pub mod group;
pub mod like;
pub mod notification;
pub mod post;
pub mod server;
pub mod storage;
pub mod user;
pub mod verification;

#[cfg(test)]
mod tests;

use serde_repr::{Deserialize_repr, Serialize_repr};

/// How a piece of user-authored text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ContentType {
    Markdown,
}
