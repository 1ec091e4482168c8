use serde::{Deserialize, Serialize};

/// Solved human-verification proof attached to mutating requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationKey {
    pub verification_id: u32,
    pub secret_key: String,
}

/// A fresh challenge: the id plus the picture holding the secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationKeyPicture {
    pub verification_id: u32,
    pub secret_key_picture_url: String,
}

/// Request wrapper pairing a payload with an optional verification proof.
///
/// The server decides per endpoint and per configuration whether the proof
/// is required; the wrapper always travels in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationTargetWrapper<T> {
    pub target: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<VerificationKey>,
}
