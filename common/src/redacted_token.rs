//! Secure auth token handling with redacted Debug output.

use std::fmt;

use zeroize::Zeroize;

/// An opaque auth token that never exposes its value in logs or debug output.
///
/// The token contents are pass-through: nothing in the client inspects or
/// validates them. The wrapper only exists so that a token cannot end up in
/// a log line by accident, and so the backing memory is zeroized on drop.
#[derive(Clone)]
pub struct RedactedAuthToken {
    inner: String,
}

impl RedactedAuthToken {
    pub fn new(token: String) -> Self {
        Self { inner: token }
    }

    /// Get the actual token value for transmission.
    ///
    /// # Security Note
    /// Only call this when actually attaching the token to a request or
    /// persisting it to the token store.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Token length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedAuthToken([REDACTED])")
    }
}

impl fmt::Display for RedactedAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED AUTH TOKEN]")
    }
}

impl Drop for RedactedAuthToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl From<&str> for RedactedAuthToken {
    fn from(token: &str) -> Self {
        Self::new(token.to_string())
    }
}

impl PartialEq<&str> for RedactedAuthToken {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}
