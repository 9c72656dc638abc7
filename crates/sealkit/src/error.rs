//! Error types for sealkit.
//!
//! All errors are strongly typed and propagated without panicking.
//! Key material and plaintext are never included in error messages.

/// Error kinds raised by the crypto facade.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    /// A MAC did not verify. No partial output is ever returned.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The caller passed a buffer of the wrong size or inconsistent key material.
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}

impl CryptoError {
    /// Build a `PreconditionViolation` for a buffer of unexpected length.
    pub fn wrong_size(what: &str, expected: usize, actual: usize) -> Self {
        Self::PreconditionViolation(format!("{what} must be {expected} bytes, got {actual}"))
    }

    /// Whether this error came from a failed MAC check.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Copy `bytes` into a fixed-size array, or fail with `PreconditionViolation`.
pub(crate) fn fixed<const N: usize>(what: &str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| CryptoError::wrong_size(what, N, bytes.len()))
}
