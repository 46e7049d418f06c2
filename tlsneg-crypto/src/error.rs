//! Error types for the cryptographic provider.

/// Result type for cryptographic provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that a [`CryptoProvider`](crate::CryptoProvider) or one of its
/// credential objects can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The provider cannot build the requested kind of credential object.
    #[error("credential type not supported by provider: {0}")]
    UnsupportedCredential(&'static str),

    /// The requested algorithm is not supported by this provider.
    #[error("algorithm not supported: {0}")]
    UnsupportedAlgorithm(String),

    /// The key handle does not refer to a key the provider can use.
    #[error("invalid private key handle")]
    InvalidKey,

    /// Signature generation failed.
    #[error("signature generation failed")]
    SigningFailed,

    /// Decryption of the key transport payload failed.
    #[error("decryption failed")]
    DecryptionFailed,

    /// Key agreement failed.
    #[error("key agreement failed")]
    AgreementFailed,

    /// Internal error (should not happen in correct usage).
    #[error("internal error: {0}")]
    Internal(String),
}
