//! # tlsneg cryptographic provider interface
//!
//! This crate defines the boundary between the TLS server negotiation core and
//! whatever library actually holds keys and performs private key operations.
//!
//! ## Architecture
//!
//! ```text
//! CryptoProvider (main trait)
//! ├── capability queries (bulk ciphers, hashes, signature schemes)
//! ├── AgreementCredential  (static DH / ECDH)
//! ├── SignerCredential     (DHE / ECDHE, signs ServerKeyExchange)
//! └── DecryptorCredential  (RSA key transport)
//! ```
//!
//! Private keys are referenced through [`PrivateKeyHandle`] and never leave
//! the provider.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]

pub mod certificate;
pub mod cipher;
pub mod credential;
pub mod curve;
pub mod error;
pub mod hash;
pub mod key;
pub mod signature;

pub use certificate::{Certificate, DistinguishedName};
pub use cipher::BulkCipher;
pub use credential::{AgreementCredential, DecryptorCredential, SignerCredential};
pub use curve::NamedCurve;
pub use error::{Error, Result};
pub use hash::HashAlgorithm;
pub use key::{KeyType, PrivateKeyHandle};
pub use signature::{SignatureAlgorithm, SignatureScheme};

/// The cryptographic provider trait.
///
/// # Thread Safety
///
/// One provider is shared by every handshake of a server, so implementations
/// must be `Send + Sync`.
///
/// # Failure
///
/// The credential constructors fail only when the provider cannot produce the
/// requested kind of object at all. The negotiation core treats that as a
/// fatal internal error, never as a reason to try another cipher suite.
pub trait CryptoProvider: Send + Sync + 'static {
    /// Check if the provider implements a record-layer bulk cipher.
    fn supports_cipher(&self, cipher: BulkCipher) -> bool;

    /// Check if the provider implements a hash (PRF / MAC) algorithm.
    fn supports_hash(&self, hash: HashAlgorithm) -> bool;

    /// Check if the provider can sign and verify with a signature scheme.
    fn supports_signature_scheme(&self, scheme: SignatureScheme) -> bool;

    /// Build a static key agreement credential.
    fn agreement_credential(
        &self,
        certificate_chain: Vec<Certificate>,
        private_key: PrivateKeyHandle,
    ) -> Result<Box<dyn AgreementCredential>>;

    /// Build a signing credential.
    fn signer_credential(
        &self,
        certificate_chain: Vec<Certificate>,
        private_key: PrivateKeyHandle,
        signature_scheme: Option<SignatureScheme>,
    ) -> Result<Box<dyn SignerCredential>>;

    /// Build an RSA key transport credential.
    fn decryptor_credential(
        &self,
        certificate_chain: Vec<Certificate>,
        private_key: PrivateKeyHandle,
    ) -> Result<Box<dyn DecryptorCredential>>;

    /// Every signature scheme this provider supports, strongest first.
    fn supported_signature_schemes(&self) -> Vec<SignatureScheme> {
        SignatureScheme::ALL
            .iter()
            .copied()
            .filter(|scheme| self.supports_signature_scheme(*scheme))
            .collect()
    }
}
