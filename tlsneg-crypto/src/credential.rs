//! Credential objects built by a crypto provider.
//!
//! Each object binds a certificate chain to a private key handle and exposes
//! only the operation its key exchange needs. The negotiation core selects
//! which object to build; the object performs the private key operation later,
//! when the key exchange runs.

use crate::{Certificate, Result, SignatureScheme};
use std::fmt;
use zeroize::Zeroizing;

/// Static (EC)DH credential: the certificate's public key is the server's
/// key agreement share.
pub trait AgreementCredential: Send + Sync + fmt::Debug {
    /// Certificate chain, leaf first.
    fn certificate_chain(&self) -> &[Certificate];

    /// Compute the shared secret with the peer's public value.
    fn generate_agreement(&self, peer_public_key: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}

/// Signing credential for ephemeral (EC)DHE key exchange.
pub trait SignerCredential: Send + Sync + fmt::Debug {
    /// Certificate chain, leaf first.
    fn certificate_chain(&self) -> &[Certificate];

    /// Explicit signature scheme, or `None` before TLS 1.2 where the scheme is
    /// implied by the key type.
    fn signature_scheme(&self) -> Option<SignatureScheme>;

    /// Sign `message` (the ServerKeyExchange parameters).
    fn generate_signature(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// RSA key transport credential.
pub trait DecryptorCredential: Send + Sync + fmt::Debug {
    /// Certificate chain, leaf first.
    fn certificate_chain(&self) -> &[Certificate];

    /// Decrypt the client's encrypted premaster secret.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}
