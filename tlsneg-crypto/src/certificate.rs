//! Already-parsed X.509 certificates.
//!
//! Parsing is done by whoever owns the key store or trust store; this type only
//! carries the DER bytes together with the few attributes negotiation needs.

use crate::KeyType;
use bytes::Bytes;

/// DER-encoded X.500 distinguished name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistinguishedName(Bytes);

impl DistinguishedName {
    /// Wrap an encoded name.
    pub fn from_der(der: impl Into<Bytes>) -> Self {
        Self(der.into())
    }

    /// The encoded name.
    pub fn as_der(&self) -> &[u8] {
        &self.0
    }
}

/// A certificate with its DER encoding, subject name and public key type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    der: Bytes,
    subject: DistinguishedName,
    public_key_type: KeyType,
}

impl Certificate {
    /// Create a certificate from its parts.
    pub fn new(der: impl Into<Bytes>, subject: DistinguishedName, public_key_type: KeyType) -> Self {
        Self {
            der: der.into(),
            subject,
            public_key_type,
        }
    }

    /// DER encoding of the whole certificate.
    pub fn der(&self) -> &Bytes {
        &self.der
    }

    /// Encoded subject distinguished name.
    pub fn subject(&self) -> &DistinguishedName {
        &self.subject
    }

    /// Algorithm of the subject public key.
    pub fn public_key_type(&self) -> KeyType {
        self.public_key_type
    }
}
