//! Opaque private key handles.
//!
//! The negotiation core never sees private key material. A key store hands out
//! a [`PrivateKeyHandle`], the core checks its [`KeyType`] against the key
//! exchange it is negotiating, and the handle is passed unchanged to the
//! [`CryptoProvider`](crate::CryptoProvider) that owns the real key.

use std::fmt;
use std::sync::Arc;

/// Public key algorithm of a key pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// RSA
    Rsa,
    /// DSA
    Dsa,
    /// Finite field Diffie-Hellman
    Dh,
    /// Elliptic curve (ECDSA / ECDH)
    Ec,
}

impl KeyType {
    /// Standard algorithm name of the key type.
    pub const fn name(self) -> &'static str {
        match self {
            KeyType::Rsa => "RSA",
            KeyType::Dsa => "DSA",
            KeyType::Dh => "DH",
            KeyType::Ec => "EC",
        }
    }
}

/// Reference to a private key held by a key store or crypto provider.
///
/// Cloning a handle clones the reference, not the key.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PrivateKeyHandle {
    key_type: KeyType,
    id: Arc<str>,
}

impl PrivateKeyHandle {
    /// Create a handle for the key identified by `id` in its backing store.
    pub fn new(key_type: KeyType, id: impl Into<Arc<str>>) -> Self {
        Self {
            key_type,
            id: id.into(),
        }
    }

    /// Algorithm of the referenced key.
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Identifier of the key in its backing store.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Debug for PrivateKeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKeyHandle")
            .field("key_type", &self.key_type)
            .field("id", &"<redacted>")
            .finish()
    }
}
