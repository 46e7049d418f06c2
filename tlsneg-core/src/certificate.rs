//! Client certificate types (RFC 5246 Section 7.4.4).

pub use tlsneg_crypto::{Certificate, DistinguishedName};
use tlsneg_crypto::KeyType;

/// Certificate types a server accepts for client authentication.
///
/// Only the signing types are supported; fixed (EC)DH client certificates
/// cannot authenticate a client here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ClientCertificateType {
    /// rsa_sign (1)
    RsaSign = 1,

    /// dss_sign (2)
    DssSign = 2,

    /// ecdsa_sign (64)
    EcdsaSign = 64,
}

impl ClientCertificateType {
    /// Types advertised in every CertificateRequest, in order.
    pub const REQUESTED: [ClientCertificateType; 3] = [
        ClientCertificateType::RsaSign,
        ClientCertificateType::DssSign,
        ClientCertificateType::EcdsaSign,
    ];

    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(ClientCertificateType::RsaSign),
            2 => Some(ClientCertificateType::DssSign),
            64 => Some(ClientCertificateType::EcdsaSign),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Type of a client certificate whose public key is `key_type`.
    pub const fn for_key_type(key_type: KeyType) -> Option<Self> {
        match key_type {
            KeyType::Rsa => Some(ClientCertificateType::RsaSign),
            KeyType::Dsa => Some(ClientCertificateType::DssSign),
            KeyType::Ec => Some(ClientCertificateType::EcdsaSign),
            KeyType::Dh => None,
        }
    }

    /// Authentication type name handed to the trust store.
    pub const fn auth_type(self) -> &'static str {
        match self {
            ClientCertificateType::RsaSign => "RSA",
            ClientCertificateType::DssSign => "DSA",
            ClientCertificateType::EcdsaSign => "EC",
        }
    }
}
