//! Signature algorithms and TLS 1.2 signature-and-hash schemes.

use crate::HashAlgorithm;

/// The signature half of a signature-and-hash pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// RSASSA-PKCS1-v1_5
    Rsa,
    /// DSA
    Dsa,
    /// ECDSA
    Ecdsa,
    /// RSASSA-PSS with an rsaEncryption public key
    RsaPssRsae,
    /// Ed25519
    Ed25519,
}

impl SignatureAlgorithm {
    /// TLS 1.2 `SignatureAlgorithm` registry value, where one exists.
    pub const fn to_u8(self) -> u8 {
        match self {
            SignatureAlgorithm::Rsa => 1,
            SignatureAlgorithm::Dsa => 2,
            SignatureAlgorithm::Ecdsa => 3,
            SignatureAlgorithm::RsaPssRsae => 8,
            SignatureAlgorithm::Ed25519 => 7,
        }
    }
}

/// Signature-and-hash scheme (RFC 5246 Section 7.4.1.4.1, RFC 8446 Section 4.2.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SignatureScheme {
    /// rsa_pkcs1_sha1
    RsaPkcs1Sha1 = 0x0201,
    /// dsa_sha1
    DsaSha1 = 0x0202,
    /// ecdsa_sha1
    EcdsaSha1 = 0x0203,
    /// rsa_pkcs1_sha256
    RsaPkcs1Sha256 = 0x0401,
    /// dsa_sha256
    DsaSha256 = 0x0402,
    /// ecdsa_secp256r1_sha256
    EcdsaSecp256r1Sha256 = 0x0403,
    /// rsa_pkcs1_sha384
    RsaPkcs1Sha384 = 0x0501,
    /// ecdsa_secp384r1_sha384
    EcdsaSecp384r1Sha384 = 0x0503,
    /// rsa_pkcs1_sha512
    RsaPkcs1Sha512 = 0x0601,
    /// ecdsa_secp521r1_sha512
    EcdsaSecp521r1Sha512 = 0x0603,
    /// rsa_pss_rsae_sha256
    RsaPssRsaeSha256 = 0x0804,
    /// rsa_pss_rsae_sha384
    RsaPssRsaeSha384 = 0x0805,
    /// rsa_pss_rsae_sha512
    RsaPssRsaeSha512 = 0x0806,
    /// ed25519
    Ed25519 = 0x0807,
}

impl SignatureScheme {
    /// All schemes, strongest-first within each signature family.
    pub const ALL: [SignatureScheme; 14] = [
        SignatureScheme::EcdsaSecp521r1Sha512,
        SignatureScheme::EcdsaSecp384r1Sha384,
        SignatureScheme::EcdsaSecp256r1Sha256,
        SignatureScheme::Ed25519,
        SignatureScheme::RsaPssRsaeSha512,
        SignatureScheme::RsaPssRsaeSha384,
        SignatureScheme::RsaPssRsaeSha256,
        SignatureScheme::RsaPkcs1Sha512,
        SignatureScheme::RsaPkcs1Sha384,
        SignatureScheme::RsaPkcs1Sha256,
        SignatureScheme::DsaSha256,
        SignatureScheme::EcdsaSha1,
        SignatureScheme::RsaPkcs1Sha1,
        SignatureScheme::DsaSha1,
    ];

    /// Convert from wire format (u16).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0201 => Some(SignatureScheme::RsaPkcs1Sha1),
            0x0202 => Some(SignatureScheme::DsaSha1),
            0x0203 => Some(SignatureScheme::EcdsaSha1),
            0x0401 => Some(SignatureScheme::RsaPkcs1Sha256),
            0x0402 => Some(SignatureScheme::DsaSha256),
            0x0403 => Some(SignatureScheme::EcdsaSecp256r1Sha256),
            0x0501 => Some(SignatureScheme::RsaPkcs1Sha384),
            0x0503 => Some(SignatureScheme::EcdsaSecp384r1Sha384),
            0x0601 => Some(SignatureScheme::RsaPkcs1Sha512),
            0x0603 => Some(SignatureScheme::EcdsaSecp521r1Sha512),
            0x0804 => Some(SignatureScheme::RsaPssRsaeSha256),
            0x0805 => Some(SignatureScheme::RsaPssRsaeSha384),
            0x0806 => Some(SignatureScheme::RsaPssRsaeSha512),
            0x0807 => Some(SignatureScheme::Ed25519),
            _ => None,
        }
    }

    /// Convert to wire format (u16).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// The signature algorithm half of this scheme.
    pub const fn signature_algorithm(self) -> SignatureAlgorithm {
        match self {
            SignatureScheme::RsaPkcs1Sha1
            | SignatureScheme::RsaPkcs1Sha256
            | SignatureScheme::RsaPkcs1Sha384
            | SignatureScheme::RsaPkcs1Sha512 => SignatureAlgorithm::Rsa,
            SignatureScheme::DsaSha1 | SignatureScheme::DsaSha256 => SignatureAlgorithm::Dsa,
            SignatureScheme::EcdsaSha1
            | SignatureScheme::EcdsaSecp256r1Sha256
            | SignatureScheme::EcdsaSecp384r1Sha384
            | SignatureScheme::EcdsaSecp521r1Sha512 => SignatureAlgorithm::Ecdsa,
            SignatureScheme::RsaPssRsaeSha256
            | SignatureScheme::RsaPssRsaeSha384
            | SignatureScheme::RsaPssRsaeSha512 => SignatureAlgorithm::RsaPssRsae,
            SignatureScheme::Ed25519 => SignatureAlgorithm::Ed25519,
        }
    }

    /// The hash half of this scheme (`None` for intrinsic-hash schemes).
    pub const fn hash_algorithm(self) -> Option<HashAlgorithm> {
        match self {
            SignatureScheme::RsaPkcs1Sha1 | SignatureScheme::DsaSha1 | SignatureScheme::EcdsaSha1 => {
                Some(HashAlgorithm::Sha1)
            },
            SignatureScheme::RsaPkcs1Sha256
            | SignatureScheme::DsaSha256
            | SignatureScheme::EcdsaSecp256r1Sha256
            | SignatureScheme::RsaPssRsaeSha256 => Some(HashAlgorithm::Sha256),
            SignatureScheme::RsaPkcs1Sha384
            | SignatureScheme::EcdsaSecp384r1Sha384
            | SignatureScheme::RsaPssRsaeSha384 => Some(HashAlgorithm::Sha384),
            SignatureScheme::RsaPkcs1Sha512
            | SignatureScheme::EcdsaSecp521r1Sha512
            | SignatureScheme::RsaPssRsaeSha512 => Some(HashAlgorithm::Sha512),
            SignatureScheme::Ed25519 => None,
        }
    }

    /// Whether a key that signs with `required` can produce this scheme.
    ///
    /// An RSA key can produce both PKCS#1 v1.5 and PSS (rsae) signatures.
    pub const fn is_usable_for(self, required: SignatureAlgorithm) -> bool {
        let own = self.signature_algorithm();
        match (own, required) {
            (SignatureAlgorithm::Rsa, SignatureAlgorithm::Rsa)
            | (SignatureAlgorithm::RsaPssRsae, SignatureAlgorithm::Rsa)
            | (SignatureAlgorithm::RsaPssRsae, SignatureAlgorithm::RsaPssRsae)
            | (SignatureAlgorithm::Dsa, SignatureAlgorithm::Dsa)
            | (SignatureAlgorithm::Ecdsa, SignatureAlgorithm::Ecdsa)
            | (SignatureAlgorithm::Ed25519, SignatureAlgorithm::Ed25519) => true,
            _ => false,
        }
    }

    /// The scheme a TLS 1.2 peer implies when it sends no
    /// `signature_algorithms` extension (RFC 5246 Section 7.4.1.4.1).
    pub const fn implicit_default(required: SignatureAlgorithm) -> Option<Self> {
        match required {
            SignatureAlgorithm::Rsa => Some(SignatureScheme::RsaPkcs1Sha1),
            SignatureAlgorithm::Dsa => Some(SignatureScheme::DsaSha1),
            SignatureAlgorithm::Ecdsa => Some(SignatureScheme::EcdsaSha1),
            SignatureAlgorithm::RsaPssRsae | SignatureAlgorithm::Ed25519 => None,
        }
    }

    /// Get the scheme name.
    pub const fn name(self) -> &'static str {
        match self {
            SignatureScheme::RsaPkcs1Sha1 => "rsa_pkcs1_sha1",
            SignatureScheme::DsaSha1 => "dsa_sha1",
            SignatureScheme::EcdsaSha1 => "ecdsa_sha1",
            SignatureScheme::RsaPkcs1Sha256 => "rsa_pkcs1_sha256",
            SignatureScheme::DsaSha256 => "dsa_sha256",
            SignatureScheme::EcdsaSecp256r1Sha256 => "ecdsa_secp256r1_sha256",
            SignatureScheme::RsaPkcs1Sha384 => "rsa_pkcs1_sha384",
            SignatureScheme::EcdsaSecp384r1Sha384 => "ecdsa_secp384r1_sha384",
            SignatureScheme::RsaPkcs1Sha512 => "rsa_pkcs1_sha512",
            SignatureScheme::EcdsaSecp521r1Sha512 => "ecdsa_secp521r1_sha512",
            SignatureScheme::RsaPssRsaeSha256 => "rsa_pss_rsae_sha256",
            SignatureScheme::RsaPssRsaeSha384 => "rsa_pss_rsae_sha384",
            SignatureScheme::RsaPssRsaeSha512 => "rsa_pss_rsae_sha512",
            SignatureScheme::Ed25519 => "ed25519",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_conversion() {
        for scheme in SignatureScheme::ALL {
            assert_eq!(SignatureScheme::from_u16(scheme.to_u16()), Some(scheme));
        }
        assert_eq!(SignatureScheme::from_u16(0x0000), None);
    }

    #[test]
    fn test_rsa_key_signs_pss() {
        assert!(SignatureScheme::RsaPssRsaeSha256.is_usable_for(SignatureAlgorithm::Rsa));
        assert!(SignatureScheme::RsaPkcs1Sha256.is_usable_for(SignatureAlgorithm::Rsa));
        assert!(!SignatureScheme::EcdsaSecp256r1Sha256.is_usable_for(SignatureAlgorithm::Rsa));
        assert!(!SignatureScheme::RsaPkcs1Sha256.is_usable_for(SignatureAlgorithm::Ecdsa));
    }

    #[test]
    fn test_implicit_defaults_use_sha1() {
        assert_eq!(
            SignatureScheme::implicit_default(SignatureAlgorithm::Ecdsa),
            Some(SignatureScheme::EcdsaSha1)
        );
        assert_eq!(
            SignatureScheme::implicit_default(SignatureAlgorithm::Dsa)
                .and_then(SignatureScheme::hash_algorithm),
            Some(HashAlgorithm::Sha1)
        );
    }
}
