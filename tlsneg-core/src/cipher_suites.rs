//! Cipher suite registry.
//!
//! A cipher suite names the key exchange, the server authentication, the bulk
//! cipher and the MAC / PRF hash:
//!
//! Format: TLS_{KeyExchange}_{Authentication}_WITH_{Encryption}_{Hash}
//!
//! The negotiation core cares mostly about the key exchange family, because
//! that decides which kind of server credential has to be found.

use crate::protocol::ProtocolVersion;
use tlsneg_crypto::{BulkCipher, HashAlgorithm, KeyType};

/// Certificate signature used by a finite field DH suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DhAuthentication {
    /// DSS-signed certificate
    Dss,
    /// RSA-signed certificate
    Rsa,
}

/// Certificate signature used by an elliptic curve DH suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcdhAuthentication {
    /// ECDSA-signed certificate
    Ecdsa,
    /// RSA-signed certificate
    Rsa,
}

/// Key exchange family of a cipher suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyExchangeFamily {
    /// DH_anon: no server certificate
    AnonymousDh,
    /// ECDH_anon: no server certificate
    AnonymousEcdh,
    /// DH_DSS / DH_RSA: DH key in the certificate
    StaticDh(DhAuthentication),
    /// ECDH_ECDSA / ECDH_RSA: EC key in the certificate
    StaticEcdh(EcdhAuthentication),
    /// DHE_DSS / DHE_RSA: signed ephemeral DH
    EphemeralDh(DhAuthentication),
    /// ECDHE_ECDSA / ECDHE_RSA: signed ephemeral ECDH
    EphemeralEcdh(EcdhAuthentication),
    /// RSA key transport
    Rsa,
    /// Any key exchange this server cannot supply credentials for (PSK, SRP)
    Unsupported,
}

impl KeyExchangeFamily {
    /// Authentication type name passed to the key store, or `None` for
    /// families that need no certificate or are not supported.
    pub const fn auth_type(self) -> Option<&'static str> {
        match self {
            KeyExchangeFamily::StaticDh(DhAuthentication::Dss) => Some("DH_DSS"),
            KeyExchangeFamily::StaticDh(DhAuthentication::Rsa) => Some("DH_RSA"),
            KeyExchangeFamily::EphemeralDh(DhAuthentication::Dss) => Some("DHE_DSS"),
            KeyExchangeFamily::EphemeralDh(DhAuthentication::Rsa) => Some("DHE_RSA"),
            KeyExchangeFamily::StaticEcdh(EcdhAuthentication::Ecdsa) => Some("ECDH_ECDSA"),
            KeyExchangeFamily::StaticEcdh(EcdhAuthentication::Rsa) => Some("ECDH_RSA"),
            KeyExchangeFamily::EphemeralEcdh(EcdhAuthentication::Ecdsa) => Some("ECDHE_ECDSA"),
            KeyExchangeFamily::EphemeralEcdh(EcdhAuthentication::Rsa) => Some("ECDHE_RSA"),
            KeyExchangeFamily::Rsa => Some("RSA"),
            KeyExchangeFamily::AnonymousDh
            | KeyExchangeFamily::AnonymousEcdh
            | KeyExchangeFamily::Unsupported => None,
        }
    }

    /// The private key type a credential for this family must hold.
    pub const fn required_key_type(self) -> Option<KeyType> {
        match self {
            KeyExchangeFamily::StaticDh(_) => Some(KeyType::Dh),
            KeyExchangeFamily::StaticEcdh(_) => Some(KeyType::Ec),
            KeyExchangeFamily::EphemeralDh(DhAuthentication::Dss) => Some(KeyType::Dsa),
            KeyExchangeFamily::EphemeralEcdh(EcdhAuthentication::Ecdsa) => Some(KeyType::Ec),
            KeyExchangeFamily::EphemeralDh(DhAuthentication::Rsa)
            | KeyExchangeFamily::EphemeralEcdh(EcdhAuthentication::Rsa)
            | KeyExchangeFamily::Rsa => Some(KeyType::Rsa),
            KeyExchangeFamily::AnonymousDh
            | KeyExchangeFamily::AnonymousEcdh
            | KeyExchangeFamily::Unsupported => None,
        }
    }

    /// Check if the key exchange runs over an elliptic curve.
    pub const fn is_ecc(self) -> bool {
        matches!(
            self,
            KeyExchangeFamily::AnonymousEcdh
                | KeyExchangeFamily::StaticEcdh(_)
                | KeyExchangeFamily::EphemeralEcdh(_)
        )
    }

    /// Check if the server picks a fresh curve for this exchange.
    ///
    /// Static ECDH uses the curve of the certificate's key instead.
    pub const fn negotiates_curve(self) -> bool {
        matches!(
            self,
            KeyExchangeFamily::AnonymousEcdh | KeyExchangeFamily::EphemeralEcdh(_)
        )
    }

    /// Check if the family authenticates the server at all.
    pub const fn is_anonymous(self) -> bool {
        matches!(
            self,
            KeyExchangeFamily::AnonymousDh | KeyExchangeFamily::AnonymousEcdh
        )
    }
}

macro_rules! cipher_suites {
    ($(
        $(#[$doc:meta])*
        $variant:ident = $value:literal, $name:literal,
        $family:expr, $cipher:ident, $hash:ident, $min:ident;
    )*) => {
        /// Cipher suites known to the negotiation core.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum CipherSuite {
            $(
                $(#[$doc])*
                $variant = $value,
            )*
        }

        impl CipherSuite {
            /// Every known suite, in registry order.
            pub const ALL: &'static [CipherSuite] = &[$(CipherSuite::$variant),*];

            /// Create from wire format (u16 big-endian).
            pub const fn from_u16(value: u16) -> Option<Self> {
                match value {
                    $($value => Some(CipherSuite::$variant),)*
                    _ => None,
                }
            }

            /// IANA name of the suite.
            pub const fn name(self) -> &'static str {
                match self {
                    $(CipherSuite::$variant => $name,)*
                }
            }

            /// Key exchange family.
            pub const fn key_exchange_family(self) -> KeyExchangeFamily {
                match self {
                    $(CipherSuite::$variant => $family,)*
                }
            }

            /// Record-layer bulk cipher.
            pub const fn bulk_cipher(self) -> BulkCipher {
                match self {
                    $(CipherSuite::$variant => BulkCipher::$cipher,)*
                }
            }

            /// MAC / PRF hash.
            pub const fn hash_algorithm(self) -> HashAlgorithm {
                match self {
                    $(CipherSuite::$variant => HashAlgorithm::$hash,)*
                }
            }

            /// Earliest TLS version that defines this suite.
            pub const fn minimum_version(self) -> ProtocolVersion {
                match self {
                    $(CipherSuite::$variant => ProtocolVersion::$min,)*
                }
            }
        }
    };
}

use DhAuthentication as Dh;
use EcdhAuthentication as Ec;
use KeyExchangeFamily as Kx;

cipher_suites! {
    /// TLS_RSA_WITH_AES_128_CBC_SHA (0x002F) - RFC 5246
    RsaWithAes128CbcSha = 0x002F, "TLS_RSA_WITH_AES_128_CBC_SHA",
        Kx::Rsa, Aes128Cbc, Sha1, Ssl30;
    /// TLS_DHE_DSS_WITH_AES_128_CBC_SHA (0x0032) - RFC 5246
    DheDssWithAes128CbcSha = 0x0032, "TLS_DHE_DSS_WITH_AES_128_CBC_SHA",
        Kx::EphemeralDh(Dh::Dss), Aes128Cbc, Sha1, Ssl30;
    /// TLS_DHE_RSA_WITH_AES_128_CBC_SHA (0x0033) - RFC 5246
    DheRsaWithAes128CbcSha = 0x0033, "TLS_DHE_RSA_WITH_AES_128_CBC_SHA",
        Kx::EphemeralDh(Dh::Rsa), Aes128Cbc, Sha1, Ssl30;
    /// TLS_DH_anon_WITH_AES_128_CBC_SHA (0x0034) - RFC 5246
    DhAnonWithAes128CbcSha = 0x0034, "TLS_DH_anon_WITH_AES_128_CBC_SHA",
        Kx::AnonymousDh, Aes128Cbc, Sha1, Ssl30;
    /// TLS_RSA_WITH_AES_256_CBC_SHA (0x0035) - RFC 5246
    RsaWithAes256CbcSha = 0x0035, "TLS_RSA_WITH_AES_256_CBC_SHA",
        Kx::Rsa, Aes256Cbc, Sha1, Ssl30;
    /// TLS_RSA_WITH_AES_128_GCM_SHA256 (0x009C) - RFC 5288
    RsaWithAes128GcmSha256 = 0x009C, "TLS_RSA_WITH_AES_128_GCM_SHA256",
        Kx::Rsa, Aes128Gcm, Sha256, Tls12;
    /// TLS_RSA_WITH_AES_256_GCM_SHA384 (0x009D) - RFC 5288
    RsaWithAes256GcmSha384 = 0x009D, "TLS_RSA_WITH_AES_256_GCM_SHA384",
        Kx::Rsa, Aes256Gcm, Sha384, Tls12;
    /// TLS_DHE_RSA_WITH_AES_128_GCM_SHA256 (0x009E) - RFC 5288
    DheRsaWithAes128GcmSha256 = 0x009E, "TLS_DHE_RSA_WITH_AES_128_GCM_SHA256",
        Kx::EphemeralDh(Dh::Rsa), Aes128Gcm, Sha256, Tls12;
    /// TLS_DHE_RSA_WITH_AES_256_GCM_SHA384 (0x009F) - RFC 5288
    DheRsaWithAes256GcmSha384 = 0x009F, "TLS_DHE_RSA_WITH_AES_256_GCM_SHA384",
        Kx::EphemeralDh(Dh::Rsa), Aes256Gcm, Sha384, Tls12;
    /// TLS_DH_RSA_WITH_AES_128_GCM_SHA256 (0x00A0) - RFC 5288
    DhRsaWithAes128GcmSha256 = 0x00A0, "TLS_DH_RSA_WITH_AES_128_GCM_SHA256",
        Kx::StaticDh(Dh::Rsa), Aes128Gcm, Sha256, Tls12;
    /// TLS_DHE_DSS_WITH_AES_128_GCM_SHA256 (0x00A2) - RFC 5288
    DheDssWithAes128GcmSha256 = 0x00A2, "TLS_DHE_DSS_WITH_AES_128_GCM_SHA256",
        Kx::EphemeralDh(Dh::Dss), Aes128Gcm, Sha256, Tls12;
    /// TLS_DH_DSS_WITH_AES_128_GCM_SHA256 (0x00A4) - RFC 5288
    DhDssWithAes128GcmSha256 = 0x00A4, "TLS_DH_DSS_WITH_AES_128_GCM_SHA256",
        Kx::StaticDh(Dh::Dss), Aes128Gcm, Sha256, Tls12;
    /// TLS_DH_anon_WITH_AES_128_GCM_SHA256 (0x00A6) - RFC 5288
    DhAnonWithAes128GcmSha256 = 0x00A6, "TLS_DH_anon_WITH_AES_128_GCM_SHA256",
        Kx::AnonymousDh, Aes128Gcm, Sha256, Tls12;
    /// TLS_PSK_WITH_AES_128_GCM_SHA256 (0x00A8) - RFC 5487
    PskWithAes128GcmSha256 = 0x00A8, "TLS_PSK_WITH_AES_128_GCM_SHA256",
        Kx::Unsupported, Aes128Gcm, Sha256, Tls12;
    /// TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA (0xC009) - RFC 8422
    EcdheEcdsaWithAes128CbcSha = 0xC009, "TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA",
        Kx::EphemeralEcdh(Ec::Ecdsa), Aes128Cbc, Sha1, Tls10;
    /// TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA (0xC013) - RFC 8422
    EcdheRsaWithAes128CbcSha = 0xC013, "TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA",
        Kx::EphemeralEcdh(Ec::Rsa), Aes128Cbc, Sha1, Tls10;
    /// TLS_ECDH_anon_WITH_AES_128_CBC_SHA (0xC018) - RFC 8422
    EcdhAnonWithAes128CbcSha = 0xC018, "TLS_ECDH_anon_WITH_AES_128_CBC_SHA",
        Kx::AnonymousEcdh, Aes128Cbc, Sha1, Tls10;
    /// TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256 (0xC02B) - RFC 5289
    EcdheEcdsaWithAes128GcmSha256 = 0xC02B, "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
        Kx::EphemeralEcdh(Ec::Ecdsa), Aes128Gcm, Sha256, Tls12;
    /// TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384 (0xC02C) - RFC 5289
    EcdheEcdsaWithAes256GcmSha384 = 0xC02C, "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
        Kx::EphemeralEcdh(Ec::Ecdsa), Aes256Gcm, Sha384, Tls12;
    /// TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256 (0xC02D) - RFC 5289
    EcdhEcdsaWithAes128GcmSha256 = 0xC02D, "TLS_ECDH_ECDSA_WITH_AES_128_GCM_SHA256",
        Kx::StaticEcdh(Ec::Ecdsa), Aes128Gcm, Sha256, Tls12;
    /// TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256 (0xC02F) - RFC 5289
    EcdheRsaWithAes128GcmSha256 = 0xC02F, "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
        Kx::EphemeralEcdh(Ec::Rsa), Aes128Gcm, Sha256, Tls12;
    /// TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384 (0xC030) - RFC 5289
    EcdheRsaWithAes256GcmSha384 = 0xC030, "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
        Kx::EphemeralEcdh(Ec::Rsa), Aes256Gcm, Sha384, Tls12;
    /// TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256 (0xC031) - RFC 5289
    EcdhRsaWithAes128GcmSha256 = 0xC031, "TLS_ECDH_RSA_WITH_AES_128_GCM_SHA256",
        Kx::StaticEcdh(Ec::Rsa), Aes128Gcm, Sha256, Tls12;
}

impl CipherSuite {
    /// Convert to wire format (u16 big-endian).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Look up a suite by its IANA name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|suite| suite.name() == name)
    }

    /// Last TLS version whose handshake carries this suite's key exchange.
    ///
    /// TLS 1.3 dropped the suite-embedded key exchange, so every registered
    /// suite ends at TLS 1.2.
    pub const fn maximum_version(self) -> ProtocolVersion {
        ProtocolVersion::Tls12
    }

    /// Check if the suite may be used at `version`.
    ///
    /// DTLS versions are checked as the TLS version they are based on.
    pub const fn is_valid_for_version(self, version: ProtocolVersion) -> bool {
        let tls = version.equivalent_tls_version();
        tls.is_equal_or_later_than(self.minimum_version())
            && self.maximum_version().is_equal_or_later_than(tls)
    }

    /// Check if the suite uses an elliptic curve key exchange.
    pub const fn is_ecc(self) -> bool {
        self.key_exchange_family().is_ecc()
    }

    /// Smallest curve size, in bits, that can carry this suite's key
    /// exchange. Non-ECC suites need no curve and report 0.
    pub const fn minimum_curve_bits(self) -> u16 {
        if self.is_ecc() {
            1
        } else {
            0
        }
    }

    /// Check if the suite may be negotiated in FIPS mode.
    ///
    /// Anonymous key exchange and suites without server credentials are never
    /// approved.
    pub const fn is_fips_approved(self) -> bool {
        let family = self.key_exchange_family();
        !family.is_anonymous() && !matches!(family, KeyExchangeFamily::Unsupported)
    }
}

/// Default server preference: forward-secret AEAD suites first.
pub fn default_cipher_suites() -> Vec<CipherSuite> {
    vec![
        CipherSuite::EcdheEcdsaWithAes256GcmSha384,
        CipherSuite::EcdheEcdsaWithAes128GcmSha256,
        CipherSuite::EcdheRsaWithAes256GcmSha384,
        CipherSuite::EcdheRsaWithAes128GcmSha256,
        CipherSuite::DheRsaWithAes256GcmSha384,
        CipherSuite::DheRsaWithAes128GcmSha256,
        CipherSuite::DheDssWithAes128GcmSha256,
        CipherSuite::EcdheEcdsaWithAes128CbcSha,
        CipherSuite::EcdheRsaWithAes128CbcSha,
        CipherSuite::DheRsaWithAes128CbcSha,
        CipherSuite::RsaWithAes256GcmSha384,
        CipherSuite::RsaWithAes128GcmSha256,
        CipherSuite::RsaWithAes256CbcSha,
        CipherSuite::RsaWithAes128CbcSha,
    ]
}
