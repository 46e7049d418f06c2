//! Bulk cipher identifiers.
//!
//! The negotiation core never encrypts anything; these identifiers only let it
//! ask a provider whether a cipher suite's record protection is available.

/// Record-layer bulk ciphers used by the supported TLS 1.2 cipher suites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BulkCipher {
    /// AES-128 in CBC mode (HMAC-authenticated)
    Aes128Cbc,
    /// AES-256 in CBC mode (HMAC-authenticated)
    Aes256Cbc,
    /// AES-128-GCM
    Aes128Gcm,
    /// AES-256-GCM
    Aes256Gcm,
}

impl BulkCipher {
    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            BulkCipher::Aes128Cbc | BulkCipher::Aes128Gcm => 16,
            BulkCipher::Aes256Cbc | BulkCipher::Aes256Gcm => 32,
        }
    }

    /// Whether this is an AEAD construction.
    pub const fn is_aead(self) -> bool {
        matches!(self, BulkCipher::Aes128Gcm | BulkCipher::Aes256Gcm)
    }

    /// Get the cipher name.
    pub const fn name(self) -> &'static str {
        match self {
            BulkCipher::Aes128Cbc => "AES_128_CBC",
            BulkCipher::Aes256Cbc => "AES_256_CBC",
            BulkCipher::Aes128Gcm => "AES_128_GCM",
            BulkCipher::Aes256Gcm => "AES_256_GCM",
        }
    }
}
