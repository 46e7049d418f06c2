//! Hash algorithm identifiers.

/// Hash algorithms that appear in TLS 1.2 cipher suites and signature schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashAlgorithm {
    /// SHA-1 (legacy MAC and default signature hash)
    Sha1,
    /// SHA-256 (32 bytes output)
    Sha256,
    /// SHA-384 (48 bytes output)
    Sha384,
    /// SHA-512 (64 bytes output)
    Sha512,
}

impl HashAlgorithm {
    /// Get the output size in bytes for this hash algorithm.
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Get the name of this algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// TLS 1.2 `HashAlgorithm` registry value (RFC 5246 Section 7.4.1.4.1).
    pub const fn to_u8(self) -> u8 {
        match self {
            HashAlgorithm::Sha1 => 2,
            HashAlgorithm::Sha256 => 4,
            HashAlgorithm::Sha384 => 5,
            HashAlgorithm::Sha512 => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_ordering_follows_strength() {
        assert!(HashAlgorithm::Sha1 < HashAlgorithm::Sha256);
        assert!(HashAlgorithm::Sha384 < HashAlgorithm::Sha512);
        assert_eq!(HashAlgorithm::Sha384.output_size(), 48);
    }
}
