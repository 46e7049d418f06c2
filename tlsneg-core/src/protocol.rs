//! Protocol versions and compression methods.

/// TLS/DTLS protocol version.
///
/// DTLS encodes later versions as smaller numbers, so versions are compared
/// with [`ProtocolVersion::is_equal_or_later_than`] rather than by their wire
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ProtocolVersion {
    /// SSL 3.0 (RFC 6101) - Legacy
    Ssl30 = 0x0300,

    /// TLS 1.0 (RFC 2246) - Legacy
    Tls10 = 0x0301,

    /// TLS 1.1 (RFC 4346) - Legacy
    Tls11 = 0x0302,

    /// TLS 1.2 (RFC 5246)
    Tls12 = 0x0303,

    /// TLS 1.3 (RFC 8446)
    Tls13 = 0x0304,

    /// DTLS 1.0 (RFC 4347) - Legacy
    Dtls10 = 0xFEFF,

    /// DTLS 1.2 (RFC 6347)
    Dtls12 = 0xFEFD,

    /// DTLS 1.3 (RFC 9147)
    Dtls13 = 0xFEFC,
}

impl ProtocolVersion {
    /// Every known version, highest first within each family.
    pub const ALL: [ProtocolVersion; 8] = [
        ProtocolVersion::Tls13,
        ProtocolVersion::Tls12,
        ProtocolVersion::Tls11,
        ProtocolVersion::Tls10,
        ProtocolVersion::Ssl30,
        ProtocolVersion::Dtls13,
        ProtocolVersion::Dtls12,
        ProtocolVersion::Dtls10,
    ];

    /// Create from wire format (u16 big-endian).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x0300 => Some(ProtocolVersion::Ssl30),
            0x0301 => Some(ProtocolVersion::Tls10),
            0x0302 => Some(ProtocolVersion::Tls11),
            0x0303 => Some(ProtocolVersion::Tls12),
            0x0304 => Some(ProtocolVersion::Tls13),
            0xFEFF => Some(ProtocolVersion::Dtls10),
            0xFEFD => Some(ProtocolVersion::Dtls12),
            0xFEFC => Some(ProtocolVersion::Dtls13),
            _ => None,
        }
    }

    /// Convert to wire format (u16 big-endian).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Canonical protocol name, as used in the allowed-protocols list.
    pub const fn name(self) -> &'static str {
        match self {
            ProtocolVersion::Ssl30 => "SSLv3",
            ProtocolVersion::Tls10 => "TLSv1",
            ProtocolVersion::Tls11 => "TLSv1.1",
            ProtocolVersion::Tls12 => "TLSv1.2",
            ProtocolVersion::Tls13 => "TLSv1.3",
            ProtocolVersion::Dtls10 => "DTLSv1.0",
            ProtocolVersion::Dtls12 => "DTLSv1.2",
            ProtocolVersion::Dtls13 => "DTLSv1.3",
        }
    }

    /// Look up a version by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|version| version.name() == name)
    }

    /// The next lower version of the same family, if any.
    pub const fn previous(self) -> Option<Self> {
        match self {
            ProtocolVersion::Tls13 => Some(ProtocolVersion::Tls12),
            ProtocolVersion::Tls12 => Some(ProtocolVersion::Tls11),
            ProtocolVersion::Tls11 => Some(ProtocolVersion::Tls10),
            ProtocolVersion::Tls10 => Some(ProtocolVersion::Ssl30),
            ProtocolVersion::Ssl30 => None,
            ProtocolVersion::Dtls13 => Some(ProtocolVersion::Dtls12),
            ProtocolVersion::Dtls12 => Some(ProtocolVersion::Dtls10),
            ProtocolVersion::Dtls10 => None,
        }
    }

    /// Check if this is a DTLS version.
    pub const fn is_dtls(self) -> bool {
        matches!(
            self,
            ProtocolVersion::Dtls10 | ProtocolVersion::Dtls12 | ProtocolVersion::Dtls13
        )
    }

    /// Check if `self` is `other` or a later version of the same family.
    ///
    /// Versions of different families never compare.
    pub const fn is_equal_or_later_than(self, other: ProtocolVersion) -> bool {
        if self.is_dtls() != other.is_dtls() {
            return false;
        }
        if self.is_dtls() {
            self.to_u16() <= other.to_u16()
        } else {
            self.to_u16() >= other.to_u16()
        }
    }

    /// The `signature_algorithms` extension exists from TLS 1.2 / DTLS 1.2 on.
    pub const fn supports_signature_algorithms(self) -> bool {
        self.is_equal_or_later_than(ProtocolVersion::Tls12)
            || self.is_equal_or_later_than(ProtocolVersion::Dtls12)
    }

    /// The TLS version a DTLS version is based on; TLS versions map to
    /// themselves.
    pub const fn equivalent_tls_version(self) -> ProtocolVersion {
        match self {
            ProtocolVersion::Dtls10 => ProtocolVersion::Tls11,
            ProtocolVersion::Dtls12 => ProtocolVersion::Tls12,
            ProtocolVersion::Dtls13 => ProtocolVersion::Tls13,
            other => other,
        }
    }
}

/// Record compression method (RFC 5246 Section 6.2.2, RFC 3749).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompressionMethod {
    /// No compression (0)
    Null = 0,

    /// DEFLATE (1)
    Deflate = 1,
}

impl CompressionMethod {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(CompressionMethod::Null),
            1 => Some(CompressionMethod::Deflate),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}
