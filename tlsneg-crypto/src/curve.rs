//! Named elliptic curves (RFC 4492 / RFC 8422 `NamedCurve` registry).

/// Named curves a client may advertise in its `supported_groups` extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum NamedCurve {
    /// sect571r1 (binary curve, legacy)
    Sect571r1 = 0x000E,
    /// secp192r1 (P-192)
    Secp192r1 = 0x0013,
    /// secp224r1 (P-224)
    Secp224r1 = 0x0015,
    /// secp256k1
    Secp256k1 = 0x0016,
    /// secp256r1 (P-256)
    Secp256r1 = 0x0017,
    /// secp384r1 (P-384)
    Secp384r1 = 0x0018,
    /// secp521r1 (P-521)
    Secp521r1 = 0x0019,
    /// brainpoolP256r1
    BrainpoolP256r1 = 0x001A,
    /// brainpoolP384r1
    BrainpoolP384r1 = 0x001B,
    /// brainpoolP512r1
    BrainpoolP512r1 = 0x001C,
    /// X25519
    X25519 = 0x001D,
    /// X448
    X448 = 0x001E,
}

impl NamedCurve {
    /// Every curve known to this crate, in registry order.
    pub const ALL: [NamedCurve; 12] = [
        NamedCurve::Sect571r1,
        NamedCurve::Secp192r1,
        NamedCurve::Secp224r1,
        NamedCurve::Secp256k1,
        NamedCurve::Secp256r1,
        NamedCurve::Secp384r1,
        NamedCurve::Secp521r1,
        NamedCurve::BrainpoolP256r1,
        NamedCurve::BrainpoolP384r1,
        NamedCurve::BrainpoolP512r1,
        NamedCurve::X25519,
        NamedCurve::X448,
    ];

    /// Curves approved under the restricted (FIPS) policy.
    pub const RESTRICTED: [NamedCurve; 2] = [NamedCurve::Secp256r1, NamedCurve::Secp384r1];

    /// Convert from wire format (u16).
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x000E => Some(NamedCurve::Sect571r1),
            0x0013 => Some(NamedCurve::Secp192r1),
            0x0015 => Some(NamedCurve::Secp224r1),
            0x0016 => Some(NamedCurve::Secp256k1),
            0x0017 => Some(NamedCurve::Secp256r1),
            0x0018 => Some(NamedCurve::Secp384r1),
            0x0019 => Some(NamedCurve::Secp521r1),
            0x001A => Some(NamedCurve::BrainpoolP256r1),
            0x001B => Some(NamedCurve::BrainpoolP384r1),
            0x001C => Some(NamedCurve::BrainpoolP512r1),
            0x001D => Some(NamedCurve::X25519),
            0x001E => Some(NamedCurve::X448),
            _ => None,
        }
    }

    /// Convert to wire format (u16).
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Field size of the curve in bits.
    pub const fn bits(self) -> u16 {
        match self {
            NamedCurve::Sect571r1 => 571,
            NamedCurve::Secp192r1 => 192,
            NamedCurve::Secp224r1 => 224,
            NamedCurve::Secp256k1
            | NamedCurve::Secp256r1
            | NamedCurve::BrainpoolP256r1
            | NamedCurve::X25519 => 256,
            NamedCurve::Secp384r1 | NamedCurve::BrainpoolP384r1 => 384,
            NamedCurve::Secp521r1 => 521,
            NamedCurve::BrainpoolP512r1 => 512,
            NamedCurve::X448 => 448,
        }
    }

    /// Whether the curve is allowed under the restricted (FIPS) policy.
    pub const fn is_restricted_approved(self) -> bool {
        matches!(self, NamedCurve::Secp256r1 | NamedCurve::Secp384r1)
    }

    /// Largest field size among all known curves.
    pub fn max_bits() -> u16 {
        Self::ALL.iter().map(|c| c.bits()).max().unwrap_or(0)
    }

    /// Largest field size among the restricted (FIPS) curves.
    pub fn max_restricted_bits() -> u16 {
        Self::RESTRICTED.iter().map(|c| c.bits()).max().unwrap_or(0)
    }

    /// Get the curve name.
    pub const fn name(self) -> &'static str {
        match self {
            NamedCurve::Sect571r1 => "sect571r1",
            NamedCurve::Secp192r1 => "secp192r1",
            NamedCurve::Secp224r1 => "secp224r1",
            NamedCurve::Secp256k1 => "secp256k1",
            NamedCurve::Secp256r1 => "secp256r1",
            NamedCurve::Secp384r1 => "secp384r1",
            NamedCurve::Secp521r1 => "secp521r1",
            NamedCurve::BrainpoolP256r1 => "brainpoolP256r1",
            NamedCurve::BrainpoolP384r1 => "brainpoolP384r1",
            NamedCurve::BrainpoolP512r1 => "brainpoolP512r1",
            NamedCurve::X25519 => "x25519",
            NamedCurve::X448 => "x448",
        }
    }
}
