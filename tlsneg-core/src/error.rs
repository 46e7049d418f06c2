//! Error types for the negotiation core.
//!
//! Every failure that must end the handshake is an [`Error::Fatal`] carrying
//! the alert description to send. Negative outcomes that only mean "try the
//! next candidate" (no credentials for a suite, no acceptable curve) are not
//! errors; they are reported through `bool` or `Option` returns.

use thiserror::Error;

/// Result type for negotiation operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during server-side negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The handshake must end with a fatal alert.
    #[error("fatal alert {}: {message}", .description.name())]
    Fatal {
        /// Alert to send to the peer
        description: AlertDescription,
        /// Diagnostic text, never sent on the wire
        message: String,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The crypto provider could not build a credential object.
    #[error("crypto provider failure: {0}")]
    Crypto(#[from] tlsneg_crypto::Error),
}

impl Error {
    /// Create a fatal error with the given alert.
    pub fn fatal(description: AlertDescription, message: impl Into<String>) -> Self {
        Error::Fatal {
            description,
            message: message.into(),
        }
    }

    /// Create a fatal `internal_error`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::fatal(AlertDescription::InternalError, message)
    }

    /// The alert the peer should receive for this error.
    ///
    /// Configuration errors are caught before any handshake starts and carry
    /// no alert.
    pub fn alert(&self) -> Option<AlertDescription> {
        match self {
            Error::Fatal { description, .. } => Some(*description),
            Error::Crypto(_) => Some(AlertDescription::InternalError),
            Error::InvalidConfig(_) => None,
        }
    }
}

/// TLS alert descriptions (RFC 5246 Section 7.2, RFC 8446 Section 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AlertDescription {
    /// Close notify
    CloseNotify = 0,

    /// Unexpected message
    UnexpectedMessage = 10,

    /// Bad record MAC
    BadRecordMac = 20,

    /// Record overflow
    RecordOverflow = 22,

    /// Handshake failure
    HandshakeFailure = 40,

    /// Bad certificate
    BadCertificate = 42,

    /// Unsupported certificate
    UnsupportedCertificate = 43,

    /// Certificate revoked
    CertificateRevoked = 44,

    /// Certificate expired
    CertificateExpired = 45,

    /// Certificate unknown
    CertificateUnknown = 46,

    /// Illegal parameter
    IllegalParameter = 47,

    /// Unknown CA
    UnknownCa = 48,

    /// Access denied
    AccessDenied = 49,

    /// Decode error
    DecodeError = 50,

    /// Decrypt error
    DecryptError = 51,

    /// Protocol version
    ProtocolVersion = 70,

    /// Insufficient security
    InsufficientSecurity = 71,

    /// Internal error
    InternalError = 80,

    /// Inappropriate fallback
    InappropriateFallback = 86,

    /// User canceled
    UserCanceled = 90,

    /// No renegotiation
    NoRenegotiation = 100,

    /// Unsupported extension
    UnsupportedExtension = 110,
}

impl AlertDescription {
    /// Create from wire format (u8).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(AlertDescription::CloseNotify),
            10 => Some(AlertDescription::UnexpectedMessage),
            20 => Some(AlertDescription::BadRecordMac),
            22 => Some(AlertDescription::RecordOverflow),
            40 => Some(AlertDescription::HandshakeFailure),
            42 => Some(AlertDescription::BadCertificate),
            43 => Some(AlertDescription::UnsupportedCertificate),
            44 => Some(AlertDescription::CertificateRevoked),
            45 => Some(AlertDescription::CertificateExpired),
            46 => Some(AlertDescription::CertificateUnknown),
            47 => Some(AlertDescription::IllegalParameter),
            48 => Some(AlertDescription::UnknownCa),
            49 => Some(AlertDescription::AccessDenied),
            50 => Some(AlertDescription::DecodeError),
            51 => Some(AlertDescription::DecryptError),
            70 => Some(AlertDescription::ProtocolVersion),
            71 => Some(AlertDescription::InsufficientSecurity),
            80 => Some(AlertDescription::InternalError),
            86 => Some(AlertDescription::InappropriateFallback),
            90 => Some(AlertDescription::UserCanceled),
            100 => Some(AlertDescription::NoRenegotiation),
            110 => Some(AlertDescription::UnsupportedExtension),
            _ => None,
        }
    }

    /// Convert to wire format (u8).
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Registry name of the alert.
    pub const fn name(self) -> &'static str {
        match self {
            AlertDescription::CloseNotify => "close_notify",
            AlertDescription::UnexpectedMessage => "unexpected_message",
            AlertDescription::BadRecordMac => "bad_record_mac",
            AlertDescription::RecordOverflow => "record_overflow",
            AlertDescription::HandshakeFailure => "handshake_failure",
            AlertDescription::BadCertificate => "bad_certificate",
            AlertDescription::UnsupportedCertificate => "unsupported_certificate",
            AlertDescription::CertificateRevoked => "certificate_revoked",
            AlertDescription::CertificateExpired => "certificate_expired",
            AlertDescription::CertificateUnknown => "certificate_unknown",
            AlertDescription::IllegalParameter => "illegal_parameter",
            AlertDescription::UnknownCa => "unknown_ca",
            AlertDescription::AccessDenied => "access_denied",
            AlertDescription::DecodeError => "decode_error",
            AlertDescription::DecryptError => "decrypt_error",
            AlertDescription::ProtocolVersion => "protocol_version",
            AlertDescription::InsufficientSecurity => "insufficient_security",
            AlertDescription::InternalError => "internal_error",
            AlertDescription::InappropriateFallback => "inappropriate_fallback",
            AlertDescription::UserCanceled => "user_canceled",
            AlertDescription::NoRenegotiation => "no_renegotiation",
            AlertDescription::UnsupportedExtension => "unsupported_extension",
        }
    }
}
