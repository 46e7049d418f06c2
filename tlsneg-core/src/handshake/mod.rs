//! Server-side handshake negotiation.
//!
//! [`ServerHandshake`] owns the per-connection state; the helpers in the
//! submodules are pure functions over that state and the shared
//! [`ServerContext`](crate::context::ServerContext).

pub mod certificate_request;
pub mod client_auth;
pub mod completion;
pub mod server;
pub mod version;

pub use certificate_request::CertificateRequestSpec;
pub use client_auth::ClientAuthentication;
pub use completion::CompletionFlag;
pub use server::ServerHandshake;
pub use version::negotiate_version;

use crate::cipher_suites::CipherSuite;
use crate::protocol::ProtocolVersion;
use tlsneg_crypto::{NamedCurve, SignatureScheme};

/// What the client offered in its ClientHello, already decoded.
///
/// Codes this crate does not recognize are dropped by the decoder; unknown
/// cipher suites are kept as raw values because they still count as offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOffer {
    /// Highest version the client supports
    pub client_version: ProtocolVersion,

    /// Offered cipher suites, in client preference order
    pub cipher_suites: Vec<u16>,

    /// `supported_groups`, or `None` if the extension was absent
    pub named_curves: Option<Vec<NamedCurve>>,

    /// `signature_algorithms`, or `None` if the extension was absent
    pub signature_schemes: Option<Vec<SignatureScheme>>,
}

impl ClientOffer {
    /// Create an offer with no extensions.
    pub fn new(client_version: ProtocolVersion, cipher_suites: &[CipherSuite]) -> Self {
        Self {
            client_version,
            cipher_suites: cipher_suites.iter().map(|suite| suite.to_u16()).collect(),
            named_curves: None,
            signature_schemes: None,
        }
    }

    /// Set the `supported_groups` extension.
    pub fn with_named_curves(mut self, curves: &[NamedCurve]) -> Self {
        self.named_curves = Some(curves.to_vec());
        self
    }

    /// Set the `signature_algorithms` extension.
    pub fn with_signature_schemes(mut self, schemes: &[SignatureScheme]) -> Self {
        self.signature_schemes = Some(schemes.to_vec());
        self
    }

    /// Check if the client offered `suite`.
    pub fn offers(&self, suite: CipherSuite) -> bool {
        self.cipher_suites.contains(&suite.to_u16())
    }
}
