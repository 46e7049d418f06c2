//! CertificateRequest contents.

use crate::certificate::{ClientCertificateType, DistinguishedName};
use crate::config::Config;
use crate::protocol::ProtocolVersion;
use crate::trust::TrustStore;
use tlsneg_crypto::{CryptoProvider, SignatureScheme};

/// What the server asks of a client certificate (RFC 5246 Section 7.4.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequestSpec {
    certificate_types: Vec<ClientCertificateType>,
    signature_schemes: Option<Vec<SignatureScheme>>,
    certificate_authorities: Vec<DistinguishedName>,
}

impl CertificateRequestSpec {
    /// Build the request for this handshake, or `None` when the server does
    /// not ask for client authentication.
    ///
    /// Signature schemes are listed only at versions with the
    /// `signature_algorithms` extension. A missing trust store yields an empty
    /// authorities list.
    pub fn build(
        config: &Config,
        version: ProtocolVersion,
        provider: &dyn CryptoProvider,
        trust_store: Option<&dyn TrustStore>,
    ) -> Option<Self> {
        if !config.requests_client_auth() {
            return None;
        }

        let signature_schemes = version
            .supports_signature_algorithms()
            .then(|| provider.supported_signature_schemes());

        let certificate_authorities = trust_store
            .map(|store| {
                store
                    .accepted_issuers()
                    .iter()
                    .map(|issuer| issuer.subject().clone())
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            certificate_types: ClientCertificateType::REQUESTED.to_vec(),
            signature_schemes,
            certificate_authorities,
        })
    }

    /// Acceptable client certificate types.
    pub fn certificate_types(&self) -> &[ClientCertificateType] {
        &self.certificate_types
    }

    /// Acceptable signature schemes, when the version carries them.
    pub fn signature_schemes(&self) -> Option<&[SignatureScheme]> {
        self.signature_schemes.as_deref()
    }

    /// Acceptable certificate authorities.
    pub fn certificate_authorities(&self) -> &[DistinguishedName] {
        &self.certificate_authorities
    }
}
