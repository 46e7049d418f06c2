//! Client certificate verification.

use crate::certificate::{Certificate, ClientCertificateType};
use crate::config::Config;
use crate::error::{AlertDescription, Error, Result};
use crate::trust::TrustStore;

/// Outcome of a client's Certificate message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientAuthentication {
    /// The client sent no certificate and authentication was optional.
    Unauthenticated,
    /// The chain was trusted for this authentication type.
    Trusted {
        /// `"RSA"`, `"DSA"` or `"EC"`
        auth_type: &'static str,
    },
}

impl ClientAuthentication {
    /// Decide whether `chain` (leaf first, empty if the client sent none) is
    /// acceptable.
    ///
    /// An empty chain fails with `handshake_failure` when authentication is
    /// required. A non-empty chain must be trusted by the trust store or the
    /// handshake fails with `bad_certificate`; there is no way to continue
    /// with an untrusted certificate.
    pub fn verify(
        config: &Config,
        trust_store: Option<&dyn TrustStore>,
        chain: &[Certificate],
    ) -> Result<Self> {
        let Some(leaf) = chain.first() else {
            if config.need_client_auth {
                return Err(Error::fatal(
                    AlertDescription::HandshakeFailure,
                    "client certificate required but none was sent",
                ));
            }
            tracing::debug!("client sent no certificate; continuing unauthenticated");
            return Ok(ClientAuthentication::Unauthenticated);
        };

        let Some(auth_type) = ClientCertificateType::for_key_type(leaf.public_key_type())
            .map(ClientCertificateType::auth_type)
        else {
            return Err(Error::fatal(
                AlertDescription::BadCertificate,
                format!(
                    "client certificate key type {} cannot authenticate",
                    leaf.public_key_type().name()
                ),
            ));
        };

        let trusted = trust_store
            .map(|store| store.is_client_trusted(chain, auth_type))
            .unwrap_or(false);

        if !trusted {
            return Err(Error::fatal(
                AlertDescription::BadCertificate,
                format!("client certificate chain not trusted for {}", auth_type),
            ));
        }

        tracing::debug!("client authenticated with {} certificate", auth_type);
        Ok(ClientAuthentication::Trusted { auth_type })
    }
}
