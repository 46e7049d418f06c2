//! Running a server's negotiation phase.

use std::sync::Arc;
use tlsneg_core::{
    AlertLevel, CertificateRequestSpec, CipherSuite, ClientOffer, ConnectionManager,
    ProtocolVersion, Result, ServerContext, ServerHandshake,
};
use tlsneg_crypto::NamedCurve;

/// A TLS server: shared context plus the per-connection entry points.
#[derive(Debug, Clone)]
pub struct TlsServer {
    context: ServerContext,
}

impl TlsServer {
    /// Create a server around a context.
    pub fn new(context: ServerContext) -> Self {
        Self { context }
    }

    /// The shared context.
    pub fn context(&self) -> &ServerContext {
        &self.context
    }

    /// Start a handshake for one client, to be driven step by step.
    pub fn accept(
        &self,
        manager: Arc<dyn ConnectionManager>,
        offer: ClientOffer,
    ) -> ServerHandshake {
        tracing::debug!(
            "accepting client offering {} with {} cipher suites",
            offer.client_version.name(),
            offer.cipher_suites.len()
        );
        ServerHandshake::new(self.context.clone(), manager, offer)
    }

    /// Run the whole negotiation phase for one client.
    ///
    /// Negotiates the version, selects the cipher suite and its credential,
    /// picks the ECDHE curve when the suite needs one, and builds the
    /// CertificateRequest when client authentication is configured. A fatal
    /// failure is logged as a raised alert before it is returned.
    pub fn negotiate(
        &self,
        manager: Arc<dyn ConnectionManager>,
        offer: ClientOffer,
    ) -> Result<Negotiated> {
        let mut handshake = self.accept(manager, offer);

        let steps = (|| -> Result<_> {
            let version = handshake.server_version()?;
            let cipher_suite = handshake.selected_cipher_suite()?;
            let curve = handshake.ecdh_curve()?;
            let certificate_request = handshake.certificate_request()?;
            Ok((version, cipher_suite, curve, certificate_request))
        })();

        match steps {
            Ok((version, cipher_suite, curve, certificate_request)) => Ok(Negotiated {
                handshake,
                version,
                cipher_suite,
                curve,
                certificate_request,
            }),
            Err(err) => {
                if let Some(description) = err.alert() {
                    handshake.notify_alert_raised(
                        AlertLevel::Fatal,
                        description,
                        Some("negotiation failed"),
                        Some(&err as &dyn std::error::Error),
                    );
                }
                Err(err)
            },
        }
    }
}

/// Result of a successful negotiation phase.
#[derive(Debug)]
pub struct Negotiated {
    handshake: ServerHandshake,
    version: ProtocolVersion,
    cipher_suite: CipherSuite,
    curve: Option<NamedCurve>,
    certificate_request: Option<CertificateRequestSpec>,
}

impl Negotiated {
    /// Negotiated protocol version.
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    /// Selected cipher suite.
    pub fn cipher_suite(&self) -> CipherSuite {
        self.cipher_suite
    }

    /// ECDHE curve, for suites that negotiate one.
    pub fn curve(&self) -> Option<NamedCurve> {
        self.curve
    }

    /// CertificateRequest to send, when client authentication is configured.
    pub fn certificate_request(&self) -> Option<&CertificateRequestSpec> {
        self.certificate_request.as_ref()
    }

    /// The handshake, to continue with client authentication and completion.
    pub fn handshake_mut(&mut self) -> &mut ServerHandshake {
        &mut self.handshake
    }

    /// Give up the summary and keep the handshake.
    pub fn into_handshake(self) -> ServerHandshake {
        self.handshake
    }
}
