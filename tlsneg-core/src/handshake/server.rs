//! Server handshake session.
//!
//! # Negotiation order
//! ```text
//! ClientOffer
//!   |
//!   | server_version()            walk down to an enabled protocol
//!   v
//! VERSION NEGOTIATED
//!   | selected_cipher_suite()     per candidate: credentials, then manager veto
//!   v
//! SUITE SELECTED
//!   | ecdh_curve()                ECDH(E) suites only
//!   | certificate_request()       when client auth is configured
//!   | notify_client_certificate() after a request was sent
//!   v
//! notify_handshake_complete()     publishes the session exactly once
//! ```

use super::certificate_request::CertificateRequestSpec;
use super::client_auth::ClientAuthentication;
use super::completion::CompletionFlag;
use super::version::negotiate_version;
use super::ClientOffer;
use crate::alert::{log_alert_raised, log_alert_received, Alert, AlertLevel};
use crate::certificate::Certificate;
use crate::cipher_suites::CipherSuite;
use crate::context::ServerContext;
use crate::credentials::{CredentialResolver, NegotiationRound, ServerCredential};
use crate::curves::CurveSelector;
use crate::error::{AlertDescription, Error, Result};
use crate::protocol::{CompressionMethod, ProtocolVersion};
use crate::session::{Connection, ConnectionManager, Session, SessionParameters};
use std::fmt;
use std::sync::Arc;
use tlsneg_crypto::NamedCurve;

/// Per-connection negotiation state on the server side.
///
/// Driven by a single thread; only the [`CompletionFlag`] is shared.
pub struct ServerHandshake {
    context: ServerContext,
    manager: Arc<dyn ConnectionManager>,
    offer: ClientOffer,
    version: Option<ProtocolVersion>,
    cipher_suite: Option<CipherSuite>,
    credential: ServerCredential,
    certificate_requested: bool,
    client_authentication: Option<ClientAuthentication>,
    peer_certificates: Vec<Certificate>,
    completion: CompletionFlag,
}

impl ServerHandshake {
    /// Start negotiating with a client that sent `offer`.
    pub fn new(
        context: ServerContext,
        manager: Arc<dyn ConnectionManager>,
        offer: ClientOffer,
    ) -> Self {
        Self {
            context,
            manager,
            offer,
            version: None,
            cipher_suite: None,
            credential: ServerCredential::None,
            certificate_requested: false,
            client_authentication: None,
            peer_certificates: Vec::new(),
            completion: CompletionFlag::new(),
        }
    }

    /// The client's offer.
    pub fn client_offer(&self) -> &ClientOffer {
        &self.offer
    }

    /// Negotiate the protocol version.
    ///
    /// The first successful call fixes the version; later calls return it
    /// unchanged.
    pub fn server_version(&mut self) -> Result<ProtocolVersion> {
        if let Some(version) = self.version {
            return Ok(version);
        }
        let version = negotiate_version(self.offer.client_version, &self.context.config().protocols)?;
        self.version = Some(version);
        Ok(version)
    }

    /// Negotiated protocol version, if negotiation has happened.
    pub fn negotiated_version(&self) -> Option<ProtocolVersion> {
        self.version
    }

    /// Selected cipher suite, if selection has happened.
    pub fn negotiated_cipher_suite(&self) -> Option<CipherSuite> {
        self.cipher_suite
    }

    /// Suites this server can negotiate, in preference order.
    pub fn cipher_suites(&self) -> Vec<CipherSuite> {
        self.context.supported_cipher_suites()
    }

    /// Compression methods this server offers.
    pub fn compression_methods(&self) -> Vec<CompressionMethod> {
        self.context.compression_methods()
    }

    /// Curve selector over the client's `supported_groups`.
    pub fn curve_selector(&self) -> CurveSelector<'_> {
        CurveSelector::new(
            self.offer.named_curves.as_deref(),
            self.context.config().restricts_curves(),
        )
    }

    /// Largest curve size this handshake could negotiate.
    pub fn max_negotiable_curve_bits(&self) -> u16 {
        self.curve_selector().max_negotiable_bits()
    }

    /// Select a curve of at least `min_bits`.
    pub fn select_curve(&self, min_bits: u16) -> Option<NamedCurve> {
        self.curve_selector().select_curve(min_bits)
    }

    fn require_version(&self) -> Result<ProtocolVersion> {
        self.version
            .ok_or_else(|| Error::internal("protocol version has not been negotiated"))
    }

    fn require_cipher_suite(&self) -> Result<CipherSuite> {
        self.cipher_suite
            .ok_or_else(|| Error::internal("cipher suite has not been selected"))
    }

    /// Establish credentials for `suite`, replacing any previous credential.
    ///
    /// Returns `false`, with no credential retained, when the suite cannot be
    /// served.
    pub fn select_credentials(
        &mut self,
        round: &mut NegotiationRound,
        suite: CipherSuite,
    ) -> Result<bool> {
        self.credential = ServerCredential::None;

        let version = self.require_version()?;
        let resolver = CredentialResolver::new(
            self.context.key_store(),
            self.context.provider(),
            version,
            self.offer.signature_schemes.as_deref(),
        );

        match resolver.resolve(suite, round)? {
            Some(credential) => {
                self.credential = credential;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    /// Check if `suite` can be used: credentials exist and the connection
    /// manager accepts it.
    pub fn select_cipher_suite(
        &mut self,
        round: &mut NegotiationRound,
        suite: CipherSuite,
    ) -> Result<bool> {
        if !self.select_credentials(round, suite)? {
            return Ok(false);
        }
        let version = self.require_version()?;
        if !self.manager.is_acceptable_cipher_suite(suite, version) {
            self.credential = ServerCredential::None;
            return Ok(false);
        }
        Ok(true)
    }

    /// Run a full negotiation round and select the cipher suite.
    ///
    /// Walks the server's suites in preference order and takes the first one
    /// the client offered that fits the version and curve constraints and
    /// passes [`select_cipher_suite`](Self::select_cipher_suite). Fails with
    /// `handshake_failure` if none does.
    pub fn selected_cipher_suite(&mut self) -> Result<CipherSuite> {
        let version = self.require_version()?;
        let max_curve_bits = self.max_negotiable_curve_bits();
        let mut round = NegotiationRound::new();

        for suite in self.cipher_suites() {
            if !self.offer.offers(suite)
                || !suite.is_valid_for_version(version)
                || suite.minimum_curve_bits() > max_curve_bits
            {
                continue;
            }

            if self.select_cipher_suite(&mut round, suite)? {
                tracing::debug!(
                    "server selected cipher suite {} with {} credential",
                    suite.name(),
                    self.credential.kind()
                );
                self.cipher_suite = Some(suite);
                return Ok(suite);
            }
        }

        self.credential = ServerCredential::None;
        tracing::debug!(
            "no cipher suite negotiated after {} key store queries",
            round.key_store_queries()
        );
        Err(Error::fatal(
            AlertDescription::HandshakeFailure,
            "no mutually acceptable cipher suite",
        ))
    }

    /// Credential for the selected suite.
    pub fn credentials(&self) -> &ServerCredential {
        &self.credential
    }

    /// Curve for the ephemeral or anonymous ECDH exchange of the selected
    /// suite, or `None` when the suite does not pick a curve.
    pub fn ecdh_curve(&self) -> Result<Option<NamedCurve>> {
        let suite = self.require_cipher_suite()?;
        if !suite.key_exchange_family().negotiates_curve() {
            return Ok(None);
        }
        match self.select_curve(suite.minimum_curve_bits()) {
            Some(curve) => {
                tracing::debug!("server selected curve {}", curve.name());
                Ok(Some(curve))
            },
            None => Err(Error::fatal(
                AlertDescription::HandshakeFailure,
                "no acceptable named curve",
            )),
        }
    }

    /// CertificateRequest for this handshake, or `None` when client
    /// authentication is not configured.
    pub fn certificate_request(&mut self) -> Result<Option<CertificateRequestSpec>> {
        let version = self.require_version()?;
        let request = CertificateRequestSpec::build(
            self.context.config(),
            version,
            self.context.provider(),
            self.context.trust_store(),
        );
        if request.is_some() {
            self.certificate_requested = true;
        }
        Ok(request)
    }

    /// Process the client's Certificate message (`chain` empty if it sent no
    /// certificate).
    pub fn notify_client_certificate(&mut self, chain: &[Certificate]) -> Result<()> {
        if !self.certificate_requested {
            return Err(Error::fatal(
                AlertDescription::UnexpectedMessage,
                "client certificate without a certificate request",
            ));
        }

        let outcome =
            ClientAuthentication::verify(self.context.config(), self.context.trust_store(), chain)?;
        if let ClientAuthentication::Trusted { .. } = outcome {
            self.peer_certificates = chain.to_vec();
        }
        self.client_authentication = Some(outcome);
        Ok(())
    }

    /// How the client authenticated, once its certificate was processed.
    pub fn client_authentication(&self) -> Option<ClientAuthentication> {
        self.client_authentication
    }

    /// Certificates of an authenticated client.
    pub fn peer_certificates(&self) -> &[Certificate] {
        &self.peer_certificates
    }

    /// Report an alert this server is sending.
    pub fn notify_alert_raised(
        &self,
        level: AlertLevel,
        description: AlertDescription,
        message: Option<&str>,
        cause: Option<&dyn std::error::Error>,
    ) {
        log_alert_raised(Alert::new(level, description), message, cause);
    }

    /// Report an alert received from the client.
    pub fn notify_alert_received(&self, level: AlertLevel, description: AlertDescription) {
        log_alert_received(Alert::new(level, description));
    }

    /// Publish the finished session.
    ///
    /// The session goes to the session cache and a connection to the
    /// connection manager. Only the first call publishes; later calls do
    /// nothing.
    pub fn notify_handshake_complete(&mut self, parameters: SessionParameters) -> Result<()> {
        if self.completion.is_complete() {
            tracing::debug!("handshake completion already published");
            return Ok(());
        }

        let version = self.require_version()?;
        let suite = self.require_cipher_suite()?;

        if !self.completion.mark_complete() {
            return Ok(());
        }

        let local_certificates = self
            .credential
            .certificate_chain()
            .map(<[Certificate]>::to_vec)
            .unwrap_or_default();
        let session = Session::new(
            parameters,
            version,
            suite,
            local_certificates,
            self.peer_certificates.clone(),
        );
        let session = self.context.session_cache().report_session(session);

        tracing::info!("handshake complete: {} {}", version.name(), suite.name());
        self.manager.notify_handshake_complete(Connection::new(session));
        Ok(())
    }

    /// Check if the handshake has completed.
    pub fn is_handshake_complete(&self) -> bool {
        self.completion.is_complete()
    }

    /// Shared handle to the completion flag.
    pub fn completion_flag(&self) -> CompletionFlag {
        self.completion.clone()
    }
}

impl fmt::Debug for ServerHandshake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerHandshake")
            .field("offer", &self.offer)
            .field("version", &self.version)
            .field("cipher_suite", &self.cipher_suite)
            .field("credential", &self.credential.kind())
            .field("certificate_requested", &self.certificate_requested)
            .field("client_authentication", &self.client_authentication)
            .field("completion", &self.completion)
            .finish_non_exhaustive()
    }
}
