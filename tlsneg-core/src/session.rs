//! Established sessions and the collaborators that receive them.

use crate::certificate::Certificate;
use crate::cipher_suites::CipherSuite;
use crate::protocol::ProtocolVersion;
use std::fmt;
use std::sync::Arc;
use zeroize::Zeroizing;

/// Security parameters produced by the key exchange.
pub struct SessionParameters {
    session_id: Vec<u8>,
    master_secret: Zeroizing<Vec<u8>>,
}

impl SessionParameters {
    /// Bundle a session identifier with its master secret.
    pub fn new(session_id: Vec<u8>, master_secret: Vec<u8>) -> Self {
        Self {
            session_id,
            master_secret: Zeroizing::new(master_secret),
        }
    }

    /// Session identifier.
    pub fn session_id(&self) -> &[u8] {
        &self.session_id
    }
}

impl fmt::Debug for SessionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionParameters")
            .field("session_id", &self.session_id)
            .field("master_secret", &"<redacted>")
            .finish()
    }
}

/// A completed TLS session.
pub struct Session {
    id: Vec<u8>,
    protocol_version: ProtocolVersion,
    cipher_suite: CipherSuite,
    local_certificates: Vec<Certificate>,
    peer_certificates: Vec<Certificate>,
    master_secret: Zeroizing<Vec<u8>>,
}

impl Session {
    /// Assemble a session from the negotiated state.
    pub fn new(
        parameters: SessionParameters,
        protocol_version: ProtocolVersion,
        cipher_suite: CipherSuite,
        local_certificates: Vec<Certificate>,
        peer_certificates: Vec<Certificate>,
    ) -> Self {
        Self {
            id: parameters.session_id,
            protocol_version,
            cipher_suite,
            local_certificates,
            peer_certificates,
            master_secret: parameters.master_secret,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Negotiated protocol version.
    pub fn protocol_version(&self) -> ProtocolVersion {
        self.protocol_version
    }

    /// Negotiated cipher suite.
    pub fn cipher_suite(&self) -> CipherSuite {
        self.cipher_suite
    }

    /// Certificates this server presented.
    pub fn local_certificates(&self) -> &[Certificate] {
        &self.local_certificates
    }

    /// Certificates the client presented, if it authenticated.
    pub fn peer_certificates(&self) -> &[Certificate] {
        &self.peer_certificates
    }

    /// Master secret, for resumption.
    pub fn master_secret(&self) -> &[u8] {
        &self.master_secret
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("protocol_version", &self.protocol_version)
            .field("cipher_suite", &self.cipher_suite)
            .field("local_certificates", &self.local_certificates.len())
            .field("peer_certificates", &self.peer_certificates.len())
            .field("master_secret", &"<redacted>")
            .finish()
    }
}

/// Handle to an established connection, given to the connection manager.
#[derive(Debug, Clone)]
pub struct Connection {
    session: Arc<Session>,
}

impl Connection {
    /// Wrap a cached session.
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The session backing this connection.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Negotiated protocol version.
    pub fn protocol_version(&self) -> ProtocolVersion {
        self.session.protocol_version()
    }

    /// Negotiated cipher suite.
    pub fn cipher_suite(&self) -> CipherSuite {
        self.session.cipher_suite()
    }
}

/// Stores completed sessions for resumption.
pub trait SessionCache: Send + Sync {
    /// Record a newly established session and return the cached handle.
    fn report_session(&self, session: Session) -> Arc<Session>;
}

/// Per-connection policy owner.
pub trait ConnectionManager: Send + Sync {
    /// Final veto over a cipher suite that has credentials.
    fn is_acceptable_cipher_suite(&self, suite: CipherSuite, version: ProtocolVersion) -> bool;

    /// Called exactly once when the handshake finishes.
    fn notify_handshake_complete(&self, connection: Connection);
}
