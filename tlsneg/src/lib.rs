//! # tlsneg - server-side TLS negotiation
//!
//! Decides what a TLS server can offer a particular client: the protocol
//! version, a cipher suite backed by credentials the server really holds, the
//! ECDHE curve, and whether a client certificate is acceptable.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # fn example(
//! #     provider: Arc<dyn tlsneg::tlsneg_crypto::CryptoProvider>,
//! #     sessions: Arc<dyn tlsneg::SessionCache>,
//! #     keys: Arc<dyn tlsneg::KeyStore>,
//! #     manager: Arc<dyn tlsneg::ConnectionManager>,
//! #     offer: tlsneg::ClientOffer,
//! # ) -> tlsneg::Result<()> {
//! use tlsneg::{Config, ServerContext, TlsServer};
//!
//! let config = Config::builder()
//!     .with_protocols(&["TLSv1.2"])
//!     .with_want_client_auth(true)
//!     .build()?;
//!
//! let context = ServerContext::builder(provider, sessions)
//!     .with_config(config)
//!     .with_key_store(keys)
//!     .build();
//!
//! let server = TlsServer::new(context);
//! let negotiated = server.negotiate(manager, offer)?;
//! println!("{}", negotiated.cipher_suite().name());
//! # Ok(())
//! # }
//! ```
//!
//! Everything after negotiation (key exchange, record protection, message
//! encoding) is left to the caller.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    unused_qualifications
)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tlsneg_core::{
    self, AlertDescription, AlertLevel, CertificateRequestSpec, CipherSuite, ClientAuthentication,
    ClientOffer, CompletionFlag, CompressionMethod, Config, ConfigBuilder, Connection,
    ConnectionManager, Error, KeyStore, ProtocolVersion, Result, ServerContext,
    ServerContextBuilder, ServerCredential, ServerHandshake, Session, SessionCache,
    SessionParameters, TrustStore,
};

// Re-export crypto interface
pub use tlsneg_crypto;

pub mod server;

pub use server::{Negotiated, TlsServer};

/// tlsneg version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the tlsneg version.
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert!(ver.starts_with("0."));
    }
}
