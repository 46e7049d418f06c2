//! # tlsneg core
//!
//! Server-side TLS negotiation: everything a server decides between reading
//! the ClientHello and publishing the finished session.
//!
//! - Protocol version negotiation
//! - Cipher suite selection against the credentials actually available
//! - Named curve selection for ECDH(E)
//! - CertificateRequest construction and client certificate verification
//! - Handshake completion and session publication
//!
//! Record framing, message encoding, key derivation and the cryptographic
//! primitives belong to other layers; this crate only decides which
//! credential, algorithm, curve and version to use.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Public API (tlsneg)             │
//! └─────────────────┬───────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────┐
//! │       tlsneg-core (this crate)          │
//! │  ┌──────────────────────────────────┐   │
//! │  │   ServerHandshake                │   │
//! │  ├──────────────────────────────────┤   │
//! │  │   Credential / Curve selection   │   │
//! │  ├──────────────────────────────────┤   │
//! │  │   KeyStore / TrustStore /        │   │
//! │  │   SessionCache / Manager traits  │   │
//! │  └──────────────────────────────────┘   │
//! └─────────────────┬───────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────┐
//! │     tlsneg-crypto (trait interface)     │
//! └─────────────────────────────────────────┘
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    unused_qualifications
)]
#![forbid(unsafe_code)]

pub mod alert;
pub mod certificate;
pub mod cipher_suites;
pub mod config;
pub mod context;
pub mod credentials;
pub mod curves;
pub mod error;
pub mod handshake;
pub mod key_store;
pub mod protocol;
pub mod session;
pub mod trust;

// Re-exports
pub use alert::{Alert, AlertLevel};
pub use certificate::{Certificate, ClientCertificateType, DistinguishedName};
pub use cipher_suites::{CipherSuite, DhAuthentication, EcdhAuthentication, KeyExchangeFamily};
pub use config::{Config, ConfigBuilder};
pub use context::{ServerContext, ServerContextBuilder};
pub use credentials::{CredentialKind, CredentialResolver, KeyTypeMissCache, NegotiationRound, ServerCredential};
pub use curves::CurveSelector;
pub use error::{AlertDescription, Error, Result};
pub use handshake::{
    CertificateRequestSpec, ClientAuthentication, ClientOffer, CompletionFlag, ServerHandshake,
};
pub use key_store::{ConnectionHint, KeyStore};
pub use protocol::{CompressionMethod, ProtocolVersion};
pub use session::{Connection, ConnectionManager, Session, SessionCache, SessionParameters};
pub use trust::TrustStore;
