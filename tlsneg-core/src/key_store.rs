//! Server key store interface.

use crate::certificate::{Certificate, DistinguishedName};
use tlsneg_crypto::PrivateKeyHandle;

/// Connection details a key store may use to pick between aliases.
///
/// Negotiation never fills this in today; it exists so key stores written
/// against [`KeyStore`] keep compiling when SNI-based selection is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionHint {
    /// Host name requested by the client
    pub server_name: Option<String>,

    /// Remote peer address, as text
    pub peer_address: Option<String>,
}

/// Source of server certificates and private keys.
///
/// Implementations are queried once per authentication type per negotiation
/// round, so lookups may be expensive (HSMs, remote vaults).
pub trait KeyStore: Send + Sync {
    /// Pick an alias holding a key for `auth_type` (e.g. `"ECDHE_ECDSA"`).
    fn choose_server_alias(
        &self,
        auth_type: &str,
        issuers: Option<&[DistinguishedName]>,
        hint: Option<&ConnectionHint>,
    ) -> Option<String>;

    /// Private key stored under `alias`.
    fn private_key(&self, alias: &str) -> Option<PrivateKeyHandle>;

    /// Certificate chain stored under `alias`, leaf first.
    fn certificate_chain(&self, alias: &str) -> Vec<Certificate>;
}
