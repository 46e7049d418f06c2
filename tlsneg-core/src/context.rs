//! Shared server state.

use crate::cipher_suites::CipherSuite;
use crate::config::Config;
use crate::key_store::KeyStore;
use crate::protocol::CompressionMethod;
use crate::session::SessionCache;
use crate::trust::TrustStore;
use std::fmt;
use std::sync::Arc;
use tlsneg_crypto::CryptoProvider;

/// Everything a handshake reads but never changes: policy and collaborators.
///
/// One context serves any number of concurrent handshakes.
#[derive(Clone)]
pub struct ServerContext {
    config: Arc<Config>,
    provider: Arc<dyn CryptoProvider>,
    session_cache: Arc<dyn SessionCache>,
    key_store: Option<Arc<dyn KeyStore>>,
    trust_store: Option<Arc<dyn TrustStore>>,
}

impl ServerContext {
    /// Create a context builder around the two mandatory collaborators.
    pub fn builder(
        provider: Arc<dyn CryptoProvider>,
        session_cache: Arc<dyn SessionCache>,
    ) -> ServerContextBuilder {
        ServerContextBuilder {
            config: None,
            provider,
            session_cache,
            key_store: None,
            trust_store: None,
        }
    }

    /// Negotiation policy.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Crypto provider.
    pub fn provider(&self) -> &dyn CryptoProvider {
        self.provider.as_ref()
    }

    /// Session cache.
    pub fn session_cache(&self) -> &dyn SessionCache {
        self.session_cache.as_ref()
    }

    /// Key store, if the server has one.
    pub fn key_store(&self) -> Option<&dyn KeyStore> {
        self.key_store.as_deref()
    }

    /// Client trust store, if the server has one.
    pub fn trust_store(&self) -> Option<&dyn TrustStore> {
        self.trust_store.as_deref()
    }

    /// Configured suites the provider can run, in server preference order.
    ///
    /// FIPS mode drops suites that are not approved.
    pub fn supported_cipher_suites(&self) -> Vec<CipherSuite> {
        let fips = self.config.fips;
        self.config
            .cipher_suites
            .iter()
            .copied()
            .filter(|suite| !fips || suite.is_fips_approved())
            .filter(|suite| {
                self.provider.supports_cipher(suite.bulk_cipher())
                    && self.provider.supports_hash(suite.hash_algorithm())
            })
            .collect()
    }

    /// Compression methods the server offers.
    pub fn compression_methods(&self) -> Vec<CompressionMethod> {
        if self.config.fips {
            vec![CompressionMethod::Null]
        } else {
            self.config.compression_methods.clone()
        }
    }
}

impl fmt::Debug for ServerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerContext")
            .field("config", &self.config)
            .field("key_store", &self.key_store.is_some())
            .field("trust_store", &self.trust_store.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`ServerContext`].
pub struct ServerContextBuilder {
    config: Option<Config>,
    provider: Arc<dyn CryptoProvider>,
    session_cache: Arc<dyn SessionCache>,
    key_store: Option<Arc<dyn KeyStore>>,
    trust_store: Option<Arc<dyn TrustStore>>,
}

impl ServerContextBuilder {
    /// Set the negotiation policy. Defaults to [`Config::default`].
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the key store.
    pub fn with_key_store(mut self, key_store: Arc<dyn KeyStore>) -> Self {
        self.key_store = Some(key_store);
        self
    }

    /// Set the client trust store.
    pub fn with_trust_store(mut self, trust_store: Arc<dyn TrustStore>) -> Self {
        self.trust_store = Some(trust_store);
        self
    }

    /// Build the context.
    pub fn build(self) -> ServerContext {
        ServerContext {
            config: Arc::new(self.config.unwrap_or_default()),
            provider: self.provider,
            session_cache: self.session_cache,
            key_store: self.key_store,
            trust_store: self.trust_store,
        }
    }
}

impl fmt::Debug for ServerContextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerContextBuilder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
