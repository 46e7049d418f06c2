//! Server credential resolution.
//!
//! For each candidate cipher suite the resolver works out which kind of
//! credential the key exchange needs, looks up a matching identity in the
//! key store, checks that the key can actually do the job, and has the crypto
//! provider wrap it in a credential object.
//!
//! Lookups that find nothing are remembered per authentication type for the
//! rest of the [`NegotiationRound`], so a key store is asked at most once per
//! type no matter how many suites share it.

use crate::certificate::Certificate;
use crate::cipher_suites::{CipherSuite, DhAuthentication, EcdhAuthentication, KeyExchangeFamily};
use crate::error::Result;
use crate::key_store::KeyStore;
use crate::protocol::ProtocolVersion;
use std::collections::HashSet;
use tlsneg_crypto::{
    AgreementCredential, CryptoProvider, DecryptorCredential, PrivateKeyHandle,
    SignatureAlgorithm, SignatureScheme, SignerCredential,
};

/// The credential a handshake will use for its key exchange.
#[derive(Debug, Default)]
pub enum ServerCredential {
    /// Nothing selected yet, or the last candidate failed
    #[default]
    None,
    /// Anonymous key exchange; no certificate is sent
    Anonymous,
    /// Static (EC)DH
    Agreement(Box<dyn AgreementCredential>),
    /// Signed ephemeral (EC)DH
    Signer(Box<dyn SignerCredential>),
    /// RSA key transport
    Decryptor(Box<dyn DecryptorCredential>),
}

impl ServerCredential {
    /// Check if no credential is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, ServerCredential::None)
    }

    /// Certificate chain the server will present, if any.
    pub fn certificate_chain(&self) -> Option<&[Certificate]> {
        match self {
            ServerCredential::None | ServerCredential::Anonymous => None,
            ServerCredential::Agreement(credential) => Some(credential.certificate_chain()),
            ServerCredential::Signer(credential) => Some(credential.certificate_chain()),
            ServerCredential::Decryptor(credential) => Some(credential.certificate_chain()),
        }
    }

    /// Signature scheme of a signing credential.
    pub fn signature_scheme(&self) -> Option<SignatureScheme> {
        match self {
            ServerCredential::Signer(credential) => credential.signature_scheme(),
            _ => None,
        }
    }

    /// Short name of the variant, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServerCredential::None => "none",
            ServerCredential::Anonymous => "anonymous",
            ServerCredential::Agreement(_) => "agreement",
            ServerCredential::Signer(_) => "signer",
            ServerCredential::Decryptor(_) => "decryptor",
        }
    }
}

/// What a key exchange family needs from the key store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// No credential
    Anonymous,
    /// Agreement credential
    Agreement,
    /// Signer credential producing signatures of this algorithm
    Signer(SignatureAlgorithm),
    /// Decryptor credential
    Decryptor,
    /// The server cannot serve this family
    Unsupported,
}

impl CredentialKind {
    /// Credential kind for a key exchange family.
    pub const fn for_family(family: KeyExchangeFamily) -> Self {
        match family {
            KeyExchangeFamily::AnonymousDh | KeyExchangeFamily::AnonymousEcdh => {
                CredentialKind::Anonymous
            },
            KeyExchangeFamily::StaticDh(_) | KeyExchangeFamily::StaticEcdh(_) => {
                CredentialKind::Agreement
            },
            KeyExchangeFamily::EphemeralDh(DhAuthentication::Dss) => {
                CredentialKind::Signer(SignatureAlgorithm::Dsa)
            },
            KeyExchangeFamily::EphemeralDh(DhAuthentication::Rsa) => {
                CredentialKind::Signer(SignatureAlgorithm::Rsa)
            },
            KeyExchangeFamily::EphemeralEcdh(EcdhAuthentication::Ecdsa) => {
                CredentialKind::Signer(SignatureAlgorithm::Ecdsa)
            },
            KeyExchangeFamily::EphemeralEcdh(EcdhAuthentication::Rsa) => {
                CredentialKind::Signer(SignatureAlgorithm::Rsa)
            },
            KeyExchangeFamily::Rsa => CredentialKind::Decryptor,
            KeyExchangeFamily::Unsupported => CredentialKind::Unsupported,
        }
    }
}

/// Authentication types the key store had nothing usable for.
#[derive(Debug, Default, Clone)]
pub struct KeyTypeMissCache {
    misses: HashSet<&'static str>,
}

impl KeyTypeMissCache {
    /// Check if `auth_type` already missed.
    pub fn contains(&self, auth_type: &str) -> bool {
        self.misses.contains(auth_type)
    }

    /// Remember that `auth_type` missed.
    pub fn record(&mut self, auth_type: &'static str) {
        self.misses.insert(auth_type);
    }

    /// Number of distinct misses.
    pub fn len(&self) -> usize {
        self.misses.len()
    }

    /// Check if nothing has missed yet.
    pub fn is_empty(&self) -> bool {
        self.misses.is_empty()
    }
}

/// State scoped to one cipher suite negotiation.
///
/// Created when suite selection starts and dropped once a suite is chosen or
/// negotiation fails, so nothing carries over to another handshake.
#[derive(Debug, Default)]
pub struct NegotiationRound {
    misses: KeyTypeMissCache,
    key_store_queries: usize,
}

impl NegotiationRound {
    /// Start a fresh round.
    pub fn new() -> Self {
        Self::default()
    }

    /// Misses recorded so far.
    pub fn miss_cache(&self) -> &KeyTypeMissCache {
        &self.misses
    }

    /// Number of alias lookups made against the key store.
    pub fn key_store_queries(&self) -> usize {
        self.key_store_queries
    }
}

/// Resolves the credential for a cipher suite.
///
/// Borrows everything it needs from the handshake, so it is cheap to build per
/// candidate.
pub struct CredentialResolver<'a> {
    key_store: Option<&'a dyn KeyStore>,
    provider: &'a dyn CryptoProvider,
    version: ProtocolVersion,
    client_signature_schemes: Option<&'a [SignatureScheme]>,
}

impl<'a> CredentialResolver<'a> {
    /// Create a resolver.
    ///
    /// `client_signature_schemes` is the client's `signature_algorithms`
    /// extension, or `None` if it sent none.
    pub fn new(
        key_store: Option<&'a dyn KeyStore>,
        provider: &'a dyn CryptoProvider,
        version: ProtocolVersion,
        client_signature_schemes: Option<&'a [SignatureScheme]>,
    ) -> Self {
        Self {
            key_store,
            provider,
            version,
            client_signature_schemes,
        }
    }

    /// Resolve the credential for `suite`.
    ///
    /// `Ok(None)` means the suite cannot be served and the next candidate
    /// should be tried. An error means the crypto provider failed and the
    /// handshake must end.
    pub fn resolve(
        &self,
        suite: CipherSuite,
        round: &mut NegotiationRound,
    ) -> Result<Option<ServerCredential>> {
        let family = suite.key_exchange_family();

        match CredentialKind::for_family(family) {
            CredentialKind::Anonymous => Ok(Some(ServerCredential::Anonymous)),
            CredentialKind::Unsupported => {
                tracing::debug!("no credentials for key exchange of {}", suite.name());
                Ok(None)
            },
            CredentialKind::Agreement => {
                let Some((chain, key)) = self.lookup(family, round) else {
                    return Ok(None);
                };
                let credential = self.provider.agreement_credential(chain, key)?;
                Ok(Some(ServerCredential::Agreement(credential)))
            },
            CredentialKind::Signer(algorithm) => {
                let Some((chain, key)) = self.lookup(family, round) else {
                    return Ok(None);
                };
                let scheme = if self.version.supports_signature_algorithms() {
                    match self.select_signature_scheme(algorithm) {
                        Some(scheme) => Some(scheme),
                        None => {
                            if let Some(auth_type) = family.auth_type() {
                                tracing::debug!(
                                    "client offers no usable signature scheme for {}",
                                    auth_type
                                );
                                round.misses.record(auth_type);
                            }
                            return Ok(None);
                        },
                    }
                } else {
                    None
                };
                let credential = self.provider.signer_credential(chain, key, scheme)?;
                Ok(Some(ServerCredential::Signer(credential)))
            },
            CredentialKind::Decryptor => {
                let Some((chain, key)) = self.lookup(family, round) else {
                    return Ok(None);
                };
                let credential = self.provider.decryptor_credential(chain, key)?;
                Ok(Some(ServerCredential::Decryptor(credential)))
            },
        }
    }

    /// Find a certificate chain and usable private key for `family`.
    fn lookup(
        &self,
        family: KeyExchangeFamily,
        round: &mut NegotiationRound,
    ) -> Option<(Vec<Certificate>, PrivateKeyHandle)> {
        let key_store = self.key_store?;
        let auth_type = family.auth_type()?;
        let required = family.required_key_type()?;

        if round.misses.contains(auth_type) {
            return None;
        }

        round.key_store_queries += 1;
        // Issuer and connection hints are not available to negotiation.
        let Some(alias) = key_store.choose_server_alias(auth_type, None, None) else {
            tracing::debug!("key store has no alias for {}", auth_type);
            round.misses.record(auth_type);
            return None;
        };

        let key = key_store.private_key(&alias);
        let chain = key_store.certificate_chain(&alias);

        match key {
            Some(key) if key.key_type() == required && !chain.is_empty() => Some((chain, key)),
            _ => {
                tracing::debug!("alias {} is not usable for {}", alias, auth_type);
                round.misses.record(auth_type);
                None
            },
        }
    }

    /// First client-listed scheme this key can produce and the provider
    /// implements; without a client list, the implied SHA-1 default.
    fn select_signature_scheme(&self, algorithm: SignatureAlgorithm) -> Option<SignatureScheme> {
        let implied;
        let candidates = match self.client_signature_schemes {
            Some(schemes) => schemes,
            None => {
                implied = SignatureScheme::implicit_default(algorithm)?;
                std::slice::from_ref(&implied)
            },
        };

        candidates.iter().copied().find(|scheme| {
            scheme.is_usable_for(algorithm) && self.provider.supports_signature_scheme(*scheme)
        })
    }
}

impl std::fmt::Debug for CredentialResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialResolver")
            .field("has_key_store", &self.key_store.is_some())
            .field("version", &self.version)
            .field("client_signature_schemes", &self.client_signature_schemes)
            .finish()
    }
}
