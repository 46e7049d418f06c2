//! Fixtures for the negotiation benchmarks.
//!
//! Collaborators here do no real work, so the benchmarks measure negotiation
//! itself.

use std::sync::Arc;
use tlsneg_core::{
    Certificate, CipherSuite, Connection, ConnectionHint, ConnectionManager, DistinguishedName,
    KeyStore, ProtocolVersion, ServerContext, Session, SessionCache,
};
use tlsneg_crypto::{
    AgreementCredential, BulkCipher, CryptoProvider, DecryptorCredential, HashAlgorithm, KeyType,
    PrivateKeyHandle, SignatureScheme, SignerCredential,
};
use zeroize::Zeroizing;

#[derive(Debug)]
struct NullCredential(Vec<Certificate>, Option<SignatureScheme>);

impl AgreementCredential for NullCredential {
    fn certificate_chain(&self) -> &[Certificate] {
        &self.0
    }

    fn generate_agreement(&self, _peer: &[u8]) -> tlsneg_crypto::Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(Vec::new()))
    }
}

impl SignerCredential for NullCredential {
    fn certificate_chain(&self) -> &[Certificate] {
        &self.0
    }

    fn signature_scheme(&self) -> Option<SignatureScheme> {
        self.1
    }

    fn generate_signature(&self, _message: &[u8]) -> tlsneg_crypto::Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

impl DecryptorCredential for NullCredential {
    fn certificate_chain(&self) -> &[Certificate] {
        &self.0
    }

    fn decrypt(&self, _ciphertext: &[u8]) -> tlsneg_crypto::Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(Vec::new()))
    }
}

/// Provider that supports every algorithm.
#[derive(Debug)]
pub struct NullProvider;

impl CryptoProvider for NullProvider {
    fn supports_cipher(&self, _cipher: BulkCipher) -> bool {
        true
    }

    fn supports_hash(&self, _hash: HashAlgorithm) -> bool {
        true
    }

    fn supports_signature_scheme(&self, _scheme: SignatureScheme) -> bool {
        true
    }

    fn agreement_credential(
        &self,
        chain: Vec<Certificate>,
        _key: PrivateKeyHandle,
    ) -> tlsneg_crypto::Result<Box<dyn AgreementCredential>> {
        Ok(Box::new(NullCredential(chain, None)))
    }

    fn signer_credential(
        &self,
        chain: Vec<Certificate>,
        _key: PrivateKeyHandle,
        scheme: Option<SignatureScheme>,
    ) -> tlsneg_crypto::Result<Box<dyn SignerCredential>> {
        Ok(Box::new(NullCredential(chain, scheme)))
    }

    fn decryptor_credential(
        &self,
        chain: Vec<Certificate>,
        _key: PrivateKeyHandle,
    ) -> tlsneg_crypto::Result<Box<dyn DecryptorCredential>> {
        Ok(Box::new(NullCredential(chain, None)))
    }
}

/// Key store holding a single identity for one auth type.
#[derive(Debug)]
pub struct SingleIdentity {
    auth_type: &'static str,
    key_type: KeyType,
}

impl SingleIdentity {
    /// Serve `auth_type` with a key of `key_type`.
    pub fn new(auth_type: &'static str, key_type: KeyType) -> Self {
        Self { auth_type, key_type }
    }
}

impl KeyStore for SingleIdentity {
    fn choose_server_alias(
        &self,
        auth_type: &str,
        _issuers: Option<&[DistinguishedName]>,
        _hint: Option<&ConnectionHint>,
    ) -> Option<String> {
        (auth_type == self.auth_type).then(|| auth_type.to_string())
    }

    fn private_key(&self, alias: &str) -> Option<PrivateKeyHandle> {
        Some(PrivateKeyHandle::new(self.key_type, alias))
    }

    fn certificate_chain(&self, alias: &str) -> Vec<Certificate> {
        vec![Certificate::new(
            alias.as_bytes().to_vec(),
            DistinguishedName::from_der(alias.as_bytes().to_vec()),
            self.key_type,
        )]
    }
}

/// Session cache that keeps nothing.
#[derive(Debug)]
pub struct DiscardSessions;

impl SessionCache for DiscardSessions {
    fn report_session(&self, session: Session) -> Arc<Session> {
        Arc::new(session)
    }
}

/// Connection manager that accepts every suite.
#[derive(Debug)]
pub struct AcceptAll;

impl ConnectionManager for AcceptAll {
    fn is_acceptable_cipher_suite(&self, _suite: CipherSuite, _version: ProtocolVersion) -> bool {
        true
    }

    fn notify_handshake_complete(&self, _connection: Connection) {}
}

/// Server context with every suite enabled and one identity.
pub fn context(auth_type: &'static str, key_type: KeyType) -> ServerContext {
    let config = tlsneg_core::Config {
        cipher_suites: CipherSuite::ALL.to_vec(),
        ..tlsneg_core::Config::default()
    };
    ServerContext::builder(Arc::new(NullProvider), Arc::new(DiscardSessions))
        .with_config(config)
        .with_key_store(Arc::new(SingleIdentity::new(auth_type, key_type)))
        .build()
}
