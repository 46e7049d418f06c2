//! In-memory collaborators shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tlsneg_core::{
    Certificate, CipherSuite, ClientOffer, Config, Connection, ConnectionHint, ConnectionManager,
    DistinguishedName, KeyStore, ProtocolVersion, ServerContext, ServerHandshake, Session,
    SessionCache, TrustStore,
};
use tlsneg_crypto::{
    AgreementCredential, BulkCipher, CryptoProvider, DecryptorCredential, HashAlgorithm, KeyType,
    PrivateKeyHandle, SignatureScheme, SignerCredential,
};
use zeroize::Zeroizing;

pub fn certificate(key_type: KeyType, subject: &str) -> Certificate {
    Certificate::new(
        format!("cert:{}", subject).into_bytes(),
        DistinguishedName::from_der(format!("CN={}", subject).into_bytes()),
        key_type,
    )
}

// ---- crypto provider ----

#[derive(Debug)]
pub struct MockAgreement {
    chain: Vec<Certificate>,
}

impl AgreementCredential for MockAgreement {
    fn certificate_chain(&self) -> &[Certificate] {
        &self.chain
    }

    fn generate_agreement(&self, peer_public_key: &[u8]) -> tlsneg_crypto::Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(peer_public_key.to_vec()))
    }
}

#[derive(Debug)]
pub struct MockSigner {
    chain: Vec<Certificate>,
    scheme: Option<SignatureScheme>,
}

impl SignerCredential for MockSigner {
    fn certificate_chain(&self) -> &[Certificate] {
        &self.chain
    }

    fn signature_scheme(&self) -> Option<SignatureScheme> {
        self.scheme
    }

    fn generate_signature(&self, message: &[u8]) -> tlsneg_crypto::Result<Vec<u8>> {
        Ok(message.iter().rev().copied().collect())
    }
}

#[derive(Debug)]
pub struct MockDecryptor {
    chain: Vec<Certificate>,
}

impl DecryptorCredential for MockDecryptor {
    fn certificate_chain(&self) -> &[Certificate] {
        &self.chain
    }

    fn decrypt(&self, ciphertext: &[u8]) -> tlsneg_crypto::Result<Zeroizing<Vec<u8>>> {
        Ok(Zeroizing::new(ciphertext.to_vec()))
    }
}

/// Provider that supports everything unless told otherwise.
#[derive(Debug, Default)]
pub struct MockProvider {
    pub unsupported_ciphers: Vec<BulkCipher>,
    pub unsupported_schemes: Vec<SignatureScheme>,
    pub fail_credentials: bool,
}

impl MockProvider {
    fn check(&self, kind: &'static str) -> tlsneg_crypto::Result<()> {
        if self.fail_credentials {
            Err(tlsneg_crypto::Error::UnsupportedCredential(kind))
        } else {
            Ok(())
        }
    }
}

impl CryptoProvider for MockProvider {
    fn supports_cipher(&self, cipher: BulkCipher) -> bool {
        !self.unsupported_ciphers.contains(&cipher)
    }

    fn supports_hash(&self, _hash: HashAlgorithm) -> bool {
        true
    }

    fn supports_signature_scheme(&self, scheme: SignatureScheme) -> bool {
        !self.unsupported_schemes.contains(&scheme)
    }

    fn agreement_credential(
        &self,
        certificate_chain: Vec<Certificate>,
        _private_key: PrivateKeyHandle,
    ) -> tlsneg_crypto::Result<Box<dyn AgreementCredential>> {
        self.check("agreement")?;
        Ok(Box::new(MockAgreement {
            chain: certificate_chain,
        }))
    }

    fn signer_credential(
        &self,
        certificate_chain: Vec<Certificate>,
        _private_key: PrivateKeyHandle,
        signature_scheme: Option<SignatureScheme>,
    ) -> tlsneg_crypto::Result<Box<dyn SignerCredential>> {
        self.check("signer")?;
        Ok(Box::new(MockSigner {
            chain: certificate_chain,
            scheme: signature_scheme,
        }))
    }

    fn decryptor_credential(
        &self,
        certificate_chain: Vec<Certificate>,
        _private_key: PrivateKeyHandle,
    ) -> tlsneg_crypto::Result<Box<dyn DecryptorCredential>> {
        self.check("decryptor")?;
        Ok(Box::new(MockDecryptor {
            chain: certificate_chain,
        }))
    }
}

// ---- key store ----

struct Entry {
    key: Option<PrivateKeyHandle>,
    chain: Vec<Certificate>,
}

/// Key store that counts alias queries per auth type.
#[derive(Default)]
pub struct RecordingKeyStore {
    aliases: HashMap<String, String>,
    entries: HashMap<String, Entry>,
    queries: Mutex<HashMap<String, usize>>,
}

impl RecordingKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `auth_type` from a key of `key_type` with a one-certificate chain.
    pub fn with_identity(self, auth_type: &str, key_type: KeyType) -> Self {
        let alias = format!("{}-alias", auth_type.to_lowercase());
        let key = PrivateKeyHandle::new(key_type, alias.clone());
        let chain = vec![certificate(key_type, &alias)];
        self.with_entry(auth_type, &alias, Some(key), chain)
    }

    pub fn with_entry(
        mut self,
        auth_type: &str,
        alias: &str,
        key: Option<PrivateKeyHandle>,
        chain: Vec<Certificate>,
    ) -> Self {
        self.aliases.insert(auth_type.to_string(), alias.to_string());
        self.entries.insert(alias.to_string(), Entry { key, chain });
        self
    }

    pub fn queries_for(&self, auth_type: &str) -> usize {
        self.queries.lock().unwrap().get(auth_type).copied().unwrap_or(0)
    }

    pub fn total_queries(&self) -> usize {
        self.queries.lock().unwrap().values().sum()
    }
}

impl KeyStore for RecordingKeyStore {
    fn choose_server_alias(
        &self,
        auth_type: &str,
        issuers: Option<&[DistinguishedName]>,
        hint: Option<&ConnectionHint>,
    ) -> Option<String> {
        assert!(issuers.is_none());
        assert!(hint.is_none());
        *self.queries.lock().unwrap().entry(auth_type.to_string()).or_insert(0) += 1;
        self.aliases.get(auth_type).cloned()
    }

    fn private_key(&self, alias: &str) -> Option<PrivateKeyHandle> {
        self.entries.get(alias).and_then(|entry| entry.key.clone())
    }

    fn certificate_chain(&self, alias: &str) -> Vec<Certificate> {
        self.entries.get(alias).map(|entry| entry.chain.clone()).unwrap_or_default()
    }
}

// ---- trust store ----

pub struct StaticTrustStore {
    pub issuers: Vec<Certificate>,
    pub trusted: bool,
    pub auth_types: Mutex<Vec<String>>,
}

impl StaticTrustStore {
    pub fn new(trusted: bool) -> Self {
        Self {
            issuers: vec![
                certificate(KeyType::Rsa, "Client CA 1"),
                certificate(KeyType::Ec, "Client CA 2"),
            ],
            trusted,
            auth_types: Mutex::new(Vec::new()),
        }
    }
}

impl TrustStore for StaticTrustStore {
    fn accepted_issuers(&self) -> Vec<Certificate> {
        self.issuers.clone()
    }

    fn is_client_trusted(&self, chain: &[Certificate], auth_type: &str) -> bool {
        assert!(!chain.is_empty());
        self.auth_types.lock().unwrap().push(auth_type.to_string());
        self.trusted
    }
}

// ---- session cache and connection manager ----

#[derive(Default)]
pub struct MemorySessionCache {
    pub sessions: Mutex<Vec<Arc<Session>>>,
}

impl SessionCache for MemorySessionCache {
    fn report_session(&self, session: Session) -> Arc<Session> {
        let session = Arc::new(session);
        self.sessions.lock().unwrap().push(Arc::clone(&session));
        session
    }
}

#[derive(Default)]
pub struct RecordingManager {
    pub rejected: Vec<CipherSuite>,
    pub published: Mutex<Vec<Connection>>,
}

impl RecordingManager {
    pub fn rejecting(suites: &[CipherSuite]) -> Self {
        Self {
            rejected: suites.to_vec(),
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn published_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

impl ConnectionManager for RecordingManager {
    fn is_acceptable_cipher_suite(&self, suite: CipherSuite, _version: ProtocolVersion) -> bool {
        !self.rejected.contains(&suite)
    }

    fn notify_handshake_complete(&self, connection: Connection) {
        self.published.lock().unwrap().push(connection);
    }
}

// ---- assembly ----

pub struct Fixture {
    pub key_store: Arc<RecordingKeyStore>,
    pub trust_store: Arc<StaticTrustStore>,
    pub provider: Arc<MockProvider>,
    pub session_cache: Arc<MemorySessionCache>,
    pub manager: Arc<RecordingManager>,
    pub config: Config,
}

impl Fixture {
    pub fn new(key_store: RecordingKeyStore, config: Config) -> Self {
        Self {
            key_store: Arc::new(key_store),
            trust_store: Arc::new(StaticTrustStore::new(true)),
            provider: Arc::new(MockProvider::default()),
            session_cache: Arc::new(MemorySessionCache::default()),
            manager: Arc::new(RecordingManager::default()),
            config,
        }
    }

    pub fn context(&self) -> ServerContext {
        ServerContext::builder(self.provider.clone(), self.session_cache.clone())
            .with_config(self.config.clone())
            .with_key_store(self.key_store.clone())
            .with_trust_store(self.trust_store.clone())
            .build()
    }

    pub fn handshake(&self, offer: ClientOffer) -> ServerHandshake {
        ServerHandshake::new(self.context(), self.manager.clone(), offer)
    }
}

/// Key store with an identity for every certificate-based auth type.
pub fn full_key_store() -> RecordingKeyStore {
    RecordingKeyStore::new()
        .with_identity("ECDHE_ECDSA", KeyType::Ec)
        .with_identity("ECDHE_RSA", KeyType::Rsa)
        .with_identity("ECDH_ECDSA", KeyType::Ec)
        .with_identity("ECDH_RSA", KeyType::Ec)
        .with_identity("DHE_RSA", KeyType::Rsa)
        .with_identity("DHE_DSS", KeyType::Dsa)
        .with_identity("DH_RSA", KeyType::Dh)
        .with_identity("DH_DSS", KeyType::Dh)
        .with_identity("RSA", KeyType::Rsa)
}

/// Enable every known suite, in registry order.
pub fn all_suites_config() -> Config {
    Config::builder()
        .with_protocols(&["TLSv1.2", "TLSv1.1", "TLSv1"])
        .with_cipher_suites(CipherSuite::ALL)
        .build()
        .unwrap()
}
