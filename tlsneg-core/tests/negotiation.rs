//! Negotiation Round Tests
//!
//! Version, cipher suite and curve negotiation through `ServerHandshake`.

mod common;

use common::*;
use tlsneg_core::{
    AlertDescription, CipherSuite, ClientOffer, CompressionMethod, Config, ProtocolVersion,
};
use tlsneg_crypto::{BulkCipher, NamedCurve};

/// The negotiated version is never above the client's and always configured.
#[test]
fn test_version_is_configured_and_not_above_client() {
    let config = Config::builder()
        .with_protocols(&["TLSv1.2", "TLSv1"])
        .build()
        .unwrap();
    let fixture = Fixture::new(full_key_store(), config);

    let cases = [
        (ProtocolVersion::Tls13, Some(ProtocolVersion::Tls12)),
        (ProtocolVersion::Tls12, Some(ProtocolVersion::Tls12)),
        (ProtocolVersion::Tls11, Some(ProtocolVersion::Tls10)),
        (ProtocolVersion::Tls10, Some(ProtocolVersion::Tls10)),
        (ProtocolVersion::Ssl30, None),
    ];

    for (client, expected) in cases {
        let mut handshake = fixture.handshake(ClientOffer::new(client, &[]));
        match (handshake.server_version(), expected) {
            (Ok(version), Some(expected)) => {
                assert_eq!(version, expected);
                assert!(client.is_equal_or_later_than(version));
                assert!(fixture.config.allows_version(version));
            },
            (Err(err), None) => {
                assert_eq!(err.alert(), Some(AlertDescription::ProtocolVersion));
                assert_eq!(handshake.negotiated_version(), None);
            },
            (result, expected) => panic!("{:?}: got {:?}, want {:?}", client, result, expected),
        }
    }
}

/// Once negotiated, the version does not move.
#[test]
fn test_version_is_stable() {
    let fixture = Fixture::new(full_key_store(), all_suites_config());
    let mut handshake = fixture.handshake(ClientOffer::new(ProtocolVersion::Tls12, &[]));
    assert_eq!(handshake.server_version().unwrap(), ProtocolVersion::Tls12);
    assert_eq!(handshake.server_version().unwrap(), ProtocolVersion::Tls12);
    assert_eq!(handshake.negotiated_version(), Some(ProtocolVersion::Tls12));
}

/// Server preference order decides among suites the client offered.
#[test]
fn test_server_preference_order() {
    let config = Config::builder()
        .with_cipher_suites(&[
            CipherSuite::EcdheEcdsaWithAes256GcmSha384,
            CipherSuite::EcdheRsaWithAes128GcmSha256,
            CipherSuite::RsaWithAes128GcmSha256,
        ])
        .build()
        .unwrap();
    let fixture = Fixture::new(full_key_store(), config);
    let offer = ClientOffer::new(
        ProtocolVersion::Tls12,
        &[CipherSuite::RsaWithAes128GcmSha256, CipherSuite::EcdheRsaWithAes128GcmSha256],
    );
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();

    assert_eq!(
        handshake.selected_cipher_suite().unwrap(),
        CipherSuite::EcdheRsaWithAes128GcmSha256
    );
    assert_eq!(
        handshake.negotiated_cipher_suite(),
        Some(CipherSuite::EcdheRsaWithAes128GcmSha256)
    );
    assert_eq!(handshake.credentials().kind(), "signer");
}

/// TLS 1.2-only suites are skipped at TLS 1.1.
#[test]
fn test_suites_must_fit_version() {
    let fixture = Fixture::new(full_key_store(), all_suites_config());
    let offer = ClientOffer::new(
        ProtocolVersion::Tls11,
        &[CipherSuite::EcdheRsaWithAes128GcmSha256, CipherSuite::RsaWithAes128CbcSha],
    );
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();

    assert_eq!(
        handshake.selected_cipher_suite().unwrap(),
        CipherSuite::RsaWithAes128CbcSha
    );
}

/// A TLS 1.3 version never pairs with a TLS 1.2 key exchange suite.
#[test]
fn test_tls13_version_rejects_tls12_suites() {
    let config = Config::builder()
        .with_protocols(&["TLSv1.3", "TLSv1.2"])
        .with_cipher_suites(&[CipherSuite::EcdheRsaWithAes128GcmSha256])
        .build()
        .unwrap();
    let fixture = Fixture::new(full_key_store(), config);
    let offer = ClientOffer::new(
        ProtocolVersion::Tls13,
        &[CipherSuite::EcdheRsaWithAes128GcmSha256],
    );
    let mut handshake = fixture.handshake(offer);
    assert_eq!(handshake.server_version().unwrap(), ProtocolVersion::Tls13);

    let err = handshake.selected_cipher_suite().unwrap_err();
    assert_eq!(err.alert(), Some(AlertDescription::HandshakeFailure));
    assert_eq!(handshake.negotiated_cipher_suite(), None);
    assert!(handshake.credentials().is_none());
}

/// ECC suites need a curve the client can use.
#[test]
fn test_ecc_suites_need_a_curve() {
    let config = Config::builder()
        .with_restricted_curves(true)
        .with_cipher_suites(&[
            CipherSuite::EcdheRsaWithAes128GcmSha256,
            CipherSuite::DheRsaWithAes128GcmSha256,
        ])
        .build()
        .unwrap();
    let fixture = Fixture::new(full_key_store(), config);
    let offer = ClientOffer::new(
        ProtocolVersion::Tls12,
        &[CipherSuite::EcdheRsaWithAes128GcmSha256, CipherSuite::DheRsaWithAes128GcmSha256],
    )
    .with_named_curves(&[NamedCurve::X25519]);
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();

    assert_eq!(handshake.max_negotiable_curve_bits(), 0);
    assert_eq!(
        handshake.selected_cipher_suite().unwrap(),
        CipherSuite::DheRsaWithAes128GcmSha256
    );
    assert_eq!(fixture.key_store.queries_for("ECDHE_RSA"), 0);
    assert_eq!(handshake.ecdh_curve().unwrap(), None);
}

/// Nothing in common ends the handshake with handshake_failure.
#[test]
fn test_no_common_suite() {
    let fixture = Fixture::new(RecordingKeyStore::new(), all_suites_config());
    let offer = ClientOffer::new(
        ProtocolVersion::Tls12,
        &[CipherSuite::EcdheEcdsaWithAes128GcmSha256, CipherSuite::RsaWithAes128GcmSha256],
    );
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();

    let err = handshake.selected_cipher_suite().unwrap_err();
    assert_eq!(err.alert(), Some(AlertDescription::HandshakeFailure));
    assert!(handshake.credentials().is_none());
    assert_eq!(handshake.negotiated_cipher_suite(), None);
}

/// Unknown suite codes from the client are ignored.
#[test]
fn test_unknown_client_suites() {
    let fixture = Fixture::new(full_key_store(), all_suites_config());
    let mut offer = ClientOffer::new(ProtocolVersion::Tls12, &[CipherSuite::RsaWithAes128CbcSha]);
    offer.cipher_suites.insert(0, 0x1301);
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();

    assert_eq!(
        handshake.selected_cipher_suite().unwrap(),
        CipherSuite::RsaWithAes128CbcSha
    );
}

/// Client curve order wins over strength.
#[test]
fn test_curve_selection_follows_client_order() {
    let fixture = Fixture::new(full_key_store(), all_suites_config());
    let offer = ClientOffer::new(ProtocolVersion::Tls12, &[])
        .with_named_curves(&[NamedCurve::Secp521r1, NamedCurve::Secp256r1]);
    let handshake = fixture.handshake(offer);

    assert_eq!(handshake.select_curve(256), Some(NamedCurve::Secp521r1));
    assert_eq!(handshake.max_negotiable_curve_bits(), 521);
}

/// The ECDHE curve comes from the client's list.
#[test]
fn test_ecdh_curve_for_selected_suite() {
    let fixture = Fixture::new(full_key_store(), all_suites_config());
    let offer = ClientOffer::new(
        ProtocolVersion::Tls12,
        &[CipherSuite::EcdheEcdsaWithAes128GcmSha256],
    )
    .with_named_curves(&[NamedCurve::X25519, NamedCurve::Secp256r1]);
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();
    handshake.selected_cipher_suite().unwrap();

    assert_eq!(handshake.ecdh_curve().unwrap(), Some(NamedCurve::X25519));
}

/// FIPS mode drops anonymous suites, restricts curves and compression.
#[test]
fn test_fips_mode() {
    let config = Config::builder()
        .with_fips(true)
        .with_cipher_suites(CipherSuite::ALL)
        .with_compression_methods(&[CompressionMethod::Null, CompressionMethod::Deflate])
        .build()
        .unwrap();
    let fixture = Fixture::new(full_key_store(), config);
    let offer = ClientOffer::new(ProtocolVersion::Tls12, &[CipherSuite::EcdhAnonWithAes128CbcSha])
        .with_named_curves(&[NamedCurve::X25519, NamedCurve::Secp384r1]);
    let mut handshake = fixture.handshake(offer);
    handshake.server_version().unwrap();

    let suites = handshake.cipher_suites();
    assert!(suites.iter().all(|suite| suite.is_fips_approved()));
    assert!(!suites.contains(&CipherSuite::DhAnonWithAes128GcmSha256));
    assert_eq!(handshake.compression_methods(), vec![CompressionMethod::Null]);
    assert_eq!(handshake.select_curve(1), Some(NamedCurve::Secp384r1));
    assert!(handshake.selected_cipher_suite().is_err());
}

/// Suites whose cipher the provider lacks are not offered.
#[test]
fn test_provider_capabilities_filter_suites() {
    let mut fixture = Fixture::new(full_key_store(), all_suites_config());
    fixture.provider = std::sync::Arc::new(MockProvider {
        unsupported_ciphers: vec![BulkCipher::Aes256Gcm],
        ..MockProvider::default()
    });
    let handshake = fixture.handshake(ClientOffer::new(ProtocolVersion::Tls12, &[]));

    let suites = handshake.cipher_suites();
    assert!(!suites.contains(&CipherSuite::EcdheRsaWithAes256GcmSha384));
    assert!(suites.contains(&CipherSuite::EcdheRsaWithAes128GcmSha256));
    assert_eq!(handshake.compression_methods(), vec![CompressionMethod::Null]);
}
