//! KEM session lifecycle and two-party agreement tests

use pqkit::{catalog, ErrorKind, KemAlgorithm, KeyEncapsulation};

#[test]
fn ml_kem_768_two_party_agreement() {
    let mut alice = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let alice_pk = alice.generate_keypair().unwrap();
    assert_eq!(alice_pk.len(), 1184);

    let bob = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let encapsulation = bob.encapsulate_secret(&alice_pk).unwrap();
    assert_eq!(encapsulation.ciphertext().len(), 1088);

    let alice_secret = alice.decapsulate_secret(encapsulation.ciphertext()).unwrap();
    assert_eq!(alice_secret.len(), 32);
    assert_eq!(&alice_secret, encapsulation.shared_secret());
}

#[test]
fn every_enabled_kem_roundtrips() {
    for name in catalog::kems::enabled_algorithms() {
        let mut receiver = KeyEncapsulation::new(name).unwrap();
        let pk = receiver.generate_keypair().unwrap();
        assert_eq!(pk.len(), receiver.details().public_key_len, "{name}");

        let sender = KeyEncapsulation::new(name).unwrap();
        let (ciphertext, sender_secret) = sender.encapsulate_secret(&pk).unwrap().into_parts();
        let receiver_secret = receiver.decapsulate_secret(&ciphertext).unwrap();
        assert_eq!(sender_secret, receiver_secret, "{name}");
    }
}

#[test]
fn encapsulation_uses_fresh_randomness() {
    let mut receiver = KeyEncapsulation::new("ML-KEM-512").unwrap();
    let pk = receiver.generate_keypair().unwrap();

    let sender = KeyEncapsulation::new("ML-KEM-512").unwrap();
    let first = sender.encapsulate_secret(&pk).unwrap();
    let second = sender.encapsulate_secret(&pk).unwrap();
    assert_ne!(first.ciphertext(), second.ciphertext());
    assert_ne!(first.shared_secret(), second.shared_secret());
}

#[test]
fn tampered_ciphertext_is_implicitly_rejected() {
    let mut receiver = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let pk = receiver.generate_keypair().unwrap();

    let sender = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let (mut ciphertext, sender_secret) = sender.encapsulate_secret(&pk).unwrap().into_parts();
    ciphertext[0] ^= 0x01;

    // decapsulation must not report failure, only produce a non-matching secret
    let garbage = receiver.decapsulate_secret(&ciphertext).unwrap();
    assert_eq!(garbage.len(), 32);
    assert_ne!(garbage, sender_secret);
}

#[test]
fn wrong_length_public_key_is_invalid_argument() {
    let session = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let short_pk = vec![0u8; session.details().public_key_len - 1];
    let err = session.encapsulate_secret(&short_pk).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn wrong_length_ciphertext_is_invalid_argument() {
    let mut session = KeyEncapsulation::new("ML-KEM-768").unwrap();
    session.generate_keypair().unwrap();
    let err = session.decapsulate_secret(&[0u8; 1087]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn decapsulate_without_keypair_is_invalid_state() {
    let session = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let err = session.decapsulate_secret(&[0u8; 1088]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[test]
fn export_without_keypair_is_invalid_state() {
    let session = KeyEncapsulation::new("ML-KEM-512").unwrap();
    let err = session.export_secret_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
}

#[test]
fn second_keypair_generation_fails_and_keeps_state() {
    let mut receiver = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let pk = receiver.generate_keypair().unwrap();
    let secret_key = receiver.export_secret_key().unwrap();

    let err = receiver.generate_keypair().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);

    // the failed call left the original keypair in place
    assert_eq!(receiver.export_secret_key().unwrap(), secret_key);
    let sender = KeyEncapsulation::new("ML-KEM-768").unwrap();
    let (ciphertext, sender_secret) = sender.encapsulate_secret(&pk).unwrap().into_parts();
    assert_eq!(receiver.decapsulate_secret(&ciphertext).unwrap(), sender_secret);
}

#[test]
fn imported_secret_key_decapsulates() {
    let mut original = KeyEncapsulation::new("ML-KEM-1024").unwrap();
    let pk = original.generate_keypair().unwrap();
    let secret_key = original.export_secret_key().unwrap();

    let imported = KeyEncapsulation::from_secret_key("ML-KEM-1024", &secret_key).unwrap();
    assert!(imported.has_secret_key());
    assert!(imported.public_key().is_none());

    let sender = KeyEncapsulation::new("ML-KEM-1024").unwrap();
    let (ciphertext, sender_secret) = sender.encapsulate_secret(&pk).unwrap().into_parts();
    assert_eq!(imported.decapsulate_secret(&ciphertext).unwrap(), sender_secret);
}

#[test]
fn imported_secret_key_must_match_length() {
    let err = KeyEncapsulation::from_secret_key("ML-KEM-768", &[0u8; 2399]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unknown_algorithm_is_unsupported() {
    let err = KeyEncapsulation::new("NONEXISTENT-ALG").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedAlgorithm);
    let err = KeyEncapsulation::from_secret_key("NONEXISTENT-ALG", &[0u8; 32]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedAlgorithm);
}

#[test]
fn details_match_catalog_descriptor() {
    let session = KeyEncapsulation::for_algorithm(KemAlgorithm::MlKem768);
    let described = catalog::kems::describe("ML-KEM-768").unwrap();
    assert_eq!(session.details(), described);
    assert_eq!(session.algorithm(), KemAlgorithm::MlKem768);
}
