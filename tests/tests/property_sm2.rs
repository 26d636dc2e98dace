//! Property-based tests for SM2 signatures and encryption

use gmcrypt_algorithms::ec::sm2::Sm2KeyPair;
use gmcrypt_pke::{decrypt, encrypt, Error as PkeError};
use gmcrypt_sign::{sign, verify, Sm2Signature};
use gmcrypt_tests::seeded_rng;
use proptest::prelude::*;

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=300)
}

fn user_id() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sign_verify_roundtrip(seed in any::<u64>(), msg in message(), id in user_id()) {
        let mut rng = seeded_rng(seed);
        let pair = Sm2KeyPair::generate(&mut rng);
        let sig = sign(&msg, pair.private_key(), &id, &mut rng).unwrap();
        prop_assert!(verify(&msg, &sig, pair.public_key(), &id));
    }

    #[test]
    fn tampered_signature_rejected(
        seed in any::<u64>(),
        msg in message(),
        idx in 0usize..64,
        bit in 0u8..8,
    ) {
        let mut rng = seeded_rng(seed);
        let pair = Sm2KeyPair::generate(&mut rng);
        let sig = sign(&msg, pair.private_key(), b"1234567812345678", &mut rng).unwrap();

        let mut bytes = sig.to_bytes();
        bytes[idx] ^= 1 << bit;
        let tampered = Sm2Signature::from_bytes(&bytes).unwrap();
        prop_assert!(!verify(&msg, &tampered, pair.public_key(), b"1234567812345678"));
    }

    #[test]
    fn tampered_message_rejected(seed in any::<u64>(), msg in message(), extra in any::<u8>()) {
        let mut rng = seeded_rng(seed);
        let pair = Sm2KeyPair::generate(&mut rng);
        let sig = sign(&msg, pair.private_key(), b"id", &mut rng).unwrap();

        let mut altered = msg.clone();
        altered.push(extra);
        prop_assert!(!verify(&altered, &sig, pair.public_key(), b"id"));
    }

    #[test]
    fn encrypt_decrypt_roundtrip(seed in any::<u64>(), msg in message()) {
        let mut rng = seeded_rng(seed);
        let pair = Sm2KeyPair::generate(&mut rng);
        let ct = encrypt(&msg, pair.public_key(), &mut rng).unwrap();
        prop_assert_eq!(ct.as_bytes().len(), 96 + msg.len());
        prop_assert_eq!(decrypt(ct.as_bytes(), pair.private_key()).unwrap(), msg);
    }

    #[test]
    fn corrupted_tag_or_body_rejected(
        seed in any::<u64>(),
        msg in prop::collection::vec(any::<u8>(), 1..=300),
        offset in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut rng = seeded_rng(seed);
        let pair = Sm2KeyPair::generate(&mut rng);
        let mut bytes = encrypt(&msg, pair.public_key(), &mut rng).unwrap().into_bytes();

        // Anywhere in C3 ‖ C2
        let idx = 64 + offset.index(bytes.len() - 64);
        bytes[idx] ^= 1 << bit;
        prop_assert_eq!(decrypt(&bytes, pair.private_key()), Err(PkeError::IntegrityCheckFailed));
    }
}
