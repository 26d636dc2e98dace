//! Known-answer tests through the public API

use gmcrypt_algorithms::ec::sm2::{base_point_g, verify_domain_parameters};
use gmcrypt_algorithms::hash::{sm3_hash, sm3_hex, HashFunction, Sm3};
use gmcrypt_algorithms::{Sm2KeyPair, Sm2PrivateKey, Sm2PublicKey};
use gmcrypt_params::traditional::sm2::SM2_DEFAULT_USER_ID;
use gmcrypt_pke::{decrypt, decrypt_text, encrypt};
use gmcrypt_sign::{sign, verify, z_value, Sm2Signature};
use gmcrypt_tests::vectors::{SM2_BASE_POINT_HEX, SM2_STANDARD_EXAMPLE as KAT, SM3_VECTORS};
use gmcrypt_tests::FixedRng;

fn nonce_rng() -> FixedRng {
    FixedRng::new(hex::decode(KAT.k).unwrap())
}

#[test]
fn test_sm3_vectors_one_shot() {
    for v in SM3_VECTORS {
        assert_eq!(hex::encode(sm3_hash(v.message)), v.digest);
        assert_eq!(sm3_hex(v.message), v.digest);
    }
}

#[test]
fn test_sm3_vectors_streaming() {
    for v in SM3_VECTORS {
        let mut hasher = Sm3::new();
        for chunk in v.message.chunks(7) {
            hasher.update(chunk).unwrap();
        }
        assert_eq!(hex::encode(hasher.finalize().unwrap()), v.digest);
    }
}

#[test]
fn test_domain_parameters() {
    assert!(verify_domain_parameters().is_ok());
    assert_eq!(hex::encode(base_point_g().to_bytes().unwrap()), SM2_BASE_POINT_HEX);
}

#[test]
fn test_sm2_standard_public_key() {
    let sk = Sm2PrivateKey::from_hex(KAT.private_key).unwrap();
    assert_eq!(sk.public_key().to_hex(), KAT.public_key);
    assert!(Sm2KeyPair::from_hex(KAT.private_key, KAT.public_key).is_ok());
}

#[test]
fn test_sm2_standard_z_value() {
    let pk = Sm2PublicKey::from_hex(KAT.public_key).unwrap();
    let z = z_value(SM2_DEFAULT_USER_ID, &pk).unwrap();
    assert_eq!(hex::encode(z), KAT.z);
}

#[test]
fn test_sm2_standard_signature_verifies() {
    let pk = Sm2PublicKey::from_hex(KAT.public_key).unwrap();
    let sig = Sm2Signature::from_bytes(&hex::decode(KAT.signature).unwrap()).unwrap();
    assert!(verify(KAT.message, &sig, &pk, SM2_DEFAULT_USER_ID));
    assert!(!verify(b"message digesT", &sig, &pk, SM2_DEFAULT_USER_ID));
}

#[test]
fn test_sm2_standard_signature_reproduced() {
    let sk = Sm2PrivateKey::from_hex(KAT.private_key).unwrap();
    let sig = sign(KAT.message, &sk, SM2_DEFAULT_USER_ID, &mut nonce_rng()).unwrap();
    assert_eq!(hex::encode(sig.to_bytes()), KAT.signature);
}

#[test]
fn test_sm2_standard_ciphertext_decrypts() {
    let sk = Sm2PrivateKey::from_hex(KAT.private_key).unwrap();
    let ct = hex::decode(KAT.ciphertext).unwrap();
    assert_eq!(decrypt(&ct, &sk).unwrap(), KAT.plaintext);
    assert_eq!(
        decrypt_text(KAT.ciphertext, KAT.private_key).unwrap(),
        "encryption standard"
    );
}

#[test]
fn test_sm2_standard_ciphertext_reproduced() {
    let pk = Sm2PublicKey::from_hex(KAT.public_key).unwrap();
    let ct = encrypt(KAT.plaintext, &pk, &mut nonce_rng()).unwrap();
    assert_eq!(hex::encode(ct.as_bytes()), KAT.ciphertext);
}
