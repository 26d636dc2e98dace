//! Cross-crate integration tests

use gmcrypt_algorithms::ec::sm2::{key_exchange_init, Sm2KeyPair, Sm2PrivateKey, Sm2PublicKey};
use gmcrypt_api::{IdentitySignature, Pke, Signature, SignatureSerialize};
use gmcrypt_params::traditional::sm2::{SM2_DEFAULT_USER_ID, SM2_SIGNATURE_SIZE};
use gmcrypt_pke::{decrypt_text, encrypt_text, Sm2Pke};
use gmcrypt_sign::{sign_hex, verify_hex, verify_text, Sm2};
use gmcrypt_tests::seeded_rng;

#[test]
fn test_one_key_pair_signs_and_decrypts() {
    let mut rng = seeded_rng(1);
    let pair = Sm2KeyPair::generate(&mut rng);

    let sig = <Sm2 as Signature>::sign(b"hello", pair.private_key(), &mut rng).unwrap();
    assert!(<Sm2 as Signature>::verify(b"hello", &sig, pair.public_key()));

    let ct = Sm2Pke::encrypt(pair.public_key(), b"hello", &mut rng).unwrap();
    assert_eq!(Sm2Pke::decrypt(pair.private_key(), &ct).unwrap(), b"hello");
}

#[test]
fn test_keys_survive_hex_transport() {
    let mut rng = seeded_rng(2);
    let pair = Sm2KeyPair::generate(&mut rng);
    let d_hex = pair.private_key().to_hex();
    let q_hex = pair.public_key().to_hex();

    let restored = Sm2KeyPair::from_hex(&d_hex, &q_hex).unwrap();
    assert_eq!(restored.public_key(), pair.public_key());

    let sig_hex = sign_hex("00ff", &d_hex, SM2_DEFAULT_USER_ID, &mut rng).unwrap();
    assert_eq!(sig_hex.len(), 2 * SM2_SIGNATURE_SIZE);
    assert!(verify_hex("00FF", &sig_hex, &q_hex, SM2_DEFAULT_USER_ID));
    assert!(!verify_text("00ff", &sig_hex, &q_hex, SM2_DEFAULT_USER_ID));

    let ct_hex = encrypt_text("transported", &q_hex, &mut rng).unwrap();
    assert_eq!(decrypt_text(&ct_hex, &d_hex).unwrap(), "transported");
}

#[test]
fn test_serialized_keys_interoperate() {
    let mut rng = seeded_rng(3);
    let pair = Sm2::keypair(&mut rng).unwrap();

    let pk = Sm2::deserialize_public_key(&Sm2::serialize_public_key(pair.public_key())).unwrap();
    let sk = Sm2::deserialize_secret_key(&Sm2::serialize_secret_key(pair.private_key())).unwrap();

    let sig = Sm2::sign_with_id(b"m", &sk, b"alice", &mut rng).unwrap();
    assert!(Sm2::verify_with_id(b"m", &sig, &pk, b"alice"));

    let ct = Sm2Pke::encrypt(&pk, b"m", &mut rng).unwrap();
    assert_eq!(Sm2Pke::decrypt(&sk, &ct).unwrap(), b"m");
}

#[test]
fn test_off_curve_public_key_is_refused_everywhere() {
    let mut bytes = Sm2KeyPair::generate(&mut seeded_rng(4)).public_key().to_bytes();
    bytes[63] ^= 0x01;
    assert!(Sm2PublicKey::from_bytes(&bytes).is_err());
    assert!(Sm2::deserialize_public_key(&bytes).is_err());
    assert!(encrypt_text("m", &hex::encode(bytes), &mut seeded_rng(5)).is_err());
}

#[test]
fn test_key_exchange_agrees() {
    let mut rng = seeded_rng(6);
    let alice = Sm2KeyPair::generate(&mut rng);
    let bob = Sm2KeyPair::generate(&mut rng);

    let (ephemeral, shared) =
        key_exchange_init(alice.private_key(), bob.public_key(), &mut rng).unwrap();

    // Bob sees (d_A + r)·Q_B = d_B·(Q_A + R)
    let bob_view = alice
        .public_key()
        .point()
        .add(&ephemeral.point())
        .mul_scalar(bob.private_key().scalar());
    let (x, _) = bob_view.coordinates().unwrap();
    assert_eq!(shared.as_slice(), &x.to_bytes()[..]);
}

#[test]
fn test_private_key_rejects_out_of_range() {
    assert!(Sm2PrivateKey::from_bytes(&[0u8; 32]).is_err());
    assert!(Sm2PrivateKey::from_bytes(&[0xffu8; 32]).is_err());
    assert!(Sm2PrivateKey::from_bytes(&[1u8; 31]).is_err());
}
