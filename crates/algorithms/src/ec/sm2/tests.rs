//! SM2 arithmetic and key model tests

use super::*;
use crate::error::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5332_5f74_6573_7473)
}

fn g_bytes() -> [u8; 64] {
    let mut out = [0u8; 64];
    out[..32].copy_from_slice(&SM2_CURVE.g_x);
    out[32..].copy_from_slice(&SM2_CURVE.g_y);
    out
}

mod modular_tests {
    use super::*;

    #[test]
    fn test_u256_byte_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let v = U256::from_be_bytes(&bytes);
        assert_eq!(v.to_be_bytes(), bytes);
        assert_eq!(v.0[0], 0x1c1d1e1f);
        assert_eq!(v.0[7], 0x00010203);
    }

    #[test]
    fn test_u256_bits_and_ordering() {
        assert_eq!(U256::ZERO.bits(), 0);
        assert_eq!(U256::ONE.bits(), 1);
        assert_eq!(U256::from_u32(0x100).bits(), 9);
        assert_eq!(order().bits(), 256);
        assert!(U256::from_u32(2) > U256::ONE);
        assert!(order() < field_prime());
        assert!(order().bit(0));
        assert!(!order().bit(256));
    }

    #[test]
    fn test_mod_inverse_small_moduli() {
        let inv = mod_inverse(&U256::from_u32(3), &U256::from_u32(7)).unwrap();
        assert_eq!(inv, U256::from_u32(5));

        let inv = mod_inverse(&U256::from_u32(2), &U256::from_u32(11)).unwrap();
        assert_eq!(inv, U256::from_u32(6));

        // 10 ≡ 3 (mod 7)
        let inv = mod_inverse(&U256::from_u32(10), &U256::from_u32(7)).unwrap();
        assert_eq!(inv, U256::from_u32(5));

        let inv = mod_inverse(&U256::ONE, &U256::from_u32(9)).unwrap();
        assert_eq!(inv, U256::ONE);
    }

    #[test]
    fn test_mod_inverse_failures() {
        assert!(matches!(
            mod_inverse(&U256::from_u32(3), &U256::from_u32(9)),
            Err(Error::NoInverse { .. })
        ));
        assert!(matches!(
            mod_inverse(&U256::ZERO, &U256::from_u32(7)),
            Err(Error::NoInverse { .. })
        ));
        assert!(matches!(
            mod_inverse(&U256::from_u32(7), &U256::from_u32(7)),
            Err(Error::NoInverse { .. })
        ));
        assert!(matches!(
            mod_inverse(&U256::from_u32(3), &U256::from_u32(8)),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            mod_inverse(&U256::from_u32(3), &U256::ONE),
            Err(Error::Parameter { .. })
        ));
    }

    #[test]
    fn test_mod_inverse_under_both_curve_moduli() {
        let a = U256::from_be_bytes(&SM2_CURVE.g_x);
        for m in [field_prime(), order()] {
            let ctx = modular::Modulus::new(m);
            let inv = mod_inverse(&a, &m).unwrap();
            assert_eq!(ctx.mul(&ctx.reduce(&a), &inv), U256::ONE);
        }
    }

    #[test]
    fn test_wide_reduction_of_minus_one_squared() {
        for m in [field_prime(), order()] {
            let ctx = modular::Modulus::new(m);
            let minus_one = m.sbb(&U256::ONE).0;
            assert_eq!(ctx.mul(&minus_one, &minus_one), U256::ONE);
            assert_eq!(ctx.add(&minus_one, &U256::ONE), U256::ZERO);
            assert_eq!(ctx.sub(&U256::ZERO, &U256::ONE), minus_one);
        }
    }
}

mod field_tests {
    use super::*;

    #[test]
    fn test_coefficient_a_is_minus_three() {
        let minus_three = FieldElement::zero().sub(&FieldElement::from_u32(3));
        assert_eq!(FieldElement::a(), minus_three);
    }

    #[test]
    fn test_from_bytes_rejects_p() {
        assert!(FieldElement::from_bytes(&SM2_CURVE.p).is_err());
        assert!(FieldElement::from_bytes(&SM2_CURVE.a).is_ok());
    }

    #[test]
    fn test_invert() {
        let x = FieldElement::from_bytes(&SM2_CURVE.g_y).unwrap();
        let inv = x.invert().unwrap();
        assert_eq!(x.mul(&inv), FieldElement::one());
        assert!(FieldElement::zero().invert().is_err());
    }

    #[test]
    fn test_negate() {
        let x = FieldElement::from_u32(5);
        assert_eq!(x.add(&x.negate()), FieldElement::zero());
        assert_eq!(FieldElement::zero().negate(), FieldElement::zero());
    }
}

mod scalar_tests {
    use super::*;

    #[test]
    fn test_scalar_range_checks() {
        assert!(Scalar::new([0u8; 32]).is_err());
        assert!(Scalar::new(SM2_CURVE.n).is_err());
        let n_minus_one = order().sbb(&U256::ONE).0.to_be_bytes();
        assert!(Scalar::new(n_minus_one).is_ok());
        assert!(Scalar::deserialize(&[1u8; 31]).is_err());
    }

    #[test]
    fn test_scalar_arithmetic() {
        let one = Scalar::one();
        let minus_one = one.negate();
        assert_eq!(minus_one.to_u256(), order().sbb(&U256::ONE).0);
        assert!(one.add_mod_n(&minus_one).is_zero());
        assert_eq!(minus_one.mul_mod_n(&minus_one), one);
        assert_eq!(one.sub_mod_n(&one), Scalar::zero());

        let k = Scalar::random(&mut rng());
        assert_eq!(k.mul_mod_n(&k.inv_mod_n().unwrap()), one);
        assert!(Scalar::zero().inv_mod_n().is_err());
    }

    #[test]
    fn test_reduced_constructor() {
        let s = Scalar::from_bytes_reduced(&SM2_CURVE.n);
        assert!(s.is_zero());
        let s = Scalar::from_bytes_reduced(&[0xff; 32]);
        let expected = U256::from_be_bytes(&[0xff; 32]).sbb(&order()).0;
        assert_eq!(s.to_u256(), expected);
    }

    #[test]
    fn test_random_scalars_in_range() {
        let mut rng = rng();
        for _ in 0..16 {
            let k = Scalar::random(&mut rng);
            assert!(!k.is_zero());
            assert!(k.to_u256() < order());
        }
    }
}

mod point_tests {
    use super::*;

    #[test]
    fn test_domain_parameters() {
        assert!(verify_domain_parameters().is_ok());
        ensure_domain_parameters();
        assert!(base_point_g().is_on_curve());
    }

    #[test]
    fn test_group_order() {
        let g = base_point_g();
        assert_eq!(g.mul(&order()), Point::Infinity);
        let n_minus_one = order().sbb(&U256::ONE).0;
        assert_eq!(g.mul(&n_minus_one), g.negate());
    }

    #[test]
    fn test_small_multiples_match_affine_formulas() {
        let g = base_point_g();
        let two_g = g.double();
        assert_eq!(g.mul(&U256::from_u32(2)), two_g);
        assert_eq!(g.add(&g), two_g);
        let three_g = two_g.add(&g);
        assert_eq!(g.mul(&U256::from_u32(3)), three_g);
        assert_eq!(g.mul(&U256::from_u32(5)), three_g.add(&two_g));
        assert!(three_g.is_on_curve());
        assert_eq!(g.mul(&U256::ONE), g);
    }

    #[test]
    fn test_addition_cases() {
        let g = base_point_g();
        assert_eq!(Point::Infinity.add(&g), g);
        assert_eq!(g.add(&Point::Infinity), g);
        assert_eq!(g.add(&g.negate()), Point::Infinity);
        assert_eq!(Point::Infinity.double(), Point::Infinity);

        let two_g = g.double();
        assert_eq!(g.add(&two_g), two_g.add(&g));
    }

    #[test]
    fn test_zero_multiplier_and_infinity() {
        let g = base_point_g();
        assert_eq!(g.mul(&U256::ZERO), Point::Infinity);
        assert_eq!(Point::Infinity.mul(&order()), Point::Infinity);
        assert!(Point::Infinity.is_on_curve());
    }

    #[test]
    fn test_scalar_multiplication_composes() {
        let mut rng = rng();
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);
        let g = base_point_g();
        let lhs = g.mul_scalar(&b).mul_scalar(&a);
        let rhs = g.mul_scalar(&a.mul_mod_n(&b));
        assert_eq!(lhs, rhs);

        let sum = g.mul_scalar(&a).add(&g.mul_scalar(&b));
        assert_eq!(sum, g.mul_scalar(&a.add_mod_n(&b)));
    }

    #[test]
    fn test_signed_multiplication() {
        let g = base_point_g();
        let k = U256::from_u32(7);
        assert_eq!(g.mul_signed(&k, true), g.mul(&k).negate());
        assert_eq!(g.mul_signed(&k, false), g.mul(&k));
    }

    #[test]
    fn test_point_encoding() {
        let g = base_point_g();
        let bytes = g.to_bytes().unwrap();
        assert_eq!(bytes, g_bytes());
        assert_eq!(Point::from_bytes(&bytes).unwrap(), g);

        assert!(Point::Infinity.to_bytes().is_err());
        assert!(Point::from_bytes(&bytes[..63]).is_err());

        let mut off_curve = bytes;
        off_curve[63] ^= 1;
        assert!(Point::from_bytes(&off_curve).is_err());
    }

    #[test]
    fn test_compress_prefix_tracks_y_parity() {
        let g = base_point_g();
        let c = g.compress().unwrap();
        // Gy ends in 0xA0
        assert_eq!(c[0], 0x02);
        assert_eq!(&c[1..], &SM2_CURVE.g_x);
        assert_eq!(g.negate().compress().unwrap()[0], 0x03);
        assert!(Point::Infinity.compress().is_err());
    }
}

mod keypair_tests {
    use super::*;

    #[test]
    fn test_generated_pair_is_consistent() {
        let mut rng = rng();
        let pair = Sm2KeyPair::generate(&mut rng);
        let q = pair.public_key().point();
        assert!(q.is_on_curve());
        assert_eq!(scalar_mult_base_g(pair.private_key().scalar()), q);

        let (d, q) = generate_keypair(&mut rng);
        assert_eq!(Sm2PrivateKey::from_scalar(d).unwrap().public_key().point(), q);
    }

    #[test]
    fn test_hex_round_trip() {
        let pair = Sm2KeyPair::generate(&mut rng());
        let d_hex = pair.private_key().to_hex();
        let q_hex = pair.public_key().to_hex();
        assert_eq!(d_hex.len(), 64);
        assert_eq!(q_hex.len(), 128);

        let parsed = Sm2KeyPair::from_hex(&d_hex, &q_hex.to_uppercase()).unwrap();
        assert_eq!(parsed.public_key(), pair.public_key());
        assert_eq!(parsed.private_key(), pair.private_key());
    }

    #[test]
    fn test_mismatched_pair_rejected() {
        let mut rng = rng();
        let a = Sm2KeyPair::generate(&mut rng);
        let b = Sm2KeyPair::generate(&mut rng);
        assert!(Sm2KeyPair::new(a.private_key().clone(), *b.public_key()).is_err());
        assert!(Sm2KeyPair::new(a.private_key().clone(), *a.public_key()).is_ok());
    }

    #[test]
    fn test_public_key_rejects_infinity() {
        assert!(Sm2PublicKey::from_point(&Point::Infinity).is_err());
        let g = base_point_g();
        assert_eq!(Sm2PublicKey::from_point(&g).unwrap().to_bytes(), g_bytes());
        assert_eq!(Sm2PublicKey::from_point(&g).unwrap().compress(), g.compress().unwrap());
    }

    #[test]
    fn test_private_key_hex_validation() {
        assert!(validate_private_key_hex(&format!("{:064x}", 1)));
        assert!(!validate_private_key_hex(&"00".repeat(32)));
        assert!(!validate_private_key_hex(&hex::encode(SM2_CURVE.n)));
        assert!(!validate_private_key_hex("01"));
        assert!(!validate_private_key_hex(&"zz".repeat(32)));
    }

    #[test]
    fn test_public_key_hex_validation() {
        let g_hex = hex::encode(g_bytes());
        assert!(validate_public_key_hex(&g_hex));

        let mut bad = g_bytes();
        bad[10] ^= 0x40;
        assert!(!validate_public_key_hex(&hex::encode(bad)));
        assert!(!validate_public_key_hex(&g_hex[..126]));
        assert!(!validate_public_key_hex(&format!("{}0", g_hex)));
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let d = Sm2PrivateKey::generate(&mut rng());
        assert_eq!(format!("{:?}", d), "Sm2PrivateKey([REDACTED])");
    }

    #[test]
    fn test_key_exchange_agrees() {
        let mut rng = rng();
        let alice = Sm2KeyPair::generate(&mut rng);
        let bob = Sm2KeyPair::generate(&mut rng);

        let (ephemeral, secret) =
            key_exchange_init(alice.private_key(), bob.public_key(), &mut rng).unwrap();
        assert!(ephemeral.point().is_on_curve());

        // (d_A + r)·Q_B = d_B·(Q_A + R)
        let combined = alice.public_key().point().add(&ephemeral.point());
        let bob_view = combined.mul_scalar(bob.private_key().scalar());
        let (x, _) = bob_view.coordinates().unwrap();
        assert_eq!(secret.as_slice(), &x.to_bytes());
    }
}
