//! Algebraic laws for the field tower.

use proptest::prelude::*;

use crate::field::fp::Fp;
use crate::field::fp12::Fp12;
use crate::field::fp2::Fp2;
use crate::field::fp6::Fp6;
use crate::Scalar;

/// Little-endian limbs of the base field modulus p
const P_LIMBS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Build a canonical Fp element from arbitrary limbs by masking the top
/// limb below the modulus.
fn fp_from_limbs(mut limbs: [u64; 4]) -> Fp {
    limbs[3] &= 0x0fff_ffff_ffff_ffff;
    let mut bytes = [0u8; 32];
    bytes[0..8].copy_from_slice(&limbs[3].to_be_bytes());
    bytes[8..16].copy_from_slice(&limbs[2].to_be_bytes());
    bytes[16..24].copy_from_slice(&limbs[1].to_be_bytes());
    bytes[24..32].copy_from_slice(&limbs[0].to_be_bytes());
    Fp::from_bytes(&bytes).unwrap()
}

proptest! {
    #[test]
    fn fp_addition_commutes(a: [u64; 4], b: [u64; 4]) {
        let (a, b) = (fp_from_limbs(a), fp_from_limbs(b));
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn fp_multiplication_commutes_and_distributes(a: [u64; 4], b: [u64; 4], c: [u64; 4]) {
        let (a, b, c) = (fp_from_limbs(a), fp_from_limbs(b), fp_from_limbs(c));
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(a * (b + c), a * b + a * c);
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn fp_inversion_law(a: [u64; 4]) {
        let a = fp_from_limbs(a);
        prop_assume!(bool::from(!a.is_zero()));
        prop_assert_eq!(a * a.invert().unwrap(), Fp::one());
    }

    #[test]
    fn fp_serialization_round_trip(a: [u64; 4]) {
        let a = fp_from_limbs(a);
        prop_assert_eq!(Fp::from_bytes(&a.to_bytes()).unwrap(), a);
    }

    #[test]
    fn scalar_ring_laws(a: u64, b: u64) {
        let (a, b) = (Scalar::from(a), Scalar::from(b));
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a - a, Scalar::zero());
    }
}

#[test]
fn test_random_sampling_is_deterministic_per_seed() {
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let a = Scalar::random(ChaCha20Rng::seed_from_u64(7));
    let b = Scalar::random(ChaCha20Rng::seed_from_u64(7));
    assert_eq!(a, b);
    assert_ne!(a, Scalar::random(ChaCha20Rng::seed_from_u64(8)));

    let x = Fp::random(ChaCha20Rng::seed_from_u64(7));
    let y = Fp::random(ChaCha20Rng::seed_from_u64(7));
    assert_eq!(x, y);
}

#[test]
fn test_tower_embeds_base_field() {
    let mut rng = rand::rngs::OsRng;
    let a = Fp::random(&mut rng);
    let b = Fp::random(&mut rng);

    // Multiplication in Fp2 restricted to the base field agrees with Fp
    let a2 = Fp2::new(a, Fp::zero());
    let b2 = Fp2::new(b, Fp::zero());
    assert_eq!(a2 * b2, Fp2::new(a * b, Fp::zero()));

    // And the same up the tower
    let a6 = Fp6::new(a2, Fp2::zero(), Fp2::zero());
    let b6 = Fp6::new(b2, Fp2::zero(), Fp2::zero());
    assert_eq!(a6 * b6, Fp6::new(a2 * b2, Fp2::zero(), Fp2::zero()));

    let a12 = Fp12::new(a6, Fp6::zero());
    let b12 = Fp12::new(b6, Fp6::zero());
    assert_eq!(a12 * b12, Fp12::new(a6 * b6, Fp6::zero()));
}

#[test]
fn test_frobenius_is_p_th_power() {
    // Validates every precomputed Frobenius constant at once: raising to p
    // by plain exponentiation must agree with the constant-multiplication
    // shortcut at each tower level.
    let mut rng = rand::rngs::OsRng;

    let a = Fp12::random(&mut rng);
    assert_eq!(a.frobenius_map(), a.pow_vartime(&P_LIMBS));

    let b = Fp6::random(&mut rng);
    let b12 = Fp12::new(b, Fp6::zero());
    assert_eq!(
        Fp12::new(b.frobenius_map(), Fp6::zero()),
        b12.pow_vartime(&P_LIMBS)
    );
}

#[test]
fn test_frobenius_squared_constants() {
    let mut rng = rand::rngs::OsRng;
    let a = Fp12::random(&mut rng);
    assert_eq!(
        a.frobenius_map_squared(),
        a.pow_vartime(&P_LIMBS).pow_vartime(&P_LIMBS)
    );
}

#[test]
fn test_fp12_inverse_of_products() {
    let mut rng = rand::rngs::OsRng;
    let a = Fp12::random(&mut rng);
    let b = Fp12::random(&mut rng);
    let prod_inv = (a * b).invert().unwrap();
    assert_eq!(prod_inv, a.invert().unwrap() * b.invert().unwrap());
}
