//! Pairing law tests: bilinearity, negation, order, non-degeneracy, and the
//! multi-pairing product check.

use crate::{
    multi_miller_loop, pairing, pairing_check, Error, G1Affine, G1Projective, G2Affine,
    G2Prepared, G2Projective, Gt, Scalar,
};

/// Little-endian limbs of the group order n
const N_LIMBS: [u64; 4] = [
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

fn g1(s: u64) -> G1Affine {
    G1Affine::from(G1Projective::generator() * Scalar::from(s))
}

fn g2(s: u64) -> G2Affine {
    G2Affine::from(G2Projective::generator() * Scalar::from(s))
}

#[test]
fn test_bilinearity() {
    let base = pairing(&g1(1), &g2(1));

    // e(2a, b) == e(a, 2b) == e(a, b)^2
    assert_eq!(pairing(&g1(2), &g2(1)), pairing(&g1(1), &g2(2)));
    assert_eq!(pairing(&g1(2), &g2(1)), base + base);

    // e(37a, 27b) == e(a, 999b)
    assert_eq!(pairing(&g1(37), &g2(27)), pairing(&g1(1), &g2(999)));

    // e(sa, tb) == e(ab) * (s t) for random scalars
    let mut rng = rand::rngs::OsRng;
    let s = Scalar::random(&mut rng);
    let t = Scalar::random(&mut rng);
    let lhs = pairing(
        &G1Affine::from(G1Projective::generator() * s),
        &G2Affine::from(G2Projective::generator() * t),
    );
    assert_eq!(lhs, base * (s * t));
}

#[test]
fn test_additivity_in_each_argument() {
    let p1 = g1(2);
    let p2 = g1(3);
    let q = g2(5);

    let sum = G1Affine::from(G1Projective::from(p1) + G1Projective::from(p2));
    assert_eq!(pairing(&sum, &q), pairing(&p1, &q) + pairing(&p2, &q));

    let q1 = g2(7);
    let q2 = g2(11);
    let qsum = G2Affine::from(G2Projective::from(q1) + G2Projective::from(q2));
    assert_eq!(
        pairing(&p1, &qsum),
        pairing(&p1, &q1) + pairing(&p1, &q2)
    );
}

#[test]
fn test_negation_law() {
    let a = g1(5);
    let b = g2(9);
    assert_eq!(pairing(&a, &-b), pairing(&-a, &b));

    // e(a, b) * e(a, -b) == 1
    assert_eq!(pairing(&a, &b) + pairing(&a, &-b), Gt::identity());
}

#[test]
fn test_order_law() {
    // e(a, b)^n == 1
    let gt = pairing(&g1(3), &g2(4));
    assert_eq!(gt.0.pow_vartime(&N_LIMBS), crate::field::Fp12::one());
}

#[test]
fn test_non_degeneracy() {
    let base = pairing(&G1Affine::generator(), &G2Affine::generator());
    assert!(bool::from(!base.is_identity()));
    assert_ne!(pairing(&g1(5), &g2(1)), pairing(&g1(6), &g2(1)));
    assert_ne!(Gt::generator().to_bytes(), Gt::identity().to_bytes());
}

#[test]
fn test_pairing_with_identity_inputs() {
    let p = g1(8);
    let q = g2(13);

    assert_eq!(pairing(&G1Affine::identity(), &q), Gt::identity());
    assert_eq!(pairing(&p, &G2Affine::identity()), Gt::identity());
    assert_eq!(
        pairing(&G1Affine::identity(), &G2Affine::identity()),
        Gt::identity()
    );
}

#[test]
fn test_multi_miller_loop_consistency() {
    let p1 = g1(2);
    let p2 = g1(3);
    let q1 = g2(5);
    let q2 = g2(7);

    let prep1 = G2Prepared::from(q1);
    let prep2 = G2Prepared::from(q2);

    let multi = multi_miller_loop(&[(&p1, &prep1), (&p2, &prep2)]).final_exponentiation();
    let individual = pairing(&p1, &q1) + pairing(&p2, &q2);
    assert_eq!(multi, individual);
}

#[test]
fn test_multi_miller_loop_skips_identity_terms() {
    let p = g1(42);
    let q = g2(69);

    let prep_q = G2Prepared::from(q);
    let prep_identity = G2Prepared::from(G2Affine::identity());
    let expected = pairing(&p, &q);

    let with_id_g1 =
        multi_miller_loop(&[(&p, &prep_q), (&G1Affine::identity(), &prep_q)])
            .final_exponentiation();
    assert_eq!(with_id_g1, expected);

    let with_id_g2 =
        multi_miller_loop(&[(&p, &prep_q), (&p, &prep_identity)]).final_exponentiation();
    assert_eq!(with_id_g2, expected);
}

#[test]
fn test_pairing_check_product_scenarios() {
    // With a1 = G1, an1 = (n-1) G1 = -G1, the products telescope to 1
    let a1 = G1Affine::from(G1Projective::generator() * Scalar::one());
    let an1 = G1Affine::from(G1Projective::generator() * (-Scalar::one()));
    let b1 = G2Affine::from(G2Projective::generator() * Scalar::one());

    assert!(pairing_check(&[a1, an1], &[b1, b1]).unwrap());
    assert!(!pairing_check(&[a1, a1], &[b1, b1]).unwrap());
}

#[test]
fn test_pairing_check_rejects_length_mismatch() {
    let a = g1(1);
    let b = g2(1);
    assert!(matches!(
        pairing_check(&[a, a], &[b]),
        Err(Error::Length {
            context: "pairing_check",
            ..
        })
    ));

    // Empty products are vacuously the identity
    assert!(pairing_check(&[], &[]).unwrap());
}

#[test]
fn test_gt_group_structure() {
    let g = Gt::generator();

    assert_eq!(g + Gt::identity(), g);
    assert_eq!(g.double(), g + g);
    assert_eq!(g + (-g), Gt::identity());
    assert_eq!(Gt::identity() * Scalar::from(42u64), Gt::identity());

    // Scalar multiplication in Gt matches pairing bilinearity
    assert_eq!(g * Scalar::from(6u64), pairing(&g1(2), &g2(3)));
}

#[test]
fn test_gt_byte_encoding_is_stable_comparison_key() {
    let x = pairing(&g1(2), &g2(3));
    let y = pairing(&g1(3), &g2(2));
    let z = pairing(&g1(1), &g2(5));
    assert_eq!(x.to_bytes(), y.to_bytes());
    assert_ne!(x.to_bytes(), z.to_bytes());
}
