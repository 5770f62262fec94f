//! Group-law tests for G1 and G2.

use crate::{G1Affine, G1Projective, G2Affine, G2Projective, Scalar};

/// Little-endian bytes of the group order n
const ORDER_BYTES: [u8; 32] = [
    0x01, 0x00, 0x00, 0xf0, 0x93, 0xf5, 0xe1, 0x43, 0x91, 0x70, 0xb9, 0x79, 0x48, 0xe8, 0x33,
    0x28, 0x5d, 0x58, 0x81, 0x81, 0xb6, 0x45, 0x50, 0xb8, 0x29, 0xa0, 0x31, 0xe1, 0x72, 0x4e,
    0x64, 0x30,
];

#[test]
fn test_generators_have_order_n() {
    assert!(bool::from(
        G1Projective::generator().multiply(&ORDER_BYTES).is_identity()
    ));
    assert!(bool::from(
        G2Projective::generator().multiply(&ORDER_BYTES).is_identity()
    ));
}

#[test]
fn test_scalar_multiplication_boundaries() {
    let g1 = G1Projective::generator();
    let g2 = G2Projective::generator();

    // 0 * P is the identity
    assert!(bool::from((g1 * Scalar::zero()).is_identity()));
    assert!(bool::from((g2 * Scalar::zero()).is_identity()));

    // 1 * P round-trips through affine form
    let p = G1Affine::from(g1 * Scalar::from(42u64));
    assert_eq!(G1Affine::from(G1Projective::from(p) * Scalar::one()), p);
    let q = G2Affine::from(g2 * Scalar::from(42u64));
    assert_eq!(G2Affine::from(G2Projective::from(q) * Scalar::one()), q);
}

#[test]
fn test_identity_is_additive_neutral() {
    let mut rng = rand::rngs::OsRng;
    let p = G1Projective::random(&mut rng);
    assert_eq!(p + G1Projective::identity(), p);
    assert_eq!(p + G1Affine::identity(), p);
    assert!(bool::from(G1Projective::identity().double().is_identity()));

    let q = G2Projective::random(&mut rng);
    assert_eq!(q + G2Projective::identity(), q);
    assert_eq!(q + G2Affine::identity(), q);
    assert!(bool::from(G2Projective::identity().double().is_identity()));
}

#[test]
fn test_negation_cancels() {
    let mut rng = rand::rngs::OsRng;
    let p = G1Projective::random(&mut rng);
    assert!(bool::from((p + (-p)).is_identity()));
    let q = G2Projective::random(&mut rng);
    assert!(bool::from((q + (-q)).is_identity()));
}

#[test]
fn test_mixed_addition_agrees_with_projective() {
    let mut rng = rand::rngs::OsRng;
    let p = G1Projective::random(&mut rng);
    let q = G1Projective::random(&mut rng);
    let q_affine = G1Affine::from(q);
    assert_eq!(p + q, p.add_mixed(&q_affine));

    let r = G2Projective::random(&mut rng);
    let s = G2Projective::random(&mut rng);
    let s_affine = G2Affine::from(s);
    assert_eq!(r + s, r.add_mixed(&s_affine));
}

#[test]
fn test_scalar_multiplication_distributes() {
    let g = G1Projective::generator();
    let a = Scalar::from(17u64);
    let b = Scalar::from(23u64);
    assert_eq!(g * (a + b), g * a + g * b);
    assert_eq!(g * (a * b), (g * a) * b);

    let h = G2Projective::generator();
    assert_eq!(h * (a + b), h * a + h * b);
    assert_eq!(h * (a * b), (h * a) * b);
}

#[test]
fn test_batch_normalize() {
    let mut rng = rand::rngs::OsRng;
    let points = [
        G1Projective::random(&mut rng),
        G1Projective::identity(),
        G1Projective::random(&mut rng),
    ];
    let mut affine = [G1Affine::identity(); 3];
    G1Projective::batch_normalize(&points, &mut affine);
    for (p, a) in points.iter().zip(affine.iter()) {
        assert_eq!(G1Affine::from(p), *a);
    }
}

#[test]
fn test_g1_known_scalar_multiple() {
    // [12345]G1, cross-checked against an independent implementation
    let expected = hex::decode(
        "1936f7b07be20ac4b7faac53aba252c44112b369f437c12d75b8157882b390aa\
         055c38c27b1dc7fbbdfbb7b4795e92d0d838126c25b6771908f9a23c35c8921a",
    )
    .unwrap();
    let p = G1Affine::from(G1Projective::generator() * Scalar::from(12345u64));
    assert_eq!(&p.to_uncompressed()[..], &expected[..]);
}

#[test]
fn test_g2_known_scalar_multiple() {
    // [9876]G2, cross-checked against an independent implementation
    let expected = hex::decode(
        "092e117ea769fb3295b27a27c1ac884e65173f64f9a18b25e89e3dd80e095c0b\
         0b88d40f1b3c8d8129f5102ec9564a97be1884189e7d307f79d2d9140110a965\
         2f1d00b51481fb24dce125ebd104f23882aba0d1af62271a698f491b64c50dbf\
         2fa64378b7047d43b9845f56b7740c8e322ee75ab4fe4692d48ac14c70e02ee4",
    )
    .unwrap();
    let q = G2Affine::from(G2Projective::generator() * Scalar::from(9876u64));
    assert_eq!(&q.to_uncompressed()[..], &expected[..]);
}

#[test]
fn test_random_points_are_valid() {
    let mut rng = rand::rngs::OsRng;
    for _ in 0..4 {
        let p = G1Projective::random(&mut rng);
        assert!(bool::from(p.is_on_curve()));
        let q = G2Projective::random(&mut rng);
        assert!(bool::from(q.is_on_curve()));
        assert!(bool::from(G2Affine::from(q).is_torsion_free()));
    }
}
