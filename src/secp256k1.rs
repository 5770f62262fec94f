//! Short-Weierstrass secp256k1 adapter.
//!
//! Protocol code built on the pairing groups often needs a conventional
//! (non-pairing) curve next to them. This module exposes the familiar
//! add / double / scalar-mult / scalar-base-mult surface over big-endian
//! affine coordinates, delegating all group arithmetic to the vetted
//! [`k256`] crate. The adapter carries no state of its own: construction
//! always yields a fully usable value, so there is no partially-initialized
//! curve to guard against.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, ProjectivePoint, Scalar, U256};

use crate::error::{Error, Result};

/// Affine secp256k1 point as big-endian coordinate bytes.
///
/// The identity is represented by the `infinity` flag with zeroed
/// coordinates, mirroring the uncompressed encodings of the pairing groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// Big-endian x coordinate
    pub x: [u8; 32],
    /// Big-endian y coordinate
    pub y: [u8; 32],
    /// Point-at-infinity marker
    pub infinity: bool,
}

impl Point {
    /// The point at infinity.
    pub const fn identity() -> Point {
        Point {
            x: [0; 32],
            y: [0; 32],
            infinity: true,
        }
    }
}

/// Handle to secp256k1 group operations.
///
/// The curve parameters live inside `k256` as compile-time constants, so a
/// freshly constructed adapter is always fully initialized.
#[derive(Copy, Clone, Debug, Default)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Create the adapter.
    pub const fn new() -> Secp256k1 {
        Secp256k1
    }

    /// Return the sum of two points.
    pub fn add(&self, a: &Point, b: &Point) -> Result<Point> {
        let pa = decode(a)?;
        let pb = decode(b)?;
        Ok(encode(&(pa + pb)))
    }

    /// Return the doubling of a point.
    pub fn double(&self, a: &Point) -> Result<Point> {
        let pa = decode(a)?;
        Ok(encode(&(pa + pa)))
    }

    /// Return `k * a`, with `k` interpreted as a big-endian integer and
    /// reduced modulo the group order.
    pub fn scalar_mult(&self, a: &Point, k: &[u8; 32]) -> Result<Point> {
        let pa = decode(a)?;
        let scalar = <Scalar as Reduce<U256>>::reduce_bytes(&(*k).into());
        Ok(encode(&(pa * scalar)))
    }

    /// Return `k * G` for the fixed secp256k1 base point.
    pub fn scalar_base_mult(&self, k: &[u8; 32]) -> Result<Point> {
        let scalar = <Scalar as Reduce<U256>>::reduce_bytes(&(*k).into());
        Ok(encode(&(ProjectivePoint::GENERATOR * scalar)))
    }
}

fn decode(p: &Point) -> Result<ProjectivePoint> {
    if p.infinity {
        return Ok(ProjectivePoint::IDENTITY);
    }

    let encoded = EncodedPoint::from_affine_coordinates(&p.x.into(), &p.y.into(), false);
    Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
        .map(ProjectivePoint::from)
        .ok_or(Error::Parameter {
            name: "point",
            reason: "not on the secp256k1 curve",
        })
}

fn encode(p: &ProjectivePoint) -> Point {
    let encoded = p.to_affine().to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => {
            let mut out = Point {
                x: [0; 32],
                y: [0; 32],
                infinity: false,
            };
            out.x.copy_from_slice(x);
            out.y.copy_from_slice(y);
            out
        }
        _ => Point::identity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_from_hex(x: &str, y: &str) -> Point {
        let mut p = Point {
            x: [0; 32],
            y: [0; 32],
            infinity: false,
        };
        p.x.copy_from_slice(&hex::decode(x).unwrap());
        p.y.copy_from_slice(&hex::decode(y).unwrap());
        p
    }

    fn base_point() -> Point {
        point_from_hex(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        )
    }

    #[test]
    fn test_scalar_base_mult_one_is_generator() {
        let curve = Secp256k1::new();
        let mut k = [0u8; 32];
        k[31] = 1;
        assert_eq!(curve.scalar_base_mult(&k).unwrap(), base_point());
    }

    #[test]
    fn test_double_matches_known_vector() {
        let curve = Secp256k1::new();
        let two_g = point_from_hex(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        );
        assert_eq!(curve.double(&base_point()).unwrap(), two_g);

        let mut k = [0u8; 32];
        k[31] = 2;
        assert_eq!(curve.scalar_base_mult(&k).unwrap(), two_g);
    }

    #[test]
    fn test_add_consistent_with_scalar_mult() {
        let curve = Secp256k1::new();
        let g = base_point();
        let two_g = curve.double(&g).unwrap();
        let three_g = curve.add(&g, &two_g).unwrap();

        let mut k = [0u8; 32];
        k[31] = 3;
        assert_eq!(curve.scalar_base_mult(&k).unwrap(), three_g);

        let five_g = curve.scalar_mult(&g, &{
            let mut k = [0u8; 32];
            k[31] = 5;
            k
        })
        .unwrap();
        assert_eq!(curve.add(&two_g, &three_g).unwrap(), five_g);
    }

    #[test]
    fn test_identity_behaviour() {
        let curve = Secp256k1::new();
        let g = base_point();
        assert_eq!(curve.add(&g, &Point::identity()).unwrap(), g);
        assert_eq!(
            curve.scalar_mult(&g, &[0u8; 32]).unwrap(),
            Point::identity()
        );
    }

    #[test]
    fn test_rejects_off_curve_point() {
        let curve = Secp256k1::new();
        let mut bogus = base_point();
        bogus.y[31] ^= 1;
        assert!(matches!(
            curve.add(&bogus, &base_point()),
            Err(Error::Parameter { .. })
        ));
    }
}
