//! BN254 pairing-friendly elliptic curve.
//!
//! This crate implements the Barreto-Naehrig curve over a 254-bit prime,
//! together with the tower of field extensions (Fp, Fp2, Fp6, Fp12) backing
//! the optimal-ate pairing `e: G1 x G2 -> Gt`. G1 is the group of points on
//! `y^2 = x^3 + 3` over Fp, G2 the group of points on the sextic twist over
//! Fp2, and Gt the order-`n` subgroup of the multiplicative group of Fp12.
//!
//! Point validation is the caller's responsibility: the pairing engine does
//! not check that its inputs satisfy the curve equations, and feeding it
//! points that are not genuine group elements yields unspecified (but
//! memory-safe) results. Use [`G1Affine::from_uncompressed`] /
//! [`G2Affine::from_uncompressed`] or `is_on_curve` to validate untrusted
//! input first.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field tower
pub mod field;

// Scalar field of the curve order
mod scalar;
pub use scalar::Scalar;

// Group implementations
mod g1;
mod g2;
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};

// Pairing engine
mod pairings;
pub use pairings::{pairing, Gt, MillerLoopResult};

#[cfg(feature = "alloc")]
pub use pairings::{multi_miller_loop, pairing_check, G2Prepared};

// Short-Weierstrass adapter for protocol code that needs a standard
// (non-pairing) curve next to the pairing groups
#[cfg(feature = "secp256k1")]
#[cfg_attr(docsrs, doc(cfg(feature = "secp256k1")))]
pub mod secp256k1;

#[cfg(test)]
mod tests;

/// BN parameter u determining the prime: p = 36u^4 + 36u^3 + 24u^2 + 6u + 1.
const BN_U: u64 = 4_965_661_367_192_848_881;
