//! Tower of field extensions underlying the BN254 pairing.
//!
//! Each level is defined strictly in terms of the level below it: Fp2 over
//! Fp via `i^2 = -1`, Fp6 over Fp2 via `tau^3 = xi` with the non-residue
//! `xi = 9 + i`, and Fp12 over Fp6 via `w^2 = tau`.

pub mod fp; // Base field
pub mod fp12; // Degree-12 extension (target field)
pub mod fp2; // Quadratic extension
pub mod fp6; // Degree-6 extension

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
