//! Optimal-ate pairing over BN254: Miller loop, final exponentiation, and
//! the target group Gt.

use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::field::fp::Fp;
use crate::field::fp12::Fp12;
use crate::field::fp2::Fp2;
use crate::field::fp6::Fp6;
use crate::field::fp6::{XI_TO_P_MINUS_1_OVER_3, XI_TO_P_SQUARED_MINUS_1_OVER_3};
use crate::{G1Affine, G2Affine, G2Projective, Scalar, BN_U};

#[cfg(feature = "alloc")]
use crate::error::{Error, Result};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// xi^((p-1)/2) where xi = 9 + i
const XI_TO_P_MINUS_1_OVER_2: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0xe4bb_dd0c_2936_b629,
        0xbb30_f162_e133_bacb,
        0x31a9_d1b6_f964_5366,
        0x2535_70be_a500_f8dd,
    ]),
    Fp::from_raw_unchecked([
        0xa1d7_7ce4_5ffe_77c7,
        0x07af_fd11_7826_d1db,
        0x6d16_bd27_bb7e_dc6b,
        0x2c87_2002_85de_fecc,
    ]),
);

/// Signed binary expansion of the ate loop length 6u + 2, least-significant
/// digit first.
const SIX_U_PLUS_2_NAF: [i8; 65] = [
    0, 0, 0, 1, 0, 1, 0, -1, 0, 0, 1, -1, 0, 0, 1, 0, 0, 1, 1, 0, -1, 0, 0, 1, 0, -1, 0, 0, 0,
    0, 1, 1, 1, 0, 0, -1, 0, 0, 1, 0, 0, 0, 0, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, 0, 0, 1, 1, 0,
    -1, 0, 0, 1, 0, 1, 1,
];

// ============================================================================
// Line functions
// ============================================================================

/// Doubles the Jacobian accumulator in place and returns the tangent-line
/// coefficients, scaled so that no inversion is needed. The scaling factor
/// lies in Fp2 and is erased by the final exponentiation.
fn doubling_step(r: &mut G2Projective) -> (Fp2, Fp2, Fp2) {
    let a = r.x.square();
    let b = r.y.square();
    let c = b.square();
    let d = (r.x + b).square() - a - c;
    let d = d + d;
    let e = a + a + a;
    let f = e.square();
    let zz = r.z.square();

    let x3 = f - (d + d);
    let z3 = (r.y + r.z).square() - b - zz;
    let c8 = c + c;
    let c8 = c8 + c8;
    let c8 = c8 + c8;
    let y3 = e * (d - x3) - c8;

    let c0 = z3 * zz;
    let c0 = c0 + c0;
    let ezz = e * zz;
    let c3 = -(ezz + ezz);
    let b4 = b + b;
    let b4 = b4 + b4;
    let c4 = (r.x + e).square() - a - f - b4;

    r.x = x3;
    r.y = y3;
    r.z = z3;

    (c0, c3, c4)
}

/// Adds the affine point `q` into the Jacobian accumulator in place and
/// returns the chord-line coefficients, scaled like `doubling_step`.
fn addition_step(r: &mut G2Projective, q: &G2Affine) -> (Fp2, Fp2, Fp2) {
    let zz = r.z.square();
    let h = q.x * zz - r.x;
    let hh = h.square();
    let i = hh + hh;
    let i = i + i;
    let j = h * i;
    let rr = q.y * (r.z * zz) - r.y;
    let rr = rr + rr;
    let v = r.x * i;

    let x3 = rr.square() - j - (v + v);
    let z3 = (r.z + h).square() - zz - hh;
    let yj = r.y * j;
    let y3 = rr * (v - x3) - (yj + yj);

    let c0 = z3;
    let c3 = -rr;
    let c4 = rr * q.x - z3 * q.y;

    r.x = x3;
    r.y = y3;
    r.z = z3;

    (c0, c3, c4)
}

/// Evaluates a line at the G1 point and folds it into the accumulator via
/// sparse multiplication.
fn ell(f: &Fp12, coeffs: &(Fp2, Fp2, Fp2), p: &G1Affine) -> Fp12 {
    f.mul_by_034(
        &coeffs.0.mul_scalar(&p.y),
        &coeffs.1.mul_scalar(&p.x),
        &coeffs.2,
    )
}

/// Image of `q` under the twist Frobenius: coordinates are conjugated and
/// scaled by the matching powers of xi.
fn frobenius_twist(q: &G2Affine) -> G2Affine {
    G2Affine {
        x: q.x.conjugate() * XI_TO_P_MINUS_1_OVER_3,
        y: q.y.conjugate() * XI_TO_P_MINUS_1_OVER_2,
        infinity: q.infinity,
    }
}

/// Negated image of `q` under the squared twist Frobenius. The y-coordinate
/// scaling constant is -1, so negation leaves y untouched.
fn neg_frobenius_twist_squared(q: &G2Affine) -> G2Affine {
    G2Affine {
        x: q.x.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
        y: q.y,
        infinity: q.infinity,
    }
}

// ============================================================================
// Cyclotomic subgroup arithmetic for the final exponentiation
// ============================================================================

/// Squaring in the degree-4 subfield Fp4 = Fp2[w^3]
fn fp4_square(a: &Fp2, b: &Fp2) -> (Fp2, Fp2) {
    let t0 = a.square();
    let t1 = b.square();
    (t1.mul_by_nonresidue() + t0, (a + b).square() - t0 - t1)
}

/// Granger-Scott squaring, valid only for elements of the cyclotomic
/// subgroup (those already raised to the power (p^6-1)(p^2+1)).
fn cyclotomic_square(f: &Fp12) -> Fp12 {
    let mut z0 = f.c0.c0;
    let mut z4 = f.c0.c1;
    let mut z3 = f.c0.c2;
    let mut z2 = f.c1.c0;
    let mut z1 = f.c1.c1;
    let mut z5 = f.c1.c2;

    let (t0, t1) = fp4_square(&z0, &z1);
    z0 = t0 - z0;
    z0 = z0 + z0 + t0;
    z1 = t1 + z1;
    z1 = z1 + z1 + t1;

    let (t0, t1) = fp4_square(&z2, &z3);
    let (t2, t3) = fp4_square(&z4, &z5);
    z4 = t0 - z4;
    z4 = z4 + z4 + t0;
    z5 = t1 + z5;
    z5 = z5 + z5 + t1;

    let t0 = t3.mul_by_nonresidue();
    z2 = t0 + z2;
    z2 = z2 + z2 + t0;
    z3 = t2 - z3;
    z3 = z3 + z3 + t2;

    Fp12::new(Fp6::new(z0, z4, z3), Fp6::new(z2, z1, z5))
}

/// Cyclotomic exponentiation by the BN parameter u
fn cyclotomic_exp_by_u(f: &Fp12) -> Fp12 {
    let mut res = Fp12::one();
    for i in (0..64).rev() {
        res = cyclotomic_square(&res);
        if ((BN_U >> i) & 1) == 1 {
            res *= f;
        }
    }
    res
}

// ============================================================================
// Miller loop results and the target group
// ============================================================================

/// The Fp12 accumulator produced by a Miller loop, before the final
/// exponentiation collapses it into the order-n subgroup.
#[derive(Copy, Clone, Debug)]
pub struct MillerLoopResult(pub(crate) Fp12);

impl Default for MillerLoopResult {
    fn default() -> Self {
        MillerLoopResult(Fp12::one())
    }
}

impl MillerLoopResult {
    /// Raise the accumulator to the power (p^12 - 1)/n, mapping it into the
    /// canonical order-n subgroup.
    ///
    /// The easy part (p^6 - 1)(p^2 + 1) is done with one conjugation, one
    /// inversion and one Frobenius; the hard part uses the standard BN
    /// addition chain built from cyclotomic squarings and exponentiations by
    /// the curve parameter u instead of a naive exponentiation.
    pub fn final_exponentiation(&self) -> Gt {
        let t0 = self.0.conjugate();

        // A Miller-loop accumulator is nonzero for any genuine pairing
        // input, so inversion only fails on caller contract violations.
        self.0
            .invert()
            .map(|t1| {
                let t2 = t0 * t1;
                let f = t2.frobenius_map_squared() * t2;

                let fp1 = f.frobenius_map();
                let fp2 = f.frobenius_map_squared();
                let fp3 = fp2.frobenius_map();
                let fu = cyclotomic_exp_by_u(&f);
                let fu2 = cyclotomic_exp_by_u(&fu);
                let fu3 = cyclotomic_exp_by_u(&fu2);
                let y3 = fu.frobenius_map().conjugate();
                let fu2p = fu2.frobenius_map();
                let fu3p = fu3.frobenius_map();
                let y2 = fu2.frobenius_map_squared();
                let y0 = fp1 * fp2 * fp3;
                let y1 = f.conjugate();
                let y5 = fu2.conjugate();
                let y4 = (fu * fu2p).conjugate();
                let y6 = (fu3 * fu3p).conjugate();

                let t0 = cyclotomic_square(&y6) * y4 * y5;
                let t1 = y3 * y5 * t0;
                let t0 = t0 * y2;
                let t1 = cyclotomic_square(&t1) * t0;
                let t1 = cyclotomic_square(&t1);
                let t0 = t1 * y1;
                let t1 = t1 * y0;
                let t0 = cyclotomic_square(&t0);
                Gt(t0 * t1)
            })
            .unwrap()
    }
}

/// Element of the target group: the order-n subgroup of Fp12*, written
/// additively to match the source groups.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for Gt {
    fn default() -> Self {
        Gt::identity()
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Gt {
    /// Group identity: the multiplicative identity of Fp12.
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// Fixed generator: the pairing of the G1 and G2 generators.
    pub fn generator() -> Gt {
        Gt(GT_GENERATOR)
    }

    /// Check if this is the identity.
    pub fn is_identity(&self) -> Choice {
        self.0.ct_eq(&Fp12::one())
    }

    /// Group doubling (squaring of the underlying field element).
    pub fn double(&self) -> Gt {
        Gt(self.0.square())
    }

    /// Canonical 384-byte encoding: the twelve base-field coefficients in
    /// big-endian, c0 before c1 at every tower level. Stable across runs,
    /// usable as a comparison key.
    pub fn to_bytes(&self) -> [u8; 384] {
        let mut res = [0u8; 384];
        let fp6s = [&self.0.c0, &self.0.c1];
        let mut off = 0;
        for c6 in fp6s {
            for c2 in [&c6.c0, &c6.c1, &c6.c2] {
                res[off..off + 32].copy_from_slice(&c2.c0.to_bytes());
                res[off + 32..off + 64].copy_from_slice(&c2.c1.to_bytes());
                off += 64;
            }
        }
        res
    }

    /// Double-and-add scalar multiplication, most-significant bit first.
    fn multiply(&self, by: &[u8; 32]) -> Gt {
        let mut acc = Gt::identity();
        for &byte in by.iter().rev() {
            for i in (0..8).rev() {
                acc = acc.double();
                let bit = Choice::from((byte >> i) & 1u8);
                acc = Gt::conditional_select(&acc, &(acc + self), bit);
            }
        }
        acc
    }
}

impl<'a> Neg for &'a Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        // Elements are unitary, so conjugation inverts
        Gt(self.0.conjugate())
    }
}

impl Neg for Gt {
    type Output = Gt;

    #[inline]
    fn neg(self) -> Gt {
        -&self
    }
}

impl<'a, 'b> Add<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Gt {
    type Output = Gt;

    fn mul(self, other: &'b Scalar) -> Gt {
        self.multiply(&other.to_bytes())
    }
}

impl<'b> Add<&'b Gt> for Gt {
    type Output = Gt;
    #[inline]
    fn add(self, rhs: &'b Gt) -> Gt {
        &self + rhs
    }
}
impl<'a> Add<Gt> for &'a Gt {
    type Output = Gt;
    #[inline]
    fn add(self, rhs: Gt) -> Gt {
        self + &rhs
    }
}
impl Add<Gt> for Gt {
    type Output = Gt;
    #[inline]
    fn add(self, rhs: Gt) -> Gt {
        &self + &rhs
    }
}
impl<'b> Sub<&'b Gt> for Gt {
    type Output = Gt;
    #[inline]
    fn sub(self, rhs: &'b Gt) -> Gt {
        &self - rhs
    }
}
impl<'a> Sub<Gt> for &'a Gt {
    type Output = Gt;
    #[inline]
    fn sub(self, rhs: Gt) -> Gt {
        self - &rhs
    }
}
impl Sub<Gt> for Gt {
    type Output = Gt;
    #[inline]
    fn sub(self, rhs: Gt) -> Gt {
        &self - &rhs
    }
}
impl SubAssign<Gt> for Gt {
    #[inline]
    fn sub_assign(&mut self, rhs: Gt) {
        *self = &*self - &rhs;
    }
}
impl AddAssign<Gt> for Gt {
    #[inline]
    fn add_assign(&mut self, rhs: Gt) {
        *self = &*self + &rhs;
    }
}
impl<'b> SubAssign<&'b Gt> for Gt {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Gt) {
        *self = &*self - rhs;
    }
}
impl<'b> AddAssign<&'b Gt> for Gt {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Gt) {
        *self = &*self + rhs;
    }
}
impl<'b> Mul<&'b Scalar> for Gt {
    type Output = Gt;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> Gt {
        &self * rhs
    }
}
impl<'a> Mul<Scalar> for &'a Gt {
    type Output = Gt;
    #[inline]
    fn mul(self, rhs: Scalar) -> Gt {
        self * &rhs
    }
}
impl Mul<Scalar> for Gt {
    type Output = Gt;
    #[inline]
    fn mul(self, rhs: Scalar) -> Gt {
        &self * &rhs
    }
}
impl MulAssign<Scalar> for Gt {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = &*self * &rhs;
    }
}
impl<'b> MulAssign<&'b Scalar> for Gt {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

impl<T> Sum<T> for Gt
where
    T: Borrow<Gt>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

// ============================================================================
// Pairing entry points
// ============================================================================

/// Precomputed line coefficients for a fixed G2 point, reusable across
/// Miller loops.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[derive(Clone, Debug)]
pub struct G2Prepared {
    infinity: Choice,
    coeffs: Vec<(Fp2, Fp2, Fp2)>,
}

#[cfg(feature = "alloc")]
impl From<G2Affine> for G2Prepared {
    fn from(q: G2Affine) -> G2Prepared {
        let is_identity = q.is_identity();
        // Run the precomputation on the generator when q is the identity;
        // the stored flag suppresses the term during accumulation.
        let q = G2Affine::conditional_select(&q, &G2Affine::generator(), is_identity);

        let mut coeffs = Vec::with_capacity(91);
        let mut r = G2Projective::from(q);
        let negq = -q;

        for digit in SIX_U_PLUS_2_NAF.iter().rev().skip(1) {
            coeffs.push(doubling_step(&mut r));
            match *digit {
                1 => coeffs.push(addition_step(&mut r, &q)),
                -1 => coeffs.push(addition_step(&mut r, &negq)),
                _ => (),
            }
        }

        coeffs.push(addition_step(&mut r, &frobenius_twist(&q)));
        coeffs.push(addition_step(&mut r, &neg_frobenius_twist_squared(&q)));

        G2Prepared {
            infinity: is_identity,
            coeffs,
        }
    }
}

/// Shared Miller loop over several (G1, prepared G2) pairs, accumulating
/// every line evaluation into one Fp12 value. Terms whose G1 or G2 input is
/// the identity contribute nothing.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn multi_miller_loop(terms: &[(&G1Affine, &G2Prepared)]) -> MillerLoopResult {
    let mut f = Fp12::one();
    let mut cidx = 0;

    let accumulate = |f: &Fp12, cidx: usize| {
        let mut acc = *f;
        for (p, q) in terms {
            let suppress = p.is_identity() | q.infinity;
            let applied = ell(&acc, &q.coeffs[cidx], p);
            acc = Fp12::conditional_select(&applied, &acc, suppress);
        }
        acc
    };

    for (i, digit) in SIX_U_PLUS_2_NAF.iter().rev().skip(1).enumerate() {
        if i != 0 {
            f = f.square();
        }
        f = accumulate(&f, cidx);
        cidx += 1;
        if *digit != 0 {
            f = accumulate(&f, cidx);
            cidx += 1;
        }
    }

    // The two Frobenius correction steps of the optimal-ate loop
    f = accumulate(&f, cidx);
    f = accumulate(&f, cidx + 1);

    MillerLoopResult(f)
}

/// Compute the optimal-ate pairing `e(p, q)`. If either input is the
/// identity the result is the Gt identity.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    let either_identity = p.is_identity() | q.is_identity();
    let p = G1Affine::conditional_select(p, &G1Affine::generator(), either_identity);
    let q = G2Affine::conditional_select(q, &G2Affine::generator(), either_identity);

    let mut f = Fp12::one();
    let mut r = G2Projective::from(q);
    let negq = -q;

    for (i, digit) in SIX_U_PLUS_2_NAF.iter().rev().skip(1).enumerate() {
        if i != 0 {
            f = f.square();
        }
        f = ell(&f, &doubling_step(&mut r), &p);
        match *digit {
            1 => f = ell(&f, &addition_step(&mut r, &q), &p),
            -1 => f = ell(&f, &addition_step(&mut r, &negq), &p),
            _ => (),
        }
    }

    f = ell(&f, &addition_step(&mut r, &frobenius_twist(&q)), &p);
    f = ell(
        &f,
        &addition_step(&mut r, &neg_frobenius_twist_squared(&q)),
        &p,
    );

    let result = MillerLoopResult(f).final_exponentiation();
    Gt(Fp12::conditional_select(
        &result.0,
        &Fp12::one(),
        either_identity,
    ))
}

/// Check whether the product of pairings over all index pairs equals the Gt
/// identity, sharing a single Miller loop and final exponentiation.
///
/// The slices must have equal length; a mismatch is a caller precondition
/// violation reported as [`Error::Length`], never a silent `false`.
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn pairing_check(points1: &[G1Affine], points2: &[G2Affine]) -> Result<bool> {
    if points1.len() != points2.len() {
        return Err(Error::Length {
            context: "pairing_check",
            expected: points1.len(),
            actual: points2.len(),
        });
    }

    let prepared: Vec<G2Prepared> = points2.iter().copied().map(G2Prepared::from).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = points1.iter().zip(prepared.iter()).collect();

    Ok(multi_miller_loop(&terms).final_exponentiation() == Gt::identity())
}

// Gt generator = e(G1 generator, G2 generator)
const GT_GENERATOR: Fp12 = Fp12::new(
    Fp6::new(
        Fp2::new(
            Fp::from_raw_unchecked([
                0xc556_f62b_2a98_671d,
                0x23a5_9ac1_67bc_f363,
                0x5ef2_0844_5f5f_6f37,
                0x12ad_f27c_cb29_382a,
            ]),
            Fp::from_raw_unchecked([
                0x2e02_a64a_cbd6_0549,
                0xd618_018e_a58e_4add,
                0x14d5_85f1_a45b_a647,
                0x1832_2269_87c4_34fc,
            ]),
        ),
        Fp2::new(
            Fp::from_raw_unchecked([
                0x2306_e431_2363_b991,
                0x465f_6072_d402_3bf4,
                0xa2ff_062a_4a77_e736,
                0x076e_a6f1_8435_864a,
            ]),
            Fp::from_raw_unchecked([
                0x172d_1f25_7a4d_598e,
                0xddf5_bc7b_7ffb_5ac0,
                0xae0b_22c0_bbb0_f602,
                0x1b15_8f3c_2fae_9b18,
            ]),
        ),
        Fp2::new(
            Fp::from_raw_unchecked([
                0x5cf9_cc91_7da8_6724,
                0xc799_dc48_7a0b_2753,
                0x0df2_027b_f1de_17a7,
                0x197c_da6c_c3e2_0636,
            ]),
            Fp::from_raw_unchecked([
                0xf16c_96d0_8175_4cdb,
                0xce03_9431_2bce_eb55,
                0x644e_4dcf_1f01_ff0a,
                0x0cbe_a85e_e0b2_36cc,
            ]),
        ),
    ),
    Fp6::new(
        Fp2::new(
            Fp::from_raw_unchecked([
                0x1bb0_ce0d_ef1b_82a1,
                0x4c4c_9fe1_cade_fa95,
                0x746d_9990_cb12_b27e,
                0x1349_5c08_e5d4_15c5,
            ]),
            Fp::from_raw_unchecked([
                0x9458_abcb_56d2_4998,
                0xb175_40bd_2a9e_5adb,
                0x9a99_83c8_2e40_1a9f,
                0x1614_817a_84c1_6291,
            ]),
        ),
        Fp2::new(
            Fp::from_raw_unchecked([
                0x8975_b68a_2bab_1f9c,
                0x2fdd_826b_796e_0f35,
                0x6a90_a35f_a03d_faa5,
                0x1ffe_f458_1607_fc37,
            ]),
            Fp::from_raw_unchecked([
                0x7002_907c_28eb_fe11,
                0x7b05_91d3_d080_da67,
                0xde7e_5aa2_181f_138e,
                0x210e_437d_fc43_d951,
            ]),
        ),
        Fp2::new(
            Fp::from_raw_unchecked([
                0x988a_e248_5b36_cf53,
                0x5091_cc05_8133_4e54,
                0xda79_0322_9312_ca0f,
                0x2a23_4153_8eae_e95c,
            ]),
            Fp::from_raw_unchecked([
                0xd34b_ab37_3157_aa84,
                0x3511_ed44_fd0d_8598,
                0x67e4_2a0b_c2ce_d972,
                0x2b8f_1d5d_fd20_c55b,
            ]),
        ),
    ),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gt_generator_matches_pairing_of_generators() {
        let computed = pairing(&G1Affine::generator(), &G2Affine::generator());
        assert_eq!(computed, Gt::generator());
    }

    #[test]
    fn test_cyclotomic_square_agrees_with_plain_square() {
        // Any pairing output lives in the cyclotomic subgroup
        let g = Gt::generator().0;
        assert_eq!(cyclotomic_square(&g), g.square());
    }

    #[test]
    fn test_naf_digits_encode_loop_length() {
        // Reconstruct 6u + 2 from the signed digits
        let mut acc: i128 = 0;
        for (i, digit) in SIX_U_PLUS_2_NAF.iter().enumerate() {
            acc += (*digit as i128) << i;
        }
        assert_eq!(acc, 6 * (BN_U as i128) + 2);
    }
}
