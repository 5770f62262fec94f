//! G1 group implementation: points on `y^2 = x^3 + 3` over the base field.

use crate::error::{validate, Error, Result};
use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::field::fp::Fp;
use crate::Scalar;

// Curve parameter b = 3
const B: Fp = Fp::from_raw_unchecked([
    0x7a17_caa9_50ad_28d7,
    0x1f6a_c17a_e155_21b9,
    0x334b_ea4e_696b_d284,
    0x2a1f_6744_ce17_9d8e,
]);

/// G1 affine point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) infinity: Choice,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for G1Affine {}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G1Projective> for G1Affine {
    fn from(p: &'a G1Projective) -> G1Affine {
        let zinv = p.z.invert().unwrap_or(Fp::zero());
        let x = p.x * zinv;
        let y = p.y * zinv;

        let tmp = G1Affine {
            x,
            y,
            infinity: Choice::from(0u8),
        };

        G1Affine::conditional_select(&tmp, &G1Affine::identity(), zinv.is_zero())
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::one(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        -&self
    }
}

impl G1Affine {
    /// Point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: Choice::from(1u8),
        }
    }

    /// Fixed generator (1, 2).
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::one(),
            y: Fp::from_raw_unchecked([
                0xa6ba_871b_8b1e_1b3a,
                0x14f1_d651_eb8e_167b,
                0xccdd_46de_f0f2_8c58,
                0x1c14_ef83_340f_be5e,
            ]),
            infinity: Choice::from(0u8),
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Curve membership check. The group has cofactor one, so every point
    /// on the curve is in the order-n subgroup.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - (self.x.square() * self.x)).ct_eq(&B) | self.infinity
    }

    /// Serialize to 64 bytes: big-endian x then y. The identity encodes as
    /// all zeroes.
    pub fn to_uncompressed(&self) -> [u8; 64] {
        let mut res = [0; 64];
        res[0..32].copy_from_slice(
            &Fp::conditional_select(&self.x, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res[32..64].copy_from_slice(
            &Fp::conditional_select(&self.y, &Fp::zero(), self.infinity).to_bytes()[..],
        );
        res
    }

    /// Deserialize from 64 bytes, checking curve membership.
    pub fn from_uncompressed(bytes: &[u8; 64]) -> CtOption<Self> {
        Self::from_uncompressed_unchecked(bytes)
            .and_then(|p| CtOption::new(p, p.is_on_curve()))
    }

    /// Deserialize from 64 bytes without checking curve membership; the
    /// coordinates are still required to be canonical field encodings.
    pub fn from_uncompressed_unchecked(bytes: &[u8; 64]) -> CtOption<Self> {
        let x = Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[0..32]).unwrap());
        let y = Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[32..64]).unwrap());

        x.and_then(|x| {
            y.map(|y| {
                let is_identity = x.is_zero() & y.is_zero();
                G1Affine::conditional_select(
                    &G1Affine {
                        x,
                        y,
                        infinity: Choice::from(0u8),
                    },
                    &G1Affine::identity(),
                    is_identity,
                )
            })
        })
    }

    /// Deserialize from a byte slice with explicit error reporting and full
    /// validation.
    pub fn from_bytes_validated(bytes: &[u8]) -> Result<Self> {
        validate::length("G1Affine::from_bytes", bytes.len(), 64)?;

        let mut array = [0u8; 64];
        array.copy_from_slice(bytes);

        Self::from_uncompressed_unchecked(&array)
            .into_option()
            .ok_or(Error::Processing {
                operation: "G1 deserialization",
                details: "coordinate not a canonical field element",
            })
            .and_then(|p| {
                validate::parameter(bool::from(p.is_on_curve()), "point", "not on curve")?;
                Ok(p)
            })
    }
}

/// G1 projective point representation.
#[derive(Copy, Clone, Debug)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

impl Default for G1Projective {
    fn default() -> G1Projective {
        G1Projective::identity()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for G1Projective {}

impl fmt::Display for G1Projective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'a> From<&'a G1Affine> for G1Projective {
    fn from(p: &'a G1Affine) -> G1Projective {
        G1Projective {
            x: p.x,
            y: p.y,
            z: Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity),
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

impl ConstantTimeEq for G1Projective {
    fn ct_eq(&self, other: &Self) -> Choice {
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        let self_is_zero = self.z.is_zero();
        let other_is_zero = other.z.is_zero();

        (self_is_zero & other_is_zero)
            | ((!self_is_zero) & (!other_is_zero) & x1.ct_eq(&x2) & y1.ct_eq(&y2))
    }
}

impl ConditionallySelectable for G1Projective {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Projective {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    #[inline]
    fn neg(self) -> G1Projective {
        -&self
    }
}

#[inline(always)]
fn mul_by_3b(a: Fp) -> Fp {
    let t = a + a; // 2
    let t = t + t; // 4
    let t = t + t; // 8
    t + a // 9 = 3b with b = 3
}

impl G1Projective {
    /// Point at infinity.
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Projective {
        G1Projective {
            x: G1Affine::generator().x,
            y: G1Affine::generator().y,
            z: Fp::one(),
        }
    }

    /// Random group element: a uniformly random multiple of the generator.
    pub fn random(rng: impl RngCore) -> Self {
        G1Projective::generator() * Scalar::random(rng)
    }

    /// Point doubling.
    pub fn double(&self) -> G1Projective {
        // Algorithm 9 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.y.square();
        let z3 = t0 + t0;
        let z3 = z3 + z3;
        let z3 = z3 + z3;
        let t1 = self.y * self.z;
        let t2 = self.z.square();
        let t2 = mul_by_3b(t2);
        let x3 = t2 * z3;
        let y3 = t0 + t2;
        let z3 = t1 * z3;
        let t1 = t2 + t2;
        let t2 = t1 + t2;
        let t0 = t0 - t2;
        let y3 = t0 * y3;
        let y3 = x3 + y3;
        let t1 = self.x * self.y;
        let x3 = t0 * t1;
        let x3 = x3 + x3;

        let tmp = G1Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        G1Projective::conditional_select(&tmp, &G1Projective::identity(), self.is_identity())
    }

    /// Point addition.
    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
        // Algorithm 7 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t2 = self.z * rhs.z;
        let t3 = self.x + self.y;
        let t4 = rhs.x + rhs.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.y + self.z;
        let x3 = rhs.y + rhs.z;
        let t4 = t4 * x3;
        let x3 = t1 + t2;
        let t4 = t4 - x3;
        let x3 = self.x + self.z;
        let y3 = rhs.x + rhs.z;
        let x3 = x3 * y3;
        let y3 = t0 + t2;
        let y3 = x3 - y3;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(t2);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        G1Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition with affine point.
    pub fn add_mixed(&self, rhs: &G1Affine) -> G1Projective {
        // Algorithm 8 from https://eprint.iacr.org/2015/1060.pdf
        let t0 = self.x * rhs.x;
        let t1 = self.y * rhs.y;
        let t3 = rhs.x + rhs.y;
        let t4 = self.x + self.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = rhs.y * self.z;
        let t4 = t4 + self.y;
        let y3 = rhs.x * self.z;
        let y3 = y3 + self.x;
        let x3 = t0 + t0;
        let t0 = x3 + t0;
        let t2 = mul_by_3b(self.z);
        let z3 = t1 + t2;
        let t1 = t1 - t2;
        let y3 = mul_by_3b(y3);
        let x3 = t4 * y3;
        let t2 = t3 * t1;
        let x3 = t2 - x3;
        let y3 = y3 * t0;
        let t1 = t1 * z3;
        let y3 = t1 + y3;
        let t0 = t0 * t3;
        let z3 = z3 * t4;
        let z3 = z3 + t0;

        let tmp = G1Projective {
            x: x3,
            y: y3,
            z: z3,
        };
        G1Projective::conditional_select(&tmp, self, rhs.is_identity())
    }

    /// Double-and-add scalar multiplication, most-significant bit first.
    pub(crate) fn multiply(&self, by: &[u8; 32]) -> G1Projective {
        let mut acc = G1Projective::identity();
        for &byte in by.iter().rev() {
            for i in (0..8).rev() {
                acc = acc.double();
                let bit = Choice::from((byte >> i) & 1u8);
                acc = G1Projective::conditional_select(&acc, &(acc + self), bit);
            }
        }
        acc
    }

    /// Batch affine conversion with a single field inversion.
    pub fn batch_normalize(p: &[Self], q: &mut [G1Affine]) {
        assert_eq!(p.len(), q.len());

        let mut acc = Fp::one();
        for (p, q) in p.iter().zip(q.iter_mut()) {
            q.x = acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, p.is_identity());
        }

        // Nonzero by construction: identity factors were skipped
        acc = acc.invert().unwrap();

        for (p, q) in p.iter().rev().zip(q.iter_mut().rev()) {
            let skip = p.is_identity();
            let tmp = q.x * acc;
            acc = Fp::conditional_select(&(acc * p.z), &acc, skip);
            q.x = p.x * tmp;
            q.y = p.y * tmp;
            q.infinity = Choice::from(0u8);
            *q = G1Affine::conditional_select(q, &G1Affine::identity(), skip);
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Curve membership check.
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() * self.z)
            .ct_eq(&(self.x.square() * self.x + self.z.square() * self.z * B))
            | self.z.is_zero()
    }
}

// Mixed addition/subtraction between affine and projective forms
impl<'a, 'b> Add<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        rhs.add_mixed(self)
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        self.add_mixed(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Affine {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        self + &(-rhs)
    }
}

impl<T> Sum<T> for G1Projective
where
    T: Borrow<G1Projective>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| acc + item.borrow())
    }
}

impl<'a, 'b> Add<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Projective> for &'a G1Projective {
    type Output = G1Projective;

    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        self + &(-rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Projective {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        self.multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G1Projective> for &'a Scalar {
    type Output = G1Projective;

    #[inline]
    fn mul(self, rhs: &'b G1Projective) -> Self::Output {
        rhs * self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Affine {
    type Output = G1Projective;

    fn mul(self, other: &'b Scalar) -> Self::Output {
        G1Projective::from(self).multiply(&other.to_bytes())
    }
}

impl<'a, 'b> Mul<&'b G1Affine> for &'a Scalar {
    type Output = G1Projective;

    #[inline]
    fn mul(self, rhs: &'b G1Affine) -> Self::Output {
        rhs * self
    }
}

// Binop implementations for G1Projective
impl<'b> Add<&'b G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        &self + rhs
    }
}
impl<'a> Add<G1Projective> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        self + &rhs
    }
}
impl Add<G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        &self + &rhs
    }
}
impl<'b> Sub<&'b G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        &self - rhs
    }
}
impl<'a> Sub<G1Projective> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        self - &rhs
    }
}
impl Sub<G1Projective> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        &self - &rhs
    }
}
impl SubAssign<G1Projective> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: G1Projective) {
        *self = &*self - &rhs;
    }
}
impl AddAssign<G1Projective> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: G1Projective) {
        *self = &*self + &rhs;
    }
}
impl<'b> SubAssign<&'b G1Projective> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b G1Projective) {
        *self = &*self - rhs;
    }
}
impl<'b> AddAssign<&'b G1Projective> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: &'b G1Projective) {
        *self = &*self + rhs;
    }
}

// Binop implementations for G1Projective with G1Affine
impl<'b> Add<&'b G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Projective {
        &self + rhs
    }
}
impl<'a> Add<G1Affine> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Affine) -> G1Projective {
        self + &rhs
    }
}
impl Add<G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Affine) -> G1Projective {
        &self + &rhs
    }
}
impl<'b> Sub<&'b G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Projective {
        &self - rhs
    }
}
impl<'a> Sub<G1Affine> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Affine) -> G1Projective {
        self - &rhs
    }
}
impl Sub<G1Affine> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Affine) -> G1Projective {
        &self - &rhs
    }
}
impl SubAssign<G1Affine> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: G1Affine) {
        *self = &*self - &rhs;
    }
}
impl AddAssign<G1Affine> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: G1Affine) {
        *self = &*self + &rhs;
    }
}
impl<'b> SubAssign<&'b G1Affine> for G1Projective {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b G1Affine) {
        *self = &*self - rhs;
    }
}
impl<'b> AddAssign<&'b G1Affine> for G1Projective {
    #[inline]
    fn add_assign(&mut self, rhs: &'b G1Affine) {
        *self = &*self + rhs;
    }
}

// Binop implementations for G1Affine with G1Projective
impl<'b> Add<&'b G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: &'b G1Projective) -> G1Projective {
        &self + rhs
    }
}
impl<'a> Add<G1Projective> for &'a G1Affine {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        self + &rhs
    }
}
impl Add<G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn add(self, rhs: G1Projective) -> G1Projective {
        &self + &rhs
    }
}
impl<'b> Sub<&'b G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: &'b G1Projective) -> G1Projective {
        &self - rhs
    }
}
impl<'a> Sub<G1Projective> for &'a G1Affine {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        self - &rhs
    }
}
impl Sub<G1Projective> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn sub(self, rhs: G1Projective) -> G1Projective {
        &self - &rhs
    }
}

// Scalar multiplication binops for G1Projective
impl<'b> Mul<&'b Scalar> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<Scalar> for &'a G1Projective {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        self * &rhs
    }
}
impl Mul<Scalar> for G1Projective {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        &self * &rhs
    }
}
impl MulAssign<Scalar> for G1Projective {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = &*self * &rhs;
    }
}
impl<'b> MulAssign<&'b Scalar> for G1Projective {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

// Scalar multiplication binops for G1Affine
impl<'b> Mul<&'b Scalar> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<Scalar> for &'a G1Affine {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        self * &rhs
    }
}
impl Mul<Scalar> for G1Affine {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Projective {
        &self * &rhs
    }
}

// Scalar * point binops
impl<'b> Mul<&'b G1Affine> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b G1Affine) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<G1Affine> for &'a Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Affine) -> G1Projective {
        self * &rhs
    }
}
impl Mul<G1Affine> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Affine) -> G1Projective {
        &self * &rhs
    }
}
impl<'b> Mul<&'b G1Projective> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: &'b G1Projective) -> G1Projective {
        &self * rhs
    }
}
impl<'a> Mul<G1Projective> for &'a Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Projective) -> G1Projective {
        self * &rhs
    }
}
impl Mul<G1Projective> for Scalar {
    type Output = G1Projective;
    #[inline]
    fn mul(self, rhs: G1Projective) -> G1Projective {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_on_curve() {
        assert!(bool::from(G1Affine::generator().is_on_curve()));
        assert!(bool::from(G1Affine::identity().is_on_curve()));
        assert!(bool::from(G1Projective::generator().is_on_curve()));
    }

    #[test]
    fn test_affine_round_trip() {
        let g = G1Projective::generator();
        let p = g * Scalar::from(123u64);
        let affine = G1Affine::from(p);
        assert!(bool::from(affine.is_on_curve()));
        assert_eq!(G1Projective::from(affine), p);
    }

    #[test]
    fn test_uncompressed_round_trip() {
        let p = G1Affine::from(G1Projective::generator() * Scalar::from(7u64));
        let bytes = p.to_uncompressed();
        assert_eq!(G1Affine::from_uncompressed(&bytes).unwrap(), p);

        let id_bytes = G1Affine::identity().to_uncompressed();
        assert_eq!(id_bytes, [0u8; 64]);
        assert!(bool::from(
            G1Affine::from_uncompressed(&id_bytes).unwrap().is_identity()
        ));
    }

    #[test]
    fn test_from_bytes_validated_rejects_off_curve() {
        let mut bytes = [0u8; 64];
        bytes[31] = 1; // x = 1
        bytes[63] = 1; // y = 1, not on curve
        assert!(matches!(
            G1Affine::from_bytes_validated(&bytes),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            G1Affine::from_bytes_validated(&bytes[..63]),
            Err(Error::Length { .. })
        ));
    }
}
