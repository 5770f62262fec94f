//! Degree-6 extension `Fp6 = Fp2[tau] / (tau^3 - xi)` with `xi = 9 + i`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;

/// xi^((p-1)/3) where xi = 9 + i
pub(crate) const XI_TO_P_MINUS_1_OVER_3: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0xb577_3b10_4563_ab30,
        0x347f_91c8_a9aa_6454,
        0x7a00_7127_242e_0991,
        0x1956_bcd8_1182_14ec,
    ]),
    Fp::from_raw_unchecked([
        0x6e84_9f1e_a0aa_4757,
        0xaa1c_7b6d_89f8_9141,
        0xb6e7_13cd_fae0_ca3a,
        0x2669_4fbb_4e82_ebc3,
    ]),
);

/// xi^((2p-2)/3) where xi = 9 + i
const XI_TO_2P_MINUS_2_OVER_3: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0x7361_d77f_843a_be92,
        0xa5bb_2bd3_2734_11fb,
        0x9c94_1f31_4b3e_2399,
        0x15df_9cdd_bb9f_d3ec,
    ]),
    Fp::from_raw_unchecked([
        0x5ddd_fd15_4bd8_c949,
        0x62cb_29a5_a444_5b60,
        0x37bc_870a_0c7d_d2b9,
        0x2483_0a9d_3171_f0fd,
    ]),
);

/// xi^((p^2-1)/3); lies in the base field
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_3: Fp = Fp::from_raw_unchecked([
    0x3350_c88e_13e8_0b9c,
    0x7dce_557c_db5e_56b9,
    0x6001_b4b8_b615_564a,
    0x2682_e617_0202_17e0,
]);

/// xi^((2p^2-2)/3); a cube root of unity in the base field
const XI_TO_2P_SQUARED_MINUS_2_OVER_3: Fp = Fp::from_raw_unchecked([
    0x7193_0c11_d782_e155,
    0xa6bb_947c_ffbe_3323,
    0xaa30_3344_d474_1444,
    0x2c3b_3f0d_2659_4943,
]);

/// Element `c0 + c1*tau + c2*tau^2` over Fp2, with `tau^3 = xi`.
#[derive(Copy, Clone)]
pub struct Fp6 {
    pub(crate) c0: Fp2,
    pub(crate) c1: Fp2,
    pub(crate) c2: Fp2,
}

impl Fp6 {
    /// Construct from coefficients
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Fp6 {
        Fp6 { c0, c1, c2 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: Fp2::add(&self.c0, &rhs.c0),
            c1: Fp2::add(&self.c1, &rhs.c1),
            c2: Fp2::add(&self.c2, &rhs.c2),
        }
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: Fp2::sub(&self.c0, &rhs.c0),
            c1: Fp2::sub(&self.c1, &rhs.c1),
            c2: Fp2::sub(&self.c2, &rhs.c2),
        }
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp6 {
        Fp6 {
            c0: Fp2::neg(&self.c0),
            c1: Fp2::neg(&self.c1),
            c2: Fp2::neg(&self.c2),
        }
    }

    /// Multiply two field elements by interpolation (Karatsuba over three
    /// coefficients), reducing with `tau^3 = xi`.
    pub fn mul(&self, rhs: &Fp6) -> Fp6 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let cc = self.c2 * rhs.c2;

        let t1 = (self.c1 + self.c2) * (rhs.c1 + rhs.c2) - bb - cc;
        let c0 = t1.mul_by_nonresidue() + aa;

        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb;
        let c1 = t2 + cc.mul_by_nonresidue();

        let t3 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - aa - cc;
        let c2 = t3 + bb;

        Fp6 { c0, c1, c2 }
    }

    /// Square this element
    pub fn square(&self) -> Fp6 {
        let s0 = self.c0.square();
        let ab = self.c0 * self.c1;
        let s1 = ab + ab;
        let s2 = (self.c0 - self.c1 + self.c2).square();
        let bc = self.c1 * self.c2;
        let s3 = bc + bc;
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue() + s0,
            c1: s4.mul_by_nonresidue() + s1,
            c2: s1 + s2 + s3 - s0 - s4,
        }
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Fp6> {
        let c0 = self.c0.square() - (self.c1 * self.c2).mul_by_nonresidue();
        let c1 = self.c2.square().mul_by_nonresidue() - self.c0 * self.c1;
        let c2 = self.c1.square() - self.c0 * self.c2;

        let t = (self.c2 * c1 + self.c1 * c2).mul_by_nonresidue() + self.c0 * c0;

        t.invert().map(|t| Fp6 {
            c0: c0 * t,
            c1: c1 * t,
            c2: c2 * t,
        })
    }

    /// Multiply by `tau`: rotates the coefficients, reducing the top one
    /// through `tau^3 = xi`.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Frobenius endomorphism (raising to the p-th power).
    ///
    /// `tau^p = tau * xi^((p-1)/3)` and `tau^(2p) = tau^2 * xi^((2p-2)/3)`,
    /// so each coefficient is conjugated and scaled by the matching
    /// precomputed constant.
    pub fn frobenius_map(&self) -> Fp6 {
        Fp6 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map() * XI_TO_P_MINUS_1_OVER_3,
            c2: self.c2.frobenius_map() * XI_TO_2P_MINUS_2_OVER_3,
        }
    }

    /// Frobenius endomorphism squared (raising to the p^2-th power).
    ///
    /// The scaling constants land in the base field, so no conjugation and
    /// only Fp multiplications are required.
    pub fn frobenius_map_squared(&self) -> Fp6 {
        Fp6 {
            c0: self.c0,
            c1: self.c1.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
            c2: self.c2.mul_scalar(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
        }
    }

    /// Sparse multiplication by `b1*tau`
    #[inline]
    pub(crate) fn mul_by_1(&self, b1: &Fp2) -> Fp6 {
        Fp6 {
            c0: (self.c2 * b1).mul_by_nonresidue(),
            c1: self.c0 * b1,
            c2: self.c1 * b1,
        }
    }

    /// Sparse multiplication by `b0 + b1*tau`
    #[inline]
    pub(crate) fn mul_by_01(&self, b0: &Fp2, b1: &Fp2) -> Fp6 {
        let t0 = self.c0 * b0;
        let t1 = self.c1 * b1;

        Fp6 {
            c0: (self.c2 * b1).mul_by_nonresidue() + t0,
            c1: (self.c0 + self.c1) * (b0 + b1) - t0 - t1,
            c2: (self.c0 + self.c2) * b0 - t0 + t1,
        }
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp6 {
        Fp6 {
            c0: Fp2::random(&mut rng),
            c1: Fp2::random(&mut rng),
            c2: Fp2::random(&mut rng),
        }
    }
}

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:?}) + ({:?})*tau + ({:?})*tau^2",
            self.c0, self.c1, self.c2
        )
    }
}

impl Default for Fp6 {
    fn default() -> Self {
        Fp6::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp6 {}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn neg(self) -> Fp6 {
        self.neg()
    }
}

impl Neg for Fp6 {
    type Output = Fp6;
    #[inline]
    fn neg(self) -> Fp6 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: &'b Fp6) -> Fp6 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Fp6 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: &'b Fp6) -> Fp6 {
        self.mul(rhs)
    }
}

impl<'b> Add<&'b Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: &'b Fp6) -> Fp6 {
        &self + rhs
    }
}

impl<'a> Add<Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: Fp6) -> Fp6 {
        self + &rhs
    }
}

impl Add<Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: Fp6) -> Fp6 {
        &self + &rhs
    }
}

impl<'b> Sub<&'b Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Fp6 {
        &self - rhs
    }
}

impl<'a> Sub<Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: Fp6) -> Fp6 {
        self - &rhs
    }
}

impl Sub<Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: Fp6) -> Fp6 {
        &self - &rhs
    }
}

impl SubAssign<Fp6> for Fp6 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp6) {
        *self = &*self - &rhs;
    }
}

impl AddAssign<Fp6> for Fp6 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp6) {
        *self = &*self + &rhs;
    }
}

impl<'b> SubAssign<&'b Fp6> for Fp6 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp6) {
        *self = &*self - rhs;
    }
}

impl<'b> AddAssign<&'b Fp6> for Fp6 {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp6) {
        *self = &*self + rhs;
    }
}

impl<'b> Mul<&'b Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: &'b Fp6) -> Fp6 {
        &self * rhs
    }
}

impl<'a> Mul<Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: Fp6) -> Fp6 {
        self * &rhs
    }
}

impl Mul<Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: Fp6) -> Fp6 {
        &self * &rhs
    }
}

impl MulAssign<Fp6> for Fp6 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp6) {
        *self = &*self * &rhs;
    }
}

impl<'b> MulAssign<&'b Fp6> for Fp6 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp6) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_and_square_consistency() {
        let mut rng = rand::rngs::OsRng;
        for _ in 0..8 {
            let a = Fp6::random(&mut rng);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn test_inversion() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp6::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp6::one());
        assert!(bool::from(Fp6::zero().invert().is_none()));
    }

    #[test]
    fn test_mul_by_nonresidue_is_mul_by_tau() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp6::random(&mut rng);
        let tau = Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero());
        assert_eq!(a.mul_by_nonresidue(), a * tau);
    }

    #[test]
    fn test_sparse_multiplication() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp6::random(&mut rng);
        let b0 = Fp2::random(&mut rng);
        let b1 = Fp2::random(&mut rng);

        assert_eq!(
            a.mul_by_1(&b1),
            a * Fp6::new(Fp2::zero(), b1, Fp2::zero())
        );
        assert_eq!(a.mul_by_01(&b0, &b1), a * Fp6::new(b0, b1, Fp2::zero()));
    }

    #[test]
    fn test_frobenius_composition() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp6::random(&mut rng);
        assert_eq!(a.frobenius_map().frobenius_map(), a.frobenius_map_squared());
    }
}
