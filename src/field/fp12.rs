//! Degree-12 extension `Fp12 = Fp6[w] / (w^2 - tau)`, the codomain of the
//! pairing. Elements of the order-n subgroup of its multiplicative group form
//! the target group Gt.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;
use super::fp2::Fp2;
use super::fp6::Fp6;

/// xi^((p-1)/6) where xi = 9 + i
const XI_TO_P_MINUS_1_OVER_6: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0xaf9b_a696_3314_4907,
        0xca6b_1d73_87af_b78a,
        0x11bd_ed5e_f08a_2087,
        0x02f3_4d75_1a1f_3a7c,
    ]),
    Fp::from_raw_unchecked([
        0xa222_ae23_4c49_2d72,
        0xd00f_02a4_565d_e15b,
        0xdc2f_f3a2_53df_c926,
        0x10a7_5716_b389_9551,
    ]),
);

/// xi^((p^2-1)/6); a primitive sixth root of unity in the base field
const XI_TO_P_SQUARED_MINUS_1_OVER_6: Fp = Fp::from_raw_unchecked([
    0xca8d_8005_00fa_1bf2,
    0xf0c5_d614_68b3_9769,
    0x0e20_1271_ad0d_4418,
    0x0429_0f65_bad8_56e6,
]);

/// Element `c0 + c1*w` over Fp6, with `w^2 = tau`.
#[derive(Copy, Clone)]
pub struct Fp12 {
    pub(crate) c0: Fp6,
    pub(crate) c1: Fp6,
}

impl Fp12 {
    /// Construct from coefficients
    pub const fn new(c0: Fp6, c1: Fp6) -> Fp12 {
        Fp12 { c0, c1 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is the multiplicative identity
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: Fp6::add(&self.c0, &rhs.c0),
            c1: Fp6::add(&self.c1, &rhs.c1),
        }
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: Fp6::sub(&self.c0, &rhs.c0),
            c1: Fp6::sub(&self.c1, &rhs.c1),
        }
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp12 {
        Fp12 {
            c0: Fp6::neg(&self.c0),
            c1: Fp6::neg(&self.c1),
        }
    }

    /// Multiply two field elements (Karatsuba over the quadratic layer)
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;

        Fp12 {
            c0: aa + bb.mul_by_nonresidue(),
            c1: (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - aa - bb,
        }
    }

    /// Square this element
    pub fn square(&self) -> Fp12 {
        let ab = self.c0 * self.c1;

        Fp12 {
            c0: (self.c1.mul_by_nonresidue() + self.c0) * (self.c0 + self.c1)
                - ab
                - ab.mul_by_nonresidue(),
            c1: ab + ab,
        }
    }

    /// Multiplicative inverse
    pub fn invert(&self) -> CtOption<Fp12> {
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// Conjugation over Fp6: `c0 + c1*w -> c0 - c1*w`.
    ///
    /// For elements of the cyclotomic subgroup this is the inverse.
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Frobenius endomorphism (raising to the p-th power).
    ///
    /// `w^p = w * xi^((p-1)/6)`, so the c1 coefficients pick up one extra
    /// constant multiplication on top of the Fp6 Frobenius.
    pub fn frobenius_map(&self) -> Fp12 {
        let c0 = self.c0.frobenius_map();
        let c1 = self.c1.frobenius_map();

        Fp12 {
            c0,
            c1: Fp6::new(
                c1.c0 * XI_TO_P_MINUS_1_OVER_6,
                c1.c1 * XI_TO_P_MINUS_1_OVER_6,
                c1.c2 * XI_TO_P_MINUS_1_OVER_6,
            ),
        }
    }

    /// Frobenius endomorphism squared (raising to the p^2-th power)
    pub fn frobenius_map_squared(&self) -> Fp12 {
        let c0 = self.c0.frobenius_map_squared();
        let c1 = self.c1.frobenius_map_squared();

        Fp12 {
            c0,
            c1: Fp6::new(
                c1.c0.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
                c1.c1.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
                c1.c2.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
            ),
        }
    }

    /// Sparse multiplication by a Miller-loop line evaluation
    /// `e0 + e3*w + e4*tau*w`.
    pub(crate) fn mul_by_034(&self, e0: &Fp2, e3: &Fp2, e4: &Fp2) -> Fp12 {
        let t0 = Fp6::new(self.c0.c0 * e0, self.c0.c1 * e0, self.c0.c2 * e0);
        let t1 = self.c1.mul_by_01(e3, e4);
        let o = e0 + e3;
        let c1 = (self.c0 + self.c1).mul_by_01(&o, e4) - t0 - t1;

        Fp12 {
            c0: t1.mul_by_nonresidue() + t0,
            c1,
        }
    }

    /// Variable-time exponentiation by a little-endian limb array
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Fp12 {
        let mut res = Fp12::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp6::random(&mut rng),
            c1: Fp6::random(&mut rng),
        }
    }
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*w", self.c0, self.c1)
    }
}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp12 {}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn neg(self) -> Fp12 {
        self.neg()
    }
}

impl Neg for Fp12 {
    type Output = Fp12;
    #[inline]
    fn neg(self) -> Fp12 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn add(self, rhs: &'b Fp12) -> Fp12 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        self.mul(rhs)
    }
}

impl<'b> Add<&'b Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn add(self, rhs: &'b Fp12) -> Fp12 {
        &self + rhs
    }
}

impl<'a> Add<Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn add(self, rhs: Fp12) -> Fp12 {
        self + &rhs
    }
}

impl Add<Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn add(self, rhs: Fp12) -> Fp12 {
        &self + &rhs
    }
}

impl<'b> Sub<&'b Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        &self - rhs
    }
}

impl<'a> Sub<Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn sub(self, rhs: Fp12) -> Fp12 {
        self - &rhs
    }
}

impl Sub<Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn sub(self, rhs: Fp12) -> Fp12 {
        &self - &rhs
    }
}

impl SubAssign<Fp12> for Fp12 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp12) {
        *self = &*self - &rhs;
    }
}

impl AddAssign<Fp12> for Fp12 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp12) {
        *self = &*self + &rhs;
    }
}

impl<'b> SubAssign<&'b Fp12> for Fp12 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp12) {
        *self = &*self - rhs;
    }
}

impl<'b> AddAssign<&'b Fp12> for Fp12 {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp12) {
        *self = &*self + rhs;
    }
}

impl<'b> Mul<&'b Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        &self * rhs
    }
}

impl<'a> Mul<Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: Fp12) -> Fp12 {
        self * &rhs
    }
}

impl Mul<Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: Fp12) -> Fp12 {
        &self * &rhs
    }
}

impl MulAssign<Fp12> for Fp12 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp12) {
        *self = &*self * &rhs;
    }
}

impl<'b> MulAssign<&'b Fp12> for Fp12 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp12) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_square_consistency() {
        let mut rng = rand::rngs::OsRng;
        for _ in 0..8 {
            let a = Fp12::random(&mut rng);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn test_inversion() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp12::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp12::one());
        assert!(bool::from(Fp12::zero().invert().is_none()));
    }

    #[test]
    fn test_sparse_multiplication() {
        let mut rng = rand::rngs::OsRng;
        let f = Fp12::random(&mut rng);
        let e0 = Fp2::random(&mut rng);
        let e3 = Fp2::random(&mut rng);
        let e4 = Fp2::random(&mut rng);

        let sparse = Fp12::new(
            Fp6::new(e0, Fp2::zero(), Fp2::zero()),
            Fp6::new(e3, e4, Fp2::zero()),
        );
        assert_eq!(f.mul_by_034(&e0, &e3, &e4), f * sparse);
    }

    #[test]
    fn test_frobenius_composition() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp12::random(&mut rng);
        assert_eq!(
            a.frobenius_map().frobenius_map(),
            a.frobenius_map_squared()
        );
        // p^12 is the identity on Fp12
        let mut b = a;
        for _ in 0..6 {
            b = b.frobenius_map_squared();
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_conjugate_is_inverse_on_unitary_elements() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp12::random(&mut rng);
        // g = a^(p^6 - 1) is unitary: conj(g) = g^-1
        let g = a.conjugate() * a.invert().unwrap();
        assert_eq!(g.conjugate() * g, Fp12::one());
    }
}
