//! Quadratic extension `Fp2 = Fp[i] / (i^2 + 1)` of the BN254 base field.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::fp::Fp;

/// Element `c0 + c1*i` of the quadratic extension, with `i^2 = -1`.
#[derive(Copy, Clone)]
pub struct Fp2 {
    pub(crate) c0: Fp,
    pub(crate) c1: Fp,
}

impl Fp2 {
    /// Construct from coefficients
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::add(&self.c0, &rhs.c0),
            c1: Fp::add(&self.c1, &rhs.c1),
        }
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: Fp::sub(&self.c0, &rhs.c0),
            c1: Fp::sub(&self.c1, &rhs.c1),
        }
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp2 {
        Fp2 {
            c0: Fp::neg(&self.c0),
            c1: Fp::neg(&self.c1),
        }
    }

    /// Multiply two field elements.
    ///
    /// Karatsuba-style: three Fp multiplications instead of four, using
    /// `(a + bi)(c + di) = (ac - bd) + ((a + b)(c + d) - ac - bd)i`.
    #[inline]
    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;

        Fp2 {
            c0: t0 - t1,
            c1: (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1,
        }
    }

    /// Square this element
    #[inline]
    pub fn square(&self) -> Fp2 {
        // (a + bi)^2 = (a + b)(a - b) + 2ab*i
        let ab = self.c0 * self.c1;
        Fp2 {
            c0: (self.c0 + self.c1) * (self.c0 - self.c1),
            c1: ab + ab,
        }
    }

    /// Multiplicative inverse
    #[inline]
    pub fn invert(&self) -> CtOption<Fp2> {
        // 1/(a + bi) = (a - bi) / (a^2 + b^2)
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    /// Complex conjugation: `a + bi -> a - bi`
    #[inline]
    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Frobenius endomorphism (raising to the p-th power).
    ///
    /// Since p = 3 mod 4, `(a + bi)^p = a - bi`: conjugation, no constant
    /// multiplications needed at this level of the tower.
    #[inline]
    pub fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiply by the cubic/sextic non-residue `xi = 9 + i`.
    #[inline]
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (a + bi)(9 + i) = (9a - b) + (a + 9b)i
        let t0 = self.c0 + self.c0;
        let t0 = t0 + t0;
        let t0 = t0 + t0 + self.c0; // 9a
        let t1 = self.c1 + self.c1;
        let t1 = t1 + t1;
        let t1 = t1 + t1 + self.c1; // 9b

        Fp2 {
            c0: t0 - self.c1,
            c1: self.c0 + t1,
        }
    }

    /// Scale both coefficients by a base-field element
    #[inline]
    pub(crate) fn mul_scalar(&self, by: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * by,
            c1: self.c1 * by,
        }
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*i", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl<'b> Add<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        &self + rhs
    }
}

impl<'a> Add<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 {
        self + &rhs
    }
}

impl Add<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 {
        &self + &rhs
    }
}

impl<'b> Sub<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        &self - rhs
    }
}

impl<'a> Sub<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 {
        self - &rhs
    }
}

impl Sub<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 {
        &self - &rhs
    }
}

impl SubAssign<Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp2) {
        *self = &*self - &rhs;
    }
}

impl AddAssign<Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp2) {
        *self = &*self + &rhs;
    }
}

impl<'b> SubAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self - rhs;
    }
}

impl<'b> AddAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self + rhs;
    }
}

impl<'b> Mul<&'b Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        &self * rhs
    }
}

impl<'a> Mul<Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 {
        self * &rhs
    }
}

impl Mul<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 {
        &self * &rhs
    }
}

impl MulAssign<Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp2) {
        *self = &*self * &rhs;
    }
}

impl<'b> MulAssign<&'b Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp2) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_matches_schoolbook() {
        let mut rng = rand::rngs::OsRng;
        for _ in 0..16 {
            let a = Fp2::random(&mut rng);
            let b = Fp2::random(&mut rng);
            // (a0 + a1 i)(b0 + b1 i) = (a0 b0 - a1 b1) + (a0 b1 + a1 b0) i
            let expected = Fp2 {
                c0: a.c0 * b.c0 - a.c1 * b.c1,
                c1: a.c0 * b.c1 + a.c1 * b.c0,
            };
            assert_eq!(a * b, expected);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn test_inversion() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp2::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp2::one());
        assert!(bool::from(Fp2::zero().invert().is_none()));
    }

    #[test]
    fn test_nonresidue_consistency() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp2::random(&mut rng);
        let xi = Fp2 {
            c0: Fp::from_bytes(&{
                let mut b = [0u8; 32];
                b[31] = 9;
                b
            })
            .unwrap(),
            c1: Fp::one(),
        };
        assert_eq!(a.mul_by_nonresidue(), a * xi);
    }

    #[test]
    fn test_frobenius_is_conjugation() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp2::random(&mut rng);
        assert_eq!(a.frobenius_map().frobenius_map(), a);
        assert_eq!(a * a.conjugate(), {
            // the norm lies in the base field
            let norm = a.c0.square() + a.c1.square();
            Fp2 {
                c0: norm,
                c1: Fp::zero(),
            }
        });
    }
}
