//! BN254 base field `GF(p)` where p = 21888242871839275222246405745257275088696311157297823662689037894645226208583

// Standard library imports
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// External crate imports
use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

// ============================================================================
// Arithmetic Helper Functions
// ============================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow)
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

// ============================================================================
// Field Constants
// ============================================================================

/// Field modulus p
const MODULUS: [u64; 4] = [
    0x3c20_8c16_d87c_fd47,
    0x9781_6a91_6871_ca8d,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Montgomery parameter INV = -(p^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x87d2_0782_e486_6389;

/// Montgomery R = 2^256 mod p
const R: Fp = Fp([
    0xd35d_438d_c58f_0d9d,
    0x0a78_eb28_f5c7_0b3d,
    0x666e_a36f_7879_462c,
    0x0e0a_77c1_9a07_df2f,
]);

/// Montgomery R^2 = 2^512 mod p
const R2: Fp = Fp([
    0xf32c_fc5b_538a_fa89,
    0xb5e7_1911_d445_01fb,
    0x47ab_1eff_0a41_7ff6,
    0x06d8_9f71_cab8_351f,
]);

/// Montgomery R^3 = 2^768 mod p
const R3: Fp = Fp([
    0xb1cd_6daf_da15_30df,
    0x62f2_10e6_a728_3db6,
    0xef7f_0b0c_0ada_0afb,
    0x20fd_6e90_2d59_2544,
]);

// ============================================================================
// Field Element Type
// ============================================================================

/// Element in Montgomery form: Fp(a) = aR mod p, with R = 2^256
#[derive(Copy, Clone)]
pub struct Fp(pub(crate) [u64; 4]);

// ============================================================================
// Core Field Operations
// ============================================================================

impl Fp {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp {
        Fp([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp {
        R
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Fp::zero())
    }

    /// Create from raw Montgomery limbs without checking canonicity
    pub const fn from_raw_unchecked(v: [u64; 4]) -> Fp {
        Fp(v)
    }

    /// Performs modular reduction after addition
    #[inline]
    const fn subtract_p(&self) -> Fp {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);

        // Use borrow as mask for conditional select
        let r0 = (self.0[0] & borrow) | (r0 & !borrow);
        let r1 = (self.0[1] & borrow) | (r1 & !borrow);
        let r2 = (self.0[2] & borrow) | (r2 & !borrow);
        let r3 = (self.0[3] & borrow) | (r3 & !borrow);

        Fp([r0, r1, r2, r3])
    }

    /// Add two field elements
    #[inline]
    pub const fn add(&self, rhs: &Fp) -> Fp {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, _) = adc(self.0[3], rhs.0[3], carry);

        (&Fp([d0, d1, d2, d3])).subtract_p()
    }

    /// Subtract two field elements
    #[inline]
    pub const fn sub(&self, rhs: &Fp) -> Fp {
        (&rhs.neg()).add(self)
    }

    /// Negate a field element
    #[inline]
    pub const fn neg(&self) -> Fp {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        // Mask if zero
        let mask =
            (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Fp([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Multiply two field elements
    #[inline]
    pub const fn mul(&self, rhs: &Fp) -> Fp {
        let (t0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (t1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (t2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], rhs.0[3], carry);

        let (t1, carry) = mac(t1, self.0[1], rhs.0[0], 0);
        let (t2, carry) = mac(t2, self.0[1], rhs.0[1], carry);
        let (t3, carry) = mac(t3, self.0[1], rhs.0[2], carry);
        let (t4, t5) = mac(t4, self.0[1], rhs.0[3], carry);

        let (t2, carry) = mac(t2, self.0[2], rhs.0[0], 0);
        let (t3, carry) = mac(t3, self.0[2], rhs.0[1], carry);
        let (t4, carry) = mac(t4, self.0[2], rhs.0[2], carry);
        let (t5, t6) = mac(t5, self.0[2], rhs.0[3], carry);

        let (t3, carry) = mac(t3, self.0[3], rhs.0[0], 0);
        let (t4, carry) = mac(t4, self.0[3], rhs.0[1], carry);
        let (t5, carry) = mac(t5, self.0[3], rhs.0[2], carry);
        let (t6, t7) = mac(t6, self.0[3], rhs.0[3], carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    /// Square this element using the dedicated squaring algorithm
    #[inline]
    pub const fn square(&self) -> Fp {
        let (t1, carry) = mac(0, self.0[0], self.0[1], 0);
        let (t2, carry) = mac(0, self.0[0], self.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], self.0[3], carry);

        let (t3, carry) = mac(t3, self.0[1], self.0[2], 0);
        let (t4, t5) = mac(t4, self.0[1], self.0[3], carry);

        let (t5, t6) = mac(t5, self.0[2], self.0[3], 0);

        let t7 = t6 >> 63;
        let t6 = (t6 << 1) | (t5 >> 63);
        let t5 = (t5 << 1) | (t4 >> 63);
        let t4 = (t4 << 1) | (t3 >> 63);
        let t3 = (t3 << 1) | (t2 >> 63);
        let t2 = (t2 << 1) | (t1 >> 63);
        let t1 = t1 << 1;

        let (t0, carry) = mac(0, self.0[0], self.0[0], 0);
        let (t1, carry) = adc(t1, 0, carry);
        let (t2, carry) = mac(t2, self.0[1], self.0[1], carry);
        let (t3, carry) = adc(t3, 0, carry);
        let (t4, carry) = mac(t4, self.0[2], self.0[2], carry);
        let (t5, carry) = adc(t5, 0, carry);
        let (t6, carry) = mac(t6, self.0[3], self.0[3], carry);
        let (t7, _) = adc(t7, 0, carry);

        Self::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    /// Montgomery reduction algorithm
    #[inline(always)]
    pub(crate) const fn montgomery_reduce(
        t0: u64,
        t1: u64,
        t2: u64,
        t3: u64,
        t4: u64,
        t5: u64,
        t6: u64,
        t7: u64,
    ) -> Self {
        // Round 1
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS[3], carry);
        let (r4, r5) = adc(t4, 0, carry);

        // Round 2
        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, r6) = adc(t5, r5, carry);

        // Round 3
        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, r7) = adc(t6, r6, carry);

        // Round 4
        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, _) = adc(t7, r7, carry);

        (&Fp([r4, r5, r6, r7])).subtract_p()
    }
}

// ============================================================================
// Advanced Field Operations
// ============================================================================

impl Fp {
    /// Variable-time exponentiation
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
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

    /// Multiplicative inverse
    #[inline]
    pub fn invert(&self) -> CtOption<Self> {
        // Fermat's little theorem: a^(p-2)
        let t = self.pow_vartime(&[
            0x3c20_8c16_d87c_fd45,
            0x9781_6a91_6871_ca8d,
            0xb850_45b6_8181_585d,
            0x3064_4e72_e131_a029,
        ]);

        CtOption::new(t, !self.is_zero())
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl Fp {
    /// Decode from big-endian bytes
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Fp> {
        let mut tmp = Fp([0, 0, 0, 0]);

        tmp.0[3] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[0..8]).unwrap());
        tmp.0[2] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[8..16]).unwrap());
        tmp.0[1] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[16..24]).unwrap());
        tmp.0[0] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[24..32]).unwrap());

        // Check if < modulus
        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        // Convert to Montgomery form
        tmp *= &R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Encode to big-endian bytes
    pub fn to_bytes(self) -> [u8; 32] {
        // Convert from Montgomery form
        let tmp =
            Fp::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0);

        let mut res = [0; 32];
        res[0..8].copy_from_slice(&tmp.0[3].to_be_bytes());
        res[8..16].copy_from_slice(&tmp.0[2].to_be_bytes());
        res[16..24].copy_from_slice(&tmp.0[1].to_be_bytes());
        res[24..32].copy_from_slice(&tmp.0[0].to_be_bytes());

        res
    }

    /// Create random field element
    pub fn random(mut rng: impl RngCore) -> Fp {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);

        // Parse as big-endian to match Fp encoding
        Fp::from_u512([
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[0..8]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[8..16]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[16..24]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[24..32]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[32..40]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[40..48]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[48..56]).unwrap()),
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[56..64]).unwrap()),
        ])
    }

    /// Reduce 512-bit number modulo p
    fn from_u512(limbs: [u64; 8]) -> Fp {
        // Split into two 256-bit halves and reduce
        let d1 = Fp([limbs[3], limbs[2], limbs[1], limbs[0]]);
        let d0 = Fp([limbs[7], limbs[6], limbs[5], limbs[4]]);
        d0 * R2 + d1 * R3
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Fp {
    fn default() -> Self {
        Fp::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp {}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Fp {}
impl PartialEq for Fp {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        self.neg()
    }
}

impl Neg for Fp {
    type Output = Fp;
    #[inline]
    fn neg(self) -> Fp {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        self.sub(rhs)
    }
}

impl<'a, 'b> Add<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        self.add(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        self.mul(rhs)
    }
}

// Additional binop implementations for convenience
impl<'b> Add<&'b Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: &'b Fp) -> Fp {
        &self + rhs
    }
}

impl<'a> Add<Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: Fp) -> Fp {
        self + &rhs
    }
}

impl Add<Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn add(self, rhs: Fp) -> Fp {
        &self + &rhs
    }
}

impl<'b> Sub<&'b Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: &'b Fp) -> Fp {
        &self - rhs
    }
}

impl<'a> Sub<Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: Fp) -> Fp {
        self - &rhs
    }
}

impl Sub<Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn sub(self, rhs: Fp) -> Fp {
        &self - &rhs
    }
}

impl SubAssign<Fp> for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp) {
        *self = &*self - &rhs;
    }
}

impl AddAssign<Fp> for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: Fp) {
        *self = &*self + &rhs;
    }
}

impl<'b> SubAssign<&'b Fp> for Fp {
    #[inline]
    fn sub_assign(&mut self, rhs: &'b Fp) {
        *self = &*self - rhs;
    }
}

impl<'b> AddAssign<&'b Fp> for Fp {
    #[inline]
    fn add_assign(&mut self, rhs: &'b Fp) {
        *self = &*self + rhs;
    }
}

impl<'b> Mul<&'b Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: &'b Fp) -> Fp {
        &self * rhs
    }
}

impl<'a> Mul<Fp> for &'a Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: Fp) -> Fp {
        self * &rhs
    }
}

impl Mul<Fp> for Fp {
    type Output = Fp;
    #[inline]
    fn mul(self, rhs: Fp) -> Fp {
        &self * &rhs
    }
}

impl MulAssign<Fp> for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp) {
        *self = &*self * &rhs;
    }
}

impl<'b> MulAssign<&'b Fp> for Fp {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_montgomery_round_trip() {
        // 1 encodes as R; decoding gives back the canonical integer
        let one = Fp::one();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(one.to_bytes(), expected);
        let back = Fp::from_bytes(&expected).unwrap();
        assert_eq!(back, one);
    }

    #[test]
    fn test_from_bytes_rejects_modulus() {
        // p itself is non-canonical
        let mut bytes = [0u8; 32];
        bytes[0..8].copy_from_slice(&MODULUS[3].to_be_bytes());
        bytes[8..16].copy_from_slice(&MODULUS[2].to_be_bytes());
        bytes[16..24].copy_from_slice(&MODULUS[1].to_be_bytes());
        bytes[24..32].copy_from_slice(&MODULUS[0].to_be_bytes());
        assert!(bool::from(Fp::from_bytes(&bytes).is_none()));
    }

    #[test]
    fn test_inversion() {
        let a = Fp::from_bytes(&{
            let mut b = [0u8; 32];
            b[31] = 7;
            b
        })
        .unwrap();
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, Fp::one());
        assert!(bool::from(Fp::zero().invert().is_none()));
    }

    #[test]
    fn test_squaring_matches_multiplication() {
        let mut rng = rand::rngs::OsRng;
        for _ in 0..32 {
            let a = Fp::random(&mut rng);
            assert_eq!(a.square(), a * a);
        }
    }

    #[test]
    fn test_negation() {
        let mut rng = rand::rngs::OsRng;
        let a = Fp::random(&mut rng);
        assert_eq!(a + (-a), Fp::zero());
        assert_eq!(-Fp::zero(), Fp::zero());
    }
}
