use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Div;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Not;
use std::ops::Shl;
use std::ops::Shr;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use get_size2::GetSize;
use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use rand::Rng;

use crate::constants::MOD;
use crate::error::{FieldError, ParseFieldElementError, Result};
use crate::traits::Inverse;

/// Order of 2 in the multiplicative group: `2^31 ≡ 1 (mod 2^31 - 1)`.
const DOUBLING_PERIOD: u64 = 31;

/// Witness value ∈ ℤ_{2147483647}.
///
/// One 64-bit slot holding the value directly. Field
/// operations keep it in `[0, MOD)`; the raw integer operations (`>>`, `!`,
/// [`idiv`][Self::idiv], [`imod`][Self::imod]) and signed big-integer round
/// trips may leave it outside that range, and every operation then works on
/// whatever bits are stored.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldElement(u64);

impl GetSize for FieldElement {
    fn get_stack_size() -> usize {
        std::mem::size_of::<Self>()
    }

    fn get_heap_size(&self) -> usize {
        0
    }
}

impl<'a> Arbitrary<'a> for FieldElement {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary::<u64>().map(FieldElement::new)
    }
}

impl FieldElement {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MAX: u64 = MOD - 1;

    /// Reduce `value` into `[0, MOD)`.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value % MOD)
    }

    /// Store `value` verbatim, canonical or not.
    #[inline]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_canonical(&self) -> bool {
        self.0 < MOD
    }

    #[inline]
    const fn from_bool(flag: bool) -> Self {
        if flag {
            Self::ONE
        } else {
            Self::ZERO
        }
    }

    /// Nonzero slots are true.
    #[inline]
    pub const fn is_true(&self) -> bool {
        self.0 != 0
    }

    /// Low 32 bits as a signed integer. Slots with bit 31 set come out
    /// negative.
    #[inline]
    pub const fn to_int(&self) -> i32 {
        self.0 as i32
    }

    /// Low 32 bits printed as a signed decimal integer. The text always fits
    /// in [`DECIMAL_BUFFER_LEN`](crate::constants::DECIMAL_BUFFER_LEN) bytes.
    pub fn to_decimal_string(&self) -> String {
        (self.0 as u32 as i32).to_string()
    }

    /// Raw integer quotient, truncating.
    ///
    /// # Panics
    ///
    /// When `rhs` holds zero.
    #[must_use]
    #[inline]
    pub const fn idiv(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }

    /// Raw integer remainder.
    ///
    /// # Panics
    ///
    /// When `rhs` holds zero.
    #[must_use]
    #[inline]
    pub const fn imod(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }

    pub fn checked_idiv(self, rhs: Self) -> Result<Self> {
        self.0.checked_div(rhs.0).map(Self).ok_or_else(|| {
            log::debug!("integer division of {self} by zero");
            FieldError::DivisionByZero
        })
    }

    pub fn checked_mod(self, rhs: Self) -> Result<Self> {
        self.0.checked_rem(rhs.0).map(Self).ok_or_else(|| {
            log::debug!("integer remainder of {self} by zero");
            FieldError::DivisionByZero
        })
    }

    /// Field division, `self * rhs⁻¹`, without panicking on a zero divisor.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        rhs.try_inv().map(|inverse| inverse * self)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0 as u32 as i32)
    }
}

impl FromStr for FieldElement {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_from_str(s, 10)
    }
}

macro_rules! impl_from_unsigned_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                Self((value as u128 % MOD as u128) as u64)
            }
        }
    )+};
}

impl_from_unsigned_int_for_fe!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_from_signed_int_for_fe {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for FieldElement {
            fn from(value: $t) -> Self {
                Self((value as i128).rem_euclid(MOD as i128) as u64)
            }
        }
    )+};
}

impl_from_signed_int_for_fe!(i8, i16, i32, i64, isize);

impl From<bool> for FieldElement {
    fn from(flag: bool) -> Self {
        Self::from_bool(flag)
    }
}

impl From<FieldElement> for u64 {
    fn from(fe: FieldElement) -> Self {
        fe.0
    }
}

impl From<&FieldElement> for u64 {
    fn from(fe: &FieldElement) -> Self {
        fe.0
    }
}

impl From<FieldElement> for i32 {
    fn from(fe: FieldElement) -> Self {
        fe.to_int()
    }
}

impl Distribution<FieldElement> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> FieldElement {
        FieldElement(rng.random_range(0..MOD))
    }
}

impl Inverse for FieldElement {
    #[inline]
    fn inverse(&self) -> Self {
        self.inv()
    }
}

impl Zero for FieldElement {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ConstZero for FieldElement {
    const ZERO: Self = Self(0);
}

impl One for FieldElement {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl ConstOne for FieldElement {
    const ONE: Self = Self(1);
}

impl Add for FieldElement {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0) % MOD)
    }
}

impl AddAssign for FieldElement {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(MOD.wrapping_add(self.0).wrapping_sub(rhs.0) % MOD)
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(MOD.wrapping_sub(self.0) % MOD)
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self((self.0.wrapping_mul(rhs.0) % MOD) as u32 as u64)
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for FieldElement {
    type Output = Self;

    /// # Panics
    ///
    /// When `other` is congruent to zero.
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: Self) -> Self {
        other.inverse() * self
    }
}

impl BitAnd for FieldElement {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self((self.0 & rhs.0) % MOD)
    }
}

impl BitOr for FieldElement {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self((self.0 | rhs.0) % MOD)
    }
}

impl BitXor for FieldElement {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self((self.0 ^ rhs.0) % MOD)
    }
}

/// Complement of the whole 64-bit slot, then reduced. This is not `MOD - 1 - a`:
/// `!0 == 3` because `2^64 ≡ 4`.
impl Not for FieldElement {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0 % MOD)
    }
}

/// `bits` single-bit shifts, reducing after each one so bits pushed past the
/// slot are lost step by step.
impl Shl<u64> for FieldElement {
    type Output = Self;

    fn shl(self, bits: u64) -> Self {
        if bits == 0 {
            return self;
        }
        // Past the first step the value is canonical and doubling repeats
        // every 31 steps.
        let steps = 1 + (bits - 1) % DOUBLING_PERIOD;
        let mut value = self.0;
        for _ in 0..steps {
            value = (value << 1) % MOD;
        }
        Self(value)
    }
}

/// Plain integer shift, no reduction.
impl Shr<u64> for FieldElement {
    type Output = Self;

    #[inline]
    fn shr(self, bits: u64) -> Self {
        Self(self.0.checked_shr(bits.min(u32::MAX as u64) as u32).unwrap_or(0))
    }
}

pub mod other {
    use rand::distr::Distribution;
    use rand::distr::StandardUniform;
    use rand::Rng;

    pub fn random_elements<T>(n: usize) -> Vec<T>
    where
        StandardUniform: Distribution<T>,
    {
        rand::rng().sample_iter(StandardUniform).take(n).collect()
    }
}
