//! The operations that go through arbitrary-precision integers.
//!
//! Modular inverse, modular exponentiation and base-N parsing are delegated to
//! `num-bigint` rather than reimplemented on the single-word representation.
//! Elements cross the boundary as the *signed* interpretation of their raw
//! slot, so a non-canonical slot with its top bit set enters as a negative
//! number.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive};

use crate::{
    constants::{Prime, MOD},
    error::{FieldError, ParseFieldElementError, Result},
    field_element::FieldElement,
};

#[inline]
fn modulus() -> BigInt {
    Prime::M31.modulus()
}

impl FieldElement {
    /// Reduce `value` with the truncating remainder, whose sign follows the
    /// dividend. A negative input therefore stores the two's complement of a
    /// negative remainder, which is not canonical.
    pub fn from_big_int(value: &BigInt) -> Self {
        let remainder = (value % modulus())
            .to_i64()
            .expect("remainder is bounded by the modulus");
        Self::from_raw(remainder as u64)
    }

    /// Widen the slot, read as a signed 64-bit integer.
    pub fn to_big_int(&self) -> BigInt {
        BigInt::from(self.raw() as i64)
    }

    /// Parse `text` in `radix` and reduce it into `[0, MOD)` with the floor
    /// remainder, so negative inputs land on their canonical residue.
    ///
    /// ```
    /// use field::prelude::*;
    ///
    /// assert_eq!(FieldElement::parse_from_str("2147483648", 10).unwrap(), fe!(1));
    /// assert_eq!(FieldElement::parse_from_str("-1", 10).unwrap(), fe!(MOD - 1));
    /// assert_eq!(FieldElement::parse_from_str("ff", 16).unwrap(), fe!(255));
    /// ```
    pub fn parse_from_str(
        text: &str,
        radix: u32,
    ) -> Result<Self, ParseFieldElementError> {
        if !(2..=36).contains(&radix) {
            log::debug!("refusing to parse {text:?} in radix {radix}");
            return Err(ParseFieldElementError::InvalidRadix(radix));
        }
        let parsed =
            BigInt::parse_bytes(text.as_bytes(), radix).ok_or_else(|| {
                log::debug!("{text:?} is not a base-{radix} integer");
                ParseFieldElementError::InvalidDigits {
                    text: text.to_owned(),
                    radix,
                }
            })?;
        let reduced = parsed.mod_floor(&modulus());
        log::trace!("parsed {text:?} (base {radix}) as {reduced}");
        Ok(Self::from_big_int(&reduced))
    }

    /// Gate form of [`FieldElement::parse_from_str`]. `self` is left
    /// untouched when parsing fails.
    pub fn set_parse(
        &mut self,
        text: &str,
        radix: u32,
    ) -> Result<(), ParseFieldElementError> {
        *self = Self::parse_from_str(text, radix)?;
        Ok(())
    }

    /// Multiplicative inverse modulo [`MOD`].
    ///
    /// # Panics
    ///
    /// When `self` is congruent to zero.
    #[must_use]
    pub fn inv(self) -> Self {
        self.try_inv().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Checked [`FieldElement::inv`].
    pub fn try_inv(self) -> Result<Self> {
        self.to_big_int()
            .modinv(&modulus())
            .map(|inverse| Self::from_big_int(&inverse))
            .ok_or_else(|| {
                log::debug!("{self} is not invertible modulo {MOD}");
                FieldError::NotInvertible(self)
            })
    }

    /// `self ^ exponent mod MOD`, both read as signed integers.
    ///
    /// # Panics
    ///
    /// When the exponent is negative, i.e. a non-canonical slot with the top
    /// bit set.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        let power = self
            .to_big_int()
            .modpow(&exponent.to_big_int(), &modulus());
        Self::from_big_int(&power)
    }

    /// Checked [`FieldElement::pow`].
    pub fn checked_pow(self, exponent: Self) -> Result<Self> {
        if exponent.to_big_int().is_negative() {
            log::debug!("negative exponent {exponent}");
            return Err(FieldError::NegativeExponent(exponent));
        }
        Ok(self.pow(exponent))
    }

    /// `self = a⁻¹`
    pub fn set_inv(&mut self, a: Self) {
        *self = a.inv();
    }

    /// `self = a ^ b`
    pub fn set_pow(&mut self, a: Self, b: Self) {
        *self = a.pow(b);
    }
}

impl From<&BigInt> for FieldElement {
    fn from(value: &BigInt) -> Self {
        Self::from_big_int(value)
    }
}

impl From<BigInt> for FieldElement {
    fn from(value: BigInt) -> Self {
        Self::from_big_int(&value)
    }
}

impl From<FieldElement> for BigInt {
    fn from(fe: FieldElement) -> Self {
        fe.to_big_int()
    }
}
