//! Shared constants for the M31 witness field.

use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::FieldError;

/// Field modulus `2^31 - 1`.
pub const MOD: u64 = 2147483647;

/// Decimal text of [`MOD`].
pub const MOD_STR: &str = "2147483647";

/// Name the circuit compiler uses to select this field.
pub const PRIME_NAME: &str = "m31";

/// Size of the buffer a formatted element is guaranteed to fit in, including
/// a trailing NUL for callers that hand the text to C.
pub const DECIMAL_BUFFER_LEN: usize = 32;

/// Primes a witness evaluator can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Prime {
    /// The Mersenne prime `2^31 - 1`.
    M31,
}

impl Prime {
    pub const fn name(self) -> &'static str {
        match self {
            Prime::M31 => PRIME_NAME,
        }
    }

    pub const fn value(self) -> u64 {
        match self {
            Prime::M31 => MOD,
        }
    }

    pub fn modulus(self) -> BigInt {
        BigInt::from(self.value())
    }
}

impl FromStr for Prime {
    type Err = FieldError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            PRIME_NAME => {
                log::debug!("selected prime {PRIME_NAME} = {MOD_STR}");
                Ok(Prime::M31)
            }
            other => {
                log::debug!("rejected prime name {other:?}");
                Err(FieldError::UnsupportedPrime(other.to_owned()))
            }
        }
    }
}
