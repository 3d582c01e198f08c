use thiserror::Error;

use crate::field_element::FieldElement;

/// Common result type used across this crate.
pub type Result<T, E = FieldError> = core::result::Result<T, E>;

/// Top-level error type returned by the checked operations.
///
/// The unchecked gate operations never produce one of these; they abort the
/// way native integer division by zero does.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error(transparent)]
    Parse(#[from] ParseFieldElementError),
    #[error("division by zero")]
    DivisionByZero,
    #[error("{0} has no multiplicative inverse")]
    NotInvertible(FieldElement),
    #[error("negative exponent {0}")]
    NegativeExponent(FieldElement),
    #[error("unsupported prime `{0}`, only `m31` is available")]
    UnsupportedPrime(String),
}

pub type Error = FieldError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseFieldElementError {
    #[error("radix must be in 2..=36, got {0}")]
    InvalidRadix(u32),
    #[error("invalid base-{radix} integer {text:?}")]
    InvalidDigits { text: String, radix: u32 },
}
