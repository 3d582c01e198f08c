//! Scalar field element for generated circuit-witness evaluators over the
//! Mersenne prime `2^31 - 1`.
//!
//! Every wire value is a [`FieldElement`] and every gate is one of its
//! operations. Most are field arithmetic; shifts, bitwise complement and the
//! raw integer division pair emulate machine integers on the same slot and
//! can leave it non-canonical. Inversion, exponentiation and text parsing go
//! through `num-bigint`.

pub mod bigint;
pub mod constants;
pub mod error;
pub mod field_element;
pub mod gates;
pub mod macros;
pub mod prelude;
pub mod traits;

pub use constants::MOD;
pub use error::{FieldError, Result};
pub use field_element::FieldElement;
