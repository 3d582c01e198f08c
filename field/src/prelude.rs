pub use crate::{fe, fe_array, fe_vec};
pub use crate::{
    constants::{Prime, DECIMAL_BUFFER_LEN, MOD, MOD_STR, PRIME_NAME},
    error::{FieldError, ParseFieldElementError},
    field_element::FieldElement,
    gates::copyn,
    traits::Inverse,
};
