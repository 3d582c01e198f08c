//! Shared macros for constructing field elements.

/// Simplifies constructing [`FieldElement`](crate::field_element::FieldElement)s.
///
/// See [`FieldElement::from`](crate::field_element::FieldElement::from) for
/// supported types.
///
/// ```
/// use field::prelude::*;
///
/// let a = fe!(42);
/// let b = fe!(-12); // correctly translates to `MOD - 12`
/// let c = fe!(42 - 12);
/// assert_eq!(a + b, c);
/// ```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::FieldElement::from($value)
    };
}

/// Create a [`Vec`] of [`FieldElement`](crate::field_element::FieldElement)s.
///
/// ```
/// use field::prelude::*;
///
/// let repeated = fe_vec![7; 3];
/// assert_eq!(repeated, vec![fe!(7); 3]);
/// ```
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::field_element::FieldElement::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::field_element::FieldElement::from($b)),*]
    };
}

/// Create an array of [`FieldElement`](crate::field_element::FieldElement)s.
///
/// ```
/// use field::prelude::*;
///
/// let arr = fe_array![1, 2, 3];
/// assert_eq!(arr, [fe!(1), fe!(2), fe!(3)]);
/// ```
#[macro_export]
macro_rules! fe_array {
    ($b:expr; $n:expr) => {
        [$crate::field_element::FieldElement::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        [$($crate::field_element::FieldElement::from($b)),*]
    };
}
