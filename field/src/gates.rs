//! Gate-level operations in output-slot form.
//!
//! Generated witness code evaluates a gate by writing into the slot of its
//! output wire, e.g. `out.set_mul(a, b)`. Operands are taken by value, so the
//! output slot may be one of the operands: `x.set_add(x, y)` is `x = x + y`.

use crate::field_element::FieldElement;

/// Copy the first `n` elements of `src` into `dst`.
///
/// # Panics
///
/// When either slice is shorter than `n`.
pub fn copyn(dst: &mut [FieldElement], src: &[FieldElement], n: usize) {
    dst[..n].copy_from_slice(&src[..n]);
}

impl FieldElement {
    #[inline]
    pub fn set_copy(&mut self, a: Self) {
        *self = a;
    }

    /// Kept for parity with wider fields, where it leaves Montgomery form.
    /// Here it is a plain copy.
    #[inline]
    pub fn set_to_long_normal(&mut self, a: Self) {
        *self = a;
    }

    #[inline]
    pub fn set_add(&mut self, a: Self, b: Self) {
        *self = a + b;
    }

    #[inline]
    pub fn set_sub(&mut self, a: Self, b: Self) {
        *self = a - b;
    }

    #[inline]
    pub fn set_neg(&mut self, a: Self) {
        *self = -a;
    }

    #[inline]
    pub fn set_mul(&mut self, a: Self, b: Self) {
        *self = a * b;
    }

    /// # Panics
    ///
    /// When `b` is congruent to zero.
    #[inline]
    pub fn set_div(&mut self, a: Self, b: Self) {
        *self = a / b;
    }

    /// # Panics
    ///
    /// When `b` holds zero.
    #[inline]
    pub fn set_idiv(&mut self, a: Self, b: Self) {
        *self = a.idiv(b);
    }

    /// # Panics
    ///
    /// When `b` holds zero.
    #[inline]
    pub fn set_mod(&mut self, a: Self, b: Self) {
        *self = a.imod(b);
    }

    #[inline]
    pub fn set_band(&mut self, a: Self, b: Self) {
        *self = a & b;
    }

    #[inline]
    pub fn set_bor(&mut self, a: Self, b: Self) {
        *self = a | b;
    }

    #[inline]
    pub fn set_bxor(&mut self, a: Self, b: Self) {
        *self = a ^ b;
    }

    #[inline]
    pub fn set_bnot(&mut self, a: Self) {
        *self = !a;
    }

    /// Shift amount is the raw slot of `b`.
    #[inline]
    pub fn set_shl(&mut self, a: Self, b: Self) {
        *self = a << b.raw();
    }

    /// Shift amount is the raw slot of `b`.
    #[inline]
    pub fn set_shr(&mut self, a: Self, b: Self) {
        *self = a >> b.raw();
    }

    #[inline]
    pub fn set_eq(&mut self, a: Self, b: Self) {
        *self = Self::from(a == b);
    }

    #[inline]
    pub fn set_neq(&mut self, a: Self, b: Self) {
        *self = Self::from(a != b);
    }

    #[inline]
    pub fn set_lt(&mut self, a: Self, b: Self) {
        *self = Self::from(a < b);
    }

    #[inline]
    pub fn set_gt(&mut self, a: Self, b: Self) {
        *self = Self::from(a > b);
    }

    #[inline]
    pub fn set_leq(&mut self, a: Self, b: Self) {
        *self = Self::from(a <= b);
    }

    #[inline]
    pub fn set_geq(&mut self, a: Self, b: Self) {
        *self = Self::from(a >= b);
    }

    #[inline]
    pub fn set_land(&mut self, a: Self, b: Self) {
        *self = Self::from(a.is_true() && b.is_true());
    }

    #[inline]
    pub fn set_lor(&mut self, a: Self, b: Self) {
        *self = Self::from(a.is_true() || b.is_true());
    }

    /// `1` iff `a` is zero. Unlike `Fr_lnot` in the generated C runtime,
    /// which writes `1` for a nonzero operand.
    #[inline]
    pub fn set_lnot(&mut self, a: Self) {
        *self = Self::from(!a.is_true());
    }
}
