use num_traits::Zero;

pub trait Inverse
where
    Self: Sized + Zero,
{
    /// # Panics
    ///
    /// When `self` has no inverse.
    fn inverse(&self) -> Self;

    fn inverse_or_zero(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            self.inverse()
        }
    }
}
