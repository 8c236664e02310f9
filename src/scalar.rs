//! Element type bounds for the scalar-add kernel.

use crate::simd::MaybeSimdApx;

/// Element types the `apx` kernels accept: `f32` and `f64`.
///
/// `Zero` supplies the `alpha == 0` short-circuit test; `MaybeSimdApx`
/// supplies an optional vectorised body for the unit-stride path.
pub trait ApxScalar:
    Copy + std::ops::Add<Output = Self> + num_traits::Zero + MaybeSimdApx
{
}

impl<T> ApxScalar for T where
    T: Copy + std::ops::Add<Output = T> + num_traits::Zero + MaybeSimdApx
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_apx_scalar<T: ApxScalar>() {}

    #[test]
    fn test_standard_types() {
        assert_apx_scalar::<f32>();
        assert_apx_scalar::<f64>();
    }

    #[test]
    fn test_negative_zero_is_zero() {
        use num_traits::Zero;
        assert!((-0.0f32).is_zero());
        assert!(0.0f32.is_zero());
        assert!(!f32::MIN_POSITIVE.is_zero());
        assert!(!f32::NAN.is_zero());
    }
}
