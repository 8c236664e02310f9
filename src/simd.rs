//! Optional vectorised body for the unit-stride path.

/// Below this length the runtime-dispatch overhead outweighs the vector loop.
/// This is a heuristic; correctness does not depend on it.
#[cfg_attr(not(feature = "simd"), allow(dead_code))]
pub(crate) const SIMD_MIN_LEN: usize = 64;

/// Trait for types that may have a SIMD-accelerated in-place scalar add.
///
/// Implemented for `f32` and `f64` only. Without the `simd` feature the
/// default implementation declines (returns `false`) and leaves the buffer
/// untouched, so the caller falls back to the unrolled scalar loop.
pub trait MaybeSimdApx: Copy + Sized {
    /// Add `alpha` to every element of `x`. Returns `true` if the work was done.
    fn try_simd_add_scalar(_x: &mut [Self], _alpha: Self) -> bool {
        false
    }
}

#[cfg(not(feature = "simd"))]
impl MaybeSimdApx for f32 {}

#[cfg(not(feature = "simd"))]
impl MaybeSimdApx for f64 {}

#[cfg(feature = "simd")]
mod simd_impls {
    use super::{MaybeSimdApx, SIMD_MIN_LEN};
    use pulp::{Simd, WithSimd};

    impl MaybeSimdApx for f32 {
        fn try_simd_add_scalar(x: &mut [f32], alpha: f32) -> bool {
            if x.len() < SIMD_MIN_LEN {
                return false;
            }

            struct AddScalar<'a> {
                x: &'a mut [f32],
                alpha: f32,
            }
            impl<'a> WithSimd for AddScalar<'a> {
                type Output = ();

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) -> Self::Output {
                    let alpha = self.alpha;
                    let (head, tail) = S::as_mut_simd_f32s(self.x);
                    let a = simd.splat_f32s(alpha);
                    for v in head.iter_mut() {
                        *v = simd.add_f32s(*v, a);
                    }
                    for v in tail.iter_mut() {
                        *v = *v + alpha;
                    }
                }
            }

            pulp::Arch::new().dispatch(AddScalar { x, alpha });
            true
        }
    }

    impl MaybeSimdApx for f64 {
        fn try_simd_add_scalar(x: &mut [f64], alpha: f64) -> bool {
            if x.len() < SIMD_MIN_LEN {
                return false;
            }

            struct AddScalar<'a> {
                x: &'a mut [f64],
                alpha: f64,
            }
            impl<'a> WithSimd for AddScalar<'a> {
                type Output = ();

                #[inline(always)]
                fn with_simd<S: Simd>(self, simd: S) -> Self::Output {
                    let alpha = self.alpha;
                    let (head, tail) = S::as_mut_simd_f64s(self.x);
                    let a = simd.splat_f64s(alpha);
                    for v in head.iter_mut() {
                        *v = simd.add_f64s(*v, a);
                    }
                    for v in tail.iter_mut() {
                        *v = *v + alpha;
                    }
                }
            }

            pulp::Arch::new().dispatch(AddScalar { x, alpha });
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_buffer_declines() {
        let mut x = vec![1.0f32; SIMD_MIN_LEN - 1];
        assert!(!f32::try_simd_add_scalar(&mut x, 2.0));
        assert!(x.iter().all(|&v| v == 1.0));
    }

    #[cfg(not(feature = "simd"))]
    #[test]
    fn test_floats_decline_without_simd() {
        let mut x = vec![1.0f64; 4 * SIMD_MIN_LEN];
        assert!(!f64::try_simd_add_scalar(&mut x, 2.0));
        assert!(x.iter().all(|&v| v == 1.0));
    }

    #[cfg(feature = "simd")]
    #[test]
    fn test_simd_matches_scalar() {
        // 3 * 64 + 5 leaves a tail for every vector width pulp may pick
        let len = 3 * SIMD_MIN_LEN + 5;
        let mut x: Vec<f32> = (0..len).map(|i| i as f32 * 0.37 - 11.0).collect();
        let expected: Vec<f32> = x.iter().map(|&v| v + 1.25).collect();
        assert!(f32::try_simd_add_scalar(&mut x, 1.25));
        assert_eq!(x, expected);

        let mut y: Vec<f64> = (0..len).map(|i| i as f64 * -0.11 + 3.0).collect();
        let expected: Vec<f64> = y.iter().map(|&v| v - 7.5).collect();
        assert!(f64::try_simd_add_scalar(&mut y, -7.5));
        assert_eq!(y, expected);
    }
}
