//! Strided scalar-add kernel: `x[offset + i*stride] += alpha` for `i in 0..n`.
//!
//! The kernel is an unchecked inner-loop primitive. Bounds are validated by
//! the callers in [`crate::ops`] and [`crate::view`], never here.

use crate::scalar::ApxScalar;

/// Elements processed per iteration of the unit-stride loop.
pub(crate) const UNROLL: usize = 8;

/// Add `alpha` to `n` elements of `x` starting at `offset` with step `stride`,
/// in place, and return `x`.
///
/// Returns `x` untouched when `n <= 0` or `alpha` is zero (either sign). A
/// unit stride takes the contiguous path; every other stride, including
/// zero and negative ones, takes the general strided loop. Both produce the
/// same result.
///
/// # Safety
/// Unless `n <= 0` or `alpha` is zero, every index `offset + i*stride` for
/// `i in 0..n` must lie in `0..x.len()` and be representable as `isize`.
#[inline]
pub unsafe fn apx_ndarray_unchecked<T: ApxScalar>(
    n: isize,
    alpha: T,
    x: &mut [T],
    stride: isize,
    offset: usize,
) -> &mut [T] {
    if n <= 0 || alpha.is_zero() {
        return x;
    }
    let len = n as usize;
    if stride == 1 {
        let dst = x.get_unchecked_mut(offset..offset + len);
        inner_loop_apx_contiguous(dst, alpha);
    } else {
        inner_loop_apx_strided(x.as_mut_ptr(), offset as isize, stride, len, alpha);
    }
    x
}

/// Unit-stride body: SIMD when available, otherwise the unrolled loop.
#[inline(always)]
pub(crate) fn inner_loop_apx_contiguous<T: ApxScalar>(x: &mut [T], alpha: T) {
    if T::try_simd_add_scalar(x, alpha) {
        return;
    }
    inner_loop_apx_unrolled(x, alpha);
}

/// Unit-stride body processing [`UNROLL`] elements per iteration, followed by
/// a scalar cleanup loop for the remainder.
#[inline(always)]
pub(crate) fn inner_loop_apx_unrolled<T: ApxScalar>(x: &mut [T], alpha: T) {
    let mut chunks = x.chunks_exact_mut(UNROLL);
    for c in &mut chunks {
        c[0] = c[0] + alpha;
        c[1] = c[1] + alpha;
        c[2] = c[2] + alpha;
        c[3] = c[3] + alpha;
        c[4] = c[4] + alpha;
        c[5] = c[5] + alpha;
        c[6] = c[6] + alpha;
        c[7] = c[7] + alpha;
    }
    for v in chunks.into_remainder() {
        *v = *v + alpha;
    }
}

/// General strided body.
///
/// The element index is tracked as an integer and only turned into a pointer
/// when dereferenced, so walking past either end of the buffer after the
/// last element never forms an out-of-bounds pointer.
///
/// # Safety
/// `base.offset(offset + i*stride)` must be valid for reads and writes for
/// every `i in 0..len`.
#[inline(always)]
pub(crate) unsafe fn inner_loop_apx_strided<T: ApxScalar>(
    base: *mut T,
    offset: isize,
    stride: isize,
    len: usize,
    alpha: T,
) {
    let mut idx = offset;
    for _ in 0..len {
        let p = base.offset(idx);
        *p = *p + alpha;
        idx = idx.wrapping_add(stride);
    }
}
