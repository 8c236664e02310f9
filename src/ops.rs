//! Public scalar-add entry points.
//!
//! The checked functions validate `stride`/`offset` against the buffer once and
//! then hand off to the unchecked kernel. The `_unchecked` functions are the
//! kernel itself for callers that already know their indices are in bounds.

use crate::kernel::apx_ndarray_unchecked;
use crate::scalar::ApxScalar;
use crate::view::{stride_to_offset, validate_bounds};
use crate::Result;

/// Add `alpha` to `n` elements of `x` starting at `offset` with step `stride`.
///
/// Returns the same buffer. `n <= 0` or a zero `alpha` return `x` untouched
/// before any validation takes place.
///
/// # Errors
/// - [`StridedError::ZeroStride`](crate::StridedError::ZeroStride) if `stride == 0`
/// - [`StridedError::OutOfBounds`](crate::StridedError::OutOfBounds) if an
///   addressed index falls outside `x`
/// - [`StridedError::OffsetOverflow`](crate::StridedError::OffsetOverflow) if
///   index arithmetic overflows
pub fn apx_ndarray<T: ApxScalar>(
    n: isize,
    alpha: T,
    x: &mut [T],
    stride: isize,
    offset: usize,
) -> Result<&mut [T]> {
    if n <= 0 || alpha.is_zero() {
        return Ok(x);
    }
    if let Err(err) = validate_bounds(x.len(), n as usize, stride, offset) {
        log::debug!(
            "apx rejected: n={n} stride={stride} offset={offset} len={}: {err}",
            x.len()
        );
        return Err(err);
    }
    // SAFETY: every addressed index was checked above.
    Ok(unsafe { apx_ndarray_unchecked(n, alpha, x, stride, offset) })
}

/// Add `alpha` to `n` elements of `x` with step `stride`, BLAS style.
///
/// A positive stride starts at index 0; a negative stride starts at
/// `(1 - n) * stride`, so the same elements are visited in reverse order.
pub fn apx<T: ApxScalar>(n: isize, alpha: T, x: &mut [T], stride: isize) -> Result<&mut [T]> {
    if n <= 0 || alpha.is_zero() {
        return Ok(x);
    }
    let offset = stride_to_offset(n as usize, stride)?;
    apx_ndarray(n, alpha, x, stride, offset)
}

/// Single-precision [`apx`].
#[inline]
pub fn sapx(n: isize, alpha: f32, x: &mut [f32], stride: isize) -> Result<&mut [f32]> {
    apx(n, alpha, x, stride)
}

/// Single-precision [`apx_ndarray`].
#[inline]
pub fn sapx_ndarray(
    n: isize,
    alpha: f32,
    x: &mut [f32],
    stride: isize,
    offset: usize,
) -> Result<&mut [f32]> {
    apx_ndarray(n, alpha, x, stride, offset)
}

/// Single-precision kernel without bounds checks.
///
/// # Safety
/// See [`apx_ndarray_unchecked`].
#[inline]
pub unsafe fn sapx_ndarray_unchecked(
    n: isize,
    alpha: f32,
    x: &mut [f32],
    stride: isize,
    offset: usize,
) -> &mut [f32] {
    apx_ndarray_unchecked(n, alpha, x, stride, offset)
}

/// Double-precision [`apx`].
#[inline]
pub fn dapx(n: isize, alpha: f64, x: &mut [f64], stride: isize) -> Result<&mut [f64]> {
    apx(n, alpha, x, stride)
}

/// Double-precision [`apx_ndarray`].
#[inline]
pub fn dapx_ndarray(
    n: isize,
    alpha: f64,
    x: &mut [f64],
    stride: isize,
    offset: usize,
) -> Result<&mut [f64]> {
    apx_ndarray(n, alpha, x, stride, offset)
}

/// Double-precision kernel without bounds checks.
///
/// # Safety
/// See [`apx_ndarray_unchecked`].
#[inline]
pub unsafe fn dapx_ndarray_unchecked(
    n: isize,
    alpha: f64,
    x: &mut [f64],
    stride: isize,
    offset: usize,
) -> &mut [f64] {
    apx_ndarray_unchecked(n, alpha, x, stride, offset)
}
