//! 1-D mutable strided view and the bounds checks shared by the checked API.
//!
//! - [`StridedVecMut`]: borrowed `(data, len, stride, offset)` view, validated once
//! - [`stride_to_offset`]: BLAS-style starting index for a given stride

use crate::kernel::apx_ndarray_unchecked;
use crate::scalar::ApxScalar;
use crate::{Result, StridedError};

// ============================================================================
// Validation helpers
// ============================================================================

/// Validate that every index `offset + i*stride`, `i in 0..len`, lies in `[0, data_len)`.
pub(crate) fn validate_bounds(
    data_len: usize,
    len: usize,
    stride: isize,
    offset: usize,
) -> Result<()> {
    // Empty view - no access needed
    if len == 0 {
        return Ok(());
    }
    if stride == 0 {
        return Err(StridedError::ZeroStride);
    }
    let first = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let steps = isize::try_from(len - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let last = stride
        .checked_mul(steps)
        .and_then(|end| first.checked_add(end))
        .ok_or(StridedError::OffsetOverflow)?;
    let (min_index, max_index) = if last < first {
        (last, first)
    } else {
        (first, last)
    };
    if min_index < 0 {
        return Err(StridedError::OutOfBounds {
            index: min_index,
            len: data_len,
        });
    }
    if max_index as usize >= data_len {
        return Err(StridedError::OutOfBounds {
            index: max_index,
            len: data_len,
        });
    }
    Ok(())
}

/// Starting index for `n` elements at `stride` under the BLAS convention:
/// `0` for a positive stride, `(1 - n) * stride` for a negative one, so that
/// a negative stride walks the same elements in reverse.
pub fn stride_to_offset(n: usize, stride: isize) -> Result<usize> {
    if stride >= 0 || n == 0 {
        return Ok(0);
    }
    let steps = isize::try_from(n - 1).map_err(|_| StridedError::OffsetOverflow)?;
    steps
        .checked_mul(stride)
        .and_then(isize::checked_neg)
        .map(|o| o as usize)
        .ok_or(StridedError::OffsetOverflow)
}

// ============================================================================
// StridedVecMut
// ============================================================================

/// Mutable 1-D strided view over a borrowed buffer.
///
/// Logical element `i` lives at `data[offset + i * stride]`. Construction via
/// [`StridedVecMut::new`] checks that all `len` addressed indices are in
/// bounds, so the operations on the view never fail.
pub struct StridedVecMut<'a, T> {
    data: &'a mut [T],
    len: usize,
    stride: isize,
    offset: usize,
}

impl<T> std::fmt::Debug for StridedVecMut<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StridedVecMut")
            .field("len", &self.len)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<'a, T> StridedVecMut<'a, T> {
    /// Create a new mutable strided view.
    pub fn new(data: &'a mut [T], len: usize, stride: isize, offset: usize) -> Result<Self> {
        validate_bounds(data.len(), len, stride, offset)?;
        Ok(Self {
            data,
            len,
            stride,
            offset,
        })
    }

    /// Create without bounds checking.
    ///
    /// # Safety
    /// Every index `offset + i * stride` for `i in 0..len` must lie in `0..data.len()`.
    pub unsafe fn new_unchecked(
        data: &'a mut [T],
        len: usize,
        stride: isize,
        offset: usize,
    ) -> Self {
        Self {
            data,
            len,
            stride,
            offset,
        }
    }

    /// Unit-stride view over the whole buffer.
    pub fn from_slice(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            len,
            stride: 1,
            offset: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Give back the whole underlying buffer, including unaddressed elements.
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    #[inline]
    fn index_of(&self, i: usize) -> usize {
        assert!(i < self.len, "index {i} out of range for view of length {}", self.len);
        (self.offset as isize + i as isize * self.stride) as usize
    }
}

impl<'a, T: Copy> StridedVecMut<'a, T> {
    /// Get logical element `i`.
    pub fn get(&self, i: usize) -> T {
        self.data[self.index_of(i)]
    }

    /// Set logical element `i`.
    pub fn set(&mut self, i: usize, value: T) {
        let idx = self.index_of(i);
        self.data[idx] = value;
    }
}

impl<'a, T: ApxScalar> StridedVecMut<'a, T> {
    /// Add `alpha` to every element of the view in place, returning the view.
    pub fn apx(&mut self, alpha: T) -> &mut Self {
        let n = self.len as isize;
        // SAFETY: bounds were validated at construction.
        unsafe {
            apx_ndarray_unchecked(n, alpha, self.data, self.stride, self.offset);
        }
        self
    }
}
