//! In-place scalar addition over one-dimensional strided buffers.
//!
//! Every entry point computes `x[offset + i * stride] += alpha` for `i in 0..n`,
//! mutating the caller's buffer and handing the same buffer back so calls can
//! be chained.
//!
//! # Entry points
//!
//! - [`sapx`], [`dapx`], [`apx`]: BLAS-style, the starting index is derived from the stride
//! - [`sapx_ndarray`], [`dapx_ndarray`], [`apx_ndarray`]: explicit starting offset
//! - [`sapx_ndarray_unchecked`], [`dapx_ndarray_unchecked`], [`apx_ndarray_unchecked`]:
//!   the raw kernel, no bounds checks
//! - [`StridedVecMut`]: a view validated once, with a chaining [`StridedVecMut::apx`]
//!
//! # Example
//!
//! ```rust
//! use strided_apx::{sapx_ndarray, StridedVecMut};
//!
//! let mut x = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
//! sapx_ndarray(3, 5.0, &mut x, 2, 1).unwrap();
//! assert_eq!(x, vec![1.0, 7.0, 3.0, 9.0, 5.0, 11.0]);
//!
//! // Walk backward from the last element.
//! let mut y = vec![2.0f32, -3.0, -5.0, 7.0, 6.0];
//! StridedVecMut::new(&mut y, 3, -2, 4).unwrap().apx(5.0);
//! assert_eq!(y, vec![7.0, -3.0, 0.0, 7.0, 11.0]);
//! ```
//!
//! # Fast path
//!
//! A unit stride is processed in blocks of eight consecutive elements, or with
//! a runtime-dispatched vector loop when the `simd` feature is enabled. The
//! result is bit-identical to the general strided loop.

mod kernel;
mod ops;
mod scalar;
mod simd;
pub mod view;

pub use kernel::apx_ndarray_unchecked;
pub use ops::{
    apx, apx_ndarray, dapx, dapx_ndarray, dapx_ndarray_unchecked, sapx, sapx_ndarray,
    sapx_ndarray_unchecked,
};
pub use scalar::ApxScalar;
pub use simd::MaybeSimdApx;
pub use view::{stride_to_offset, StridedVecMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors reported by the checked scalar-add entry points.
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// Zero stride is not allowed for a non-empty range.
    #[error("invalid stride 0")]
    ZeroStride,

    /// Integer overflow while computing an element index.
    #[error("offset overflow while computing index")]
    OffsetOverflow,

    /// An addressed index falls outside the buffer.
    #[error("index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },
}

/// Result type for strided scalar-add operations.
pub type Result<T> = std::result::Result<T, StridedError>;
