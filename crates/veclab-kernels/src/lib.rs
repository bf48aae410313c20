//! Elementwise-add and reduction-sum kernels over the veclab buffer
//! representations.
//!
//! Each kernel comes in the loop shapes the harness measures:
//!
//! - *scalar* — one element per iteration;
//! - *unrolled* — stride-4 with four independent operations per body;
//! - *lanes* — SIMD lane groups, one vector add per group (reduction
//!   additionally splits into accumulate-then-reduce and reduce-each
//!   strategies, which trade performance against rounding path).
//!
//! Kernels are generic over the `(output, input)` representation pair, so
//! one parameterized implementation covers every pairing rather than one
//! hand-written function per pair. The [`unchecked`] module holds the same
//! shapes over the raw no-bounds-check access path.
//!
//! Lengths are validated up front and mismatches fail fast with an
//! explicit error; nothing is silently truncated or padded. Different
//! shapes sum in different orders, so their results may diverge at the
//! bit level within floating-point associativity. That divergence is
//! expected and bounded by the test suite, not a bug.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod add;
pub mod error;
pub mod sum;
pub mod unchecked;

pub use add::{add_lanes, add_scalar, add_unrolled};
pub use error::KernelError;
pub use sum::{sum_lanes_accumulate, sum_lanes_reduce_each, sum_scalar, sum_unrolled};

use veclab_core::{BufferAccess, Element};

/// Check that the output and input cover the same element count.
pub(crate) fn check_lens<E, O, I>(output: &O, input: &I) -> Result<usize, KernelError>
where
    E: Element,
    O: BufferAccess<E> + ?Sized,
    I: BufferAccess<E> + ?Sized,
{
    let (out_len, in_len) = (output.len(), input.len());
    if out_len != in_len {
        return Err(KernelError::SizeMismatch {
            output: out_len,
            input: in_len,
        });
    }
    Ok(in_len)
}

/// Check that `len` divides evenly into strides of `stride` elements.
pub(crate) fn check_stride(len: usize, stride: usize) -> Result<(), KernelError> {
    if len % stride != 0 {
        return Err(KernelError::StrideRemainder { len, stride });
    }
    Ok(())
}
