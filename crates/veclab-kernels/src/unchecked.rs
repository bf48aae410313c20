//! Kernels over the raw, no-bounds-check access path.
//!
//! These are the shapes that measure raw address arithmetic. Lengths are
//! validated once at entry; the loops then run on the unchecked accessors
//! with no per-element checks. The single up-front validation discharges
//! the accessors' safety contract, so the public surface stays safe.

#![allow(unsafe_code)]

use veclab_core::{BufferAccess, Element};

use crate::error::KernelError;
use crate::{check_lens, check_stride};

/// One element per iteration through the unchecked accessors.
pub fn add_scalar<E, O, I>(output: &mut O, input: &I) -> Result<(), KernelError>
where
    E: Element,
    O: BufferAccess<E> + ?Sized,
    I: BufferAccess<E> + ?Sized,
{
    let len = check_lens(&*output, input)?;
    for i in 0..len {
        // SAFETY: i < len, and both buffers hold exactly len elements.
        unsafe { output.set_unchecked(i, output.get_unchecked(i) + input.get_unchecked(i)) };
    }
    Ok(())
}

/// Stride-4 iteration through the unchecked accessors. Fails fast if the
/// length is not a multiple of 4.
pub fn add_unrolled<E, O, I>(output: &mut O, input: &I) -> Result<(), KernelError>
where
    E: Element,
    O: BufferAccess<E> + ?Sized,
    I: BufferAccess<E> + ?Sized,
{
    let len = check_lens(&*output, input)?;
    check_stride(len, 4)?;
    let mut i = 0;
    while i < len {
        // SAFETY: i + 3 < len because len is a multiple of 4 and both
        // buffers hold exactly len elements.
        unsafe {
            output.set_unchecked(i, output.get_unchecked(i) + input.get_unchecked(i));
            output.set_unchecked(i + 1, output.get_unchecked(i + 1) + input.get_unchecked(i + 1));
            output.set_unchecked(i + 2, output.get_unchecked(i + 2) + input.get_unchecked(i + 2));
            output.set_unchecked(i + 3, output.get_unchecked(i + 3) + input.get_unchecked(i + 3));
        }
        i += 4;
    }
    Ok(())
}

/// A single running accumulator through the unchecked accessor.
pub fn sum_scalar<E, I>(input: &I) -> E
where
    E: Element,
    I: BufferAccess<E> + ?Sized,
{
    let len = input.len();
    let mut sum = E::default();
    for i in 0..len {
        // SAFETY: i < len by the loop bound.
        sum += unsafe { input.get_unchecked(i) };
    }
    sum
}

/// Four independent partial accumulators through the unchecked accessor.
/// Fails fast if the length is not a multiple of 4.
pub fn sum_unrolled<E, I>(input: &I) -> Result<E, KernelError>
where
    E: Element,
    I: BufferAccess<E> + ?Sized,
{
    let len = input.len();
    check_stride(len, 4)?;
    let mut sum0 = E::default();
    let mut sum1 = E::default();
    let mut sum2 = E::default();
    let mut sum3 = E::default();
    let mut i = 0;
    while i < len {
        // SAFETY: i + 3 < len because len is a multiple of 4.
        unsafe {
            sum0 += input.get_unchecked(i);
            sum1 += input.get_unchecked(i + 1);
            sum2 += input.get_unchecked(i + 2);
            sum3 += input.get_unchecked(i + 3);
        }
        i += 4;
    }
    Ok(sum0 + sum1 + sum2 + sum3)
}
