//! Reduction-sum kernels: `Σ input[i]`.
//!
//! The shapes differ in summation order, so their results may differ at
//! the bit level. The scalar shape is the baseline the test suite
//! compares everything against.

use veclab_core::{BufferAccess, Element, LaneGroup};

use crate::check_stride;
use crate::error::KernelError;

/// A single running accumulator over the bounds-aware accessor.
pub fn sum_scalar<E, I>(input: &I) -> E
where
    E: Element,
    I: BufferAccess<E> + ?Sized,
{
    let mut sum = E::default();
    for i in 0..input.len() {
        sum += input.get(i);
    }
    sum
}

/// Four independent partial accumulators over offsets `i`, `i+1`, `i+2`,
/// `i+3`, combined at the end. Fails fast if the length is not a multiple
/// of 4.
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
        sum0 += input.get(i);
        sum1 += input.get(i + 1);
        sum2 += input.get(i + 2);
        sum3 += input.get(i + 3);
        i += 4;
    }
    Ok(sum0 + sum1 + sum2 + sum3)
}

/// One SIMD accumulator across the whole loop, with a single horizontal
/// lane reduction at the end. Fails fast if the length is not a multiple
/// of the lane count.
pub fn sum_lanes_accumulate<E, I>(input: &I) -> Result<E, KernelError>
where
    E: Element,
    I: BufferAccess<E> + ?Sized,
{
    let len = input.len();
    let lanes = <E::Lanes as LaneGroup>::LANES;
    check_stride(len, lanes)?;
    let mut acc = E::Lanes::zero();
    let mut i = 0;
    while i < len {
        acc = acc + input.load(i);
        i += lanes;
    }
    Ok(acc.reduce_add())
}

/// A horizontal lane reduction every iteration, accumulated into a scalar
/// running total. Same result class as [`sum_lanes_accumulate`] but a
/// different performance/precision trade-off, so it is measured
/// separately. Fails fast if the length is not a multiple of the lane
/// count.
pub fn sum_lanes_reduce_each<E, I>(input: &I) -> Result<E, KernelError>
where
    E: Element,
    I: BufferAccess<E> + ?Sized,
{
    let len = input.len();
    let lanes = <E::Lanes as LaneGroup>::LANES;
    check_stride(len, lanes)?;
    let mut sum = E::default();
    let mut i = 0;
    while i < len {
        sum += input.load(i).reduce_add();
        i += lanes;
    }
    Ok(sum)
}
