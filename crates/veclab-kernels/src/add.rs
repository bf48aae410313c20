//! Elementwise-add kernels: `output[i] += input[i]`.

use veclab_core::{BufferAccess, Element, LaneGroup};

use crate::error::KernelError;
use crate::{check_lens, check_stride};

/// One element per iteration through the bounds-aware accessors.
pub fn add_scalar<E, O, I>(output: &mut O, input: &I) -> Result<(), KernelError>
where
    E: Element,
    O: BufferAccess<E> + ?Sized,
    I: BufferAccess<E> + ?Sized,
{
    let len = check_lens(&*output, input)?;
    for i in 0..len {
        output.set(i, output.get(i) + input.get(i));
    }
    Ok(())
}

/// Stride-4 iteration with four independent add-and-store operations per
/// body. Fails fast if the length is not a multiple of 4.
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
        output.set(i, output.get(i) + input.get(i));
        output.set(i + 1, output.get(i + 1) + input.get(i + 1));
        output.set(i + 2, output.get(i + 2) + input.get(i + 2));
        output.set(i + 3, output.get(i + 3) + input.get(i + 3));
        i += 4;
    }
    Ok(())
}

/// SIMD iteration: load a lane group from each side, one vector add,
/// store back, advance by the lane count. Fails fast if the length is not
/// a multiple of the lane count.
pub fn add_lanes<E, O, I>(output: &mut O, input: &I) -> Result<(), KernelError>
where
    E: Element,
    O: BufferAccess<E> + ?Sized,
    I: BufferAccess<E> + ?Sized,
{
    let len = check_lens(&*output, input)?;
    let lanes = <E::Lanes as LaneGroup>::LANES;
    check_stride(len, lanes)?;
    let mut i = 0;
    while i < len {
        let a = input.load(i);
        let b = output.load(i);
        output.store(i, a + b);
        i += lanes;
    }
    Ok(())
}
