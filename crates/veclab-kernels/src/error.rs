//! Kernel-specific error types.

use std::error::Error;
use std::fmt;

/// Errors a kernel reports before touching any element.
///
/// Every variant is a precondition failure caught up front; once a kernel
/// starts its loop it runs to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Output and input buffers cover different element counts.
    SizeMismatch {
        /// Length of the output buffer.
        output: usize,
        /// Length of the input buffer.
        input: usize,
    },
    /// The buffer length does not divide evenly into the kernel's stride
    /// (unroll factor or SIMD lane count). Remainders are refused
    /// explicitly rather than dropped or double-counted.
    StrideRemainder {
        /// Length of the buffer.
        len: usize,
        /// Elements consumed per loop iteration.
        stride: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { output, input } => {
                write!(
                    f,
                    "size mismatch: output holds {output} elements, input holds {input}"
                )
            }
            Self::StrideRemainder { len, stride } => {
                write!(
                    f,
                    "length {len} is not a multiple of the kernel stride {stride}"
                )
            }
        }
    }
}

impl Error for KernelError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_numbers() {
        let msg = KernelError::SizeMismatch {
            output: 8,
            input: 16,
        }
        .to_string();
        assert!(msg.contains('8') && msg.contains("16"));

        let msg = KernelError::StrideRemainder { len: 10, stride: 4 }.to_string();
        assert!(msg.contains("10") && msg.contains('4'));
    }
}
