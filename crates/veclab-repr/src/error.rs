//! Representation-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when constructing a buffer representation.
///
/// Out-of-range access on the bounds-aware path panics instead of
/// returning one of these: a bad index in kernel code is a programming
/// error, not a recoverable condition. Allocation failure is likewise not
/// represented here — it aborts the process, since a benchmark run is
/// meaningless without its buffers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// A segment layout whose element size does not match the element
    /// type it is asked to serve.
    LayoutMismatch {
        /// Encoded size of the element type in bytes.
        expected: usize,
        /// Element size declared by the layout.
        actual: usize,
    },
    /// Backing storage whose base address violates the layout's declared
    /// alignment.
    Misaligned {
        /// Alignment required by the layout.
        required: usize,
        /// Base address of the offered storage.
        address: usize,
    },
    /// Backing storage whose byte length is not a whole number of
    /// elements.
    RaggedLength {
        /// Byte length of the offered storage.
        bytes: usize,
        /// Element size declared by the layout.
        element_size: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LayoutMismatch { expected, actual } => {
                write!(
                    f,
                    "layout mismatch: element type is {expected} bytes, layout declares {actual}"
                )
            }
            Self::Misaligned { required, address } => {
                write!(
                    f,
                    "misaligned backing store: address {address:#x} is not {required}-byte aligned"
                )
            }
            Self::RaggedLength {
                bytes,
                element_size,
            } => {
                write!(
                    f,
                    "ragged backing store: {bytes} bytes is not a multiple of the {element_size}-byte element size"
                )
            }
        }
    }
}

impl Error for BufferError {}
