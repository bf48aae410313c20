//! The uniform indexed-access surface shared by every buffer
//! representation.
//!
//! Two access paths exist side by side, and the asymmetry is deliberate:
//! the bounds-aware path fails deterministically on a bad index, while the
//! raw path performs no check at all and makes an out-of-range access
//! undefined behavior. The cost difference between the two is one of the
//! quantities the benchmark suite measures, so neither path may borrow
//! behavior from the other.

#![allow(unsafe_code)]

use crate::element::Element;

/// Indexed get/set plus bulk lane transfer over a fixed-length buffer.
///
/// Implementations must not allocate and must not branch on anything but
/// the index bound check; the point of comparing them is to isolate the
/// cost of indirection versus direct indexing versus address arithmetic.
///
/// The trait is dyn-compatible so a representation can be chosen at
/// configuration time and handed to a kernel as `&dyn BufferAccess<_>`.
pub trait BufferAccess<E: Element> {
    /// Number of elements in the buffer.
    fn len(&self) -> usize;

    /// Whether the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the element at `index` through the bounds-aware path.
    ///
    /// # Panics
    ///
    /// Panics with an explicit out-of-range message if
    /// `index >= self.len()`.
    fn get(&self, index: usize) -> E;

    /// Write the element at `index` through the bounds-aware path.
    ///
    /// # Panics
    ///
    /// Panics with an explicit out-of-range message if
    /// `index >= self.len()`.
    fn set(&mut self, index: usize, value: E);

    /// Read the element at `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`BufferAccess::len`]. Representations do
    /// not check; an out-of-range index is undefined behavior.
    unsafe fn get_unchecked(&self, index: usize) -> E;

    /// Write the element at `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`BufferAccess::len`]. Representations do
    /// not check; an out-of-range index is undefined behavior.
    unsafe fn set_unchecked(&mut self, index: usize, value: E);

    /// Load a full lane group starting at element `index`.
    ///
    /// Byte-addressed representations decode in their configured byte
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `index + LANES` exceeds the buffer length.
    fn load(&self, index: usize) -> E::Lanes;

    /// Store a full lane group starting at element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index + LANES` exceeds the buffer length.
    fn store(&mut self, index: usize, lanes: E::Lanes);
}
