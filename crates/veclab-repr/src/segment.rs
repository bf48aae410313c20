//! Described segments: bounds-aware views over raw bytes with an explicit
//! element layout.
//!
//! A [`SegmentBuf`] pairs a byte block — managed or off-heap — with an
//! [`ElementLayout`] that dictates element size, required base alignment,
//! and byte order. Every access computes `index * layout.size` and codecs
//! through the layout's order, so a segment can faithfully present bytes
//! written in either endianness. The benchmark profiles always use the
//! native order so segment access stays comparable to raw pointer access.

#![allow(unsafe_code)]

use std::marker::PhantomData;

use veclab_core::{BufferAccess, Element, ElementLayout, LaneGroup};

use crate::config::CleanupPolicy;
use crate::error::BufferError;
use crate::offheap::RawBlock;

/// A bounds-described view over a contiguous byte block.
#[derive(Debug)]
pub struct SegmentBuf<E: Element> {
    backing: Backing,
    layout: ElementLayout,
    len: usize,
    _marker: PhantomData<E>,
}

#[derive(Debug)]
enum Backing {
    Managed(Vec<u8>),
    Native(RawBlock),
}

impl Backing {
    #[inline]
    fn bytes(&self) -> &[u8] {
        match self {
            Self::Managed(vec) => vec,
            Self::Native(block) => block.as_slice(),
        }
    }

    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        match self {
            Self::Managed(vec) => vec,
            Self::Native(block) => block.as_mut_slice(),
        }
    }
}

impl<E: Element> SegmentBuf<E> {
    /// A managed-backed segment of `len` zero elements in the element's
    /// natural layout.
    pub fn zeroed(len: usize) -> Self {
        let layout = E::layout();
        Self {
            backing: Backing::Managed(vec![0u8; layout.byte_len(len)]),
            layout,
            len,
            _marker: PhantomData,
        }
    }

    /// A managed-backed segment holding the setup sequence
    /// `0.0, 1.0, …, len-1.0`.
    pub fn sequential(len: usize) -> Self {
        let mut seg = Self::zeroed(len);
        seg.fill_sequential();
        seg
    }

    /// An off-heap-backed segment of `len` zero elements in the natural
    /// layout. Allocation failure aborts the process.
    pub fn native(len: usize, policy: CleanupPolicy) -> Self {
        let layout = E::layout();
        Self {
            backing: Backing::Native(RawBlock::zeroed(layout.byte_len(len), layout.align, policy)),
            layout,
            len,
            _marker: PhantomData,
        }
    }

    /// An off-heap-backed segment holding the setup sequence.
    pub fn sequential_native(len: usize, policy: CleanupPolicy) -> Self {
        let mut seg = Self::native(len, policy);
        seg.fill_sequential();
        seg
    }

    /// A managed-backed zeroed segment with a caller-supplied layout.
    ///
    /// Fails if the layout's element size does not match `E`.
    pub fn with_layout(len: usize, layout: ElementLayout) -> Result<Self, BufferError> {
        Self::check_layout(layout)?;
        Ok(Self {
            backing: Backing::Managed(vec![0u8; layout.byte_len(len)]),
            layout,
            len,
            _marker: PhantomData,
        })
    }

    /// A managed-backed sequential segment with a caller-supplied layout.
    pub fn sequential_with_layout(len: usize, layout: ElementLayout) -> Result<Self, BufferError> {
        let mut seg = Self::with_layout(len, layout)?;
        seg.fill_sequential();
        Ok(seg)
    }

    /// Wrap an existing managed byte block in a segment view.
    ///
    /// Fails if the layout's element size does not match `E`, if the block
    /// is not a whole number of elements, or if its base address violates
    /// the layout's alignment.
    pub fn wrap_bytes(bytes: Vec<u8>, layout: ElementLayout) -> Result<Self, BufferError> {
        Self::check_layout(layout)?;
        if bytes.len() % layout.size != 0 {
            return Err(BufferError::RaggedLength {
                bytes: bytes.len(),
                element_size: layout.size,
            });
        }
        let address = bytes.as_ptr() as usize;
        if !bytes.is_empty() && address % layout.align != 0 {
            return Err(BufferError::Misaligned {
                required: layout.align,
                address,
            });
        }
        let len = bytes.len() / layout.size;
        Ok(Self {
            backing: Backing::Managed(bytes),
            layout,
            len,
            _marker: PhantomData,
        })
    }

    /// The layout this segment decodes through.
    pub fn layout(&self) -> ElementLayout {
        self.layout
    }

    /// Decode the whole segment into a vector, for verification.
    pub fn to_elements(&self) -> Vec<E> {
        (0..self.len).map(|i| self.get(i)).collect()
    }

    fn check_layout(layout: ElementLayout) -> Result<(), BufferError> {
        if layout.size != E::BYTES {
            return Err(BufferError::LayoutMismatch {
                expected: E::BYTES,
                actual: layout.size,
            });
        }
        Ok(())
    }

    fn fill_sequential(&mut self) {
        for i in 0..self.len {
            self.set(i, E::from_index(i));
        }
    }

    #[inline]
    fn element_bound(&self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of range for segment of length {}",
            self.len
        );
    }

    #[inline]
    fn lane_bound(&self, index: usize) {
        let lanes = <E::Lanes as LaneGroup>::LANES;
        let in_range = index.checked_add(lanes).is_some_and(|end| end <= self.len);
        assert!(
            in_range,
            "lane group at {index} out of range for segment of length {}",
            self.len
        );
    }
}

impl<E: Element> BufferAccess<E> for SegmentBuf<E> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> E {
        self.element_bound(index);
        let off = self.layout.byte_offset(index);
        E::read_from(&self.backing.bytes()[off..], self.layout.order)
    }

    #[inline]
    fn set(&mut self, index: usize, value: E) {
        self.element_bound(index);
        let off = self.layout.byte_offset(index);
        let order = self.layout.order;
        value.write_to(&mut self.backing.bytes_mut()[off..], order);
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> E {
        let off = self.layout.byte_offset(index);
        // SAFETY: caller promises index < len, so the element's bytes are
        // in range.
        let bytes = unsafe { self.backing.bytes().get_unchecked(off..off + E::BYTES) };
        E::read_from(bytes, self.layout.order)
    }

    #[inline]
    unsafe fn set_unchecked(&mut self, index: usize, value: E) {
        let off = self.layout.byte_offset(index);
        let order = self.layout.order;
        // SAFETY: caller promises index < len, so the element's bytes are
        // in range.
        let bytes = unsafe {
            self.backing
                .bytes_mut()
                .get_unchecked_mut(off..off + E::BYTES)
        };
        value.write_to(bytes, order);
    }

    #[inline]
    fn load(&self, index: usize) -> E::Lanes {
        self.lane_bound(index);
        let off = self.layout.byte_offset(index);
        E::Lanes::load_bytes(&self.backing.bytes()[off..], self.layout.order)
    }

    #[inline]
    fn store(&mut self, index: usize, lanes: E::Lanes) {
        self.lane_bound(index);
        let off = self.layout.byte_offset(index);
        let order = self.layout.order;
        lanes.store_bytes(&mut self.backing.bytes_mut()[off..], order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veclab_core::ByteOrder;

    #[test]
    fn sequential_fill_matches_indices() {
        let seg = SegmentBuf::<f64>::sequential(32);
        for i in 0..32 {
            assert_eq!(seg.get(i), i as f64);
        }
    }

    #[test]
    fn native_backing_behaves_like_managed() {
        let managed = SegmentBuf::<f64>::sequential(16);
        let native = SegmentBuf::<f64>::sequential_native(16, CleanupPolicy::ReleaseOnDrop);
        assert_eq!(managed.to_elements(), native.to_elements());
    }

    #[test]
    fn set_then_get() {
        let mut seg = SegmentBuf::<f64>::zeroed(8);
        seg.set(5, 9.5);
        assert_eq!(seg.get(5), 9.5);
    }

    #[test]
    fn big_endian_layout_round_trips() {
        let layout = f64::layout().with_order(ByteOrder::Big);
        let mut seg = SegmentBuf::<f64>::with_layout(8, layout).unwrap();
        seg.set(2, 1.5);
        assert_eq!(seg.get(2), 1.5);
        // The raw bytes really are big-endian.
        let seq = SegmentBuf::<f64>::sequential_with_layout(4, layout).unwrap();
        assert_eq!(seq.to_elements(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn wrong_size_layout_is_rejected() {
        let bad = f32::layout();
        let err = SegmentBuf::<f64>::with_layout(8, bad).unwrap_err();
        assert_eq!(
            err,
            BufferError::LayoutMismatch {
                expected: 8,
                actual: 4
            }
        );
    }

    #[test]
    fn ragged_backing_is_rejected() {
        let err = SegmentBuf::<f64>::wrap_bytes(vec![0u8; 20], f64::layout()).unwrap_err();
        assert_eq!(
            err,
            BufferError::RaggedLength {
                bytes: 20,
                element_size: 8
            }
        );
    }

    #[test]
    fn misaligned_backing_is_rejected() {
        let bytes = vec![0u8; 32];
        let address = bytes.as_ptr() as usize;
        // Twice the address's own alignment (its lowest set bit) is a
        // power of two the address cannot be a multiple of.
        let align = (address & address.wrapping_neg()) << 1;
        let layout = ElementLayout::new(8, align, ByteOrder::native());
        let err = SegmentBuf::<f64>::wrap_bytes(bytes, layout).unwrap_err();
        assert_eq!(
            err,
            BufferError::Misaligned {
                required: align,
                address
            }
        );
    }

    #[test]
    fn wrapped_bytes_decode_in_place() {
        let mut bytes = vec![0u8; 32];
        3.0f64.write_to(&mut bytes[8..], ByteOrder::native());
        let layout = f64::layout().with_order(ByteOrder::native());
        let seg = SegmentBuf::<f64>::wrap_bytes(bytes, layout).unwrap();
        assert_eq!(seg.get(1), 3.0);
        assert_eq!(seg.len(), 4);
    }

    #[test]
    fn lane_round_trip() {
        let src = SegmentBuf::<f64>::sequential(8);
        let mut dst = SegmentBuf::<f64>::zeroed(8);
        dst.store(4, src.load(4));
        assert_eq!(dst.to_elements()[4..], [4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn unchecked_path_agrees_with_checked() {
        let seg = SegmentBuf::<f64>::sequential(16);
        for i in 0..16 {
            // SAFETY: i < 16 == len.
            assert_eq!(unsafe { seg.get_unchecked(i) }, seg.get(i));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_get_panics() {
        let seg = SegmentBuf::<f64>::zeroed(4);
        let _ = seg.get(4);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_lane_load_panics() {
        let seg = SegmentBuf::<f64>::zeroed(6);
        let _ = seg.load(3);
    }

    #[test]
    fn f32_variant_is_supported() {
        let seg = SegmentBuf::<f32>::sequential(8);
        assert_eq!(seg.get(7), 7.0f32);
        assert_eq!(seg.load(0).reduce_add(), 28.0f32);
    }
}
