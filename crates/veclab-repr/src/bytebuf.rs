//! Byte-buffer representation: flat bytes with offset-addressed typed
//! access.
//!
//! A [`ByteBuf`] is the plainest byte-oriented representation: a managed
//! byte vector plus a byte order. Indexed access computes
//! `index * E::BYTES`; the absolute accessors [`ByteBuf::get_at`] and
//! [`ByteBuf::put_at`] take raw byte offsets for callers that already
//! think in bytes.

#![allow(unsafe_code)]

use std::marker::PhantomData;

use veclab_core::{BufferAccess, ByteOrder, Element, LaneGroup};

/// A fixed-length buffer of elements encoded into a flat byte vector.
#[derive(Clone, Debug)]
pub struct ByteBuf<E: Element> {
    bytes: Vec<u8>,
    order: ByteOrder,
    _marker: PhantomData<E>,
}

impl<E: Element> ByteBuf<E> {
    /// A native-order buffer of `len` zero elements.
    pub fn zeroed(len: usize) -> Self {
        Self::zeroed_with_order(len, ByteOrder::native())
    }

    /// A native-order buffer holding the setup sequence
    /// `0.0, 1.0, …, len-1.0`.
    pub fn sequential(len: usize) -> Self {
        Self::sequential_with_order(len, ByteOrder::native())
    }

    /// A zeroed buffer in an explicit byte order.
    pub fn zeroed_with_order(len: usize, order: ByteOrder) -> Self {
        Self {
            bytes: vec![0u8; len * E::BYTES],
            order,
            _marker: PhantomData,
        }
    }

    /// A sequential buffer in an explicit byte order.
    pub fn sequential_with_order(len: usize, order: ByteOrder) -> Self {
        let mut buf = Self::zeroed_with_order(len, order);
        for i in 0..len {
            buf.set(i, E::from_index(i));
        }
        buf
    }

    /// The byte order this buffer encodes in.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Read the element at an absolute byte offset.
    ///
    /// # Panics
    ///
    /// Panics if `byte_offset + E::BYTES` exceeds the capacity.
    #[inline]
    pub fn get_at(&self, byte_offset: usize) -> E {
        E::read_from(&self.bytes[byte_offset..], self.order)
    }

    /// Write the element at an absolute byte offset.
    ///
    /// # Panics
    ///
    /// Panics if `byte_offset + E::BYTES` exceeds the capacity.
    #[inline]
    pub fn put_at(&mut self, byte_offset: usize, value: E) {
        value.write_to(&mut self.bytes[byte_offset..], self.order);
    }

    /// Decode the whole buffer into a vector, for verification.
    pub fn to_elements(&self) -> Vec<E> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }

    #[inline]
    fn element_bound(&self, index: usize) {
        assert!(
            index < self.len(),
            "index {index} out of range for byte buffer of length {}",
            self.len()
        );
    }

    #[inline]
    fn lane_bound(&self, index: usize) {
        let lanes = <E::Lanes as LaneGroup>::LANES;
        let in_range = index.checked_add(lanes).is_some_and(|end| end <= self.len());
        assert!(
            in_range,
            "lane group at {index} out of range for byte buffer of length {}",
            self.len()
        );
    }
}

impl<E: Element> BufferAccess<E> for ByteBuf<E> {
    #[inline]
    fn len(&self) -> usize {
        self.bytes.len() / E::BYTES
    }

    #[inline]
    fn get(&self, index: usize) -> E {
        self.element_bound(index);
        E::read_from(&self.bytes[index * E::BYTES..], self.order)
    }

    #[inline]
    fn set(&mut self, index: usize, value: E) {
        self.element_bound(index);
        value.write_to(&mut self.bytes[index * E::BYTES..], self.order);
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> E {
        let off = index * E::BYTES;
        // SAFETY: caller promises index < len, so the element's bytes are
        // in range.
        let bytes = unsafe { self.bytes.get_unchecked(off..off + E::BYTES) };
        E::read_from(bytes, self.order)
    }

    #[inline]
    unsafe fn set_unchecked(&mut self, index: usize, value: E) {
        let off = index * E::BYTES;
        let order = self.order;
        // SAFETY: caller promises index < len, so the element's bytes are
        // in range.
        let bytes = unsafe { self.bytes.get_unchecked_mut(off..off + E::BYTES) };
        value.write_to(bytes, order);
    }

    #[inline]
    fn load(&self, index: usize) -> E::Lanes {
        self.lane_bound(index);
        E::Lanes::load_bytes(&self.bytes[index * E::BYTES..], self.order)
    }

    #[inline]
    fn store(&mut self, index: usize, lanes: E::Lanes) {
        self.lane_bound(index);
        let order = self.order;
        lanes.store_bytes(&mut self.bytes[index * E::BYTES..], order);
    }
}
