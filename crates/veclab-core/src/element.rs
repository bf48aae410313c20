//! Scalar element types a buffer representation can hold.

use core::fmt;
use core::ops::{Add, AddAssign};

use crate::lanes::LaneGroup;
use crate::layout::{ByteOrder, ElementLayout};

/// A scalar element with a byte codec and an associated SIMD lane group.
///
/// Implemented by `f64` (the primary benchmark element) and `f32` (the
/// 32-bit variant kept for a subset of representations). The codec methods
/// let byte-addressed representations (segments, byte buffers) encode and
/// decode elements consistently with a requested byte order.
pub trait Element:
    Copy + Default + PartialEq + fmt::Debug + Add<Output = Self> + AddAssign + 'static
{
    /// Encoded size of one element in bytes.
    const BYTES: usize;

    /// The SIMD lane group that carries this element type.
    type Lanes: LaneGroup<Elem = Self>;

    /// The setup value for position `index`: `index` as a float.
    fn from_index(index: usize) -> Self;

    /// Decode one element from the first [`Element::BYTES`] bytes of
    /// `bytes` in the given order.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Element::BYTES`].
    fn read_from(bytes: &[u8], order: ByteOrder) -> Self;

    /// Encode this element into the first [`Element::BYTES`] bytes of
    /// `bytes` in the given order.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Element::BYTES`].
    fn write_to(self, bytes: &mut [u8], order: ByteOrder);

    /// The natural layout of this element type: its size, its alignment,
    /// and the target's native byte order.
    fn layout() -> ElementLayout;
}

impl Element for f64 {
    const BYTES: usize = 8;

    type Lanes = wide::f64x4;

    #[inline]
    fn from_index(index: usize) -> Self {
        index as f64
    }

    #[inline]
    fn read_from(bytes: &[u8], order: ByteOrder) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&bytes[..8]);
        match order {
            ByteOrder::Little => f64::from_le_bytes(raw),
            ByteOrder::Big => f64::from_be_bytes(raw),
        }
    }

    #[inline]
    fn write_to(self, bytes: &mut [u8], order: ByteOrder) {
        let raw = match order {
            ByteOrder::Little => self.to_le_bytes(),
            ByteOrder::Big => self.to_be_bytes(),
        };
        bytes[..8].copy_from_slice(&raw);
    }

    fn layout() -> ElementLayout {
        ElementLayout::new(8, core::mem::align_of::<f64>(), ByteOrder::native())
    }
}

impl Element for f32 {
    const BYTES: usize = 4;

    type Lanes = wide::f32x8;

    #[inline]
    fn from_index(index: usize) -> Self {
        index as f32
    }

    #[inline]
    fn read_from(bytes: &[u8], order: ByteOrder) -> Self {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[..4]);
        match order {
            ByteOrder::Little => f32::from_le_bytes(raw),
            ByteOrder::Big => f32::from_be_bytes(raw),
        }
    }

    #[inline]
    fn write_to(self, bytes: &mut [u8], order: ByteOrder) {
        let raw = match order {
            ByteOrder::Little => self.to_le_bytes(),
            ByteOrder::Big => self.to_be_bytes(),
        };
        bytes[..4].copy_from_slice(&raw);
    }

    fn layout() -> ElementLayout {
        ElementLayout::new(4, core::mem::align_of::<f32>(), ByteOrder::native())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_codec_round_trips_both_orders() {
        let mut bytes = [0u8; 8];
        for order in [ByteOrder::Little, ByteOrder::Big] {
            1023.5f64.write_to(&mut bytes, order);
            assert_eq!(f64::read_from(&bytes, order), 1023.5);
        }
    }

    #[test]
    fn f64_little_endian_bytes_match_std() {
        let mut bytes = [0u8; 8];
        42.0f64.write_to(&mut bytes, ByteOrder::Little);
        assert_eq!(bytes, 42.0f64.to_le_bytes());
    }

    #[test]
    fn f32_codec_round_trips_both_orders() {
        let mut bytes = [0u8; 4];
        for order in [ByteOrder::Little, ByteOrder::Big] {
            7.25f32.write_to(&mut bytes, order);
            assert_eq!(f32::read_from(&bytes, order), 7.25);
        }
    }

    #[test]
    fn from_index_is_exact_for_setup_range() {
        assert_eq!(f64::from_index(0), 0.0);
        assert_eq!(f64::from_index(1023), 1023.0);
        assert_eq!(f32::from_index(1023), 1023.0);
    }

    #[test]
    fn natural_layouts_are_native_order() {
        assert_eq!(f64::layout().size, 8);
        assert_eq!(f32::layout().size, 4);
        assert!(f64::layout().order.is_native());
    }

    #[test]
    #[should_panic]
    fn short_slice_read_panics() {
        let bytes = [0u8; 4];
        let _ = f64::read_from(&bytes, ByteOrder::Little);
    }

    proptest::proptest! {
        #[test]
        fn f64_codec_round_trips_any_finite(value in -1.0e12f64..1.0e12) {
            let mut bytes = [0u8; 8];
            for order in [ByteOrder::Little, ByteOrder::Big] {
                value.write_to(&mut bytes, order);
                proptest::prop_assert_eq!(f64::read_from(&bytes, order), value);
            }
        }
    }
}
