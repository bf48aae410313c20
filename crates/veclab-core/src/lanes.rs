//! SIMD lane groups: fixed-width bundles of elements.
//!
//! Both implementations are 256 bits wide (`f64x4`, `f32x8`) so a lane
//! group always moves 32 bytes regardless of element type. Loads and
//! stores go through arrays, which works at any alignment; byte-level
//! transfers decode lane by lane through the element codec so a group can
//! be lifted out of a byte-addressed buffer in either byte order.

use core::ops::Add;

use crate::element::Element;
use crate::layout::ByteOrder;

/// A fixed-width group of scalar lanes with one SIMD add per group.
pub trait LaneGroup: Copy + Add<Output = Self> {
    /// The scalar element in each lane.
    type Elem: Copy;

    /// Number of lanes in the group.
    const LANES: usize;

    /// A group with every lane zero.
    fn zero() -> Self;

    /// A group with every lane set to `value`.
    fn splat(value: Self::Elem) -> Self;

    /// Load [`LaneGroup::LANES`] elements from the front of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() < LANES`.
    fn load(src: &[Self::Elem]) -> Self;

    /// Store [`LaneGroup::LANES`] elements to the front of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst.len() < LANES`.
    fn store(self, dst: &mut [Self::Elem]);

    /// Decode [`LaneGroup::LANES`] elements from raw bytes in the given
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `src` is shorter than the group's encoded size.
    fn load_bytes(src: &[u8], order: ByteOrder) -> Self;

    /// Encode [`LaneGroup::LANES`] elements into raw bytes in the given
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than the group's encoded size.
    fn store_bytes(self, dst: &mut [u8], order: ByteOrder);

    /// Horizontal reduction: the sum of all lanes.
    fn reduce_add(self) -> Self::Elem;
}

impl LaneGroup for wide::f64x4 {
    type Elem = f64;

    const LANES: usize = 4;

    #[inline]
    fn zero() -> Self {
        wide::f64x4::ZERO
    }

    #[inline]
    fn splat(value: f64) -> Self {
        wide::f64x4::splat(value)
    }

    #[inline]
    fn load(src: &[f64]) -> Self {
        let mut lanes = [0.0f64; 4];
        lanes.copy_from_slice(&src[..4]);
        Self::from(lanes)
    }

    #[inline]
    fn store(self, dst: &mut [f64]) {
        dst[..4].copy_from_slice(&self.to_array());
    }

    #[inline]
    fn load_bytes(src: &[u8], order: ByteOrder) -> Self {
        let mut lanes = [0.0f64; 4];
        for (lane, chunk) in lanes.iter_mut().zip(src[..32].chunks_exact(8)) {
            *lane = f64::read_from(chunk, order);
        }
        Self::from(lanes)
    }

    #[inline]
    fn store_bytes(self, dst: &mut [u8], order: ByteOrder) {
        for (lane, chunk) in self.to_array().iter().zip(dst[..32].chunks_exact_mut(8)) {
            lane.write_to(chunk, order);
        }
    }

    #[inline]
    fn reduce_add(self) -> f64 {
        wide::f64x4::reduce_add(self)
    }
}

impl LaneGroup for wide::f32x8 {
    type Elem = f32;

    const LANES: usize = 8;

    #[inline]
    fn zero() -> Self {
        wide::f32x8::ZERO
    }

    #[inline]
    fn splat(value: f32) -> Self {
        wide::f32x8::splat(value)
    }

    #[inline]
    fn load(src: &[f32]) -> Self {
        let mut lanes = [0.0f32; 8];
        lanes.copy_from_slice(&src[..8]);
        Self::from(lanes)
    }

    #[inline]
    fn store(self, dst: &mut [f32]) {
        dst[..8].copy_from_slice(&self.to_array());
    }

    #[inline]
    fn load_bytes(src: &[u8], order: ByteOrder) -> Self {
        let mut lanes = [0.0f32; 8];
        for (lane, chunk) in lanes.iter_mut().zip(src[..32].chunks_exact(4)) {
            *lane = f32::read_from(chunk, order);
        }
        Self::from(lanes)
    }

    #[inline]
    fn store_bytes(self, dst: &mut [u8], order: ByteOrder) {
        for (lane, chunk) in self.to_array().iter().zip(dst[..32].chunks_exact_mut(4)) {
            lane.write_to(chunk, order);
        }
    }

    #[inline]
    fn reduce_add(self) -> f32 {
        wide::f32x8::reduce_add(self)
    }
}
