//! Managed-array representation: a plain `Vec` with language-level bounds
//! checks.
//!
//! This is the baseline every other representation is compared against.
//! The checked path is native slice indexing; the unchecked path is
//! `get_unchecked` on the backing slice.

#![allow(unsafe_code)]

use veclab_core::{BufferAccess, Element, LaneGroup};

/// A fixed-length buffer backed by a `Vec<E>`.
#[derive(Clone, Debug)]
pub struct ArrayBuf<E: Element> {
    data: Vec<E>,
}

impl<E: Element> ArrayBuf<E> {
    /// A buffer of `len` zero elements.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![E::default(); len],
        }
    }

    /// A buffer holding the setup sequence `0.0, 1.0, …, len-1.0`.
    pub fn sequential(len: usize) -> Self {
        Self {
            data: (0..len).map(E::from_index).collect(),
        }
    }

    /// Wrap existing values.
    pub fn from_vec(data: Vec<E>) -> Self {
        Self { data }
    }

    /// The backing elements.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }
}

impl<E: Element> BufferAccess<E> for ArrayBuf<E> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn get(&self, index: usize) -> E {
        self.data[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: E) {
        self.data[index] = value;
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> E {
        // SAFETY: caller promises index < len.
        unsafe { *self.data.get_unchecked(index) }
    }

    #[inline]
    unsafe fn set_unchecked(&mut self, index: usize, value: E) {
        // SAFETY: caller promises index < len.
        unsafe { *self.data.get_unchecked_mut(index) = value };
    }

    #[inline]
    fn load(&self, index: usize) -> E::Lanes {
        E::Lanes::load(&self.data[index..])
    }

    #[inline]
    fn store(&mut self, index: usize, lanes: E::Lanes) {
        lanes.store(&mut self.data[index..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_fill_matches_indices() {
        let buf = ArrayBuf::<f64>::sequential(16);
        for i in 0..16 {
            assert_eq!(buf.get(i), i as f64);
        }
    }

    #[test]
    fn zeroed_is_all_zero() {
        let buf = ArrayBuf::<f64>::zeroed(8);
        assert!(buf.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn set_then_get() {
        let mut buf = ArrayBuf::<f64>::zeroed(4);
        buf.set(2, 5.5);
        assert_eq!(buf.get(2), 5.5);
    }

    #[test]
    fn lane_round_trip() {
        let src = ArrayBuf::<f64>::sequential(8);
        let mut dst = ArrayBuf::<f64>::zeroed(8);
        dst.store(4, src.load(4));
        assert_eq!(dst.as_slice()[4..], [4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn unchecked_path_agrees_with_checked() {
        let buf = ArrayBuf::<f64>::sequential(32);
        for i in 0..32 {
            // SAFETY: i < 32 == len.
            assert_eq!(unsafe { buf.get_unchecked(i) }, buf.get(i));
        }
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let buf = ArrayBuf::<f64>::zeroed(4);
        let _ = buf.get(4);
    }

    #[test]
    #[should_panic]
    fn out_of_range_lane_load_panics() {
        let buf = ArrayBuf::<f64>::zeroed(6);
        let _ = buf.load(4);
    }

    #[test]
    fn f32_variant_is_supported() {
        let buf = ArrayBuf::<f32>::sequential(8);
        assert_eq!(buf.get(7), 7.0f32);
        assert_eq!(buf.load(0).reduce_add(), 28.0f32);
    }
}
