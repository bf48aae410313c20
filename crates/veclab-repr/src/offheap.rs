//! Off-heap representation: manual allocation and raw pointer arithmetic.
//!
//! An [`OffHeapBuf`] addresses its elements by base pointer plus offset
//! with no layout metadata of its own. The checked
//! accessors assert the bound before dereferencing; the unchecked
//! accessors are pure address arithmetic with no check at all.
//!
//! Allocation failure aborts the process via [`handle_alloc_error`] — a
//! benchmark run is meaningless without its buffers, so there is no
//! recovery path.

#![allow(unsafe_code)]

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::slice;

use veclab_core::{BufferAccess, Element, LaneGroup};

use crate::config::CleanupPolicy;

/// A fixed-length buffer in manually allocated memory.
pub struct OffHeapBuf<E: Element> {
    ptr: NonNull<E>,
    len: usize,
    policy: CleanupPolicy,
    _marker: PhantomData<E>,
}

impl<E: Element> OffHeapBuf<E> {
    /// Allocate a buffer of `len` zero elements.
    ///
    /// Aborts the process if the allocator cannot satisfy the request.
    pub fn zeroed(len: usize, policy: CleanupPolicy) -> Self {
        let ptr = if len == 0 {
            NonNull::dangling()
        } else {
            Self::alloc_block(len)
        };
        Self {
            ptr,
            len,
            policy,
            _marker: PhantomData,
        }
    }

    /// Allocate a buffer holding the setup sequence `0.0, 1.0, …, len-1.0`.
    pub fn sequential(len: usize, policy: CleanupPolicy) -> Self {
        let buf = Self::zeroed(len, policy);
        for i in 0..len {
            // SAFETY: i < len, and the block holds exactly len elements.
            unsafe { buf.ptr.as_ptr().add(i).write(E::from_index(i)) };
        }
        buf
    }

    /// The cleanup policy this buffer was created with.
    pub fn policy(&self) -> CleanupPolicy {
        self.policy
    }

    /// View the block as a slice, for verification.
    pub fn as_slice(&self) -> &[E] {
        // SAFETY: ptr covers exactly len initialized elements (dangling
        // but aligned when len == 0).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    fn alloc_block(len: usize) -> NonNull<E> {
        let layout = match Layout::array::<E>(len) {
            Ok(layout) => layout,
            Err(_) => panic!("off-heap buffer of {len} elements overflows the address space"),
        };
        // All-zero bits are 0.0 for IEEE floats, so zeroed allocation is
        // also the zero fill.
        // SAFETY: len > 0, so the layout has non-zero size.
        let raw = unsafe { alloc_zeroed(layout) };
        match NonNull::new(raw.cast::<E>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    #[inline]
    fn lane_bound(&self, index: usize) {
        let lanes = <E::Lanes as LaneGroup>::LANES;
        let in_range = index
            .checked_add(lanes)
            .is_some_and(|end| end <= self.len);
        assert!(
            in_range,
            "lane group at {index} out of range for off-heap buffer of length {}",
            self.len
        );
    }
}

impl<E: Element> Drop for OffHeapBuf<E> {
    fn drop(&mut self) {
        if self.policy == CleanupPolicy::ReleaseOnDrop && self.len > 0 {
            if let Ok(layout) = Layout::array::<E>(self.len) {
                // SAFETY: the block was allocated with this exact layout.
                unsafe { dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
    }
}

impl<E: Element> BufferAccess<E> for OffHeapBuf<E> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> E {
        assert!(
            index < self.len,
            "index {index} out of range for off-heap buffer of length {}",
            self.len
        );
        // SAFETY: index < len, just asserted.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    #[inline]
    fn set(&mut self, index: usize, value: E) {
        assert!(
            index < self.len,
            "index {index} out of range for off-heap buffer of length {}",
            self.len
        );
        // SAFETY: index < len, just asserted.
        unsafe { self.ptr.as_ptr().add(index).write(value) };
    }

    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> E {
        // SAFETY: caller promises index < len.
        unsafe { self.ptr.as_ptr().add(index).read() }
    }

    #[inline]
    unsafe fn set_unchecked(&mut self, index: usize, value: E) {
        // SAFETY: caller promises index < len.
        unsafe { self.ptr.as_ptr().add(index).write(value) };
    }

    #[inline]
    fn load(&self, index: usize) -> E::Lanes {
        self.lane_bound(index);
        // SAFETY: index..index + LANES is in range, just asserted.
        let lanes = unsafe {
            slice::from_raw_parts(
                self.ptr.as_ptr().add(index),
                <E::Lanes as LaneGroup>::LANES,
            )
        };
        E::Lanes::load(lanes)
    }

    #[inline]
    fn store(&mut self, index: usize, lanes: E::Lanes) {
        self.lane_bound(index);
        // SAFETY: index..index + LANES is in range, just asserted.
        let dst = unsafe {
            slice::from_raw_parts_mut(
                self.ptr.as_ptr().add(index),
                <E::Lanes as LaneGroup>::LANES,
            )
        };
        lanes.store(dst);
    }
}

/// A raw byte block for segment backing stores.
///
/// Shares the off-heap allocation discipline (zeroed allocation, fatal
/// failure, policy-controlled release) but is byte-addressed and carries
/// an explicit alignment.
#[derive(Debug)]
pub(crate) struct RawBlock {
    ptr: NonNull<u8>,
    bytes: usize,
    align: usize,
    policy: CleanupPolicy,
}

impl RawBlock {
    /// Allocate `bytes` zeroed bytes at the given alignment.
    pub(crate) fn zeroed(bytes: usize, align: usize, policy: CleanupPolicy) -> Self {
        let ptr = if bytes == 0 {
            NonNull::dangling()
        } else {
            let layout = match Layout::from_size_align(bytes, align) {
                Ok(layout) => layout,
                Err(_) => panic!("invalid block layout: {bytes} bytes aligned to {align}"),
            };
            // SAFETY: bytes > 0, so the layout has non-zero size.
            let raw = unsafe { alloc_zeroed(layout) };
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => handle_alloc_error(layout),
            }
        };
        Self {
            ptr,
            bytes,
            align,
            policy,
        }
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        // SAFETY: ptr covers exactly bytes initialized bytes.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.bytes) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: ptr covers exactly bytes initialized bytes, owned
        // exclusively by self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.bytes) }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        if self.policy == CleanupPolicy::ReleaseOnDrop && self.bytes > 0 {
            if let Ok(layout) = Layout::from_size_align(self.bytes, self.align) {
                // SAFETY: the block was allocated with this exact layout.
                unsafe { dealloc(self.ptr.as_ptr(), layout) };
            }
        }
    }
}
