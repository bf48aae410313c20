//! Benchmark state profiles and kernel catalogues for the veclab suite.
//!
//! Provides pre-built buffer states for the benches and for examples:
//!
//! - [`add_profile`] / [`add_profile32`]: one sequential input and one
//!   zeroed output per representation, so any `(output, input)` pairing
//!   can be measured.
//! - [`sum_profile`] / [`sum_profile32`]: sequential inputs per
//!   representation for the reduction kernels.
//! - [`sum_kernel_catalogue`]: every reduction kernel variant under a
//!   stable name, in deterministic registration order.
//!
//! The off-heap buffers in the profiles use
//! [`CleanupPolicy::LeakForProcess`]: benchmark state lives for the whole
//! run, so freeing is deferred to process exit. Everything here is
//! configuration;
//! warmup, iteration counts, and reporting belong to criterion.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use indexmap::IndexMap;
use veclab_kernels::{
    sum_lanes_accumulate, sum_lanes_reduce_each, sum_scalar, sum_unrolled, unchecked, KernelError,
};
use veclab_repr::{expected_sum, ArrayBuf, ByteBuf, CleanupPolicy, OffHeapBuf, SegmentBuf};

/// Buffer length used by every benchmark scenario.
pub const SIZE: usize = 1024;

/// Elementwise-add state: a sequential input and a zeroed output for each
/// representation, all covering [`SIZE`] elements of identical logical
/// content.
pub struct AddProfile {
    /// Managed-array input, `0.0, 1.0, …, 1023.0`.
    pub input_array: ArrayBuf<f64>,
    /// Managed-array output, all zeros.
    pub output_array: ArrayBuf<f64>,
    /// Off-heap input.
    pub input_offheap: OffHeapBuf<f64>,
    /// Off-heap output.
    pub output_offheap: OffHeapBuf<f64>,
    /// Described-segment input.
    pub input_segment: SegmentBuf<f64>,
    /// Described-segment output.
    pub output_segment: SegmentBuf<f64>,
    /// Byte-buffer input.
    pub input_bytes: ByteBuf<f64>,
    /// Byte-buffer output.
    pub output_bytes: ByteBuf<f64>,
    /// Expected sum of any input buffer, the sanity oracle.
    pub checksum: f64,
}

/// Build the elementwise-add state for `len` elements.
pub fn add_profile(len: usize) -> AddProfile {
    AddProfile {
        input_array: ArrayBuf::sequential(len),
        output_array: ArrayBuf::zeroed(len),
        input_offheap: OffHeapBuf::sequential(len, CleanupPolicy::LeakForProcess),
        output_offheap: OffHeapBuf::zeroed(len, CleanupPolicy::LeakForProcess),
        input_segment: SegmentBuf::sequential(len),
        output_segment: SegmentBuf::zeroed(len),
        input_bytes: ByteBuf::sequential(len),
        output_bytes: ByteBuf::zeroed(len),
        checksum: expected_sum::<f64>(len),
    }
}

/// Reduction state: a sequential input per representation.
pub struct SumProfile {
    /// Managed-array input.
    pub input_array: ArrayBuf<f64>,
    /// Off-heap input.
    pub input_offheap: OffHeapBuf<f64>,
    /// Described-segment input.
    pub input_segment: SegmentBuf<f64>,
    /// Byte-buffer input.
    pub input_bytes: ByteBuf<f64>,
    /// Expected sum of any input buffer.
    pub checksum: f64,
}

/// Build the reduction state for `len` elements.
pub fn sum_profile(len: usize) -> SumProfile {
    SumProfile {
        input_array: ArrayBuf::sequential(len),
        input_offheap: OffHeapBuf::sequential(len, CleanupPolicy::LeakForProcess),
        input_segment: SegmentBuf::sequential(len),
        input_bytes: ByteBuf::sequential(len),
        checksum: expected_sum::<f64>(len),
    }
}

/// Elementwise-add state for the 32-bit element variant: the managed
/// array pair, the off-heap pair for the raw shapes, and the described
/// segment pair.
pub struct AddProfile32 {
    /// Managed-array input, `0.0, 1.0, …, len-1.0`.
    pub input_array: ArrayBuf<f32>,
    /// Managed-array output, all zeros.
    pub output_array: ArrayBuf<f32>,
    /// Off-heap input.
    pub input_offheap: OffHeapBuf<f32>,
    /// Off-heap output.
    pub output_offheap: OffHeapBuf<f32>,
    /// Described-segment input.
    pub input_segment: SegmentBuf<f32>,
    /// Described-segment output.
    pub output_segment: SegmentBuf<f32>,
    /// Expected sum of any input buffer.
    pub checksum: f32,
}

/// Build the 32-bit elementwise-add state for `len` elements.
pub fn add_profile32(len: usize) -> AddProfile32 {
    AddProfile32 {
        input_array: ArrayBuf::sequential(len),
        output_array: ArrayBuf::zeroed(len),
        input_offheap: OffHeapBuf::sequential(len, CleanupPolicy::LeakForProcess),
        output_offheap: OffHeapBuf::zeroed(len, CleanupPolicy::LeakForProcess),
        input_segment: SegmentBuf::sequential(len),
        output_segment: SegmentBuf::zeroed(len),
        checksum: expected_sum::<f32>(len),
    }
}

/// Reduction state for the 32-bit element variant, covering the managed
/// array and the described segment.
pub struct SumProfile32 {
    /// Managed-array input.
    pub input_array: ArrayBuf<f32>,
    /// Described-segment input.
    pub input_segment: SegmentBuf<f32>,
    /// Expected sum of either input buffer.
    pub checksum: f32,
}

/// Build the 32-bit reduction state for `len` elements.
pub fn sum_profile32(len: usize) -> SumProfile32 {
    SumProfile32 {
        input_array: ArrayBuf::sequential(len),
        input_segment: SegmentBuf::sequential(len),
        checksum: expected_sum::<f32>(len),
    }
}

/// A reduction kernel over the prepared state.
pub type SumKernel = fn(&SumProfile) -> Result<f64, KernelError>;

/// Every reduction kernel variant under a stable benchmark name.
///
/// Iteration order is registration order, so the bench output is stable
/// across runs.
pub fn sum_kernel_catalogue() -> IndexMap<&'static str, SumKernel> {
    let mut kernels: IndexMap<&'static str, SumKernel> = IndexMap::new();
    kernels.insert("sum_scalar_array", |p| Ok(sum_scalar(&p.input_array)));
    kernels.insert("sum_unrolled_array", |p| sum_unrolled(&p.input_array));
    kernels.insert("sum_lanes_accumulate_array", |p| {
        sum_lanes_accumulate(&p.input_array)
    });
    kernels.insert("sum_lanes_reduce_each_array", |p| {
        sum_lanes_reduce_each(&p.input_array)
    });
    kernels.insert("sum_scalar_offheap_raw", |p| {
        Ok(unchecked::sum_scalar(&p.input_offheap))
    });
    kernels.insert("sum_unrolled_offheap_raw", |p| {
        unchecked::sum_unrolled(&p.input_offheap)
    });
    kernels.insert("sum_scalar_segment", |p| Ok(sum_scalar(&p.input_segment)));
    kernels.insert("sum_unrolled_segment", |p| sum_unrolled(&p.input_segment));
    kernels.insert("sum_lanes_accumulate_segment", |p| {
        sum_lanes_accumulate(&p.input_segment)
    });
    kernels.insert("sum_lanes_reduce_each_segment", |p| {
        sum_lanes_reduce_each(&p.input_segment)
    });
    kernels.insert("sum_scalar_bytebuf", |p| Ok(sum_scalar(&p.input_bytes)));
    kernels.insert("sum_lanes_accumulate_bytebuf", |p| {
        sum_lanes_accumulate(&p.input_bytes)
    });
    kernels
}
