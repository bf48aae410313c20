//! Configuration-time representation selection and the setup oracle.
//!
//! Rather than one hand-written state field per representation, a
//! [`ReprKind`] picks the representation once at
//! configuration time and everything downstream goes through
//! `dyn BufferAccess`.

use veclab_core::{BufferAccess, Element};

use crate::array::ArrayBuf;
use crate::bytebuf::ByteBuf;
use crate::config::CleanupPolicy;
use crate::offheap::OffHeapBuf;
use crate::segment::SegmentBuf;

/// The four buffer representations under measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReprKind {
    /// Managed array, bounds-checked by the language.
    Array,
    /// Raw off-heap block addressed by pointer arithmetic.
    OffHeap,
    /// Bounds-described segment with an element layout.
    Segment,
    /// Flat byte vector with typed offset access.
    ByteBuffer,
}

impl ReprKind {
    /// All representations, in a stable order.
    pub const ALL: [ReprKind; 4] = [
        ReprKind::Array,
        ReprKind::OffHeap,
        ReprKind::Segment,
        ReprKind::ByteBuffer,
    ];

    /// A short name for benchmark and test labels.
    pub fn name(self) -> &'static str {
        match self {
            ReprKind::Array => "array",
            ReprKind::OffHeap => "offheap",
            ReprKind::Segment => "segment",
            ReprKind::ByteBuffer => "bytebuf",
        }
    }

    /// A buffer of this kind holding the setup sequence
    /// `0.0, 1.0, …, len-1.0`.
    pub fn sequential(self, len: usize) -> Box<dyn BufferAccess<f64>> {
        match self {
            ReprKind::Array => Box::new(ArrayBuf::<f64>::sequential(len)),
            ReprKind::OffHeap => {
                Box::new(OffHeapBuf::<f64>::sequential(len, CleanupPolicy::default()))
            }
            ReprKind::Segment => Box::new(SegmentBuf::<f64>::sequential(len)),
            ReprKind::ByteBuffer => Box::new(ByteBuf::<f64>::sequential(len)),
        }
    }

    /// A zeroed buffer of this kind.
    pub fn zeroed(self, len: usize) -> Box<dyn BufferAccess<f64>> {
        match self {
            ReprKind::Array => Box::new(ArrayBuf::<f64>::zeroed(len)),
            ReprKind::OffHeap => {
                Box::new(OffHeapBuf::<f64>::zeroed(len, CleanupPolicy::default()))
            }
            ReprKind::Segment => Box::new(SegmentBuf::<f64>::zeroed(len)),
            ReprKind::ByteBuffer => Box::new(ByteBuf::<f64>::zeroed(len)),
        }
    }
}

/// The checksum oracle: the sum of the setup sequence for `len` elements,
/// i.e. `len * (len - 1) / 2`. Computed by actual ascending addition,
/// which is exact for the integer-valued setup range.
pub fn expected_sum<E: Element>(len: usize) -> E {
    (0..len).map(E::from_index).fold(E::default(), |acc, v| acc + v)
}
