//! Buffer representations for the veclab benchmarks.
//!
//! Four ways to hold the same fixed-length sequence of floats, each
//! implementing [`veclab_core::BufferAccess`]:
//!
//! - [`ArrayBuf`] — a managed `Vec`, bounds-checked by the language.
//! - [`OffHeapBuf`] — a manually allocated block addressed by pointer
//!   arithmetic, with a [`CleanupPolicy`] choosing between deallocation on
//!   drop and an intentional process-lifetime leak.
//! - [`SegmentBuf`] — a bounds-described view over managed or off-heap
//!   bytes, parameterized by an [`veclab_core::ElementLayout`].
//! - [`ByteBuf`] — flat bytes with offset-addressed typed access in a
//!   configurable byte order.
//!
//! The allocator contract: `sequential(n)` fills element `i` with `i` as a
//! float for every representation, and `zeroed(n)` fills with zeros, so
//! cross-representation kernels always see identical logical content.
//!
//! This is the only crate whose modules contain `unsafe`: each
//! representation implements the raw unchecked access path, and the
//! off-heap block owns its allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod bytebuf;
pub mod config;
pub mod error;
pub mod offheap;
pub mod segment;
pub mod setup;

pub use array::ArrayBuf;
pub use bytebuf::ByteBuf;
pub use config::CleanupPolicy;
pub use error::BufferError;
pub use offheap::OffHeapBuf;
pub use segment::SegmentBuf;
pub use setup::{expected_sum, ReprKind};
