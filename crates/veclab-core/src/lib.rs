//! Element, lane-group, and buffer-access abstractions for the veclab
//! benchmarks.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! scalar element types the buffers hold ([`Element`]), the SIMD lane
//! bundles that move them in bulk ([`LaneGroup`]), the layout descriptors
//! that govern byte-level encoding ([`ElementLayout`], [`ByteOrder`]), and
//! the uniform indexed-access surface every buffer representation
//! implements ([`BufferAccess`]).
//!
//! The access trait deliberately exposes two paths: a bounds-aware path
//! that fails deterministically on a bad index, and a raw path that does
//! not check at all. The difference in cost between the two is one of the
//! quantities the benchmark suite exists to measure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod access;
pub mod element;
pub mod lanes;
pub mod layout;

pub use access::BufferAccess;
pub use element::Element;
pub use lanes::LaneGroup;
pub use layout::{ByteOrder, ElementLayout};
