//! Resource-lifetime configuration for off-heap allocations.

/// What happens to an off-heap block when its owner is dropped.
///
/// Benchmark state lives for the whole process, so leaking raw
/// allocations and letting the OS reclaim them at exit is acceptable there.
/// Test suites need deterministic cleanup, so releasing on drop is the
/// default and leaking is opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CleanupPolicy {
    /// Deallocate the block when the owning buffer is dropped.
    #[default]
    ReleaseOnDrop,
    /// Leave the block allocated; the OS reclaims it at process exit.
    LeakForProcess,
}
