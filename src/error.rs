//! Error types surfaced by the pool's external interface.
use core::fmt;

/// Why [`crate::init`] could not bring up a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// The requested size, once rounded up to the allocator's alignment,
    /// is smaller than the minimum a pool header plus one block requires.
    TooSmall,
    /// The requested size is larger than a single pool can address.
    TooLarge,
    /// The backing [`crate::provider::PoolSource`] could not supply memory
    /// of the requested size.
    BackingAllocationFailed,
    /// A pool is already initialized; [`crate::teardown`] it first.
    AlreadyInitialized,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::TooSmall => write!(f, "requested pool size is below the minimum"),
            PoolError::TooLarge => write!(f, "requested pool size exceeds the maximum"),
            PoolError::BackingAllocationFailed => {
                write!(f, "the backing memory provider failed to supply the pool")
            }
            PoolError::AlreadyInitialized => write!(f, "a pool is already initialized"),
        }
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for PoolError {}
