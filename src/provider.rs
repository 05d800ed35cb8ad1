//! The backing memory provider boundary.
//!
//! Acquiring and releasing the pool's backing storage is explicitly out of
//! scope for the allocator itself (see the crate documentation); this
//! module only defines the seam a host environment plugs into, mirroring
//! how a constrained-environment allocator typically separates "where the
//! bytes come from" from "how the bytes are carved up".
use core::ptr::NonNull;

/// Supplies and reclaims the single contiguous region a [`crate::Tlsf`]
/// pool is built on.
///
/// # Safety
///
/// Implementations must return a region that is valid for reads and
/// writes for its entire returned length until it is passed back to
/// `release`, and must not alias any other live allocation.
pub unsafe trait PoolSource {
    /// Request at least `len` bytes of backing memory.
    fn acquire(&mut self, len: usize) -> Option<NonNull<u8>>;

    /// Give back a region previously returned by `acquire` with the same
    /// `len`.
    ///
    /// # Safety
    ///
    /// `region` must be a value previously returned by `acquire(len)` on
    /// this same source, not yet released.
    unsafe fn release(&mut self, region: NonNull<u8>, len: usize);
}

/// The default [`PoolSource`] for hosted environments: backs the pool with
/// a single `std::alloc` allocation.
#[cfg(any(test, feature = "std"))]
#[derive(Debug, Default)]
pub struct StdSource {
    _private: (),
}

#[cfg(any(test, feature = "std"))]
impl StdSource {
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn layout(len: usize) -> std::alloc::Layout {
        // The pool header's natural alignment never exceeds `usize`'s.
        std::alloc::Layout::from_size_align(len, core::mem::align_of::<usize>())
            .expect("pool length overflows an isize")
    }
}

#[cfg(any(test, feature = "std"))]
unsafe impl PoolSource for StdSource {
    fn acquire(&mut self, len: usize) -> Option<NonNull<u8>> {
        debug_assert!(len > 0, "allocating a zero-sized pool is undefined behavior");
        // Safety: `len` is nonzero, checked above.
        let ptr = unsafe { std::alloc::alloc(Self::layout(len)) };
        NonNull::new(ptr)
    }

    unsafe fn release(&mut self, region: NonNull<u8>, len: usize) {
        std::alloc::dealloc(region.as_ptr(), Self::layout(len));
    }
}
