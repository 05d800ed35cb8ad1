//! The reusable, pool-agnostic TLSF allocator over a single caller-owned
//! region of memory.
use core::{mem::MaybeUninit, ptr::NonNull};

use crate::{error::PoolError, pool::Pool};

/// A Two-Level Segregated Fit allocator over one contiguous memory region.
///
/// A `Tlsf` starts out empty; call [`Self::insert_free_block`] exactly
/// once with the backing memory before allocating. Only a single region is
/// ever tracked by one `Tlsf` — inserting a second region is rejected, in
/// keeping with this allocator's single-pool design.
pub struct Tlsf<'pool> {
    pool: Option<Pool>,
    _marker: core::marker::PhantomData<&'pool mut ()>,
}

impl<'pool> Tlsf<'pool> {
    /// An empty allocator with no backing memory yet.
    pub const fn new() -> Self {
        Self {
            pool: None,
            _marker: core::marker::PhantomData,
        }
    }

    /// Register `region` as this allocator's one and only pool.
    ///
    /// `region`'s length is rounded up to the allocator's alignment; the
    /// rounded length must fall within the pool size bounds
    /// ([`crate::pool::MIN_POOL_SIZE`]..=[`crate::pool::MAX_POOL_SIZE`]).
    ///
    /// The memory must outlive `self`, which the `'pool` lifetime enforces.
    pub fn insert_free_block(&mut self, region: &'pool mut [MaybeUninit<u8>]) -> Result<(), PoolError> {
        if self.pool.is_some() {
            return Err(PoolError::AlreadyInitialized);
        }
        let len = Pool::round_len(region.len())?;
        // Safety: `region` is an exclusive, `'pool`-long borrow of at least
        // `region.len() >= len` bytes (rounding only shrinks towards
        // alignment, never grows past the original length... actually it
        // rounds up, so validate before use).
        if len > region.len() {
            return Err(PoolError::TooSmall);
        }
        let ptr = NonNull::new(region.as_mut_ptr() as *mut u8).unwrap();
        self.pool = Some(unsafe { Pool::init(ptr, len) });
        Ok(())
    }

    /// Allocate `size` bytes. Returns `None` if no free block is large
    /// enough or the pool hasn't been initialized.
    ///
    /// # Time Complexity
    ///
    /// Constant.
    pub fn allocate(&mut self, size: usize) -> Option<NonNull<u8>> {
        self.pool.as_mut()?.allocate(size)
    }

    /// Return a block previously obtained from [`Self::allocate`].
    ///
    /// Returns `false` if `ptr` was already free — a double free — in
    /// which case this call has no effect.
    ///
    /// # Safety
    ///
    /// `ptr` must have been returned by a prior call to `self.allocate`
    /// and not already passed to `deallocate`.
    pub unsafe fn deallocate(&mut self, ptr: NonNull<u8>) -> bool {
        match self.pool.as_mut() {
            Some(pool) => pool.deallocate(ptr),
            None => false,
        }
    }

    /// Total size of the backing pool, or `0` if none has been inserted.
    pub fn pool_size(&self) -> usize {
        self.pool.as_ref().map_or(0, Pool::total_size)
    }
}

impl Default for Tlsf<'_> {
    fn default() -> Self {
        Self::new()
    }
}
