//! The process-wide singleton pool: [`init`], [`malloc`], [`free`],
//! [`teardown`].
//!
//! This is the closest analogue to a classic C TLSF API — a single global
//! pool backed by the default, `std`-based [`StdSource`]. It carries none
//! of the thread-safety, reallocation, or multi-pool machinery that this
//! allocator explicitly does not implement; calling these functions from
//! more than one thread, or reentrantly from within `malloc`/`free`
//! themselves, is undefined behavior by design.
use core::{cell::UnsafeCell, ptr::NonNull};

use crate::{
    error::PoolError,
    pool::Pool,
    provider::{PoolSource, StdSource},
};

struct State {
    pool: Pool,
    source: StdSource,
    region: NonNull<u8>,
    region_len: usize,
}

struct Cell(UnsafeCell<Option<State>>);

// Safety: this crate does not support concurrent use of the singleton
// pool at all (see the module documentation); `Sync` here only lets the
// single `static` exist, not promising thread-safe access.
unsafe impl Sync for Cell {}

static STATE: Cell = Cell(UnsafeCell::new(None));

#[cfg(debug_assertions)]
static REENTRANCY_GUARD: core::sync::atomic::AtomicBool = core::sync::atomic::AtomicBool::new(false);

struct ReentrancyCheck;

impl ReentrancyCheck {
    #[cfg(debug_assertions)]
    fn enter() -> Self {
        use core::sync::atomic::Ordering;
        if REENTRANCY_GUARD.swap(true, Ordering::SeqCst) {
            panic!("reentrant call into the tlsf-pool singleton API");
        }
        ReentrancyCheck
    }

    #[cfg(not(debug_assertions))]
    fn enter() -> Self {
        ReentrancyCheck
    }
}

impl Drop for ReentrancyCheck {
    #[cfg(debug_assertions)]
    fn drop(&mut self) {
        REENTRANCY_GUARD.store(false, core::sync::atomic::Ordering::SeqCst);
    }

    #[cfg(not(debug_assertions))]
    fn drop(&mut self) {}
}

/// Bring up the singleton pool with `pool_size` bytes of backing memory
/// acquired from [`StdSource`].
///
/// `pool_size` is rounded up to this allocator's alignment; the result
/// must land within `MIN_POOL_SIZE..=MAX_POOL_SIZE`. Fails with
/// [`PoolError::AlreadyInitialized`] if a pool already exists — call
/// [`teardown`] first.
pub fn init(pool_size: usize) -> Result<(), PoolError> {
    let _guard = ReentrancyCheck::enter();
    let len = Pool::round_len(pool_size)?;

    // Safety: `STATE` is only ever accessed behind the reentrancy guard in
    // this single-threaded design.
    let state = unsafe { &mut *STATE.0.get() };
    if state.is_some() {
        return Err(PoolError::AlreadyInitialized);
    }

    let mut source = StdSource::new();
    let region = source.acquire(len).ok_or(PoolError::BackingAllocationFailed)?;

    // Safety: `region` is a freshly acquired, `len`-byte, otherwise-unused
    // allocation.
    let pool = unsafe { Pool::init(region, len) };

    *state = Some(State {
        pool,
        source,
        region,
        region_len: len,
    });
    Ok(())
}

/// Allocate `size` bytes from the singleton pool.
///
/// Returns `None` if the pool isn't initialized, has no free block large
/// enough, or `size` exceeds what a single pool can ever address.
///
/// # Time Complexity
///
/// Constant.
pub fn malloc(size: usize) -> Option<NonNull<u8>> {
    let _guard = ReentrancyCheck::enter();
    let state = unsafe { &mut *STATE.0.get() };
    state.as_mut()?.pool.allocate(size)
}

/// Return a block previously obtained from [`malloc`] to the singleton
/// pool.
///
/// A `ptr` of `None` (i.e. freeing a null pointer) is a no-op. Freeing a
/// block that is already free — a double free — is detected and ignored
/// rather than corrupting the pool.
///
/// # Safety
///
/// `ptr`, if present, must have been returned by [`malloc`] on the
/// currently initialized pool and not already freed.
pub unsafe fn free(ptr: Option<NonNull<u8>>) {
    let _guard = ReentrancyCheck::enter();
    let ptr = match ptr {
        Some(ptr) => ptr,
        None => return,
    };
    let state = &mut *STATE.0.get();
    if let Some(state) = state {
        state.pool.deallocate(ptr);
    }
}

/// Tear down the singleton pool, releasing its backing memory back to
/// [`StdSource`].
///
/// A no-op if no pool is currently initialized. Any outstanding
/// allocations become dangling; it's the caller's responsibility to have
/// freed everything first.
pub fn teardown() {
    let _guard = ReentrancyCheck::enter();
    let state = unsafe { &mut *STATE.0.get() };
    if let Some(mut s) = state.take() {
        // Safety: `s.region`/`s.region_len` are exactly what `s.source`
        // handed back from `acquire` in `init`.
        unsafe { s.source.release(s.region, s.region_len) };
    }
}
