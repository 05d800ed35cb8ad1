//! Word-size-dependent constants and the allocation-size rounding rule.

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        pub(crate) const ALIGN_SHIFT: u32 = 3;
        pub(crate) const FLI_OFFSET: u32 = 6;
    } else {
        pub(crate) const ALIGN_SHIFT: u32 = 2;
        pub(crate) const FLI_OFFSET: u32 = 5;
    }
}

/// Number of first-level buckets.
pub(crate) const FLI_COUNT: usize = 16;
/// Number of second-level buckets per first-level bucket.
pub(crate) const SLI_COUNT: usize = 16;
pub(crate) const SLI_COUNT_LOG2: u32 = 4;

pub(crate) const ALIGN_MASK: usize = (1usize << ALIGN_SHIFT) - 1;

/// Round `len` up to this allocator's alignment, with no minimum-size
/// clamp (unlike [`align_size`]).
#[inline]
pub(crate) fn align_up(len: usize) -> Option<usize> {
    Some(len.checked_add(ALIGN_MASK)? & !ALIGN_MASK)
}

/// The smallest block the allocator will ever hand out, header included.
pub const MIN_BLOCK_SIZE: usize = 1usize << FLI_OFFSET;

/// The largest block a single first/second-level bucket pair can address.
///
/// The original C header computes this as `1 << (FLI_COUNT + FLI_OFFSET) - 1`,
/// which due to operator precedence evaluates to `1 << ((FLI_COUNT + FLI_OFFSET) - 1)`
/// rather than the intended `(1 << (FLI_COUNT + FLI_OFFSET)) - 1`. This
/// definition uses the corrected parenthesization.
pub const MAX_BLOCK_SIZE: usize = (1usize << (FLI_COUNT as u32 + FLI_OFFSET)) - 1;

/// Round `size` up to the allocator's alignment, then up again to
/// `MIN_BLOCK_SIZE` if it's still too small.
///
/// Returns `None` on overflow, which the caller should treat the same as
/// any other allocation failure.
#[inline]
pub(crate) fn align_size(size: usize) -> Option<usize> {
    Some(align_up(size)?.max(MIN_BLOCK_SIZE))
}
