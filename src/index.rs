//! First-level / second-level bucket indexing.
use crate::limits::{FLI_OFFSET, SLI_COUNT_LOG2};

/// Position of the most significant set bit of `word`, or `-1` if `word`
/// is zero.
#[inline]
fn find_msb(word: usize) -> i32 {
    if word == 0 {
        -1
    } else {
        (usize::BITS - 1 - word.leading_zeros()) as i32
    }
}

/// Position of the least significant set bit of `word`, or `-1` if `word`
/// is zero.
#[inline]
pub(crate) fn find_lsb(word: u16) -> i32 {
    if word == 0 {
        -1
    } else {
        word.trailing_zeros() as i32
    }
}

/// Map `size` to its `(fli, sli)` bucket.
///
/// `size` must already be rounded up to at least `MIN_BLOCK_SIZE`
/// ([`crate::limits::align_size`]); the caller is expected to uphold this,
/// since the original algorithm never re-validates it on the hot path
/// either. A `size` below `MIN_BLOCK_SIZE` would make `fli` go negative.
#[inline]
pub(crate) fn find_indexes(size: usize) -> (usize, usize) {
    debug_assert!(size >= crate::limits::MIN_BLOCK_SIZE);

    let fli_raw = find_msb(size);
    let mut sli = size >> (fli_raw as u32 - SLI_COUNT_LOG2);
    sli &= !(1usize << find_msb(sli));
    let fli = fli_raw - FLI_OFFSET as i32;

    debug_assert!(fli >= 0);
    (fli as usize, sli)
}
