/// Count how many bytes of `b[b_off..b_off + len]` match `a[a_off..]`.
///
/// The walk stops at the first differing byte or at the end of either
/// slice, whichever comes first, so out-of-range offsets and short inputs
/// yield a short count instead of an out-of-bounds read.
#[must_use]
pub fn matching_len(a: &[u8], a_off: usize, b: &[u8], b_off: usize, len: usize) -> usize {
    let a_tail = a.get(a_off..).unwrap_or(&[]);
    let b_tail = b.get(b_off..).unwrap_or(&[]);
    a_tail
        .iter()
        .zip(b_tail.iter())
        .take(len)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Compare `len` bytes of `a` starting at `a_off` against `b` starting at
/// `b_off`.
///
/// Returns `true` only when all `len` bytes exist in both slices and are
/// equal; a truncated slice compares unequal rather than panicking.
#[must_use]
pub fn bytes_eq_at(a: &[u8], a_off: usize, b: &[u8], b_off: usize, len: usize) -> bool {
    matching_len(a, a_off, b, b_off, len) == len
}
