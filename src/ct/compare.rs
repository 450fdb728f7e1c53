// Constant-time masked comparison.
//
// One pass checks "equal here" and "different there" constraints together.
// Every position is visited and both masks are read at every position.

use super::probe;
use super::propagate::propagate_ones;

/// Compare `a` with `b` under per-byte constraints.
///
/// At each position `i`, if `eq_mask[i]` is `0xFF` the bytes must be equal,
/// and if `neq_mask[i]` is `0xFF` they must differ. A zero mask byte leaves
/// the position unconstrained. Returns `0` when every constraint holds and
/// a non-zero byte otherwise.
///
/// # Panics
///
/// Panics if the four slices do not have the same length.
pub fn compare(a: &[u8], b: &[u8], eq_mask: &[u8], neq_mask: &[u8]) -> u8 {
    let len = a.len();
    assert_eq!(b.len(), len, "compare: length mismatch");
    assert_eq!(eq_mask.len(), len, "compare: length mismatch");
    assert_eq!(neq_mask.len(), len, "compare: length mismatch");

    let mut result = 0u8;
    for (((&x, &y), &eq), &neq) in a.iter().zip(b).zip(eq_mask).zip(neq_mask) {
        probe::touch();
        let differ = propagate_ones(x ^ y);
        result |= differ & eq;
        result |= !differ & neq;
    }
    result
}
