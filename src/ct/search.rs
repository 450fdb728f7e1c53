// Constant-time search for the first occurrence of a byte.
//
// The haystack is copied into a scratch buffer with one extra copy of the
// needle appended, so the scan always ends on a match. Every position of
// the extended buffer is visited. `found` latches once the first match is
// seen, which masks out all later matches.

use zeroize::Zeroizing;

use super::probe;
use super::propagate::propagate_ones_word;

/// Return the index of the first byte equal to `needle` in `haystack`, or
/// `haystack.len()` if there is none.
pub fn search(haystack: &[u8], needle: u8) -> usize {
    let mut extended = Zeroizing::new(Vec::with_capacity(haystack.len() + 1));
    extended.extend_from_slice(haystack);
    extended.push(needle);

    let mut result = 0usize;
    let mut found = 0usize;
    for (i, &byte) in extended.iter().enumerate() {
        probe::touch();
        let hit = !found & !propagate_ones_word(byte ^ needle);
        result |= i & hit;
        found |= hit;
    }
    result
}
