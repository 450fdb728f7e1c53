// Constant-time conditional selection.
//
// Both inputs are always read in full. The choice byte is turned into a
// mask once; the mask (and its complement) is then rotated after every
// byte so each iteration derives its mask from the previous one rather
// than from `choice`. A rotated all-zero or all-one byte is unchanged, so
// the selection is the same for every position.

use super::probe;
use super::propagate::propagate_ones;

const WORD_LEN: usize = size_of::<usize>();

/// Copy `a` into `out` if `choice == 0`, otherwise copy `b`.
///
/// # Panics
///
/// Panics if the three slices do not have the same length.
pub fn select(a: &[u8], b: &[u8], out: &mut [u8], choice: u8) {
    assert_eq!(a.len(), out.len(), "select: length mismatch");
    assert_eq!(b.len(), out.len(), "select: length mismatch");

    let mut take_b = propagate_ones(choice);
    let mut take_a = !take_b;
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        probe::touch();
        *o = (x & take_a) | (y & take_b);
        take_b = take_b.rotate_left(1);
        take_a = take_a.rotate_left(1);
    }
}

/// Return `a` if `choice == 0`, otherwise `b`.
///
/// Goes through [`select`] on the little-endian byte images of the two
/// words so index selection shares the byte-masking code path.
pub fn select_index(a: usize, b: usize, choice: u8) -> usize {
    let a_bytes = word_to_le_bytes(a);
    let b_bytes = word_to_le_bytes(b);
    let mut out = [0u8; WORD_LEN];
    select(&a_bytes, &b_bytes, &mut out, choice);
    word_from_le_bytes(&out)
}

/// Little-endian byte image of a machine word.
#[inline]
pub fn word_to_le_bytes(x: usize) -> [u8; WORD_LEN] {
    x.to_le_bytes()
}

/// Inverse of [`word_to_le_bytes`].
#[inline]
pub fn word_from_le_bytes(bytes: &[u8; WORD_LEN]) -> usize {
    usize::from_le_bytes(*bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_choice_takes_first() {
        let mut out = [0u8; 1];
        select(b"1", b"0", &mut out, 0);
        assert_eq!(&out, b"1");

        let mut out = [0u8; 2];
        select(b"10", b"00", &mut out, 0);
        assert_eq!(&out, b"10");
    }

    #[test]
    fn nonzero_choice_takes_second() {
        let mut out = [0u8; 1];
        select(b"1", b"0", &mut out, 1);
        assert_eq!(&out, b"0");

        for choice in [1u8, 0x02, 0x80, 0xFF] {
            let mut out = [0u8; 2];
            select(b"10", b"00", &mut out, choice);
            assert_eq!(&out, b"00", "choice {choice:#04x}");
        }
    }

    #[test]
    fn long_buffers_survive_mask_rotation() {
        let a: Vec<u8> = (0..=255).collect();
        let b: Vec<u8> = (0..=255).rev().collect();
        let mut out = vec![0u8; 256];

        select(&a, &b, &mut out, 0);
        assert_eq!(out, a);
        select(&a, &b, &mut out, 0x10);
        assert_eq!(out, b);
    }

    #[test]
    fn empty_select_is_noop() {
        let mut out: [u8; 0] = [];
        select(&[], &[], &mut out, 1);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn mismatched_lengths_panic() {
        let mut out = [0u8; 3];
        select(b"ab", b"cde", &mut out, 0);
    }

    #[test]
    fn index_selection() {
        assert_eq!(select_index(0, 1, 0), 0);
        assert_eq!(select_index(0, 1, 1), 1);
        assert_eq!(select_index(0x10_0004, 0x22_3344, 0), 0x10_0004);
        assert_eq!(select_index(0x10_0004, 0x22_3344, 1), 0x22_3344);
        assert_eq!(select_index(usize::MAX, 7, 0x40), 7);
        assert_eq!(select_index(usize::MAX, 7, 0), usize::MAX);
    }

    #[test]
    fn index_selection_reads_every_byte() {
        let (_, visits) = probe::count(|| select_index(3, 9, 0));
        assert_eq!(visits, WORD_LEN);
        let (_, visits) = probe::count(|| select_index(3, 9, 1));
        assert_eq!(visits, WORD_LEN);
    }

    #[test]
    fn le_helpers_are_little_endian() {
        let bytes = word_to_le_bytes(0x0201);
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[1], 0x02);
        assert!(bytes[2..].iter().all(|&b| b == 0));
        assert_eq!(word_from_le_bytes(&bytes), 0x0201);
    }
}
