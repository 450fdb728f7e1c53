// One-propagation: map a byte to an all-zero or all-one mask.
//
// A set bit anywhere in the input is smeared across every output bit by
// OR-ing the byte with all eight of its rotations. No comparison against
// zero is made, so the compiler has nothing to turn into a branch.

use std::hint::black_box;

/// Return `0x00` if `x == 0`, otherwise `0xFF`.
#[inline]
pub fn propagate_ones(x: u8) -> u8 {
    let mut x = black_box(x);
    let mut result = x;
    for _ in 0..8 {
        x = x.rotate_left(1);
        result |= x;
    }
    black_box(result)
}

/// Return `0` if `x == 0`, otherwise `usize::MAX`.
///
/// The byte-sized mask is broadcast into every byte of the word.
#[inline]
pub fn propagate_ones_word(x: u8) -> usize {
    let inter = propagate_ones(x) as usize;
    let mut result = 0usize;
    for i in 0..size_of::<usize>() {
        result |= inter << (i * 8);
    }
    result
}

/// OR together every byte of `x`.
///
/// The result is zero exactly when `x` is zero, which turns a word-sized
/// difference (`a ^ b`) into a choice byte without comparing words.
#[inline]
pub fn fold_word(x: usize) -> u8 {
    let mut acc = 0u8;
    for byte in x.to_le_bytes() {
        acc |= byte;
    }
    acc
}
