// Element-visit counter for the constant-time loops.
//
// Test and fuzzing builds count every element a primitive touches, so the
// visit count can be checked to be a function of lengths alone. In other
// builds `touch` is an empty inline function.

#[cfg(any(test, feature = "fuzzing"))]
use std::cell::Cell;

#[cfg(any(test, feature = "fuzzing"))]
thread_local! {
    static VISITS: Cell<usize> = const { Cell::new(0) };
}

/// Record one element visit.
#[inline(always)]
pub(crate) fn touch() {
    #[cfg(any(test, feature = "fuzzing"))]
    VISITS.with(|v| v.set(v.get() + 1));
}

/// Run `f` and return its result together with the number of element
/// visits it made on the current thread.
#[cfg(any(test, feature = "fuzzing"))]
pub fn count<T>(f: impl FnOnce() -> T) -> (T, usize) {
    VISITS.with(|v| v.set(0));
    let out = f();
    (out, VISITS.with(Cell::get))
}
