// Constant-time byte primitives.
//
// Every function here runs the same instruction sequence and touches the
// same memory for any input of a given length. Results derived from data
// are produced with masks and bitwise combination, never with branches.
//
// # Modules
//
// - `propagate`: zero/non-zero byte to all-zero/all-one mask
// - `select`: conditional choice between two buffers or two words
// - `compare`: masked "must equal" / "must differ" comparison
// - `search`: index of the first occurrence of a byte

pub mod compare;
pub mod propagate;
pub mod search;
pub mod select;

#[doc(hidden)]
pub mod probe;

pub use compare::compare;
pub use propagate::{fold_word, propagate_ones, propagate_ones_word};
pub use search::search;
pub use select::{select, select_index, word_from_le_bytes, word_to_le_bytes};
