//! Compile-time factorial table for `i32`.

use std::convert::TryFrom;

use factorial_inner::factorial_table;

/// `0!` through `12!`, every factorial that fits in `i32`.
pub static FACTORIALS: [i32; 13] = factorial_table!(Type: i32);

/// `n!` from [`FACTORIALS`], or `None` if `n` is negative or `n!` does not fit in `i32`.
pub fn factorial_lookup(n: i32) -> Option<i32> {
    usize::try_from(n)
        .ok()
        .and_then(|i| FACTORIALS.get(i))
        .copied()
}
