//! Factorial, computed by recursion and by iteration.
//!
//! The two functions at the crate root keep fixed-width `i32` semantics: products past `12!`
//! wrap around silently, and the recursive form only terminates for `n >= 1`. The [`checked`]
//! module has guarded versions that report both conditions instead. [`memo`] caches recursive
//! results across calls, and [`table`] holds every `i32` factorial, computed at compile time by
//! [`factorial_table!`].

use std::io::{self, Write};

pub mod checked;
mod error;
pub mod memo;
pub mod table;

pub use error::{FactorialError, Result};
pub use factorial_inner::factorial_table;

/// Input used by the `factorial` binary.
pub const DEFAULT_INPUT: i32 = 5;

/// `n!` by linear recursion, base case `1! = 1`.
///
/// The caller must ensure `n >= 1`. For `n <= 0` the base case is never reached and the call
/// does not return until the stack is exhausted. Products wrap on overflow.
pub fn factorial_recursive(n: i32) -> i32 {
    if n == 1 {
        1
    } else {
        n.wrapping_mul(factorial_recursive(n - 1))
    }
}

/// `n!` with a running accumulator. `0!` (and any negative `n`) is the empty product, 1.
/// Products wrap on overflow.
pub fn factorial_iterative(n: i32) -> i32 {
    let mut acc: i32 = 1;
    for i in 1..=n {
        acc = acc.wrapping_mul(i);
    }
    acc
}

/// Writes `n!` computed both ways, one labeled line each, recursive first.
pub fn run<W: Write>(n: i32, out: &mut W) -> io::Result<()> {
    writeln!(out, "recursive: {}", factorial_recursive(n))?;
    writeln!(out, "iterative: {}", factorial_iterative(n))
}
