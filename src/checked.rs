//! Guarded factorials: same definitions as the crate root, but inputs the definitions do not
//! cover, and results that do not fit in `i32`, come back as [`FactorialError`].

use crate::{FactorialError, Result};

/// Recursive `n!`, rejecting `n < 1` and overflow.
///
/// The recursion multiplies upwards from 1, so overflow stops it after at most 13 frames no
/// matter how large `n` is.
pub fn factorial_recursive(n: i32) -> Result<i32> {
    if n < 1 {
        return Err(FactorialError::NotPositive(n));
    }
    product_up(1, n, 1).ok_or(FactorialError::Overflow(n))
}

/// `acc * i * (i + 1) * ... * n`, or `None` on overflow.
fn product_up(i: i32, n: i32, acc: i32) -> Option<i32> {
    let acc = acc.checked_mul(i)?;
    if i == n {
        Some(acc)
    } else {
        product_up(i + 1, n, acc)
    }
}

/// Iterative `n!`, rejecting `n < 0` and overflow. `0!` is 1.
pub fn factorial_iterative(n: i32) -> Result<i32> {
    if n < 0 {
        return Err(FactorialError::Negative(n));
    }
    let mut acc: i32 = 1;
    for i in 1..=n {
        acc = acc.checked_mul(i).ok_or(FactorialError::Overflow(n))?;
    }
    Ok(acc)
}
