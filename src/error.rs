//! Error types for the guarded factorial functions

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FactorialError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    /// The recursive definition only has a base case at 1.
    #[error("{0}! is not defined recursively: n must be at least 1")]
    NotPositive(i32),

    #[error("{0}! is not defined for negative n")]
    Negative(i32),

    #[error("{0}! does not fit in a 32-bit signed integer")]
    Overflow(i32),
}
