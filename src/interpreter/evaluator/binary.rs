/// Operator dispatch.
pub mod core;

/// `+`, `-`, `%`, `*` and `/`.
pub mod arithmetic;

/// Equality and ordering.
pub mod comparison;

/// Bitwise operators and shifts on truncated integers.
pub mod bitwise;

/// Short-circuiting `and` and `or`.
pub mod logic;
