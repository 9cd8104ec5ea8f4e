/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, bitwise operators and the short-circuiting
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT, arithmetic negation and bitwise complement.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, statement execution and expression dispatch.
pub mod core;

/// Utility functions for evaluation.
///
/// Scope management (push/pop through a guard, declaration and lookup) and
/// reserved names.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined function calls, argument checking, return values and
/// the built-in `print`.
pub mod function;
