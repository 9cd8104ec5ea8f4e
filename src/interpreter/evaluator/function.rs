/// Calls to user-defined functions and dispatch of built-in names.
pub mod core;

/// The `print` built-in.
///
/// Writes each argument to the context's output.
pub mod print;
