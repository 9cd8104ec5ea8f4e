/// Numeric conversion helpers.
///
/// The language has a single `f64` number type, but the bitwise and shift
/// operators work on integers. These helpers truncate a number to an `i64`
/// and box an `i64` back into an `f64`, returning an error instead of
/// silently losing information.
pub mod num;
