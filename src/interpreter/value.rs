/// Runtime values and scope bindings.
///
/// Defines the `Value` enum produced by expression evaluation and the
/// `Binding` enum stored in each scope.
pub mod core;
