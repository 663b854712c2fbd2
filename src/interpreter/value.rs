/// Procedure values.
///
/// Defines [`Function`](function::Function), the callable kind of value: either
/// a native procedure from the builtin table or a user-defined closure that
/// remembers the scope it was defined in.
pub mod function;

/// The `Value` enum and its display, truthiness and conversion rules.
pub mod core;
