/// Core evaluation logic and context management.
///
/// Contains the runtime context, the main evaluation entry point, names,
/// assignments and procedure definitions.
pub mod core;

/// Evaluation of conditionals and loops.
///
/// Runs `if` and `while` statements in the enclosing scope and intercepts
/// `break`.
pub mod control;

/// Utility functions for evaluation.
///
/// Provides argument checks shared by the builtin procedures.
pub mod utils;

/// Procedure evaluation.
///
/// Handles invocations of user-defined and builtin procedures, argument
/// checking, and the table of builtins.
pub mod function;
