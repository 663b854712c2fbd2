/// Expression parsing.
///
/// Contains the entry point for expressions, which finds the structure of a
/// line by splitting it at the first `of` or infix operator word, as well as
/// names and literal atoms.
pub mod core;

/// Statement parsing.
///
/// Dispatches each logical line to the statement it starts: assignments,
/// procedure definitions, `break`, `returns`, or expression statements.
pub mod statement;

/// Block parsing.
///
/// Parses indented blocks and the statements that own them: conditionals with
/// their `otherwise`/`otif` continuations, and loops.
pub mod block;

/// Utility functions for the parser.
///
/// Provides line splitting, token partitioning, name joining and token
/// expectations shared by the other parser modules.
pub mod utils;
