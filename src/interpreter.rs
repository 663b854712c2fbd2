/// The source module supplies program text one line at a time.
///
/// A [`Source`](source::Source) hides where lines come from: a file, an
/// in-memory string, or an interactive session.
pub mod source;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the source line by line and produces a stream of tokens:
/// keywords, words, numbers and `text` literals, followed by a newline token
/// for every line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Infers the indentation unit of a source and checks that it is used
///   consistently.
/// - Turns changes of indentation level into begin and end markers.
/// - Reports lexical errors with the source name and line.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser groups tokens into logical lines and finds each line's structure
/// by splitting it at the first defining keyword, rather than by operator
/// precedence. Indented blocks become nested statement lists.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting errors with the offending token's span.
pub mod parser;
/// The environment module stores the scopes of a running program.
///
/// Scopes live in an arena and refer to their parents by handle, so closures
/// can keep their defining scope alive without owning it.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree, resolves names through the scope chain,
/// invokes procedures, and threads errors together with the `break` and
/// `returns` signals through a single propagation channel.
///
/// # Responsibilities
/// - Evaluates every kind of statement and expression.
/// - Provides the builtin procedures.
/// - Reports runtime errors with a trail of what was being evaluated.
pub mod evaluator;
/// The streams module connects programs to the outside world.
///
/// Builtins read and write through explicit streams owned by the evaluation
/// context, which tests replace with in-memory buffers.
pub mod streams;
/// The value module defines the runtime data types for evaluation.
///
/// Values are nothing, booleans, integers, text and procedures. They are
/// immutable and cheap to clone.
pub mod value;
