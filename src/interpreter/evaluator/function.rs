/// Infix operator procedures.
///
/// Integer arithmetic and comparisons, bound under hidden names that the
/// parser targets when it finds an operator word such as `plus`.
pub mod arithmetic;
/// Procedures that talk to the outside world: `show`, `debug` and `ask`, plus
/// the `number` conversion.
pub mod io;

pub mod core;
