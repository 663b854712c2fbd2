use std::{fmt, rc::Rc};

use crate::{
    ast::Node,
    interpreter::{
        environment::ScopeId, evaluator::core::EvalResult, streams::Streams,
        value::core::Value,
    },
};

/// Type alias for native procedure handlers.
///
/// A native receives the interpreter's streams and the evaluated arguments.
pub type BuiltinFn = fn(&mut Streams, &[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a native procedure.
///
/// - `Exact(n)` means the procedure must receive exactly `n` arguments.
/// - `OneOf(slice)` means it accepts any count listed in `slice`.
/// - `Any` accepts every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(1) => write!(f, "exactly 1 argument"),
            Self::Exact(n) => write!(f, "exactly {n} arguments"),
            Self::OneOf(counts) => {
                let counts = counts.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{} arguments", counts.join(" or "))
            },
            Self::Any => write!(f, "any number of arguments"),
        }
    }
}

/// A procedure implemented in Rust and installed into the global scope.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    /// The name the procedure is bound to.
    pub name:  &'static str,
    /// The accepted argument counts.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A user-defined procedure paired with the scope it was defined in.
///
/// Invoking a closure creates a child of `scope`, never of the caller's
/// scope, which is what makes name resolution lexical.
#[derive(Debug, Clone)]
pub struct Closure {
    /// The name given by the definition.
    pub name:   Rc<str>,
    /// The parameter names.
    pub params: Rc<[String]>,
    /// The statements of the body.
    pub body:   Rc<[Node]>,
    /// The scope that was live when the definition ran.
    pub scope:  ScopeId,
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.body, &other.body) && self.scope == other.scope
    }
}

/// Something that can be invoked.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    /// A builtin procedure.
    Native(NativeFunction),
    /// A user-defined procedure.
    Closure(Closure),
}

impl Function {
    /// The name of the procedure.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Native(native) => native.name,
            Self::Closure(closure) => &closure.name,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => write!(f, "<builtin procedure '{}'>", native.name),
            Self::Closure(closure) => write!(f, "<procedure '{}'>", closure.name),
        }
    }
}
