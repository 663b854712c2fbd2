use log::debug;

use crate::{
    ast::Node,
    error::{RuntimeError, Unwind},
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::{
            core::{Context, EvalResult},
            function::{arithmetic, io},
        },
        value::{
            core::Value,
            function::{Arity, Closure, Function, NativeFunction},
        },
    },
};

/// Defines builtin procedures by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table installed into the global scope),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[NativeFunction] = &[
            $(
                NativeFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "show"               => { arity: Arity::Any,              func: io::show },
    "debug"              => { arity: Arity::Any,              func: io::debug },
    "ask"                => { arity: Arity::OneOf(&[0, 1]),   func: io::ask },
    "number"             => { arity: Arity::Exact(1),         func: io::number },
    "infix  equals"      => { arity: Arity::Exact(2),         func: arithmetic::equals },
    "infix  notequals"   => { arity: Arity::Exact(2),         func: arithmetic::not_equals },
    "infix  smallerthan" => { arity: Arity::Exact(2),         func: arithmetic::smaller_than },
    "infix  biggerthan"  => { arity: Arity::Exact(2),         func: arithmetic::bigger_than },
    "infix  multiply"    => { arity: Arity::Exact(2),         func: arithmetic::multiply },
    "infix  divides"     => { arity: Arity::Exact(2),         func: arithmetic::divides },
    "infix  plus"        => { arity: Arity::Exact(2),         func: arithmetic::plus },
    "infix  minus"       => { arity: Arity::Exact(2),         func: arithmetic::minus },
}

/// Binds every builtin procedure in the global scope of `environment`.
pub fn register_builtins(environment: &mut Environment) {
    let root = environment.root();
    for native in BUILTIN_TABLE {
        environment.define(root, native.name, Function::Native(*native).into());
    }
    debug!(target: "eval", "registered {} builtin procedures", BUILTIN_TABLE.len());
}

impl Context {
    /// Evaluates a procedure invocation.
    ///
    /// The callee is evaluated first, then each argument from left to right;
    /// the first failure abandons the rest. Every failure gets a frame naming
    /// the part of the invocation that failed.
    ///
    /// # Errors
    /// - [`RuntimeError::MethodError`] if the callee is not a procedure.
    /// - Any unwind from the callee, the arguments or the invocation itself.
    pub(crate) fn eval_call(&mut self,
                            node: &Node,
                            callee: &Node,
                            arguments: &[Node],
                            scope: ScopeId)
                            -> EvalResult<Value> {
        let callee = self.eval(callee, scope)
                         .map_err(|e| e.with_frame(node, "evaluating head expression"))?;

        let mut args = Vec::with_capacity(arguments.len());
        for (i, argument) in arguments.iter().enumerate() {
            let value = self.eval(argument, scope).map_err(|e| {
                                                      e.with_frame(node,
                                                                   format!("getting the value of argument {}", i + 1))
                                                  })?;
            args.push(value);
        }

        let function = match callee {
            Value::Function(function) => function,
            other => {
                return Err(RuntimeError::method(format!("{other} is a {}, not a procedure, so it can not be invoked",
                                                        other.kind())).into());
            },
        };

        self.invoke(&function, args)
            .map_err(|e| e.with_frame(node, format!("invoking {function}")))
    }

    /// Invokes a procedure with already evaluated arguments.
    ///
    /// Natives receive the context's streams. Closures run in a fresh child of
    /// the scope they were defined in.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MethodError`] if the number of arguments does
    /// not fit the procedure, and any error raised while it runs.
    ///
    /// # Example
    /// ```
    /// use boomslang::interpreter::{
    ///     evaluator::core::Context,
    ///     parser::core::infix_name,
    ///     streams::Streams,
    ///     value::{core::Value, function::Function},
    /// };
    ///
    /// let (streams, ..) = Streams::captured("");
    /// let mut ctx = Context::with_streams(streams);
    ///
    /// let Some(Value::Function(plus)) = ctx.environment.lookup(ctx.root(), &infix_name("plus")).cloned()
    /// else {
    ///     panic!("plus is a builtin");
    /// };
    ///
    /// let r = ctx.invoke(&plus, vec![Value::Integer(2), Value::Integer(3)]).unwrap();
    /// assert_eq!(r, Value::Integer(5));
    ///
    /// assert!(ctx.invoke(&plus, vec![Value::Integer(2)]).is_err());
    /// ```
    pub fn invoke(&mut self, function: &Function, args: Vec<Value>) -> EvalResult<Value> {
        match function {
            Function::Native(native) => {
                if !native.arity.check(args.len()) {
                    return Err(arity_error(native.name, native.arity, args.len()));
                }
                (native.func)(&mut self.streams, &args)
            },
            Function::Closure(closure) => self.call_closure(closure, args),
        }
    }

    /// Runs the body of a user-defined procedure.
    ///
    /// A `returns` anywhere in the body ends the invocation with its value;
    /// running off the end of the body gives `nothing`. The invocation's scope
    /// is released afterwards unless a procedure defined inside captured it.
    fn call_closure(&mut self, closure: &Closure, args: Vec<Value>) -> EvalResult<Value> {
        if args.len() != closure.params.len() {
            return Err(arity_error(&closure.name, Arity::Exact(closure.params.len()), args.len()));
        }

        let scope = self.environment.child(closure.scope);
        for (param, value) in closure.params.iter().zip(args) {
            self.environment.define(scope, param.as_str(), value);
        }
        debug!(target: "eval", "invoking procedure '{}' in scope {scope}", closure.name);

        let mut result = Ok(Value::Nil);
        for statement in closure.body.iter() {
            match self.eval(statement, scope) {
                Ok(_) => {},
                Err(Unwind::Return(value)) => {
                    result = Ok(value);
                    break;
                },
                Err(Unwind::Break) => {
                    result = Err(RuntimeError::method("'break' can only be used inside a loop").into());
                    break;
                },
                Err(unwind) => {
                    result = Err(unwind.with_frame(statement,
                                                   format!("running procedure '{}'", closure.name)));
                    break;
                },
            }
        }

        self.environment.release(scope);
        result
    }
}

fn arity_error(name: &str, arity: Arity, got: usize) -> Unwind {
    RuntimeError::method(format!("'{name}' expects {arity}, but got {got}")).into()
}
