use std::rc::Rc;

use log::trace;

use crate::{
    ast::{FunctionDef, Node},
    error::{RuntimeError, Unwind},
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::function::core::register_builtins,
        streams::Streams,
        value::{
            core::Value,
            function::{Closure, Function, NativeFunction},
        },
    },
};

/// Result type used by the evaluator.
///
/// The error side is an [`Unwind`]: a runtime error, or one of the `break`
/// and `returns` signals on their way to the loop or procedure that
/// intercepts them.
pub type EvalResult<T> = Result<T, Unwind>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope arena with the global
/// scope at its root, and the streams builtins read from and write to.
///
/// ## Usage
///
/// `Context` is created once per program (or interactive session) and reused
/// for every statement, so bindings made by one statement are visible to the
/// next. All evaluation methods take the scope to evaluate in explicitly.
pub struct Context {
    /// All scopes of the program.
    pub environment: Environment,
    /// The outside world.
    pub streams:     Streams,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context connected to the process's standard streams, with
    /// every builtin bound in the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self::with_streams(Streams::stdio())
    }

    /// Creates a context using the given streams, with every builtin bound in
    /// the global scope.
    #[must_use]
    pub fn with_streams(streams: Streams) -> Self {
        let mut environment = Environment::new();
        register_builtins(&mut environment);

        Self { environment,
               streams }
    }

    /// The global scope.
    #[must_use]
    pub const fn root(&self) -> ScopeId {
        self.environment.root()
    }

    /// Binds an additional native procedure in the global scope.
    ///
    /// A binding of the same name, builtin or not, is replaced.
    pub fn register(&mut self, native: NativeFunction) {
        let root = self.root();
        self.environment.define(root, native.name, Function::Native(native).into());
    }

    /// Runs a program in the global scope.
    ///
    /// # Returns
    /// The value of the last statement, or `nothing` for an empty program.
    ///
    /// # Errors
    /// Returns the [`Unwind`] that stopped the program. A `break` or `returns`
    /// outside of any loop or procedure also ends up here.
    ///
    /// # Example
    /// ```
    /// use boomslang::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Context, streams::Streams, value::core::Value},
    /// };
    ///
    /// let (streams, ..) = Streams::captured("");
    /// let mut ctx = Context::with_streams(streams);
    ///
    /// let program = [Node::Assignment { target: Box::new(Node::Identifier { name: "x".into(),
    ///                                                                       line: 1, }),
    ///                                   value:  Box::new(Node::Literal { value: 5.into(),
    ///                                                                    line:  1, }),
    ///                                   line:   1, },
    ///                Node::Identifier { name: "x".into(),
    ///                                   line: 2, }];
    ///
    /// assert_eq!(ctx.run(&program).unwrap(), Value::Integer(5));
    /// ```
    pub fn run(&mut self, program: &[Node]) -> EvalResult<Value> {
        let root = self.root();
        self.eval_block(program, root)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// The first unwind stops the block and is returned unchanged; loops and
    /// procedures decide what to do with it.
    ///
    /// # Returns
    /// The value of the last statement, or `nothing` for an empty block.
    pub fn eval_block(&mut self, statements: &[Node], scope: ScopeId) -> EvalResult<Value> {
        let mut last = Value::Nil;
        for statement in statements {
            last = self.eval(statement, scope)?;
        }
        Ok(last)
    }

    /// Evaluates a single node in `scope`.
    ///
    /// This is the main entry point for evaluation; it dispatches on the node
    /// variant. Errors raised by sub-evaluations come back with a frame
    /// describing what this node was doing.
    ///
    /// # Errors
    /// Returns an [`Unwind`] for runtime errors and for `break` and `returns`.
    pub fn eval(&mut self, node: &Node, scope: ScopeId) -> EvalResult<Value> {
        trace!(target: "eval", "line {}: {}", node.line_number(), node.label());

        match node {
            Node::Call { callee, arguments, .. } => self.eval_call(node, callee, arguments, scope),
            Node::Identifier { name, .. } => self.eval_identifier(name, scope),
            Node::Literal { value, .. } => Ok(value.into()),
            Node::Assignment { target, value, .. } => {
                self.eval_assignment(node, target, value, scope)
            },
            Node::If { condition,
                       then_block,
                       else_block,
                       .. } => self.eval_if(node, condition, then_block, else_block, scope),
            Node::Loop { condition,
                         body,
                         otherwise,
                         .. } => self.eval_loop(node, condition, body, otherwise, scope),
            Node::Break { .. } => Err(Unwind::Break),
            Node::FunctionDef(def) => Ok(self.eval_function_def(def, scope)),
            Node::Return { value, .. } => {
                let value = self.eval(value, scope)
                                .map_err(|e| e.with_frame(node, "computing the returned value"))?;
                Err(Unwind::Return(value))
            },
        }
    }

    /// Looks a name up in `scope` and its ancestors.
    fn eval_identifier(&self, name: &str, scope: ScopeId) -> EvalResult<Value> {
        self.environment
            .lookup(scope, name)
            .cloned()
            .ok_or_else(|| RuntimeError::NameError { name: name.to_string() }.into())
    }

    /// Evaluates `the <name> is <value>`.
    ///
    /// The target is checked before the value is computed; only names can be
    /// assigned to. The binding is made in `scope`, shadowing any binding of
    /// the same name further up the chain.
    fn eval_assignment(&mut self,
                       node: &Node,
                       target: &Node,
                       value: &Node,
                       scope: ScopeId)
                       -> EvalResult<Value> {
        let Node::Identifier { name, .. } = target else {
            return Err(RuntimeError::UnpackError { target: target.label() }.into());
        };

        let value = self.eval(value, scope)
                        .map_err(|e| e.with_frame(node, format!("computing the value of '{name}'")))?;
        self.environment.define(scope, name.clone(), value);

        Ok(Value::Nil)
    }

    /// Binds a new closure over `scope` under the definition's name.
    ///
    /// `scope` is marked as captured, so it outlives the invocation that
    /// created it.
    fn eval_function_def(&mut self, def: &FunctionDef, scope: ScopeId) -> Value {
        self.environment.capture(scope);

        let closure = Closure { name: def.name.as_str().into(),
                                params: def.params.clone().into(),
                                body: Rc::clone(&def.body),
                                scope };
        self.environment.define(scope, def.name.clone(), Function::Closure(closure).into());

        Value::Nil
    }
}
