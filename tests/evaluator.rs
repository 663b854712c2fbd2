use boomslang::{
    ast::{LiteralValue, Node},
    error::{RuntimeError, Unwind},
    execute,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{Context, EvalResult},
            function::core::BUILTIN_FUNCTIONS,
            utils::expect_integer,
        },
        parser::core::{INFIX_OPERATORS, infix_name},
        source::StrSource,
        streams::{CapturedOutput, Streams},
        value::{
            core::Value,
            function::{Arity, Function, NativeFunction},
        },
    },
};

fn context() -> (Context, CapturedOutput) {
    let (streams, output, _) = Streams::captured("");
    (Context::with_streams(streams), output)
}

fn run(ctx: &mut Context, src: &str) -> Value {
    execute(&mut StrSource::new("<test>", src), ctx).unwrap_or_else(|e| panic!("{e}\n{src}"))
}

fn literal(value: impl Into<LiteralValue>, line: usize) -> Node {
    Node::Literal { value: value.into(),
                    line }
}

fn double(_: &mut Streams, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Integer(expect_integer(&args[0])? * 2))
}

#[test]
fn truthiness() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Integer(1).is_truthy());
    assert!(!Value::Integer(0).is_truthy());
    assert!(!Value::Integer(-3).is_truthy());
    assert!(Value::from("x").is_truthy());
    assert!(!Value::from("").is_truthy());
    assert!(!Value::Nil.is_truthy());

    let (ctx, _) = context();
    let show = ctx.environment.lookup(ctx.root(), "show").cloned().unwrap();
    assert!(show.is_truthy());
}

#[test]
fn literals_display_like_their_source() {
    for (value, text) in [(LiteralValue::Integer(-5), "-5"),
                          (LiteralValue::Bool(false), "false"),
                          (LiteralValue::from("two words"), "two words"),
                          (LiteralValue::Nil, "nothing")]
    {
        assert_eq!(value.to_string(), text);
        assert_eq!(Value::from(&value).to_string(), text);
    }
}

#[test]
fn every_infix_operator_is_a_builtin() {
    for op in INFIX_OPERATORS {
        assert!(BUILTIN_FUNCTIONS.contains(&infix_name(op).as_str()), "{op}");
    }
    for name in ["show", "debug", "ask", "number"] {
        assert!(BUILTIN_FUNCTIONS.contains(&name), "{name}");
    }
}

#[test]
fn assignment_needs_a_name() {
    let (mut ctx, _) = context();
    let node = Node::Assignment { target: Box::new(literal(5_i64, 1)),
                                  value:  Box::new(literal(6_i64, 1)),
                                  line:   1, };

    let err = ctx.run(&[node]).unwrap_err();
    assert_eq!(err.cause(),
               Some(&RuntimeError::UnpackError { target: "5".to_string() }));
}

#[test]
fn break_and_returns_travel_as_signals() {
    let (mut ctx, _) = context();

    assert_eq!(ctx.run(&[Node::Break { line: 1 }]), Err(Unwind::Break));

    let node = Node::Return { value: Box::new(literal(7_i64, 1)),
                              line:  1, };
    assert_eq!(ctx.run(&[node]), Err(Unwind::Return(Value::Integer(7))));
}

#[test]
fn if_without_otherwise_is_nothing_when_false() {
    let (mut ctx, output) = context();
    let node = Node::If { condition:  Box::new(literal(false, 1)),
                          then_block: vec![literal(1_i64, 2)],
                          else_block: vec![],
                          line:       1, };

    assert_eq!(ctx.run(&[node]), Ok(Value::Nil));
    assert!(output.contents().is_empty());
}

#[test]
fn conditions_report_their_failures() {
    let (mut ctx, _) = context();
    let node = Node::Loop { condition: Box::new(Node::Identifier { name: "missing".to_string(),
                                                                   line: 4, }),
                            body:      vec![],
                            otherwise: vec![],
                            line:      4, };

    let Err(Unwind::Error(context)) = ctx.run(&[node]) else {
        panic!("expected an error");
    };
    assert_eq!(context.frames.len(), 1);
    assert_eq!(context.frames[0].label, "while loop");
    assert_eq!(context.frames[0].message, "evaluating the loop condition");
}

#[test]
fn bindings_persist_across_runs() {
    let (mut ctx, output) = context();
    run(&mut ctx, "the x is 20");
    assert_eq!(run(&mut ctx, "the x plus 22"), Value::Integer(42));

    run(&mut ctx, "by twice of n we mean\n  returns the n multiply 2");
    run(&mut ctx, "the y is twice of the x\nshow the y");
    assert_eq!(output.contents(), "40\n");
}

#[test]
fn custom_builtins_can_be_registered() {
    let (mut ctx, _) = context();
    ctx.register(NativeFunction { name:  "double",
                                  arity: Arity::Exact(1),
                                  func:  double, });

    assert_eq!(run(&mut ctx, "double of 21"), Value::Integer(42));

    let err = execute(&mut StrSource::new("<test>", "double of true"), &mut ctx).unwrap_err();
    assert!(err.to_string().contains("number"));
}

#[test]
fn invoking_closures_from_the_host() {
    let (mut ctx, _) = context();
    run(&mut ctx, "by square of n we mean\n  returns the n multiply the n");

    let Some(Value::Function(square)) = ctx.environment.lookup(ctx.root(), "square").cloned()
    else {
        panic!("square is defined");
    };
    assert!(matches!(square, Function::Closure(_)));
    assert_eq!(square.name(), "square");
    assert_eq!(square.to_string(), "<procedure 'square'>");

    assert_eq!(ctx.invoke(&square, vec![Value::Integer(9)]), Ok(Value::Integer(81)));

    let err = ctx.invoke(&square, vec![]).unwrap_err();
    assert!(matches!(err.cause(), Some(RuntimeError::MethodError { .. })));
}

#[test]
fn invocation_scopes_are_released() {
    let (mut ctx, _) = context();
    let src = "\
by noop of x we mean
    returns the x
the i is 0
while the i smallerthan 50
    the ignored is noop of the i
    the i is the i plus 1
";
    run(&mut ctx, src);
    assert_eq!(ctx.environment.live_scopes(), 1);
}

#[test]
fn captured_scopes_outlive_their_invocation() {
    let (mut ctx, _) = context();
    let src = "\
by make adder of x we mean
    by add of y we mean
        returns the x plus the y
    returns the add
the add two is the make adder of 2
the a is the add two of 3
the b is the add two of 4
the a plus the b
";
    assert_eq!(run(&mut ctx, src), Value::Integer(11));
    assert_eq!(ctx.environment.live_scopes(), 2);
}

#[test]
fn released_scopes_are_reused() {
    let mut env = Environment::new();
    let root = env.root();

    let first = env.child(root);
    env.define(first, "x", Value::Integer(1));
    env.release(first);
    assert_eq!(env.live_scopes(), 1);

    let second = env.child(root);
    assert_eq!(first, second);
    assert_eq!(env.lookup(second, "x"), None);
}

#[test]
fn captured_and_root_scopes_are_never_released() {
    let mut env = Environment::new();
    let root = env.root();
    env.define(root, "x", Value::Integer(1));

    let scope = env.child(root);
    env.capture(scope);
    env.release(scope);
    env.release(root);

    assert_eq!(env.live_scopes(), 2);
    assert_eq!(env.lookup(scope, "x"), Some(&Value::Integer(1)));
}

#[test]
fn debug_echoes_values() {
    let (mut ctx, output) = context();
    assert_eq!(run(&mut ctx, "debug of text hi"), Value::from("hi"));
    assert_eq!(output.contents(), "Text(\"hi\")\n");
}

#[test]
fn number_converts_text_and_booleans() {
    let (mut ctx, _) = context();
    assert_eq!(run(&mut ctx, "number of text  12 "), Value::Integer(12));
    assert_eq!(run(&mut ctx, "number of true"), Value::Integer(1));

    let err = execute(&mut StrSource::new("<test>", "number of text twelve"), &mut ctx).unwrap_err();
    assert!(err.to_string().contains("twelve"));
}

#[test]
fn procedures_are_not_comparable() {
    let (mut ctx, _) = context();
    run(&mut ctx, "by f of x we mean\n  returns 1");

    let err = execute(&mut StrSource::new("<test>", "the f equals the f"), &mut ctx).unwrap_err();
    assert!(err.to_string().contains("comparable"));
}
