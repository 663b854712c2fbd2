use boomslang::{
    ast::{FunctionDef, LiteralValue, Node},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::{
            core::{INFIX_OPERATORS, infix_name},
            statement::parse_program,
        },
    },
};

fn parse(src: &str) -> Result<Vec<Node>, ParseError> {
    let tokens = tokenize("<test>", src).unwrap_or_else(|e| panic!("{e}"));
    parse_program(&mut tokens.iter().peekable())
}

fn parse_one(src: &str) -> Node {
    let mut program = parse(src).unwrap_or_else(|e| panic!("{e}\n{src}"));
    assert_eq!(program.len(), 1, "expected a single statement in\n{src}");
    program.remove(0)
}

fn parse_failure(src: &str) -> ParseError {
    match parse(src) {
        Ok(program) => panic!("parsing succeeded with {program:?}:\n{src}"),
        Err(e) => e,
    }
}

fn ident(name: &str) -> Node {
    Node::Identifier { name: name.to_string(),
                       line: 1 }
}

fn int(n: i64) -> Node {
    Node::Literal { value: LiteralValue::Integer(n),
                    line:  1, }
}

fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::Call { callee: Box::new(callee),
                 arguments,
                 line: 1 }
}

fn infix(op: &str, lhs: Node, rhs: Node) -> Node {
    call(ident(&infix_name(op)), vec![lhs, rhs])
}

#[test]
fn assignment() {
    assert_eq!(parse_one("the x is 5"),
               Node::Assignment { target: Box::new(ident("x")),
                                  value:  Box::new(int(5)),
                                  line:   1, });
}

#[test]
fn names_span_several_words() {
    let Node::Assignment { target, .. } = parse_one("the answer to everything is 42") else {
        panic!("expected an assignment");
    };
    assert_eq!(*target, ident("answer to everything"));
}

#[test]
fn literals() {
    assert_eq!(parse_one("42"), int(42));
    assert_eq!(parse_one("true"),
               Node::Literal { value: LiteralValue::Bool(true),
                               line:  1, });
    assert_eq!(parse_one("text hello world"),
               Node::Literal { value: LiteralValue::from("hello world"),
                               line:  1, });
}

#[test]
fn call_with_argument() {
    assert_eq!(parse_one("show the x"), call(ident("show"), vec![ident("x")]));
    assert_eq!(parse_one("show of"), call(ident("show"), vec![]));
}

#[test]
fn of_binds_outermost() {
    assert_eq!(parse_one("square of the x plus 1"),
               call(ident("square"), vec![infix("plus", ident("x"), int(1))]));
}

#[test]
fn infix_operators_split_at_the_first_occurrence() {
    assert_eq!(parse_one("show the x plus 1"),
               infix("plus", call(ident("show"), vec![ident("x")]), int(1)));
    assert_eq!(parse_one("10 minus 3 minus 2"),
               infix("minus", int(10), infix("minus", int(3), int(2))));
}

#[test]
fn infix_operators_are_tried_in_a_fixed_order() {
    assert_eq!(parse_one("the a plus the b equals the c"),
               infix("equals", infix("plus", ident("a"), ident("b")), ident("c")));
    assert_eq!(parse_one("the a multiply the b smallerthan the c minus 1"),
               infix("smallerthan",
                     infix("multiply", ident("a"), ident("b")),
                     infix("minus", ident("c"), int(1))));
}

#[test]
fn every_infix_operator_has_a_hidden_name() {
    for op in INFIX_OPERATORS {
        let node = parse_one(&format!("1 {op} 2"));
        assert_eq!(node, infix(op, int(1), int(2)));
    }
}

#[test]
fn procedure_definition() {
    let src = "by add one of some number we mean\n  returns the some number plus 1";
    let Node::FunctionDef(FunctionDef { name, params, body, line }) = parse_one(src) else {
        panic!("expected a procedure definition");
    };

    assert_eq!(name, "add one");
    assert_eq!(params, ["some number"]);
    assert_eq!(line, 1);
    assert_eq!(&*body,
               [Node::Return { value: Box::new(Node::Call { callee:    Box::new(Node::Identifier { name: infix_name("plus"),
                                                                                                     line: 2, }),
                                                             arguments: vec![Node::Identifier { name: "some number".to_string(),
                                                                                                line: 2, },
                                                                             Node::Literal { value: LiteralValue::Integer(1),
                                                                                             line:  2, }],
                                                             line:      2, }),
                               line:  2, }]);
}

#[test]
fn bare_returns_gives_nothing() {
    assert_eq!(parse_one("returns"),
               Node::Return { value: Box::new(Node::Literal { value: LiteralValue::Nil,
                                                              line:  1, }),
                              line:  1, });
}

#[test]
fn if_otif_otherwise_nest() {
    let src = "\
if the x equals 1
  show 1
otif the x equals 2
  show 2
otherwise
  show 3
show 4
";
    let program = parse(src).unwrap();
    assert_eq!(program.len(), 2);

    let Node::If { then_block, else_block, .. } = &program[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(then_block.len(), 1);
    assert_eq!(else_block.len(), 1);

    let Node::If { then_block, else_block, line, .. } = &else_block[0] else {
        panic!("expected otif to become a nested if statement");
    };
    assert_eq!(*line, 3);
    assert_eq!(then_block[0].line_number(), 4);
    assert_eq!(else_block[0].line_number(), 6);
}

#[test]
fn while_with_otherwise() {
    let src = "while true\n  break\notherwise\n  show 1";
    let Node::Loop { condition, body, otherwise, .. } = parse_one(src) else {
        panic!("expected a loop");
    };

    assert_eq!(condition.label(), "true");
    assert_eq!(body, [Node::Break { line: 2 }]);
    assert_eq!(otherwise.len(), 1);
}

#[test]
fn blocks_nest() {
    let src = "while true\n  if false\n    break\n  show 1\nshow 2";
    let program = parse(src).unwrap();
    assert_eq!(program.len(), 2);

    let Node::Loop { body, .. } = &program[0] else {
        panic!("expected a loop");
    };
    assert_eq!(body.len(), 2);
}

#[test]
fn missing_block() {
    let err = parse_failure("show 1\nif true\nshow 2");
    let ParseError::ExpectedBlock { span, .. } = &err else {
        panic!("expected a missing block, got {err}");
    };
    assert_eq!(span.line, 3);

    assert!(matches!(parse_failure("if true"), ParseError::ExpectedBlock { .. }));
}

#[test]
fn unexpected_indentation() {
    assert!(matches!(parse_failure("show 1\n  show 2"),
                     ParseError::UnexpectedIndentation { .. }));
    assert!(matches!(parse_failure("  show 1"), ParseError::UnexpectedIndentation { .. }));
}

#[test]
fn invalid_assignment_targets() {
    assert!(matches!(parse_failure("show is 5"), ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_failure("the 5 is 1"), ParseError::ExpectedWord { .. }));
    assert!(matches!(parse_failure("the is 1"), ParseError::ExpectedWord { .. }));
}

#[test]
fn invalid_procedure_definitions() {
    for src in ["by f x we mean\n  returns 1",
                "by f of x\n  returns 1",
                "by f of x we mean now\n  returns 1"]
    {
        assert!(matches!(parse_failure(src), ParseError::InvalidFunctionDefinition { .. }),
                "{src}");
    }
    assert!(matches!(parse_failure("by of x we mean\n  returns 1"),
                     ParseError::ExpectedWord { .. }));
}

#[test]
fn trailing_tokens() {
    assert!(matches!(parse_failure("while true\n  break now"),
                     ParseError::TrailingTokens { .. }));
    assert!(matches!(parse_failure("if true\n  show 1\notherwise now\n  show 2"),
                     ParseError::TrailingTokens { .. }));
}

#[test]
fn missing_expressions() {
    assert!(matches!(parse_failure("the x is"), ParseError::MissingExpression { .. }));
    assert!(matches!(parse_failure("if\n  show 1"), ParseError::MissingExpression { .. }));
    assert!(matches!(parse_failure("the x plus"), ParseError::MissingExpression { .. }));
    assert!(matches!(parse_failure("plus 1"), ParseError::MissingExpression { .. }));
    assert!(matches!(parse_failure("of 1"), ParseError::MissingExpression { .. }));
}

#[test]
fn bare_words_only_name_procedures_in_call_position() {
    assert!(matches!(parse_failure("show"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("otherwise"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("the y is x"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn numbers_must_fit_in_an_integer() {
    for src in ["the x is 99999999999999999999", "the x is 1.5", "the x is 7up"] {
        assert!(matches!(parse_failure(src), ParseError::InvalidNumber { .. }), "{src}");
    }
}
