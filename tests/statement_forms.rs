//! Parameterised parsing cases for the text form
//!
//! Covers how the four identifier-led statement forms are told apart, how a
//! literal's spelling picks its variant, and which malformed inputs fail.

use briltxt::bril::error::Error;
use briltxt::{parse_program, Literal, Statement, Type};
use rstest::rstest;

/// Parse `text` as the body of a `main` function
fn body_of(text: &str) -> Vec<Statement> {
    let source = format!("main {{ {text} }}");
    let mut program = parse_program(&source).expect("body should parse");
    assert_eq!(program.functions.len(), 1);
    program.functions.remove(0).body
}

fn int() -> Option<Type> {
    Some(Type::base("int"))
}

#[rstest]
#[case::const_def("x: int = const 4;", Statement::const_def("x", int(), Literal::Int(4)))]
#[case::value_op("x: int = id y;", Statement::value_op("x", int(), "id", ["y"]))]
#[case::effect_op("print x;", Statement::effect_op("print", ["x"]))]
#[case::label("l:", Statement::label("l"))]
#[case::untyped_const("x = const 4;", Statement::const_def("x", None, Literal::Int(4)))]
#[case::untyped_value_op("sum = add a b;", Statement::value_op("sum", None, "add", ["a", "b"]))]
#[case::value_op_without_args("r: int = call;", Statement::value_op("r", int(), "call", Vec::<String>::new()))]
#[case::effect_op_without_args("ret;", Statement::effect_op("ret", Vec::<String>::new()))]
#[case::const_opcode_with_identifier("x = const y;", Statement::value_op("x", None, "const", ["y"]))]
#[case::const_as_effect_opcode("const;", Statement::effect_op("const", Vec::<String>::new()))]
#[case::pointer_dest("p: ptr<int> = alloc n;", Statement::value_op("p", Some(Type::pointer(Type::base("int"))), "alloc", ["n"]))]
fn disambiguates_statement_forms(#[case] text: &str, #[case] expected: Statement) {
    assert_eq!(body_of(text), vec![expected]);
}

#[rstest]
#[case::int("4", Literal::Int(4))]
#[case::negative_int("-12", Literal::Int(-12))]
#[case::signed_int("+3", Literal::Int(3))]
#[case::float("4.0", Literal::Float(4.0))]
#[case::leading_dot(".5", Literal::Float(0.5))]
#[case::trailing_dot("1.", Literal::Float(1.0))]
#[case::negative_float("-0.25", Literal::Float(-0.25))]
#[case::bool_true("true", Literal::Bool(true))]
#[case::bool_false("false", Literal::Bool(false))]
fn literal_spelling_picks_variant(#[case] text: &str, #[case] expected: Literal) {
    let body = body_of(&format!("v = const {text};"));
    assert_eq!(body, vec![Statement::const_def("v", None, expected)]);
}

#[rstest]
#[case::missing_semicolon("main { print x }")]
#[case::unmatched_open_brace("main { ret;")]
#[case::stray_close_brace("main { ret; } }")]
#[case::missing_body("main")]
#[case::two_literals("main { x = const 4 5; }")]
#[case::unclosed_pointer("main { p: ptr<int = alloc n; }")]
#[case::bad_character("main { x = add a $ b; }")]
#[case::trailing_comma_in_args("f(a: int,) { }")]
fn rejects_malformed_text(#[case] source: &str) {
    assert!(
        matches!(parse_program(source), Err(Error::Syntax(_))),
        "expected a syntax error for {source:?}"
    );
}

#[rstest]
#[case::int_overflow("main { x: int = const 9223372036854775808; }")]
#[case::int_underflow("main { x: int = const -9223372036854775809; }")]
fn rejects_out_of_range_literals(#[case] source: &str) {
    match parse_program(source) {
        Err(Error::Conversion(err)) => assert_eq!(err.reason, "integer out of range"),
        other => panic!("expected a conversion error, got {other:?}"),
    }
}

#[test]
fn accepts_integer_extremes() {
    let body = body_of("lo = const -9223372036854775808; hi = const 9223372036854775807;");
    assert_eq!(
        body,
        vec![
            Statement::const_def("lo", None, Literal::Int(i64::MIN)),
            Statement::const_def("hi", None, Literal::Int(i64::MAX)),
        ]
    );
}

#[test]
fn label_then_untyped_value_op_reads_as_typed_value_op() {
    // Whitespace carries no meaning, so `l:` followed by `x = ...` has the
    // same tokens as a value op with destination `l` and type `x`.
    assert_eq!(
        body_of("l: x = id y;"),
        vec![Statement::value_op("l", Some(Type::base("x")), "id", ["y"])]
    );
}

#[test]
fn label_then_typed_value_op_stays_separate() {
    assert_eq!(
        body_of("l: x: int = id y;"),
        vec![
            Statement::label("l"),
            Statement::value_op("x", int(), "id", ["y"]),
        ]
    );
}

#[test]
fn consecutive_labels_and_jumps() {
    assert_eq!(
        body_of("a: b: jmp a; br c a b;"),
        vec![
            Statement::label("a"),
            Statement::label("b"),
            Statement::effect_op("jmp", ["a"]),
            Statement::effect_op("br", ["c", "a", "b"]),
        ]
    );
}

#[test]
fn comments_and_layout_are_ignored() {
    let source = "# leading comment\nmain {\n\n  v: int = const 1; # trailing\n\tprint v;\n}\n";
    let program = parse_program(source).unwrap();
    assert_eq!(
        program.functions[0].body,
        vec![
            Statement::const_def("v", int(), Literal::Int(1)),
            Statement::effect_op("print", ["v"]),
        ]
    );
}

#[test]
fn identifiers_may_contain_dots_and_percent() {
    assert_eq!(
        body_of("%x.1: int = add %a b.c;"),
        vec![Statement::value_op("%x.1", int(), "add", ["%a", "b.c"])]
    );
}

#[test]
fn syntax_error_reports_line_and_column() {
    let err = match parse_program("main {\n  v: int = const 1\n  print v;\n}") {
        Err(Error::Syntax(err)) => err,
        other => panic!("expected a syntax error, got {other:?}"),
    };
    // `print` on line 3 is where the `;` should have been
    assert_eq!((err.line, err.column), (3, 3));
}
