use shunter::{
    error::{Error, EvalError, LexError, SyntaxError},
    evaluate_expression,
};

fn eval(src: &str) -> f64 {
    evaluate_expression(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn eval_err(src: &str) -> Error {
    match evaluate_expression(src) {
        Ok(v) => panic!("'{src}' evaluated to {v} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_close(src: &str, expected: f64) {
    let result = eval(src);
    assert!((result - expected).abs() < 1e-9,
            "'{src}' evaluated to {result}, expected {expected}");
}

#[test]
fn plain_literals() {
    assert_eq!(eval("42"), 42.0);
    assert_eq!(eval("3.25"), 3.25);
    assert_eq!(eval(".5"), 0.5);
    assert_eq!(eval("  7  "), 7.0);
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval("1+2"), 3.0);
    assert_eq!(eval("8-5"), 3.0);
    assert_eq!(eval("7*9"), 63.0);
    assert_eq!(eval("10/4"), 2.5);
    assert_eq!(eval("2^10"), 1024.0);
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("10-4-3"), 3.0);
    assert_eq!(eval("2+3*4^2"), 50.0);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2^3^2"), 512.0);
    assert_eq!(eval("(2^3)^2"), 64.0);
}

#[test]
fn function_binding() {
    assert_eq!(eval("sqrt(16)"), 4.0);
    assert_eq!(eval("sin(0)"), 0.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert_eq!(eval("ln(1)"), 0.0);
    assert_eq!(eval("tg(0)"), 0.0);
    // The function applies to the whole parenthesized group.
    assert_eq!(eval("sqrt(9+7)"), 4.0);
    assert_eq!(eval("sqrt(16)+1"), 5.0);
    assert_close("sin(3.141592653589793)", 0.0);
}

#[test]
fn nested_functions_and_groups() {
    assert_eq!(eval("sqrt(sqrt(16))"), 2.0);
    assert_eq!(eval("((1+2))*((3))"), 9.0);
    assert_close("cos(sin(0))", 1.0);
}

#[test]
fn mismatched_parentheses() {
    assert!(matches!(eval_err("(1+2"),
                     Error::Syntax(SyntaxError::MismatchedParentheses)));
    assert!(matches!(eval_err("1+2)"),
                     Error::Syntax(SyntaxError::MismatchedParentheses)));
    assert!(matches!(eval_err("sqrt(16"),
                     Error::Syntax(SyntaxError::MismatchedParentheses)));
}

#[test]
fn unknown_function_is_rejected() {
    match eval_err("2+x") {
        Error::Lex(LexError::UnknownFunction { name, .. }) => assert_eq!(name, "x"),
        other => panic!("expected UnknownFunction, got {other:?}"),
    }
    // Function names are case-sensitive.
    assert!(matches!(eval_err("Sin(0)"),
                     Error::Lex(LexError::UnknownFunction { .. })));
    assert!(matches!(eval_err("tan(0)"),
                     Error::Lex(LexError::UnknownFunction { .. })));
}

#[test]
fn invalid_character_is_rejected() {
    match eval_err("2#3") {
        Error::Lex(LexError::InvalidCharacter { character, pos }) => {
            assert_eq!(character, '#');
            assert_eq!(pos, 1);
        },
        other => panic!("expected InvalidCharacter, got {other:?}"),
    }
    // A dot not followed by a digit starts no token.
    assert!(matches!(eval_err("1 + ."),
                     Error::Lex(LexError::InvalidCharacter { character: '.', .. })));
}

#[test]
fn malformed_number_is_rejected() {
    match eval_err("1.2.3") {
        Error::Lex(LexError::MalformedNumber { literal, .. }) => assert_eq!(literal, "1.2.3"),
        other => panic!("expected MalformedNumber, got {other:?}"),
    }
}

#[test]
fn capacity_is_bounded() {
    // 128 numbers and 127 operators fit; one more operand does not.
    let within = vec!["1"; 128].join("+");
    assert_eq!(eval(&within), 128.0);

    let beyond = vec!["1"; 129].join("+");
    assert!(matches!(eval_err(&beyond),
                     Error::Lex(LexError::CapacityExceeded { limit: 256 })));
}

#[test]
fn no_unary_minus() {
    // A leading '-' lexes as the binary operator and runs out of operands.
    assert!(matches!(eval_err("-5+3"),
                     Error::Eval(EvalError::InsufficientOperands { .. })));
}

#[test]
fn malformed_expressions() {
    match eval_err("2 3") {
        Error::Eval(EvalError::MalformedResult { values }) => assert_eq!(values, 2),
        other => panic!("expected MalformedResult, got {other:?}"),
    }
    match eval_err("") {
        Error::Eval(EvalError::MalformedResult { values }) => assert_eq!(values, 0),
        other => panic!("expected MalformedResult, got {other:?}"),
    }
    assert!(matches!(eval_err("1+"),
                     Error::Eval(EvalError::InsufficientOperands { .. })));
    assert!(matches!(eval_err("sin()"),
                     Error::Eval(EvalError::InsufficientOperands { .. })));
}

#[test]
fn numeric_edge_cases_are_not_errors() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval("ln(0)"), f64::NEG_INFINITY);
    assert!(eval("sqrt(0-1)").is_nan());
    assert!(eval("0/0").is_nan());
}

#[test]
fn evaluation_is_idempotent() {
    let src = "sin(1)+2^0.5*ln(3)";
    let first = eval(src);
    let second = eval(src);
    assert_eq!(first.to_bits(), second.to_bits());
}
