//! # shunter
//!
//! shunter evaluates a single-line infix arithmetic expression and produces
//! one floating-point result. Expressions may contain numeric literals, the
//! binary operators `+ - * / ^`, the unary functions `sin cos tg ln sqrt`,
//! and parentheses.
//!
//! Input flows through three stages in strict order: the lexer turns the
//! text into tokens, the shunting-yard converter reorders them into postfix
//! (reverse Polish) form, and the evaluator reduces the postfix sequence to
//! a number with an explicit value stack. Nothing is shared between calls;
//! every evaluation owns and discards its own state.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::evaluate, lexer::tokenize, postfix::to_postfix};

/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing,
/// converting, or evaluating an expression. Each stage has its own enum with
/// detailed, named-field variants, and a top-level [`Error`](error::Error)
/// wraps them for callers of the public entry point.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter,
///   evaluator).
/// - Attaches the offending character, name, or literal where applicable.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three stages of expression evaluation.
///
/// This module ties together the lexer, the infix-to-postfix converter, and
/// the postfix evaluator. The stages run strictly in sequence and exchange
/// nothing but token sequences; none of them retains state across calls.
///
/// # Responsibilities
/// - Coordinates the pipeline stages: lexer, converter, evaluator.
/// - Provides the individual stage entry points for callers that want the
///   intermediate forms.
/// - Propagates stage errors without recovery or retry.
pub mod interpreter;
/// Defines the token types exchanged between the pipeline stages.
///
/// This module declares the [`Token`](token::Token) enum along with the
/// operator and function types it carries, including operator precedence,
/// associativity, and the arithmetic each operator and function performs.
///
/// # Responsibilities
/// - Defines the closed set of token kinds.
/// - Encodes precedence and associativity on the operator type itself.
/// - Renders tokens back to their surface text for display.
pub mod token;

/// Evaluates an infix arithmetic expression to a single value.
///
/// This is the top-level entry point: it runs the full
/// tokenize → postfix → evaluate pipeline and returns either the result or
/// the first error any stage reports. Division by zero and domain errors are
/// not errors at this level; they yield `inf`/`NaN` per IEEE-754.
///
/// # Errors
/// Returns an [`error::Error`] wrapping the failing stage's error: a
/// [`LexError`](error::LexError) for text that cannot be tokenized, a
/// [`SyntaxError`](error::SyntaxError) for unbalanced parentheses, or an
/// [`EvalError`](error::EvalError) for a token sequence that does not reduce
/// to exactly one value.
///
/// # Examples
/// ```
/// use shunter::evaluate_expression;
///
/// assert_eq!(evaluate_expression("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate_expression("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(evaluate_expression("2^3^2").unwrap(), 512.0);
/// assert_eq!(evaluate_expression("sqrt(16)").unwrap(), 4.0);
///
/// // Unbalanced parentheses are reported, not panicked on.
/// assert!(evaluate_expression("(1+2").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, error::Error> {
    let tokens = tokenize(source)?;
    let postfix = to_postfix(tokens)?;
    let result = evaluate(&postfix)?;
    Ok(result)
}
