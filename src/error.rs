/// Evaluation errors.
///
/// Contains the error types raised while reducing a postfix token sequence
/// to a single value: operators or functions reached with too few operands,
/// and expressions that do not reduce to exactly one value.
pub mod eval_error;
/// Lexical errors.
///
/// Defines all error types that can occur while scanning the raw input text
/// into tokens: unrecognized characters, malformed numeric literals, unknown
/// function names, and oversized expressions.
pub mod lex_error;
/// Syntax errors.
///
/// Contains the error types detected while converting the token sequence to
/// postfix order. The only structural defect the converter can observe is
/// unbalanced parenthesis nesting.
pub mod syntax_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Any error produced while evaluating an expression.
///
/// Wraps the per-stage error types so that callers of
/// [`evaluate_expression`](crate::evaluate_expression) handle a single type.
/// Each stage error converts into this one via `From`, which lets the
/// pipeline chain stages with `?`.
pub enum Error {
    /// The input text could not be tokenized.
    Lex(LexError),
    /// The token sequence could not be converted to postfix order.
    Syntax(SyntaxError),
    /// The postfix sequence could not be reduced to a single value.
    Eval(EvalError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
