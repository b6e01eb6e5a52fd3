#[derive(Debug)]
/// Represents all errors that can occur while converting tokens to postfix
/// order.
pub enum SyntaxError {
    /// Parenthesis nesting is unbalanced.
    ///
    /// Raised both for a `)` with no matching `(` and for a `(` that is
    /// still unmatched when the input ends.
    MismatchedParentheses,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Mismatched parentheses."),
        }
    }
}

impl std::error::Error for SyntaxError {}
