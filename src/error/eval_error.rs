#[derive(Debug)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// An operator or function was reached with too few values on the
    /// evaluation stack.
    InsufficientOperands {
        /// The operator or function that could not be applied, as written.
        token: String,
    },
    /// After consuming the whole postfix sequence the evaluation stack did
    /// not hold exactly one value.
    MalformedResult {
        /// How many values were left on the stack.
        values: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { token } => {
                write!(f, "Not enough operands for '{token}'.")
            },
            Self::MalformedResult { values } => {
                write!(f,
                       "Malformed expression: expected a single result value, found {values}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
