#[derive(Debug)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Encountered a character that starts no known token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        pos:       usize,
    },
    /// A numeric literal could not be parsed as a floating-point value.
    ///
    /// The scanner consumes a maximal run of digits and dots, so a literal
    /// with more than one dot (such as `1.2.3`) lands here.
    MalformedNumber {
        /// The literal text as scanned.
        literal: String,
        /// Byte offset of the literal in the input.
        pos:     usize,
    },
    /// A name was scanned that is not one of the recognized functions.
    UnknownFunction {
        /// The name encountered.
        name: String,
        /// Byte offset of the name in the input.
        pos:  usize,
    },
    /// The expression produced more tokens than the supported maximum.
    CapacityExceeded {
        /// The maximum number of tokens per expression.
        limit: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, pos } => {
                write!(f, "Invalid character '{character}' at position {pos}.")
            },
            Self::MalformedNumber { literal, pos } => {
                write!(f, "Malformed number '{literal}' at position {pos}.")
            },
            Self::UnknownFunction { name, pos } => {
                write!(f, "Unknown function '{name}' at position {pos}.")
            },
            Self::CapacityExceeded { limit } => {
                write!(f, "Expression exceeds the maximum of {limit} tokens.")
            },
        }
    }
}

impl std::error::Error for LexError {}
