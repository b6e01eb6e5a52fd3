use logos::Logos;

use crate::{
    error::LexError,
    token::{BinOp, Func, Token},
};

/// The maximum number of tokens a single expression may produce.
///
/// Longer expressions fail with [`LexError::CapacityExceeded`] instead of
/// being scanned further.
pub const MAX_TOKENS: usize = 256;

/// Raw lexemes as recognized by the generated scanner.
///
/// A `Word` is any run of letters; whether it names a known function is
/// decided in [`tokenize`], which keeps the scanner itself free of the
/// function table.
#[derive(Logos, Debug, PartialEq, Clone)]
enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    ///
    /// A digit, or a dot immediately followed by a digit, starts a maximal
    /// run of digits and dots. A run with more than one dot matches here but
    /// fails the float conversion, which surfaces as a malformed-number
    /// error.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// A run of letters; function names such as `sin` or `sqrt`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Word(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// Returns `None` when the scanned run of digits and dots is not a valid
/// floating-point numeral, turning the match into an error token.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Scans an expression into its token sequence.
///
/// Performs a single left-to-right pass with no backtracking. Whitespace is
/// skipped; everything else must form a number, a recognized function name,
/// an operator, or a parenthesis.
///
/// # Errors
/// - [`LexError::InvalidCharacter`] for a character that starts no token.
/// - [`LexError::MalformedNumber`] for a digit/dot run that is not a valid
///   numeral, such as `1.2.3`.
/// - [`LexError::UnknownFunction`] for a letter run that is not one of
///   `sin cos tg ln sqrt` (case-sensitive).
/// - [`LexError::CapacityExceeded`] when the expression would produce more
///   than [`MAX_TOKENS`] tokens.
///
/// # Example
/// ```
/// use shunter::{interpreter::lexer::tokenize, token::{BinOp, Token}};
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Op(BinOp::Add), Token::Number(2.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        let token = match raw {
            Ok(RawToken::Number(value)) => Token::Number(value),
            Ok(RawToken::Word(word)) => match Func::from_name(&word) {
                Some(func) => Token::Func(func),
                None => {
                    return Err(LexError::UnknownFunction { name: word,
                                                           pos:  lexer.span().start, });
                },
            },
            Ok(RawToken::Plus) => Token::Op(BinOp::Add),
            Ok(RawToken::Minus) => Token::Op(BinOp::Sub),
            Ok(RawToken::Star) => Token::Op(BinOp::Mul),
            Ok(RawToken::Slash) => Token::Op(BinOp::Div),
            Ok(RawToken::Caret) => Token::Op(BinOp::Pow),
            Ok(RawToken::LParen) => Token::LParen,
            Ok(RawToken::RParen) => Token::RParen,
            Ok(RawToken::Ignored) => continue,
            Err(()) => {
                let slice = lexer.slice();
                let pos = lexer.span().start;

                // A slice containing a digit is a number rule match whose
                // float conversion failed; anything else never matched a
                // rule at all.
                if slice.bytes().any(|b| b.is_ascii_digit()) {
                    return Err(LexError::MalformedNumber { literal: slice.to_string(),
                                                           pos });
                }
                let character = slice.chars().next().unwrap_or('\0');
                return Err(LexError::InvalidCharacter { character, pos });
            },
        };

        if tokens.len() == MAX_TOKENS {
            return Err(LexError::CapacityExceeded { limit: MAX_TOKENS });
        }
        tokens.push(token);
    }

    Ok(tokens)
}
