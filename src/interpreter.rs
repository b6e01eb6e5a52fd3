/// The evaluator module reduces a postfix token sequence to one number.
///
/// The evaluator walks the postfix sequence left to right with an explicit
/// value stack, applying operators and functions as they appear. It is the
/// final stage of the pipeline and the only one that performs arithmetic.
///
/// # Responsibilities
/// - Pushes numeric literals and applies operators/functions to popped
///   operands.
/// - Reports stack underflow and expressions that do not reduce to a single
///   value.
/// - Lets division-by-zero and domain errors propagate as `inf`/`NaN` per
///   IEEE-754 rather than failing.
pub mod evaluator;
/// The lexer module tokenizes an expression for further processing.
///
/// The lexer (tokenizer) reads the raw input text and produces the ordered
/// token sequence consumed by the infix-to-postfix converter. This is the
/// first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into numbers, operators, function
///   names, and parentheses, skipping whitespace.
/// - Validates function names against the recognized set and numeric
///   literals against the floating-point grammar.
/// - Reports lexical errors with the byte offset of the offending text.
pub mod lexer;
/// The postfix module reorders infix tokens into postfix (reverse Polish)
/// order.
///
/// This is the shunting-yard stage: a single pass over the token sequence
/// with one operator stack resolves precedence, associativity, parentheses,
/// and function application, producing a sequence the evaluator can reduce
/// without ever looking ahead.
///
/// # Responsibilities
/// - Emits operands directly and holds operators back until they outrank
///   what follows.
/// - Right-associates exponentiation and binds functions to the
///   parenthesized group that follows them.
/// - Reports unbalanced parenthesis nesting.
pub mod postfix;
