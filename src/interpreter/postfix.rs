use crate::{
    error::SyntaxError,
    token::{BinOp, Token},
};

/// Decides whether the operator on top of the stack must be emitted before
/// `op` is pushed.
///
/// A function on the stack binds tighter than any operator. Between two
/// operators, the one on the stack wins on strictly higher precedence, or on
/// equal precedence when the incoming operator is left-associative. The
/// equal-precedence case never pops for `^`, which right-associates chained
/// exponentiation.
fn outranks(top: &Token, op: BinOp) -> bool {
    match top {
        Token::Func(_) => true,
        Token::Op(top_op) => {
            top_op.precedence() > op.precedence()
            || (top_op.precedence() == op.precedence() && !op.is_right_associative())
        },
        _ => false,
    }
}

/// Converts an infix token sequence to postfix (reverse Polish) order.
///
/// One pass of the shunting-yard algorithm: operands go straight to the
/// output, operators wait on a stack until something of lower rank arrives,
/// and a closing parenthesis flushes the stack down to its matching `(` —
/// followed by the function that owns the group, if one sits beneath it.
///
/// # Errors
/// [`SyntaxError::MismatchedParentheses`] when a `)` has no matching `(` on
/// the stack, or a `(` is still on the stack after the last token.
///
/// # Example
/// ```
/// use shunter::{interpreter::{lexer::tokenize, postfix::to_postfix}, token::{BinOp, Token}};
///
/// let postfix = to_postfix(tokenize("2+3*4").unwrap()).unwrap();
/// assert_eq!(postfix,
///            vec![Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Number(4.0),
///                 Token::Op(BinOp::Mul),
///                 Token::Op(BinOp::Add)]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Func(_) | Token::LParen => stack.push(token),
            Token::Op(op) => {
                while let Some(top) = stack.last() {
                    if !outranks(top, op) {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                }
                stack.push(token);
            },
            Token::RParen => {
                loop {
                    match stack.pop() {
                        Some(Token::LParen) => break,
                        Some(popped) => output.push(popped),
                        None => return Err(SyntaxError::MismatchedParentheses),
                    }
                }
                // A function directly beneath the group binds to it.
                if let Some(Token::Func(_)) = stack.last() {
                    if let Some(func) = stack.pop() {
                        output.push(func);
                    }
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token == Token::LParen {
            return Err(SyntaxError::MismatchedParentheses);
        }
        output.push(token);
    }

    Ok(output)
}
