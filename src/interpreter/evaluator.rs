use crate::{error::EvalError, token::Token};

/// Reduces a postfix token sequence to a single value.
///
/// Walks the sequence left to right with one value stack: numbers are
/// pushed, a binary operator pops two values, a function pops one, and the
/// result of applying it is pushed back. After the last token the stack must
/// hold exactly the final result.
///
/// Arithmetic itself never fails here: division by zero and domain errors
/// yield `inf`/`NaN` per IEEE-754 and are returned as such.
///
/// # Errors
/// - [`EvalError::InsufficientOperands`] when an operator or function finds
///   too few values on the stack.
/// - [`EvalError::MalformedResult`] when the stack does not end up with
///   exactly one value, including the empty expression.
///
/// # Example
/// ```
/// use shunter::{interpreter::evaluator::evaluate, token::{BinOp, Token}};
///
/// let postfix = [Token::Number(2.0), Token::Number(3.0), Token::Op(BinOp::Add)];
/// assert_eq!(evaluate(&postfix).unwrap(), 5.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(*value),
            Token::Op(op) => {
                let b = pop_operand(&mut stack, token)?;
                let a = pop_operand(&mut stack, token)?;
                stack.push(op.apply(a, b));
            },
            Token::Func(func) => {
                let x = pop_operand(&mut stack, token)?;
                stack.push(func.apply(x));
            },
            // Parentheses never survive the conversion to postfix; treat a
            // stray one as an operand shortfall rather than panicking.
            Token::LParen | Token::RParen => {
                return Err(EvalError::InsufficientOperands { token: token.to_string() });
            },
        }
    }

    match stack.as_slice() {
        [result] => Ok(*result),
        _ => Err(EvalError::MalformedResult { values: stack.len() }),
    }
}

/// Pops one operand for `token`, reporting which token ran dry on underflow.
fn pop_operand(stack: &mut Vec<f64>, token: &Token) -> Result<f64, EvalError> {
    stack.pop()
         .ok_or_else(|| EvalError::InsufficientOperands { token: token.to_string() })
}
