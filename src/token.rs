use std::fmt;

/// A classified unit of the input expression.
///
/// Tokens are the unit of exchange between all three pipeline stages: the
/// lexer produces them, the infix-to-postfix converter reorders them, and the
/// evaluator reduces them to a single number. The set of kinds is closed;
/// per-kind payloads carry everything a stage needs, so no field is ever
/// "meaningful only for" some other kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, already parsed to its floating-point value.
    ///
    /// Carrying the parsed value end-to-end avoids the precision loss of
    /// stringifying intermediate results and re-parsing them at evaluation
    /// time.
    Number(f64),
    /// One of the binary operators `+ - * / ^`.
    Op(BinOp),
    /// One of the unary functions `sin cos tg ln sqrt`.
    Func(Func),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Op(op) => write!(f, "{op}"),
            Self::Func(func) => write!(f, "{func}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// A binary arithmetic operator.
///
/// Precedence and associativity are intrinsic to the operator, so they live
/// here rather than on the token that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinOp {
    /// Returns the binding strength of the operator.
    ///
    /// Addition and subtraction bind weakest, multiplication and division
    /// bind tighter, and exponentiation binds tightest.
    ///
    /// # Example
    /// ```
    /// use shunter::token::BinOp;
    ///
    /// assert!(BinOp::Mul.precedence() > BinOp::Add.precedence());
    /// assert!(BinOp::Pow.precedence() > BinOp::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
            Self::Pow => 4,
        }
    }

    /// Returns `true` for operators that group right-to-left when chained.
    ///
    /// Only exponentiation is right-associative: `2^3^2` groups as
    /// `2^(3^2)`. All other operators group left-to-right.
    #[must_use]
    pub const fn is_right_associative(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Applies the operator to its two operands.
    ///
    /// Division by zero is not checked; it produces an IEEE-754 infinity or
    /// NaN like any other floating-point operation.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Sub => a - b,
            Self::Mul => a * b,
            Self::Div => a / b,
            Self::Pow => a.powf(b),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// A built-in unary function.
///
/// The trigonometric functions operate on radians; `Ln` is the natural
/// logarithm. Domain errors (`ln` of a non-positive number, `sqrt` of a
/// negative number) are not checked and propagate as `inf`/`NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    /// `sin`
    Sin,
    /// `cos`
    Cos,
    /// `tg` (tangent, under its shorter surface name)
    Tan,
    /// `ln`
    Ln,
    /// `sqrt`
    Sqrt,
}

impl Func {
    /// Looks up a function by its surface name.
    ///
    /// Matching is case-sensitive; anything other than the five recognized
    /// names returns `None`.
    ///
    /// # Example
    /// ```
    /// use shunter::token::Func;
    ///
    /// assert_eq!(Func::from_name("tg"), Some(Func::Tan));
    /// assert_eq!(Func::from_name("tan"), None);
    /// assert_eq!(Func::from_name("Sin"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tg" => Some(Self::Tan),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    /// Applies the function to its single operand.
    #[must_use]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tg",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        };
        write!(f, "{name}")
    }
}
