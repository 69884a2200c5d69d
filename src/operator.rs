use crate::interpreter::lexer::Token;

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the evaluation priority of the operator.
    ///
    /// Higher priorities bind tighter: `*` and `/` rank above `+` and `-`.
    /// Operators of equal priority are applied left to right.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::operator::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.priority() > BinaryOperator::Add.priority());
    /// assert_eq!(BinaryOperator::Add.priority(), BinaryOperator::Sub.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An entry of the evaluator's operator stack.
///
/// A left parenthesis has no priority of its own; it only acts as a barrier
/// that stops operators below it from being applied early.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// A pending binary operator.
    Operator(BinaryOperator),
    /// An open `(` waiting for its `)`.
    LeftParen,
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for literals and parentheses.
///
/// # Example
/// ```
/// use stackcalc::{
///     interpreter::lexer::Token,
///     operator::{BinaryOperator, token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash),
///            Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
