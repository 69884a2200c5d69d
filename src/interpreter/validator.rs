use crate::{
    error::ParseError,
    interpreter::lexer::{Token, tokenize},
    operator::{BinaryOperator, token_to_binary_operator},
};

/// Result type used by the lexer and validator.
pub type ParseResult<T> = Result<T, ParseError>;

/// Returns `true` if `source` is a well-formed expression.
///
/// This is the boolean front of [`check`]: it tokenizes the text and throws
/// away the reason for a rejection.
///
/// # Example
/// ```
/// use stackcalc::interpreter::validator::validate;
///
/// assert!(validate("(1 + 2) * -3"));
/// assert!(validate("1++2"));
/// assert!(!validate("(1+2"));
/// assert!(!validate("1+2)"));
/// assert!(!validate("2*/3"));
/// assert!(!validate("4-"));
/// ```
#[must_use]
pub fn validate(source: &str) -> bool {
    tokenize(source).and_then(|tokens| check(&tokens)).is_ok()
}

/// Checks the shape of a token stream before it is evaluated.
///
/// The scan tracks the parenthesis depth and whether the current position
/// "precedes" an operand: the start of input, after `(` and after any
/// operator. In a preceding position only `+` or `-` may appear, where they
/// act as a sign. Numbers and `)` end a preceding position.
///
/// Runs of signs such as `1+-2` or `--3` are accepted, since every operator
/// re-arms the preceding position.
///
/// # Parameters
/// - `tokens`: `(Token, column)` pairs from [`tokenize`].
///
/// # Errors
/// - `UnmatchedClosingParen` as soon as a `)` closes nothing.
/// - `MisplacedOperator` for `*` or `/` without a left operand.
/// - `UnclosedParen` if the input ends inside parentheses.
/// - `TrailingOperator` if the input ends on an operator.
/// - `EmptyExpression` if there are no tokens.
pub fn check(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut depth = 0usize;
    let mut preceding = true;
    let mut last_column = 0;

    for &(token, column) in tokens {
        last_column = column;
        match token {
            Token::LParen => {
                depth += 1;
                preceding = true;
            },
            Token::RParen => {
                depth = depth.checked_sub(1)
                             .ok_or(ParseError::UnmatchedClosingParen { column })?;
                preceding = false;
            },
            Token::Integer(_) => preceding = false,
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                if preceding
                   && let Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) =
                       token_to_binary_operator(&token)
                {
                    return Err(ParseError::MisplacedOperator { op: op.symbol(),
                                                               column });
                }
                preceding = true;
            },
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    if depth > 0 {
        return Err(ParseError::UnclosedParen { open: depth });
    }
    if preceding {
        return Err(ParseError::TrailingOperator { column: last_column });
    }

    Ok(())
}
