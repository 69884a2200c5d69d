use logos::Logos;

use crate::{error::ParseError, interpreter::validator::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the expression language.
/// Spaces, tabs, feeds and line breaks are skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Signs are separate tokens.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
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
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digit run does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits `source` into tokens paired with their 1-based column.
///
/// Whitespace is dropped. The first character that cannot start a token stops
/// the scan.
///
/// # Errors
/// - `LiteralTooLarge` if a digit run overflows `i64`.
/// - `UnexpectedToken` for any character outside the language.
///
/// # Example
/// ```
/// use stackcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("12 * (3)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 1),
///                 (Token::Star, 4),
///                 (Token::LParen, 6),
///                 (Token::Integer(3), 7),
///                 (Token::RParen, 8)]);
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);
    let mut columns = ColumnCounter::new(source);

    while let Some(token) = lexer.next() {
        let column = columns.advance_to(lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { column });
                }
                return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                         column });
            },
        }
    }

    Ok(tokens)
}

/// Maps increasing byte offsets to 1-based character columns.
///
/// Only the characters between the previous offset and the new one are
/// counted, so a whole scan costs one pass over the source.
struct ColumnCounter<'s> {
    source: &'s str,
    offset: usize,
    column: usize,
}

impl<'s> ColumnCounter<'s> {
    const fn new(source: &'s str) -> Self {
        Self { source,
               offset: 0,
               column: 1 }
    }

    /// Moves to `offset`, which must not be behind the previous one.
    fn advance_to(&mut self, offset: usize) -> usize {
        if let Some(skipped) = self.source.get(self.offset..offset) {
            self.column += skipped.chars().count();
            self.offset = offset;
        }
        self.column
    }
}
