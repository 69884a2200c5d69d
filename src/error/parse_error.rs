#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all reasons an expression is rejected before evaluation.
pub enum ParseError {
    /// Found a character that is not part of the expression language.
    UnexpectedToken {
        /// The offending text.
        token:  String,
        /// The 1-based column where it starts.
        column: usize,
    },
    /// An integer literal does not fit into a signed 64-bit integer.
    LiteralTooLarge {
        /// The 1-based column where the literal starts.
        column: usize,
    },
    /// A `)` appeared without a matching `(` before it.
    UnmatchedClosingParen {
        /// The 1-based column of the `)`.
        column: usize,
    },
    /// The input ended while parentheses were still open.
    UnclosedParen {
        /// How many `(` are still waiting for their `)`.
        open: usize,
    },
    /// A binary-only operator appeared where an operand was expected.
    MisplacedOperator {
        /// The operator symbol.
        op:     char,
        /// The 1-based column of the operator.
        column: usize,
    },
    /// The expression ends on an operator.
    TrailingOperator {
        /// The 1-based column of the last operator.
        column: usize,
    },
    /// The input holds no tokens at all.
    EmptyExpression,
    /// The input line is longer than the configured maximum.
    InputTooLong {
        /// Length of the rejected line in characters.
        length: usize,
        /// The configured maximum.
        max:    usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, column } => {
                write!(f, "Error at column {column}: Unexpected token: {token}.")
            },
            Self::LiteralTooLarge { column } => {
                write!(f, "Error at column {column}: Literal is too large.")
            },
            Self::UnmatchedClosingParen { column } => write!(f,
                                                             "Error at column {column}: Closing parenthesis ')' has no matching '('."),
            Self::UnclosedParen { open } => {
                write!(f, "Error: {open} parenthesis '(' left unclosed.")
            },
            Self::MisplacedOperator { op, column } => write!(f,
                                                             "Error at column {column}: Operator '{op}' is missing its left operand."),
            Self::TrailingOperator { column } => write!(f,
                                                        "Error at column {column}: Expression cannot end with an operator."),
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
            Self::InputTooLong { length, max } => write!(f,
                                                         "Error: Input is {length} characters long, the maximum is {max}."),
        }
    }
}

impl std::error::Error for ParseError {}
