#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum RuntimeError {
    /// An operator was applied with fewer than two operands available.
    MissingOperand {
        /// The operator symbol.
        op:     char,
        /// The 1-based column of the operator.
        column: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The 1-based column of the `/`.
        column: usize,
    },
    /// A parenthesis has no partner on the operator stack.
    MismatchedParentheses {
        /// The 1-based column of the parenthesis.
        column: usize,
    },
    /// The operand stack did not end with exactly one value.
    InvalidExpression {
        /// How many operands were left.
        operands: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The 1-based column of the operator.
        column: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { op, column } => {
                write!(f, "Error at column {column}: Operator '{op}' is missing operands.")
            },
            Self::DivisionByZero { column } => {
                write!(f, "Error at column {column}: Division by zero.")
            },
            Self::MismatchedParentheses { column } => {
                write!(f, "Error at column {column}: Mismatched parentheses.")
            },
            Self::InvalidExpression { operands } => write!(f,
                                                           "Error: Invalid expression, {operands} operands left instead of one."),
            Self::Overflow { column } => write!(f,
                                                "Error at column {column}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
