/// Parsing errors.
///
/// Defines every reason an input line can be rejected before evaluation
/// starts: unknown characters, oversized literals, unbalanced parentheses and
/// misplaced or trailing operators.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while the two-stack evaluator runs, such as
/// division by zero, operators without operands and overflow.
pub mod runtime_error;
/// Container errors.
///
/// Errors reported by the list and stack exercises.
pub mod collection_error;

pub use collection_error::CollectionError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced while turning an input line into a result.
///
/// The two variants keep apart input that was rejected before evaluation
/// (`Parse`) and input that was accepted but could not be calculated
/// (`Runtime`).
pub enum Error {
    /// The input was malformed.
    Parse(ParseError),
    /// The input was well formed but the calculation failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns `true` if the input was rejected before evaluation.
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
