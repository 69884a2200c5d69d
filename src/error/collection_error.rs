#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents failures of positional list operations.
pub enum CollectionError {
    /// A position past the end of the list was requested.
    IndexOutOfBounds {
        /// The length of the list at the time of the call.
        len:   usize,
        /// The index that was actually requested.
        found: usize,
    },
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { len, found } => write!(f,
                                                            "Index out of bounds. Length is {len}, but found {found} instead."),
        }
    }
}

impl std::error::Error for CollectionError {}
