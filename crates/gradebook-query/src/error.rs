use std::fmt;

/// Construction-time argument errors.
///
/// These are programmer (or bad-request) errors raised by the failing
/// combinator call itself; nothing downstream recovers from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    EmptyIncludePath,
    EmptySortKey,
    EmptyGroupKey,
    InvalidPageSize(usize),
    InvalidPageIndex(usize),
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::EmptyIncludePath => write!(f, "include path cannot be empty"),
            SpecError::EmptySortKey => write!(f, "sort selector key cannot be empty"),
            SpecError::EmptyGroupKey => write!(f, "group selector key cannot be empty"),
            SpecError::InvalidPageSize(n) => {
                write!(f, "page size must be greater than 0, got {n}")
            }
            SpecError::InvalidPageIndex(n) => {
                write!(f, "page index must be greater than 0, got {n}")
            }
        }
    }
}

impl std::error::Error for SpecError {}
