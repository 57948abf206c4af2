use std::fmt;

/// Errors raised by a query source during scanning or relation attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    Store(String),
    UnknownPath(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Store(msg) => write!(f, "store error: {msg}"),
            SourceError::UnknownPath(path) => write!(f, "unknown relation path: {path}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Evaluation errors. Source errors pass through unreinterpreted; the
/// evaluator adds only cancellation of the count step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    Source(SourceError),
    Cancelled,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Source(e) => write!(f, "{e}"),
            EngineError::Cancelled => write!(f, "query evaluation cancelled"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Source(e) => Some(e),
            EngineError::Cancelled => None,
        }
    }
}

impl From<SourceError> for EngineError {
    fn from(e: SourceError) -> Self {
        EngineError::Source(e)
    }
}
