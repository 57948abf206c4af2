mod cancel;
mod error;
mod evaluate;
mod memory;
mod source;

pub use cancel::CancellationToken;
pub use error::{EngineError, SourceError};
pub use evaluate::{PreparedQuery, evaluate};
pub use memory::MemorySource;
pub use source::{ExecShape, QuerySource, ScanOptions, SourceIter};
