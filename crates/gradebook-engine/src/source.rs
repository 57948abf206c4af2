use crate::error::SourceError;

/// Execution-shape hint forwarded to the source. Carries no behavioral
/// difference in returned data; sources that fan out per relation may use
/// it to split round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecShape {
    #[default]
    Single,
    Split,
}

/// Options the evaluator derives from a specification and passes to
/// [`QuerySource::scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    /// Bypass the source's ambient filters (e.g. soft-delete exclusion).
    pub ignore_global_filters: bool,
    /// The scan is read-only; the source should not track the entities it
    /// hands out for change detection.
    pub no_tracking: bool,
    pub shape: ExecShape,
}

pub type SourceIter<'a, E> = Box<dyn Iterator<Item = Result<E, SourceError>> + 'a>;

/// The store seam the evaluator shapes queries against.
///
/// A source supplies the base entity stream and knows how to eagerly
/// attach named relation paths. Everything else — filtering, ordering,
/// grouping, distinct, paging — is the evaluator's job.
pub trait QuerySource<E> {
    /// The base entity stream. Sources apply their global filters here
    /// unless `opts.ignore_global_filters` is set.
    fn scan(&self, opts: &ScanOptions) -> Result<SourceIter<'_, E>, SourceError>;

    /// Eagerly materialize one relation path onto one entity. The
    /// evaluator calls this only for entities in the final page.
    fn attach(&self, entity: &mut E, path: &str) -> Result<(), SourceError>;
}
