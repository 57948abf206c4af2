use std::sync::Arc;

use arc_swap::ArcSwap;
use gradebook_query::Predicate;

use crate::error::SourceError;
use crate::source::{QuerySource, ScanOptions, SourceIter};

type Resolver<E> = Arc<dyn Fn(&mut E, &str) -> Result<(), SourceError> + Send + Sync>;

/// In-memory query source backed by an atomically swapped snapshot.
///
/// Reads load the current snapshot and never block writers; inserts copy
/// and swap. An optional global filter models the ambient predicates a
/// persistent store would enforce (soft-delete exclusion and the like) —
/// `scan` applies it unless the options bypass it. Relation attachment is
/// delegated to a resolver closure; without one, every path is unknown.
pub struct MemorySource<E> {
    rows: ArcSwap<Vec<E>>,
    global_filter: Option<Predicate<E>>,
    resolver: Option<Resolver<E>>,
}

impl<E: Clone> Default for MemorySource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> MemorySource<E> {
    pub fn new() -> Self {
        Self {
            rows: ArcSwap::from_pointee(Vec::new()),
            global_filter: None,
            resolver: None,
        }
    }

    pub fn from_rows(rows: Vec<E>) -> Self {
        Self {
            rows: ArcSwap::from_pointee(rows),
            ..Self::new()
        }
    }

    pub fn with_global_filter(mut self, filter: Predicate<E>) -> Self {
        self.global_filter = Some(filter);
        self
    }

    pub fn with_resolver(
        mut self,
        resolver: impl Fn(&mut E, &str) -> Result<(), SourceError> + Send + Sync + 'static,
    ) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn insert(&self, row: E) {
        self.rows.rcu(|rows| {
            let mut next = Vec::clone(rows);
            next.push(row.clone());
            next
        });
    }

    pub fn insert_many(&self, rows: Vec<E>) {
        self.rows.rcu(|current| {
            let mut next = Vec::clone(current);
            next.extend(rows.iter().cloned());
            next
        });
    }

    pub fn len(&self) -> usize {
        self.rows.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Clone + 'static> QuerySource<E> for MemorySource<E> {
    fn scan(&self, opts: &ScanOptions) -> Result<SourceIter<'_, E>, SourceError> {
        let snapshot = self.rows.load_full();
        let filter = if opts.ignore_global_filters {
            None
        } else {
            self.global_filter.clone()
        };

        Ok(Box::new((0..snapshot.len()).filter_map(move |i| {
            let row = &snapshot[i];
            match &filter {
                Some(p) if !p.test(row) => None,
                _ => Some(Ok(row.clone())),
            }
        })))
    }

    fn attach(&self, entity: &mut E, path: &str) -> Result<(), SourceError> {
        match &self.resolver {
            Some(resolve) => resolve(entity, path),
            None => Err(SourceError::UnknownPath(path.to_string())),
        }
    }
}
