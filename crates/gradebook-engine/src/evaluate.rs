use std::cmp::Ordering;
use std::fmt;

use gradebook_query::{FieldValue, KeySelector, SortDirection, Specification};

use crate::cancel::CancellationToken;
use crate::error::EngineError;
use crate::source::{ExecShape, QuerySource, ScanOptions};

/// Turn `(source, specification)` into a deferred query handle plus a
/// total count.
///
/// Nothing touches the source until [`PreparedQuery::fetch`] — except the
/// count: when the specification enables total counting, the pre-paging
/// result set is materialized immediately (that is the one step the
/// cancellation token governs) and its length returned. A count of 0 with
/// total counting disabled means "not requested", not "empty".
///
/// The evaluator validates nothing and catches nothing: source errors
/// surface to the caller unchanged.
pub fn evaluate<'a, E, S>(
    source: &'a S,
    spec: &'a Specification<E>,
    cancel: &CancellationToken,
) -> Result<(PreparedQuery<'a, E, S>, usize), EngineError>
where
    E: Clone + PartialEq + 'static,
    S: QuerySource<E>,
{
    let opts = scan_options(spec);
    tracing::debug!(
        paging = spec.is_paging_enabled(),
        distinct = spec.is_distinct(),
        groups = spec.group_by().len(),
        includes = spec.includes().len(),
        split = spec.is_split_query(),
        "query prepared"
    );

    let count = if spec.is_total_count_enabled() {
        let n = shaped_rows(source, spec, &opts, Some(cancel))?.len();
        tracing::debug!(count = n, "total count materialized");
        n
    } else {
        0
    };

    Ok((PreparedQuery { source, spec, opts }, count))
}

/// A shaped, not-yet-executed query. Holds the source and the
/// specification by reference; the pipeline runs on [`fetch`].
///
/// [`fetch`]: PreparedQuery::fetch
pub struct PreparedQuery<'a, E, S> {
    source: &'a S,
    spec: &'a Specification<E>,
    opts: ScanOptions,
}

impl<E, S> fmt::Debug for PreparedQuery<'_, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreparedQuery")
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl<'a, E, S> PreparedQuery<'a, E, S>
where
    E: Clone + PartialEq + 'static,
    S: QuerySource<E>,
{
    pub fn scan_options(&self) -> &ScanOptions {
        &self.opts
    }

    /// Materialize the query: filter, order, group-flatten, distinct, then
    /// page, then attach includes. Includes are attached after paging on
    /// purpose — only the page's entities get related data.
    pub fn fetch(&self) -> Result<Vec<E>, EngineError> {
        let mut rows = shaped_rows(self.source, self.spec, &self.opts, None)?;

        if self.spec.is_paging_enabled() {
            rows = rows
                .into_iter()
                .skip(self.spec.skip())
                .take(self.spec.take())
                .collect();
        }

        for row in rows.iter_mut() {
            for path in self.spec.includes() {
                self.source.attach(row, path)?;
            }
        }

        Ok(rows)
    }
}

fn scan_options<E: 'static>(spec: &Specification<E>) -> ScanOptions {
    ScanOptions {
        ignore_global_filters: spec.is_global_filters_ignored(),
        // Bypassing global filters also marks the scan read-only.
        no_tracking: spec.is_global_filters_ignored(),
        shape: if spec.is_split_query() {
            ExecShape::Split
        } else {
            ExecShape::Single
        },
    }
}

// ── Pre-paging pipeline ─────────────────────────────────────────
//
// Stages shared by the count step and by fetch(): criteria, ordering,
// group-flatten passes, distinct. The count step runs them under the
// cancellation token; fetch() runs them without one.

fn shaped_rows<E, S>(
    source: &S,
    spec: &Specification<E>,
    opts: &ScanOptions,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<E>, EngineError>
where
    E: Clone + PartialEq + 'static,
    S: QuerySource<E>,
{
    check_cancel(cancel)?;

    let mut rows = Vec::new();
    for row in source.scan(opts)? {
        let row = row?;
        if spec.criteria().test(&row) {
            rows.push(row);
        }
    }

    check_cancel(cancel)?;
    if let Some((keys, direction)) = resolved_sort(spec) {
        sort_rows(&mut rows, keys, direction);
    }

    for (selector, _) in spec.group_by() {
        check_cancel(cancel)?;
        rows = group_flatten(rows, selector);
    }

    check_cancel(cancel)?;
    if spec.is_distinct() {
        rows = distinct(rows);
    }

    Ok(rows)
}

fn check_cancel(cancel: Option<&CancellationToken>) -> Result<(), EngineError> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(EngineError::Cancelled),
        _ => Ok(()),
    }
}

/// Descending keys win wholesale: if any are registered, the ascending
/// list is ignored entirely. First key is the primary sort, the rest are
/// tie-breakers, all in registration order.
fn resolved_sort<E: 'static>(spec: &Specification<E>) -> Option<(&[KeySelector<E>], SortDirection)> {
    if !spec.order_by_desc().is_empty() {
        Some((spec.order_by_desc(), SortDirection::Desc))
    } else if !spec.order_by().is_empty() {
        Some((spec.order_by(), SortDirection::Asc))
    } else {
        None
    }
}

fn sort_rows<E>(rows: &mut [E], keys: &[KeySelector<E>], direction: SortDirection) {
    rows.sort_by(|a, b| {
        for key in keys {
            let ord = key.value_of(a).cmp(&key.value_of(b));
            let ord = match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
}

/// One group-by pass: bucket by the selector's value (first-seen group
/// order, within-group order preserved) and flatten straight back out.
/// Reorders, never aggregates.
fn group_flatten<E>(rows: Vec<E>, selector: &KeySelector<E>) -> Vec<E> {
    let mut groups: Vec<(FieldValue, Vec<E>)> = Vec::new();
    for row in rows {
        let key = selector.value_of(&row);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(row),
            None => groups.push((key, vec![row])),
        }
    }
    groups
        .into_iter()
        .flat_map(|(_, members)| members)
        .collect()
}

/// Stable dedup by entity equality; the first occurrence wins.
fn distinct<E: PartialEq>(rows: Vec<E>) -> Vec<E> {
    let mut out: Vec<E> = Vec::with_capacity(rows.len());
    for row in rows {
        if !out.contains(&row) {
            out.push(row);
        }
    }
    out
}
