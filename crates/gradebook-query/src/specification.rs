use crate::error::SpecError;
use crate::predicate::Predicate;
use crate::selector::KeySelector;

/// A declarative description of one filtered/sorted/paged view over a
/// collection of entities.
///
/// Built once by a concrete specification constructor, then handed to the
/// evaluator and discarded. The combinators consume and return `self` for
/// chaining; after construction the only supported mutation is
/// [`Specification::combine_with`].
///
/// Criteria accumulate by AND only. Includes and key selectors have set
/// semantics keyed by their string identity, with registration order
/// preserved.
#[derive(Debug, Clone)]
pub struct Specification<E> {
    criteria: Predicate<E>,
    includes: Vec<String>,
    order_by: Vec<KeySelector<E>>,
    order_by_desc: Vec<KeySelector<E>>,
    group_by: Vec<(KeySelector<E>, String)>,
    skip: usize,
    take: usize,
    paging_enabled: bool,
    total_count_enabled: bool,
    distinct: bool,
    global_filters_ignored: bool,
    split_query: bool,
}

impl<E: 'static> Default for Specification<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Specification<E> {
    /// An empty specification — matches everything, in source order.
    pub fn new() -> Self {
        Self {
            criteria: Predicate::always(),
            includes: Vec::new(),
            order_by: Vec::new(),
            order_by_desc: Vec::new(),
            group_by: Vec::new(),
            skip: 0,
            take: 0,
            paging_enabled: false,
            total_count_enabled: false,
            distinct: false,
            global_filters_ignored: false,
            split_query: false,
        }
    }

    /// An empty specification pre-tagged for split execution.
    pub fn new_split() -> Self {
        let mut spec = Self::new();
        spec.split_query = true;
        spec
    }

    // ── Combinators ─────────────────────────────────────────────

    /// AND `predicate` onto the criteria.
    pub fn add_criteria(mut self, predicate: Predicate<E>) -> Self {
        self.criteria = self.criteria.and(predicate);
        self
    }

    /// Register a relation path for eager attachment.
    pub fn add_include(mut self, path: impl Into<String>) -> Result<Self, SpecError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(SpecError::EmptyIncludePath);
        }
        if !self.includes.contains(&path) {
            self.includes.push(path);
        }
        Ok(self)
    }

    /// Register a sort key, routed to the ascending or descending list.
    ///
    /// Descending keys take precedence wholesale: if any descending key is
    /// registered, every ascending key is ignored at evaluation. That is
    /// the documented contract, not an accident.
    pub fn add_order_by(
        mut self,
        selector: KeySelector<E>,
        descending: bool,
    ) -> Result<Self, SpecError> {
        if selector.key().trim().is_empty() {
            return Err(SpecError::EmptySortKey);
        }
        let list = if descending {
            &mut self.order_by_desc
        } else {
            &mut self.order_by
        };
        if !list.contains(&selector) {
            list.push(selector);
        }
        Ok(self)
    }

    pub fn add_order_by_desc(self, selector: KeySelector<E>) -> Result<Self, SpecError> {
        self.add_order_by(selector, true)
    }

    /// Register a grouping directive. The label is advisory bookkeeping;
    /// evaluation groups by the selector's value only.
    pub fn add_group_by(
        mut self,
        selector: KeySelector<E>,
        label: impl Into<String>,
    ) -> Result<Self, SpecError> {
        if selector.key().trim().is_empty() {
            return Err(SpecError::EmptyGroupKey);
        }
        let entry = (selector, label.into());
        if !self.group_by.contains(&entry) {
            self.group_by.push(entry);
        }
        Ok(self)
    }

    /// Enable 1-based paging. Also enables total-count computation.
    pub fn apply_paging(mut self, page_size: usize, page_index: usize) -> Result<Self, SpecError> {
        if page_size == 0 {
            return Err(SpecError::InvalidPageSize(page_size));
        }
        if page_index == 0 {
            return Err(SpecError::InvalidPageIndex(page_index));
        }
        self.skip = page_size * (page_index - 1);
        self.take = page_size;
        self.paging_enabled = true;
        Ok(self.enable_total_count())
    }

    pub fn enable_total_count(mut self) -> Self {
        self.total_count_enabled = true;
        self
    }

    pub fn enable_distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Bypass the source's ambient filters (e.g. soft-delete) and mark the
    /// query read-only for any change tracking the source does.
    pub fn ignore_global_filters(mut self) -> Self {
        self.global_filters_ignored = true;
        self
    }

    // ── Combination ─────────────────────────────────────────────

    /// Merge other specifications into this one: criteria are ANDed,
    /// include/order/group registrations unioned (this spec's entries
    /// first), boolean flags ORed. If an other has paging enabled, this
    /// spec's paging is re-derived from its window, with the page index
    /// recomputed as `skip / take + 1`.
    pub fn combine_with(
        mut self,
        others: impl IntoIterator<Item = Specification<E>>,
    ) -> Result<Self, SpecError> {
        for other in others {
            self.criteria = self.criteria.and(other.criteria);

            for include in other.includes {
                if !self.includes.contains(&include) {
                    self.includes.push(include);
                }
            }
            for selector in other.order_by {
                if !self.order_by.contains(&selector) {
                    self.order_by.push(selector);
                }
            }
            for selector in other.order_by_desc {
                if !self.order_by_desc.contains(&selector) {
                    self.order_by_desc.push(selector);
                }
            }
            for entry in other.group_by {
                if !self.group_by.contains(&entry) {
                    self.group_by.push(entry);
                }
            }

            if other.paging_enabled {
                self = self.apply_paging(other.take, other.skip / other.take + 1)?;
            }
            if other.total_count_enabled {
                self = self.enable_total_count();
            }
            if other.distinct {
                self = self.enable_distinct();
            }
            if other.global_filters_ignored {
                self = self.ignore_global_filters();
            }
            self.split_query = self.split_query || other.split_query;
        }
        Ok(self)
    }

    // ── Read accessors ──────────────────────────────────────────

    pub fn criteria(&self) -> &Predicate<E> {
        &self.criteria
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn order_by(&self) -> &[KeySelector<E>] {
        &self.order_by
    }

    pub fn order_by_desc(&self) -> &[KeySelector<E>] {
        &self.order_by_desc
    }

    pub fn group_by(&self) -> &[(KeySelector<E>, String)] {
        &self.group_by
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn take(&self) -> usize {
        self.take
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    pub fn is_total_count_enabled(&self) -> bool {
        self.total_count_enabled
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn is_global_filters_ignored(&self) -> bool {
        self.global_filters_ignored
    }

    pub fn is_split_query(&self) -> bool {
        self.split_query
    }
}
