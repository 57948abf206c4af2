use std::fmt;
use std::sync::Arc;

/// A composable boolean predicate over an entity.
///
/// Predicates accumulate by conjunction only: a specification ANDs every
/// added condition, never ORs them. Alternation belongs inside a single
/// predicate closure (e.g. a search term matched against several fields).
pub struct Predicate<E> {
    test: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

impl<E: 'static> Predicate<E> {
    pub fn new(test: impl Fn(&E) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// The empty criteria — matches every entity.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Conjunction. The only combinator a specification ever applies.
    pub fn and(self, other: Predicate<E>) -> Self {
        let (a, b) = (self.test, other.test);
        Self {
            test: Arc::new(move |e| a(e) && b(e)),
        }
    }

    pub fn test(&self, entity: &E) -> bool {
        (self.test)(entity)
    }
}
