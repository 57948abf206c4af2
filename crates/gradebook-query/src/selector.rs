use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

/// A named key-extraction function used for ordering and grouping.
///
/// The `key` string is the selector's identity: registration collections
/// deduplicate by it while keeping registration order, so multi-key sorts
/// stay deterministic. Two selectors with the same key are the same key,
/// whatever their closures do.
pub struct KeySelector<E> {
    key: String,
    get: Arc<dyn Fn(&E) -> FieldValue + Send + Sync>,
}

impl<E> Clone for KeySelector<E> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            get: Arc::clone(&self.get),
        }
    }
}

impl<E> fmt::Debug for KeySelector<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeySelector").field(&self.key).finish()
    }
}

impl<E> PartialEq for KeySelector<E> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<E> Eq for KeySelector<E> {}

impl<E> KeySelector<E> {
    pub fn new(
        key: impl Into<String>,
        get: impl Fn(&E) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            get: Arc::new(get),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value_of(&self, entity: &E) -> FieldValue {
        (self.get)(entity)
    }
}
