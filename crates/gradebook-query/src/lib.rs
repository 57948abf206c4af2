mod error;
mod pagination;
mod params;
mod predicate;
mod selector;
mod sort;
mod specification;
mod value;

pub use error::SpecError;
pub use pagination::Pagination;
pub use params::{SearchParameters, SortOrder};
pub use predicate::Predicate;
pub use selector::KeySelector;
pub use sort::SortDirection;
pub use specification::Specification;
pub use value::FieldValue;
