use gradebook_query::{Predicate, SearchParameters, SortOrder, SpecError, Specification};

use crate::entities::Teacher;
use crate::selectors::{teacher_created_at, teacher_full_name};

/// The teacher list endpoint's specification: active teachers matching an
/// optional search text, ordered per the shared sort-order enum, paged.
pub fn teacher_search(params: &SearchParameters) -> Result<Specification<Teacher>, SpecError> {
    let mut spec = Specification::new().add_criteria(Predicate::new(|t: &Teacher| t.active));

    if let Some(text) = params
        .search_text
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        let text = text.to_lowercase();
        spec = spec.add_criteria(Predicate::new(move |t: &Teacher| {
            t.full_name.to_lowercase().contains(&text)
                || t.email.to_lowercase().contains(&text)
                || t.subject.to_lowercase().contains(&text)
        }));
    }

    spec = match params.sort_order {
        SortOrder::Newest => spec.add_order_by_desc(teacher_created_at())?,
        SortOrder::Oldest => spec.add_order_by(teacher_created_at(), false)?,
        SortOrder::NameAsc => spec.add_order_by(teacher_full_name(), false)?,
        SortOrder::NameDesc => spec.add_order_by_desc(teacher_full_name())?,
    };

    spec.apply_paging(params.page_size, params.page)
}
