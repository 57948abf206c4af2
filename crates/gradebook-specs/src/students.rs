use gradebook_query::{Predicate, SpecError, Specification};

use crate::entities::Student;
use crate::filter::{ALLOWED_SORT_FIELDS, StudentFilter};
use crate::selectors::{student_full_name, student_grade};

/// Base specification for composing: active students, nothing else.
pub fn active_students() -> Specification<Student> {
    Specification::new().add_criteria(Predicate::new(|s: &Student| s.active))
}

/// The student list endpoint's specification: active students matching the
/// caller's search term, grade, course name, and creation-date range,
/// sorted by an allowlisted field and paged.
pub fn student_search(filter: &StudentFilter) -> Result<Specification<Student>, SpecError> {
    let mut spec = active_students();

    if let Some(term) = non_blank(filter.search_term.as_deref()) {
        let term = term.to_lowercase();
        spec = spec.add_criteria(Predicate::new(move |s: &Student| {
            s.full_name.to_lowercase().contains(&term)
                || s.email.to_lowercase().contains(&term)
                || s.parent_email
                    .as_deref()
                    .is_some_and(|p| p.to_lowercase().contains(&term))
        }));
    }

    if let Some(grade) = filter.grade {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| s.grade == grade));
    }

    if let Some(course) = non_blank(filter.course_name.as_deref()) {
        let course = course.to_lowercase();
        spec = spec.add_criteria(Predicate::new(move |s: &Student| {
            s.courses
                .iter()
                .any(|e| e.active && e.course_name.to_lowercase() == course)
        }));
    }

    if let Some(start) = filter.start_date {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| s.created_at >= start));
    }
    if let Some(end) = filter.end_date {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| s.created_at <= end));
    }

    spec = apply_student_sort(spec, filter.sort_by.as_deref(), filter.sort_desc)?;
    spec.apply_paging(filter.page_size, filter.page)
}

/// One student by id, active only. With details, the related data the
/// detail view renders is attached.
pub fn student_by_id(id: u64, include_details: bool) -> Result<Specification<Student>, SpecError> {
    let mut spec = active_students().add_criteria(Predicate::new(move |s: &Student| s.id == id));

    if include_details {
        spec = spec
            .add_include("assessments")?
            .add_include("courses.course")?
            .add_include("progress.assignment")?;
    }
    Ok(spec)
}

/// Active students with an active enrollment in an active course taught by
/// the given teacher, optionally narrowed by a search term.
pub fn students_by_teacher(
    teacher_id: u64,
    page: usize,
    page_size: usize,
    search_term: Option<&str>,
) -> Result<Specification<Student>, SpecError> {
    let mut spec = active_students().add_criteria(Predicate::new(move |s: &Student| {
        s.courses
            .iter()
            .any(|e| e.active && e.course_active && e.teacher_id == teacher_id)
    }));

    if let Some(term) = non_blank(search_term) {
        let term = term.to_lowercase();
        spec = spec.add_criteria(Predicate::new(move |s: &Student| {
            s.full_name.to_lowercase().contains(&term)
                || s.email.to_lowercase().contains(&term)
                || s.parent_email
                    .as_deref()
                    .is_some_and(|p| p.to_lowercase().contains(&term))
        }));
    }

    spec.add_order_by(student_full_name(), false)?
        .apply_paging(page_size, page)
}

/// Unpaged student set for analytics aggregation. Every criterion but
/// active-only is optional.
pub fn students_for_analytics(
    grade: Option<i32>,
    subject: Option<&str>,
    teacher_id: Option<u64>,
    start_date: Option<i64>,
    end_date: Option<i64>,
) -> Specification<Student> {
    let mut spec = active_students();

    if let Some(grade) = grade {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| s.grade == grade));
    }

    if let Some(teacher_id) = teacher_id {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| {
            s.courses
                .iter()
                .any(|e| e.active && e.teacher_id == teacher_id)
        }));
    }

    if let Some(subject) = non_blank(subject) {
        let subject = subject.to_lowercase();
        spec = spec.add_criteria(Predicate::new(move |s: &Student| {
            s.courses
                .iter()
                .any(|e| e.active && e.course_name.to_lowercase().contains(&subject))
        }));
    }

    if let Some(start) = start_date {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| s.created_at >= start));
    }
    if let Some(end) = end_date {
        spec = spec.add_criteria(Predicate::new(move |s: &Student| s.created_at <= end));
    }

    spec
}

/// Honor a caller-supplied sort key only if allowlisted and actually
/// sortable; everything else gets the default full-name ascending order.
fn apply_student_sort(
    spec: Specification<Student>,
    sort_by: Option<&str>,
    sort_desc: bool,
) -> Result<Specification<Student>, SpecError> {
    let requested = sort_by.map(|s| s.to_lowercase());
    let allowed = requested
        .as_deref()
        .is_some_and(|s| ALLOWED_SORT_FIELDS.contains(&s));

    if allowed {
        match requested.as_deref() {
            Some("full_name") => spec.add_order_by(student_full_name(), sort_desc),
            Some("grade") => spec.add_order_by(student_grade(), sort_desc),
            // Allowlisted but computed client-side; fall back.
            _ => spec.add_order_by(student_full_name(), false),
        }
    } else {
        spec.add_order_by(student_full_name(), false)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
