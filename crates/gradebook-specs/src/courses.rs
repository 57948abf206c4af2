use gradebook_query::{Predicate, Specification};

use crate::entities::Course;

/// Active courses for analytics, optionally narrowed by grade level,
/// teacher, and a subject term matched against name or code.
pub fn courses_for_analytics(
    grade: Option<i32>,
    subject: Option<&str>,
    teacher_id: Option<u64>,
) -> Specification<Course> {
    let mut spec = Specification::new().add_criteria(Predicate::new(|c: &Course| c.active));

    if let Some(grade) = grade {
        spec = spec.add_criteria(Predicate::new(move |c: &Course| c.grade_level == grade));
    }

    if let Some(teacher_id) = teacher_id {
        spec = spec.add_criteria(Predicate::new(move |c: &Course| c.teacher_id == teacher_id));
    }

    if let Some(subject) = subject.map(str::trim).filter(|s| !s.is_empty()) {
        let subject = subject.to_lowercase();
        spec = spec.add_criteria(Predicate::new(move |c: &Course| {
            c.name.to_lowercase().contains(&subject) || c.code.to_lowercase().contains(&subject)
        }));
    }

    spec
}
