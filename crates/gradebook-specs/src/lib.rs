mod courses;
mod entities;
mod filter;
mod selectors;
mod students;
mod teachers;

pub use courses::courses_for_analytics;
pub use entities::{Course, Enrollment, Student, Teacher};
pub use filter::{ALLOWED_SORT_FIELDS, StudentFilter};
pub use selectors::{
    course_name, student_created_at, student_full_name, student_grade, teacher_created_at,
    teacher_full_name,
};
pub use students::{
    active_students, student_by_id, student_search, students_by_teacher, students_for_analytics,
};
pub use teachers::teacher_search;
