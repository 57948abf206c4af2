use gradebook_query::{FieldValue, KeySelector};

use crate::entities::{Course, Student, Teacher};

pub fn student_full_name() -> KeySelector<Student> {
    KeySelector::new("full_name", |s: &Student| {
        FieldValue::String(s.full_name.to_lowercase())
    })
}

pub fn student_grade() -> KeySelector<Student> {
    KeySelector::new("grade", |s: &Student| FieldValue::from(s.grade))
}

pub fn student_created_at() -> KeySelector<Student> {
    KeySelector::new("created_at", |s: &Student| FieldValue::Date(s.created_at))
}

pub fn course_name() -> KeySelector<Course> {
    KeySelector::new("name", |c: &Course| {
        FieldValue::String(c.name.to_lowercase())
    })
}

pub fn teacher_full_name() -> KeySelector<Teacher> {
    KeySelector::new("full_name", |t: &Teacher| {
        FieldValue::String(t.full_name.to_lowercase())
    })
}

pub fn teacher_created_at() -> KeySelector<Teacher> {
    KeySelector::new("created_at", |t: &Teacher| FieldValue::Date(t.created_at))
}
