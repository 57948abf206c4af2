use gradebook_engine::MemorySource;
use gradebook_specs::{Enrollment, Student};

pub fn student(id: u64, name: &str, email: &str, grade: i32, created_at: i64) -> Student {
    Student {
        id,
        full_name: name.to_string(),
        email: email.to_string(),
        parent_email: None,
        grade,
        active: true,
        created_at,
        courses: Vec::new(),
    }
}

pub fn enrollment(course_id: u64, course_name: &str, teacher_id: u64) -> Enrollment {
    Enrollment {
        course_id,
        course_name: course_name.to_string(),
        teacher_id,
        active: true,
        course_active: true,
    }
}

/// Twelve grade-7 students on the math team (emails match "math") plus
/// eight that match neither the term nor the grade.
pub fn scenario_source() -> MemorySource<Student> {
    let mut rows = Vec::new();
    for i in 0..12u64 {
        rows.push(student(
            i,
            &format!("Student {i:02}"),
            &format!("math.team{i:02}@school.test"),
            7,
            1_000 + i as i64,
        ));
    }
    for i in 12..20u64 {
        let grade = if i % 2 == 0 { 6 } else { 8 };
        rows.push(student(
            i,
            &format!("Student {i:02}"),
            &format!("chess.club{i:02}@school.test"),
            grade,
            1_000 + i as i64,
        ));
    }
    MemorySource::from_rows(rows)
}
