use serde::{Deserialize, Serialize};

/// One student row plus the enrollment join fields the specifications
/// filter on. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub parent_email: Option<String>,
    pub grade: i32,
    pub active: bool,
    pub created_at: i64,
    #[serde(default)]
    pub courses: Vec<Enrollment>,
}

/// A student's enrollment in one course, flattened with the course fields
/// the filters need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub course_id: u64,
    pub course_name: String,
    pub teacher_id: u64,
    pub active: bool,
    pub course_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub grade_level: i32,
    pub teacher_id: u64,
    pub active: bool,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub active: bool,
    pub created_at: i64,
}
