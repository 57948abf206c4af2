use serde::Deserialize;

/// Sort keys a caller may request. Anything else falls back to the
/// default sort — untrusted input never picks an arbitrary expression.
/// The last three are listed for API compatibility but are not yet
/// sortable server-side; they also fall back.
pub const ALLOWED_SORT_FIELDS: [&str; 5] = [
    "full_name",
    "grade",
    "overall_progress",
    "last_activity",
    "assessment_score",
];

/// Caller-supplied student list filter, typically deserialized from query
/// parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudentFilter {
    pub search_term: Option<String>,
    pub grade: Option<i32>,
    pub course_name: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_desc: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for StudentFilter {
    fn default() -> Self {
        Self {
            search_term: None,
            grade: None,
            course_name: None,
            start_date: None,
            end_date: None,
            sort_by: None,
            sort_desc: false,
            page: 1,
            page_size: 10,
        }
    }
}
