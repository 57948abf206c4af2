use gradebook_engine::MemorySource;
use gradebook_query::{FieldValue, KeySelector, Predicate};

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub grade: i32,
    pub created_at: i64,
    pub active: bool,
    pub notes: Vec<String>,
}

pub fn record(id: u64, name: &str, grade: i32, created_at: i64, active: bool) -> Record {
    Record {
        id,
        name: name.to_string(),
        grade,
        created_at,
        active,
        notes: Vec::new(),
    }
}

pub fn by_name() -> KeySelector<Record> {
    KeySelector::new("name", |r: &Record| FieldValue::from(r.name.clone()))
}

pub fn by_grade() -> KeySelector<Record> {
    KeySelector::new("grade", |r: &Record| FieldValue::from(r.grade))
}

pub fn by_created_at() -> KeySelector<Record> {
    KeySelector::new("created_at", |r: &Record| FieldValue::Date(r.created_at))
}

pub fn active_only() -> Predicate<Record> {
    Predicate::new(|r: &Record| r.active)
}

/// Five mixed records, insertion order by id.
pub fn seed_source() -> MemorySource<Record> {
    MemorySource::from_rows(vec![
        record(1, "Avery", 5, 100, true),
        record(2, "Blake", 7, 300, true),
        record(3, "Casey", 5, 200, false),
        record(4, "Drew", 7, 500, true),
        record(5, "Ellis", 6, 400, true),
    ])
}
