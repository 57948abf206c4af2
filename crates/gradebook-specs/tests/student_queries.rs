mod common;
use common::*;

use gradebook_engine::{CancellationToken, MemorySource, evaluate};
use gradebook_query::{Pagination, Predicate, Specification};
use gradebook_specs::{
    StudentFilter, active_students, student_search, students_by_teacher, students_for_analytics,
};

#[test]
fn paged_search_scenario() {
    // Twelve matching, eight not; "math" + grade 7, grade descending,
    // first page of five.
    let source = scenario_source();
    let filter = StudentFilter {
        search_term: Some("math".into()),
        grade: Some(7),
        sort_by: Some("grade".into()),
        sort_desc: true,
        page: 1,
        page_size: 5,
        ..Default::default()
    };

    let spec = student_search(&filter).unwrap();
    let cancel = CancellationToken::new();
    let (query, count) = evaluate(&source, &spec, &cancel).unwrap();
    let page = query.fetch().unwrap();

    assert_eq!(count, 12);
    assert_eq!(page.len(), 5);
    assert!(page.iter().all(|s| s.grade == 7 && s.email.contains("math")));
    assert!(page.windows(2).all(|w| w[0].grade >= w[1].grade));

    let result = Pagination::new(filter.page, filter.page_size, count, page).unwrap();
    assert_eq!(result.total_pages, 3);
    assert!(result.has_next_page());
    assert!(!result.has_previous_page());
}

#[test]
fn name_sort_is_case_insensitive_ascending() {
    let source = MemorySource::from_rows(vec![
        student(1, "zoe", "z@school.test", 7, 0),
        student(2, "Adam", "a@school.test", 7, 0),
        student(3, "maria", "m@school.test", 7, 0),
    ]);
    let filter = StudentFilter {
        sort_by: Some("full_name".into()),
        ..Default::default()
    };

    let spec = student_search(&filter).unwrap();
    let cancel = CancellationToken::new();
    let (query, _) = evaluate(&source, &spec, &cancel).unwrap();
    let names: Vec<String> = query.fetch().unwrap().into_iter().map(|s| s.full_name).collect();
    assert_eq!(names, ["Adam", "maria", "zoe"]);
}

#[test]
fn teacher_spec_composes_with_base() {
    let mut with_teacher = student(1, "Maria", "m@school.test", 7, 0);
    with_teacher.courses.push(enrollment(10, "Math", 3));
    let mut other_teacher = student(2, "Noah", "n@school.test", 7, 0);
    other_teacher.courses.push(enrollment(11, "Art", 4));

    let source = MemorySource::from_rows(vec![with_teacher, other_teacher]);

    let spec = active_students()
        .combine_with([students_by_teacher(3, 1, 10, None).unwrap()])
        .unwrap();
    let cancel = CancellationToken::new();

    let (query, count) = evaluate(&source, &spec, &cancel).unwrap();
    let rows = query.fetch().unwrap();

    assert_eq!(count, 1);
    assert_eq!(rows[0].full_name, "Maria");
}

#[test]
fn inactive_students_are_invisible_to_search() {
    let mut inactive = student(1, "Maria", "m@school.test", 7, 0);
    inactive.active = false;
    let source = MemorySource::from_rows(vec![inactive, student(2, "Noah", "n@school.test", 7, 0)]);

    let spec = student_search(&StudentFilter::default()).unwrap();
    let cancel = CancellationToken::new();
    let (query, count) = evaluate(&source, &spec, &cancel).unwrap();

    assert_eq!(count, 1);
    assert_eq!(query.fetch().unwrap()[0].full_name, "Noah");
}

#[test]
fn analytics_spec_returns_the_whole_matching_set() {
    let source = scenario_source();
    let spec = students_for_analytics(Some(7), None, None, Some(1_005), None);
    let cancel = CancellationToken::new();

    let (query, count) = evaluate(&source, &spec, &cancel).unwrap();
    let rows = query.fetch().unwrap();

    assert_eq!(count, 0); // analytics specs do not request a count
    assert_eq!(rows.len(), 7); // created_at 1_005..=1_011
    assert!(rows.iter().all(|s| s.grade == 7 && s.created_at >= 1_005));
}

#[test]
fn soft_deleted_rows_come_back_with_global_filters_ignored() {
    // Model a store-level soft-delete filter, then bypass it.
    let mut deleted = student(1, "Ghost", "g@school.test", 7, 0);
    deleted.active = false;
    let source = MemorySource::from_rows(vec![deleted, student(2, "Maria", "m@school.test", 7, 0)])
        .with_global_filter(Predicate::new(|s: &gradebook_specs::Student| s.active));
    let cancel = CancellationToken::new();

    let visible = Specification::new();
    let (query, _) = evaluate(&source, &visible, &cancel).unwrap();
    assert_eq!(query.fetch().unwrap().len(), 1);

    let all = Specification::new().ignore_global_filters();
    let (query, _) = evaluate(&source, &all, &cancel).unwrap();
    assert_eq!(query.fetch().unwrap().len(), 2);
}

#[test]
fn recent_students_via_composed_base_spec() {
    let source = scenario_source();
    let spec = active_students()
        .add_order_by_desc(gradebook_specs::student_created_at())
        .unwrap()
        .apply_paging(3, 1)
        .unwrap();
    let cancel = CancellationToken::new();

    let (query, count) = evaluate(&source, &spec, &cancel).unwrap();
    let rows = query.fetch().unwrap();

    assert_eq!(count, 20);
    let created: Vec<i64> = rows.iter().map(|s| s.created_at).collect();
    assert_eq!(created, [1_019, 1_018, 1_017]);
}

#[test]
fn student_filter_deserializes_from_query_json() {
    let filter: StudentFilter = serde_json::from_str(
        r#"{
            "search_term": "math",
            "grade": 7,
            "sort_by": "grade",
            "sort_desc": true,
            "page_size": 5
        }"#,
    )
    .unwrap();

    assert_eq!(filter.page, 1); // defaulted
    assert_eq!(filter.page_size, 5);
    assert!(filter.sort_desc);
    assert_eq!(filter.grade, Some(7));
}
