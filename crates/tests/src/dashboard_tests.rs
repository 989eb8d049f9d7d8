use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, ComplaintSummary, PeopleCount};

use crate::common::{self, MockSchool};

fn script_core(mock: &MockSchool) {
    mock.respond(
        Method::GET,
        "/roles/list/complaints/",
        200,
        json!([
            {"complainID": 1, "title": "a", "description": "a", "solved": true},
            {"complainID": 2, "title": "b", "description": "b", "solved": false},
            {"complainID": 3, "title": "c", "description": "c", "solved": false}
        ]),
    );
    mock.respond(
        Method::GET,
        "/user/list/",
        200,
        json!([{
            "teacher": [{"id": 4, "name": "Mina", "email": "m@s.edu"}],
            "student": [
                {"id": 7, "name": "Ravi", "email": "r@s.edu"},
                {"id": 8, "name": "Tara", "email": "t@s.edu"}
            ]
        }]),
    );
    mock.respond(
        Method::GET,
        "/roles/attendance/getdata/",
        200,
        json!([{
            "subject": "PHY1",
            "faculty_batch_sem": 1,
            "date": "2024-03-01",
            "records": [
                {"id": 1, "userID": 7, "status": "True"},
                {"id": 2, "userID": 8, "status": "False"},
                {"id": 3, "userID": 9, "status": "True"}
            ]
        }]),
    );
}

#[tokio::test]
async fn stats_combine_every_source() {
    let mock = MockSchool::start().await;
    script_core(&mock);
    mock.respond(
        Method::GET,
        "/roles/community/filter_notice/",
        200,
        json!([{"id": 1, "noticeName": "n"}, {"id": 2, "noticeName": "m"}]),
    );

    let stats = mock.api().dashboard_stats(common::TOKEN).await.unwrap();

    assert_eq!(
        stats.complaints,
        Some(ComplaintSummary { total: 3, solved: 1, unsolved: 2 })
    );
    assert_eq!(stats.people, Some(PeopleCount { teachers: 1, students: 2 }));
    assert_eq!(stats.notices_by_semester.len(), 8);
    assert_eq!(stats.total_notices(), 16);
    let attendance = stats.attendance_by_semester.unwrap();
    assert_eq!(attendance[0].percent, 66.67);
    assert_eq!(attendance[1].percent, 0.0);
}

#[tokio::test]
async fn failed_notice_fetches_count_as_zero() {
    let mock = MockSchool::start().await;
    script_core(&mock);

    let stats = mock.api().dashboard_stats(common::TOKEN).await.unwrap();

    assert_eq!(stats.total_notices(), 0);
    assert_eq!(stats.max_notices(), 0);
    let notice_calls = mock
        .requests()
        .iter()
        .filter(|r| r.path == "/roles/community/filter_notice/")
        .count();
    assert_eq!(notice_calls, 8);
}

#[tokio::test]
async fn one_failed_section_leaves_the_rest() {
    let mock = MockSchool::start().await;
    script_core(&mock);
    mock.respond(Method::GET, "/roles/list/complaints/", 500, json!({"detail": "boom"}));

    let stats = mock.api().dashboard_stats(common::TOKEN).await.unwrap();

    assert_eq!(stats.complaints, None);
    assert_eq!(stats.people, Some(PeopleCount { teachers: 1, students: 2 }));
    assert!(stats.attendance_by_semester.is_some());
    assert_eq!(stats.missing_sections(), vec!["complaints"]);
}

#[tokio::test]
async fn rejected_session_fails_the_dashboard() {
    let mock = MockSchool::start().await;
    script_core(&mock);
    mock.respond(
        Method::GET,
        "/user/list/",
        401,
        json!({"detail": "Given token not valid for any token type"}),
    );

    let err = mock.api().dashboard_stats(common::TOKEN).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
}

#[tokio::test]
async fn every_section_failing_fails_the_dashboard() {
    let mock = MockSchool::start().await;
    mock.respond(Method::GET, "/roles/list/complaints/", 403, json!({"detail": "Admins only"}));
    mock.respond(Method::GET, "/user/list/", 403, json!({"detail": "Admins only"}));
    mock.respond(Method::GET, "/roles/attendance/getdata/", 403, json!({"detail": "Admins only"}));

    let err = mock.api().dashboard_stats(common::TOKEN).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Admins only");
}
