use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{
    AttendanceFilter, AttendanceQuery, AttendanceStatus, CreateAttendanceRequest,
    UpdateAttendanceRequest,
};

use crate::common::{self, MockSchool};

fn sheets() -> serde_json::Value {
    json!([
        {
            "subject": "PHY1",
            "faculty_batch_sem": 3,
            "date": "2024-03-04",
            "records": [
                {"id": 31, "userID": 7, "status": "True"},
                {"id": 32, "userID": 8, "status": "False"}
            ]
        }
    ])
}

#[tokio::test]
async fn query_sends_only_the_chosen_filters() {
    let mock = MockSchool::start().await;
    mock.respond(Method::GET, "/roles/attendance/getdata/", 200, sheets());

    let query = AttendanceQuery::build(AttendanceFilter::UserAndSubject, "7", "PHY1", "").unwrap();
    let result = mock.api().query_attendance(common::TOKEN, &query).await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].records[0].user_id, "7");
    assert_eq!(result[0].records[1].status, AttendanceStatus::Absent);
    let req = mock.last(Method::GET, "/roles/attendance/getdata/");
    assert_eq!(req.query.as_deref(), Some("userID=7&subjectID=PHY1"));
}

#[tokio::test]
async fn unfiltered_query_sends_no_parameters() {
    let mock = MockSchool::start().await;
    mock.respond(Method::GET, "/roles/attendance/getdata/", 200, json!([]));

    mock.api()
        .query_attendance(common::TOKEN, &AttendanceQuery::default())
        .await
        .unwrap();

    assert_eq!(mock.last(Method::GET, "/roles/attendance/getdata/").query, None);
}

#[tokio::test]
async fn create_sheet_posts_roster_with_upstream_keys() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, "/roles/attendance/create/", 201, json!({"msg": "Attendance created"}));

    let req = CreateAttendanceRequest::from_roster("PHY1", 3, "2024-03-04", "7\n8", "9");
    mock.api().create_attendance(common::TOKEN, &req).await.unwrap();

    let sent = mock.last(Method::POST, "/roles/attendance/create/").json();
    assert_eq!(
        sent,
        json!({
            "subjectID": "PHY1",
            "faculty_batch_sem": 3,
            "date": "2024-03-04",
            "records": [
                {"userID": "7", "status": "True"},
                {"userID": "8", "status": "True"},
                {"userID": "9", "status": "False"}
            ]
        })
    );
}

#[tokio::test]
async fn empty_roster_is_rejected_locally() {
    let mock = MockSchool::start().await;

    let req = CreateAttendanceRequest::from_roster("PHY1", 3, "2024-03-04", " ", "");
    let err = mock.api().create_attendance(common::TOKEN, &req).await.unwrap_err();

    assert!(err.field_errors.contains_key("records"));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn toggling_sends_the_new_status() {
    let mock = MockSchool::start().await;
    mock.respond(Method::PUT, "/roles/attendance/editAttendance/32/", 200, json!({"msg": "Updated"}));

    let body = UpdateAttendanceRequest {
        status: AttendanceStatus::Absent.toggled(),
        date: "2024-03-04".into(),
    };
    mock.api()
        .update_attendance(common::TOKEN, 32, &body)
        .await
        .unwrap();

    let sent = mock.last(Method::PUT, "/roles/attendance/editAttendance/32/").json();
    assert_eq!(sent, json!({"status": "True", "date": "2024-03-04"}));
}

#[tokio::test]
async fn delete_sends_record_id_in_body() {
    let mock = MockSchool::start().await;
    mock.respond(Method::DELETE, "/roles/attendance/deleteAttendance/", 200, json!({"msg": "Deleted"}));

    mock.api().delete_attendance(common::TOKEN, 31).await.unwrap();

    let sent = mock.last(Method::DELETE, "/roles/attendance/deleteAttendance/").json();
    assert_eq!(sent, json!({"id": 31}));
}
