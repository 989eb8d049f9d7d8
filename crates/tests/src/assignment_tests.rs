use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::CreateAssignmentRequest;

use crate::common::{self, MockSchool};

#[tokio::test]
async fn assignments_list_with_absolute_file_links() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/assignment/listAssignment/",
        200,
        json!([
            {
                "assignmentID": 11,
                "assignmentTitle": "Lab report",
                "assignmentInFile": "/media/assignments/lab.pdf",
                "assignmentInText": "Write up the pendulum lab",
                "created_at": "2024-02-20T09:30:00Z",
                "due_date": "2024-03-01",
                "userID": 4,
                "subjectID": "PHY1"
            }
        ]),
    );

    let list = mock.api().list_assignments(common::TOKEN).await.unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].subject_id, "PHY1");
    assert_eq!(
        list[0].file_url,
        Some(format!("{}/media/assignments/lab.pdf", mock.base_url))
    );
}

#[tokio::test]
async fn create_assignment_uses_upstream_field_names() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::POST,
        "/roles/assignment/createAssignment/",
        201,
        json!({"msg": "Assignment created"}),
    );

    let req = CreateAssignmentRequest::new("Essay", "500 words", "2024-04-01", "ENG2");
    let brief = common::text_upload("brief.txt", "Topic: rivers");
    mock.api()
        .create_assignment(common::TOKEN, &req, Some(&brief))
        .await
        .unwrap();

    let sent = mock.last(Method::POST, "/roles/assignment/createAssignment/");
    for field in ["assignmentTitle", "assignmentInText", "due_date", "subjectID"] {
        assert!(sent.body.contains(&format!("name=\"{}\"", field)), "missing {field}");
    }
    assert!(sent.body.contains("name=\"assignmentInFile\"; filename=\"brief.txt\""));
}

#[tokio::test]
async fn assignment_without_subject_is_rejected_locally() {
    let mock = MockSchool::start().await;

    let req = CreateAssignmentRequest::new("Essay", "", "2024-04-01", "");
    let err = mock.api().create_assignment(common::TOKEN, &req, None).await.unwrap_err();

    assert!(err.field_errors.contains_key("subject_id"));
    assert_eq!(mock.hits(), 0);
}
