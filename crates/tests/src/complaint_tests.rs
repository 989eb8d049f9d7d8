use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, ComplaintEdit};

use crate::common::{self, MockSchool};

#[tokio::test]
async fn all_complaints_get_absolute_attachment_links() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/list/complaints/",
        200,
        json!([
            {"complainID": 1, "title": "Leaky tap", "description": "Lab 2", "suggestion": null,
             "date": "2024-03-01", "solved": false, "file": "/media/complaints/tap.jpg"},
            {"complainID": 2, "title": "Wifi", "description": "Slow", "suggestion": "Upgrade",
             "date": "2024-03-02", "solved": true, "file": null}
        ]),
    );

    let complaints = mock.api().list_complaints(common::TOKEN).await.unwrap();

    assert_eq!(complaints.len(), 2);
    assert_eq!(
        complaints[0].attachment_url,
        Some(format!("{}/media/complaints/tap.jpg", mock.base_url))
    );
    assert_eq!(complaints[0].suggestion, "");
    assert_eq!(complaints[1].attachment_url, None);
}

#[tokio::test]
async fn my_complaints_are_newest_first_with_paging() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/complaints/mine/",
        200,
        json!({
            "count": 12,
            "next": "http://school.test/roles/complaints/mine/?page=3",
            "previous": "http://school.test/roles/complaints/mine/?page=1",
            "results": [
                {"complainID": 5, "title": "Old", "description": "x", "date": "2024-01-05T08:00:00Z"},
                {"complainID": 6, "title": "New", "description": "y", "date": "2024-02-10T08:00:00Z"},
                {"complainID": 7, "title": "Undated", "description": "z", "date": ""}
            ]
        }),
    );

    let page = mock.api().my_complaints(common::TOKEN, 2).await.unwrap();

    let ids: Vec<i64> = page.items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![6, 5, 7]);
    assert!(page.has_next);
    assert!(page.has_prev);
    assert_eq!(mock.last(Method::GET, "/roles/complaints/mine/").query.as_deref(), Some("page=2"));
}

#[tokio::test]
async fn last_page_has_no_next() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/complaints/mine/",
        200,
        json!({"next": null, "results": []}),
    );

    let page = mock.api().my_complaints(common::TOKEN, 1).await.unwrap();
    assert!(!page.has_next);
    assert!(!page.has_prev);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn create_complaint_sends_fields_and_attachment() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, "/roles/complaints/create/", 201, json!({"msg": "Complaint created"}));

    let req = ComplaintEdit::new("Broken bench", "Room 4 bench is broken", "Replace it");
    let file = common::text_upload("details.txt", "third bench from the door");
    mock.api()
        .create_complaint(common::TOKEN, &req, Some(&file))
        .await
        .unwrap();

    let sent = mock.last(Method::POST, "/roles/complaints/create/");
    assert!(sent.body.contains("name=\"title\""));
    assert!(sent.body.contains("Broken bench"));
    assert!(sent.body.contains("name=\"file\"; filename=\"details.txt\""));
    assert!(sent.body.contains("third bench from the door"));
}

#[tokio::test]
async fn blank_complaint_is_rejected_before_any_request() {
    let mock = MockSchool::start().await;

    let err = mock
        .api()
        .create_complaint(common::TOKEN, &ComplaintEdit::new("  ", "", ""), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("title"));
    assert!(err.field_errors.contains_key("description"));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn disallowed_attachment_type_is_rejected() {
    let mock = MockSchool::start().await;
    let mut file = common::text_upload("run.sh", "echo hi");
    file.content_type = "application/x-sh".into();

    let err = mock
        .api()
        .create_complaint(common::TOKEN, &ComplaintEdit::new("Title", "Body", ""), Some(&file))
        .await
        .unwrap_err();

    assert_eq!(
        err.field_errors.get("file").map(String::as_str),
        Some("Files of type application/x-sh are not accepted")
    );
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn edit_and_delete_target_one_complaint() {
    let mock = MockSchool::start().await;
    mock.respond(Method::PUT, "/roles/complaints/edit/9/", 200, json!({"msg": "Updated"}));
    mock.respond(Method::DELETE, "/roles/complaints/delete/9/", 200, json!({"msg": "Deleted"}));
    let api = mock.api();

    let edit = ComplaintEdit::new("Heater", "Still cold", "");
    api.edit_complaint(common::TOKEN, 9, &edit).await.unwrap();
    api.delete_complaint(common::TOKEN, 9).await.unwrap();

    let sent = mock.last(Method::PUT, "/roles/complaints/edit/9/").json();
    assert_eq!(sent, json!({"title": "Heater", "description": "Still cold", "suggestion": ""}));
    assert_eq!(mock.last(Method::DELETE, "/roles/complaints/delete/9/").body, "");
}
