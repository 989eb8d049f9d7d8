use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::CreateNoticeRequest;

use crate::common::{self, MockSchool};

#[tokio::test]
async fn notices_are_filtered_by_semester() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/community/filter_notice/",
        200,
        json!([
            {"id": 3, "noticeName": "Exam timetable", "faculty_batch_Sem": 4, "ImageFile": "/media/notices/tt.png"},
            {"id": 4, "noticeName": "Sports day", "faculty_batch_Sem": 4, "ImageFile": null}
        ]),
    );

    let notices = mock.api().filter_notices(common::TOKEN, 4).await.unwrap();

    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].name, "Exam timetable");
    assert_eq!(
        notices[0].image_url,
        Some(format!("{}/media/notices/tt.png", mock.base_url))
    );
    let req = mock.last(Method::GET, "/roles/community/filter_notice/");
    assert_eq!(req.query.as_deref(), Some("faculty_batch_sem_id=4"));
}

#[tokio::test]
async fn no_matching_notices_message_reads_as_empty_list() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/community/filter_notice/",
        200,
        json!({"msg": "No notices found"}),
    );

    let notices = mock.api().filter_notices(common::TOKEN, 7).await.unwrap();
    assert!(notices.is_empty());
}

#[tokio::test]
async fn create_notice_uploads_image_under_image_file() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, "/roles/community/create_notice/", 201, json!({"msg": "Notice created"}));

    let req = CreateNoticeRequest::new(" Holiday ", 2);
    let image = common::png_upload("holiday.png", b"png-bytes");
    mock.api()
        .create_notice(common::TOKEN, &req, Some(&image))
        .await
        .unwrap();

    let sent = mock.last(Method::POST, "/roles/community/create_notice/");
    assert!(sent.body.contains("name=\"noticeName\""));
    assert!(sent.body.contains("Holiday"));
    assert!(sent.body.contains("name=\"faculty_batch_sem\""));
    assert!(sent.body.contains("name=\"ImageFile\"; filename=\"holiday.png\""));
}

#[tokio::test]
async fn semester_out_of_range_is_rejected_locally() {
    let mock = MockSchool::start().await;

    let err = mock
        .api()
        .create_notice(common::TOKEN, &CreateNoticeRequest::new("Trip", 9), None)
        .await
        .unwrap_err();

    assert_eq!(
        err.field_errors.get("semester").map(String::as_str),
        Some("Choose a semester between 1 and 8")
    );
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn delete_notice_uses_its_id() {
    let mock = MockSchool::start().await;
    mock.respond(Method::DELETE, "/roles/community/delete_notice/3/", 200, json!({"msg": "Deleted"}));

    let resp = mock.api().delete_notice(common::TOKEN, 3).await.unwrap();
    assert_eq!(resp.msg, "Deleted");
}
