use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::CreateQuestionRequest;

use crate::common::{self, MockSchool};

const QUESTION_CREATE: &str = "/roles/community/questions/create/";
const ANSWER_CREATE: &str = "/roles/community/answers/create/";

#[tokio::test]
async fn board_passes_trimmed_search_term() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/community/getdata/",
        200,
        json!([{"id": 1, "question": "When is the exam?", "answer": "Friday"}]),
    );

    let entries = mock.api().list_qna(None, Some("  exam ")).await.unwrap();

    assert_eq!(entries.len(), 1);
    assert!(entries[0].is_answered());
    let req = mock.last(Method::GET, "/community/getdata/");
    assert_eq!(req.query.as_deref(), Some("search=exam"));
    assert_eq!(req.authorization, None);
}

#[tokio::test]
async fn blank_search_lists_everything() {
    let mock = MockSchool::start().await;
    mock.respond(Method::GET, "/community/getdata/", 200, json!([]));

    mock.api().list_qna(Some(common::TOKEN), Some("   ")).await.unwrap();

    let req = mock.last(Method::GET, "/community/getdata/");
    assert_eq!(req.query, None);
    assert_eq!(req.authorization.as_deref(), Some("Bearer access.token.value"));
}

#[tokio::test]
async fn question_with_answer_posts_both() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, QUESTION_CREATE, 201, json!({"id": 14}));
    mock.respond(Method::POST, ANSWER_CREATE, 201, json!({"msg": "Answer created"}));

    let req = CreateQuestionRequest::new("When is the exam?", "Friday");
    let entry = mock.api().create_question(common::TOKEN, &req).await.unwrap();

    assert_eq!(entry.id, 14);
    assert_eq!(entry.answer, "Friday");
    assert_eq!(
        mock.last(Method::POST, QUESTION_CREATE).json(),
        json!({"question": "When is the exam?"})
    );
    assert_eq!(
        mock.last(Method::POST, ANSWER_CREATE).json(),
        json!({"answer": "Friday", "questionId": 14})
    );
}

#[tokio::test]
async fn question_alone_skips_the_answer_endpoint() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, QUESTION_CREATE, 201, json!({"id": 15}));

    let req = CreateQuestionRequest::new("Is the library open?", "  ");
    let entry = mock.api().create_question(common::TOKEN, &req).await.unwrap();

    assert!(!entry.is_answered());
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn failed_answer_keeps_the_question() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, QUESTION_CREATE, 201, json!({"id": 16}));
    mock.respond(Method::POST, ANSWER_CREATE, 500, json!({"detail": "boom"}));

    let req = CreateQuestionRequest::new("Bus times?", "8am");
    let entry = mock.api().create_question(common::TOKEN, &req).await.unwrap();

    assert_eq!(entry.id, 16);
    assert_eq!(entry.answer, "");
}

#[tokio::test]
async fn delete_question_uses_its_id() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::DELETE,
        "/roles/community/questions/delete/16/",
        200,
        json!({"msg": "Deleted"}),
    );

    mock.api().delete_question(common::TOKEN, 16).await.unwrap();
    assert_eq!(mock.hits(), 1);
}
