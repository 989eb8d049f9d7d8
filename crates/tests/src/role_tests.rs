use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, RoleRequest, ROLE_CREATED_MSG};

use crate::common::{self, MockSchool};

#[tokio::test]
async fn roles_come_back_with_their_permissions() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/list_role_with_permission/",
        200,
        json!([
            {
                "role_id": 2,
                "name": "teacher",
                "role_permissions": [
                    {"permission_id": 1, "name": "create-assignment"},
                    {"permission_id": 3, "name": "view-assignment"}
                ]
            },
            {"role_id": 3, "name": "student", "role_permissions": null}
        ]),
    );

    let roles = mock.api().list_roles(common::TOKEN).await.unwrap();

    assert_eq!(roles.len(), 2);
    assert!(roles[0].has_permission("create-assignment"));
    assert!(!roles[0].has_permission("create-answer"));
    assert!(roles[1].permissions.is_empty());
}

#[tokio::test]
async fn create_role_sends_every_permission_flag() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, "/roles/create_role/", 201, json!({"msg": ROLE_CREATED_MSG}));

    let req = RoleRequest::new("librarian", ["view-assignment"]);
    let resp = mock.api().create_role(common::TOKEN, &req).await.unwrap();

    assert_eq!(resp.msg, ROLE_CREATED_MSG);
    let sent = mock.last(Method::POST, "/roles/create_role/").json();
    assert_eq!(
        sent,
        json!({
            "role": "librarian",
            "permission": {
                "create-answer": false,
                "create-assignment": false,
                "update-assignment": false,
                "view-assignment": true
            }
        })
    );
}

#[tokio::test]
async fn unexpected_create_message_is_a_rejection() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, "/roles/create_role/", 200, json!({"msg": "Role already exists"}));

    let req = RoleRequest::new("teacher", ["view-assignment"]);
    let err = mock.api().create_role(common::TOKEN, &req).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Role already exists");
}

#[tokio::test]
async fn role_without_permissions_is_not_sent() {
    let mock = MockSchool::start().await;

    let req = RoleRequest::new("empty", []);
    let err = mock.api().create_role(common::TOKEN, &req).await.unwrap_err();

    assert_eq!(
        err.field_errors.get("permission").map(String::as_str),
        Some("Select at least one permission")
    );
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn update_and_delete_address_the_role_id() {
    let mock = MockSchool::start().await;
    mock.respond(Method::PUT, "/roles/update_role/5/", 200, json!({"msg": "Role updated"}));
    mock.respond(Method::DELETE, "/roles/delete_role/5/", 204, serde_json::Value::Null);
    let api = mock.api();

    let req = RoleRequest::new("assistant", ["create-answer"]);
    api.update_role(common::TOKEN, 5, &req).await.unwrap();
    api.delete_role(common::TOKEN, 5).await.unwrap();

    assert_eq!(mock.last(Method::PUT, "/roles/update_role/5/").json()["role"], "assistant");
    assert_eq!(mock.hits(), 2);
}
