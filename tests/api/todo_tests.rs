//! Todo API Tests
//!
//! End-to-end flows through the router, service, repository and SQLite.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;

async fn create(app: &TestApp, name: &str, description: &str) -> i64 {
    let response = app
        .post_json(
            "/todos",
            &json!({ "name": name, "description": description }).to_string(),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    response.body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_list_empty() {
    let app = TestApp::new().await;

    let response = app.get("/todos").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_patch_delete_lifecycle() {
    let app = TestApp::new().await;

    let created = app
        .post_json("/todos", r#"{"name": "Buy milk", "description": "2%"}"#)
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.body,
        json!({ "id": 1, "name": "Buy milk", "description": "2%", "completed": false })
    );

    let patched = app.patch_json("/todos/1", r#"{"completed": true}"#).await;
    assert_eq!(patched.status, StatusCode::OK);
    assert_eq!(
        patched.body,
        json!({ "id": 1, "name": "Buy milk", "description": "2%", "completed": true })
    );

    let fetched = app.get("/todos/1").await;
    assert_eq!(fetched.body, patched.body);

    let deleted = app.delete("/todos/1").await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let missing = app.get("/todos/1").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_empty_name_inserts_nothing() {
    let app = TestApp::new().await;

    let response = app
        .post_json("/todos", r#"{"name": "", "description": "x"}"#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "name must not be blank");
    assert_eq!(app.row_count().await, 0);
}

#[tokio::test]
async fn test_create_with_missing_description() {
    let app = TestApp::new().await;

    let response = app.post_json("/todos", r#"{"name": "Buy milk"}"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "description is required");
    assert_eq!(app.row_count().await, 0);
}

#[tokio::test]
async fn test_create_reports_name_before_description() {
    let app = TestApp::new().await;

    let cases = [
        (r#"{"name": " ", "description": ""}"#, "name must not be blank"),
        (r#"{"description": ""}"#, "name is required"),
        (r#"{"name": "\t"}"#, "name must not be blank"),
    ];

    for (body, message) in cases {
        let response = app.post_json("/todos", body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.body["message"], message, "body: {body}");
    }
    assert_eq!(app.row_count().await, 0);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let app = TestApp::new().await;

    let first = create(&app, "a", "b").await;
    let second = create(&app, "c", "d").await;
    app.delete(&format!("/todos/{first}")).await;
    let third = create(&app, "e", "f").await;

    assert!(first < second && second < third);

    let ids: Vec<i64> = app
        .get("/todos")
        .await
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, third]);
}

#[tokio::test]
async fn test_unknown_id_is_not_found_everywhere() {
    let app = TestApp::new().await;
    let full = r#"{"name": "n", "description": "d", "completed": false}"#;

    assert_eq!(app.get("/todos/999").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.put_json("/todos/999", full).await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.patch_json("/todos/999", r#"{"completed": true}"#).await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.delete("/todos/999").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_reports_first_missing_field() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");

    let cases = [
        (r#"{}"#, "name is required"),
        (r#"{"completed": true}"#, "name is required"),
        (r#"{"name": "n", "completed": true}"#, "description is required"),
        (r#"{"name": "n", "description": "d"}"#, "completed is required"),
    ];

    for (body, message) in cases {
        let response = app.put_json(&uri, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.body["message"], message, "body: {body}");
    }

    // Nothing was written
    let stored = app.get(&uri).await;
    assert_eq!(stored.body["name"], "Buy milk");
}

#[tokio::test]
async fn test_update_checks_presence_and_blankness_in_field_order() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");

    let cases = [
        (r#"{"description": "  ", "completed": true}"#, "name is required"),
        (r#"{"name": " ", "completed": true}"#, "name must not be blank"),
        (r#"{"name": "n", "description": ""}"#, "description must not be blank"),
        (r#"{"name": "n", "description": "d"}"#, "completed is required"),
    ];

    for (body, message) in cases {
        let response = app.put_json(&uri, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.body["message"], message, "body: {body}");
    }
}

#[tokio::test]
async fn test_update_with_blank_name_leaves_row_unchanged() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");

    let response = app
        .put_json(&uri, r#"{"name": "  ", "description": "d", "completed": true}"#)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "name must not be blank");
    assert_eq!(
        app.get(&uri).await.body,
        json!({ "id": id, "name": "Buy milk", "description": "2%", "completed": false })
    );
}

#[tokio::test]
async fn test_patch_with_empty_description_leaves_row_unchanged() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");

    let response = app.patch_json(&uri, r#"{"description": ""}"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "description must not be blank");
    assert_eq!(
        app.get(&uri).await.body,
        json!({ "id": id, "name": "Buy milk", "description": "2%", "completed": false })
    );
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");
    let body = r#"{"name": "Buy oat milk", "description": "barista", "completed": true}"#;

    let first = app.put_json(&uri, body).await;
    let second = app.put_json(&uri, body).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
    assert_eq!(app.get(&uri).await.body, first.body);
    assert_eq!(app.row_count().await, 1);
}

#[tokio::test]
async fn test_patch_without_fields_is_rejected() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");

    let response = app.patch_json(&uri, r#"{}"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        app.get(&uri).await.body,
        json!({ "id": id, "name": "Buy milk", "description": "2%", "completed": false })
    );
}

#[tokio::test]
async fn test_patch_name_preserves_other_fields() {
    let app = TestApp::new().await;
    let id = create(&app, "Buy milk", "2%").await;
    let uri = format!("/todos/{id}");
    app.patch_json(&uri, r#"{"completed": true}"#).await;

    let response = app.patch_json(&uri, r#"{"name": "Buy bread"}"#).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "id": id, "name": "Buy bread", "description": "2%", "completed": true })
    );
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.get("/todos/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "id must be a number");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.post_json("/todos", r#"{"name": "#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "invalid request body");
}

#[tokio::test]
async fn test_storage_failure_is_opaque() {
    let app = TestApp::new().await;
    sqlx::query("DROP TABLE todos")
        .execute(&app.db)
        .await
        .unwrap();

    let response = app.get("/todos").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Internal server error");
}
