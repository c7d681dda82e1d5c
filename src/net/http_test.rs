use super::*;
use crate::net::fake::{FakeTransport, fake_client};
use serde_json::json;

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
    assert_eq!(Method::Patch.to_string(), "PATCH");
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

#[test]
fn success_range_is_2xx_only() {
    assert!(HttpResponse { status: 201, body: String::new() }.is_success());
    assert!(!HttpResponse { status: 199, body: String::new() }.is_success());
    assert!(!HttpResponse { status: 304, body: String::new() }.is_success());
}

#[tokio::test]
async fn get_attaches_bearer_token_when_signed_in() {
    let (client, transport) = fake_client(Some("tok-1"));
    transport.respond(Method::Get, "/boards", 200, json!([]));

    let boards: Vec<serde_json::Value> = client.get("/boards").await.unwrap();

    assert!(boards.is_empty());
    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].url, "http://test.local/boards");
    assert_eq!(sent[0].authorization.as_deref(), Some("Bearer tok-1"));
}

#[tokio::test]
async fn get_without_token_sends_no_authorization() {
    let (client, transport) = fake_client(None);
    transport.respond(Method::Get, "/boards", 200, json!([]));

    let _: Vec<serde_json::Value> = client.get("/boards").await.unwrap();

    assert!(transport.requests()[0].authorization.is_none());
}

#[tokio::test]
async fn unauthorized_clears_token_and_reports_expiry() {
    let (client, transport) = fake_client(Some("stale"));
    transport.respond(Method::Get, "/boards", 401, json!({ "msg": "Token has expired" }));

    let result: Result<serde_json::Value, _> = client.get("/boards").await;

    assert_eq!(result.unwrap_err(), ClientError::AuthExpired);
    assert!(client.session().token().is_none());
}

#[tokio::test]
async fn other_failures_carry_status_and_body() {
    let (client, transport) = fake_client(Some("tok"));
    transport.respond(Method::Delete, "/boards/b1", 500, json!({ "error": "db down" }));

    let result: Result<serde::de::IgnoredAny, _> = client.delete("/boards/b1").await;

    match result.unwrap_err() {
        ClientError::RequestFailed { method, path, status, body } => {
            assert_eq!(method, Method::Delete);
            assert_eq!(path, "/boards/b1");
            assert_eq!(status, 500);
            assert!(body.contains("db down"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.session().token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn empty_success_body_decodes_as_null() {
    let (client, transport) = fake_client(Some("tok"));
    transport.respond_raw(Method::Delete, "/thumbnails/t1", 204, "");

    let value: serde_json::Value = client.delete("/thumbnails/t1").await.unwrap();

    assert!(value.is_null());
}

#[tokio::test]
async fn post_sends_json_body() {
    let (client, transport) = fake_client(Some("tok"));
    transport.respond(Method::Post, "/boards", 201, json!({ "id": "b9" }));

    let created: crate::net::types::Created = client
        .post("/boards", &json!({ "name": "Ideas" }))
        .await
        .unwrap();

    assert_eq!(created.id, "b9");
    assert_eq!(transport.requests()[0].body, Some(json!({ "name": "Ideas" })));
}

#[tokio::test]
async fn credential_posts_skip_token_and_keep_session_on_401() {
    let (client, transport) = fake_client(Some("tok"));
    transport.respond(Method::Post, "/login", 401, json!({ "error": "Invalid credentials" }));

    let response = client.post_credentials("/login", &json!({ "email": "a", "password": "b" })).await.unwrap();

    assert_eq!(response.status, 401);
    assert!(transport.requests()[0].authorization.is_none());
    assert_eq!(client.session().token().as_deref(), Some("tok"));
}

#[tokio::test]
async fn transport_failure_is_surfaced() {
    let (client, _transport): (_, FakeTransport) = fake_client(None);

    let result: Result<serde_json::Value, _> = client.get("/unrouted").await;

    assert!(matches!(result.unwrap_err(), ClientError::Transport(_)));
}
