use super::*;
use crate::net::fake::{FakeTransport, fake_client};
use crate::net::http::Method;
use serde_json::json;

fn api(token: Option<&str>) -> (BoardApi<FakeTransport>, FakeTransport) {
    let (http, transport) = fake_client(token);
    (BoardApi::new(http), transport)
}

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "hunter2".to_owned() }
}

#[test]
fn endpoint_paths_format_ids() {
    assert_eq!(board_path("b1"), "/boards/b1");
    assert_eq!(board_thumbnails_path("b1"), "/boards/b1/thumbnails");
    assert_eq!(thumbnail_path("t1"), "/thumbnails/t1");
    assert_eq!(favorite_path("t1"), "/thumbnails/t1/favorite");
}

#[tokio::test]
async fn login_returns_token() {
    let (api, transport) = api(None);
    transport.respond(Method::Post, LOGIN_PATH, 200, json!({ "token": "jwt" }));

    assert_eq!(api.login(&creds()).await.unwrap(), "jwt");
    assert_eq!(transport.requests()[0].body, Some(json!({ "email": "a@b.com", "password": "hunter2" })));
}

#[tokio::test]
async fn login_rejection_is_login_failed() {
    let (api, transport) = api(None);
    transport.respond(Method::Post, LOGIN_PATH, 401, json!({ "error": "Invalid credentials" }));

    assert_eq!(api.login(&creds()).await.unwrap_err(), ClientError::LoginFailed);
}

#[tokio::test]
async fn register_failure_surfaces_backend_error() {
    let (api, transport) = api(None);
    transport.respond(Method::Post, REGISTER_PATH, 400, json!({ "error": "Email already exists" }));

    assert_eq!(
        api.register(&creds()).await.unwrap_err(),
        ClientError::RegistrationFailed("Email already exists".to_owned())
    );
}

#[tokio::test]
async fn register_failure_without_body_uses_generic_text() {
    let (api, transport) = api(None);
    transport.respond_raw(Method::Post, REGISTER_PATH, 502, "Bad Gateway");

    assert_eq!(
        api.register(&creds()).await.unwrap_err(),
        ClientError::RegistrationFailed("Registration failed".to_owned())
    );
}

#[tokio::test]
async fn register_success() {
    let (api, transport) = api(None);
    transport.respond(Method::Post, REGISTER_PATH, 201, json!({ "message": "User registered successfully" }));

    assert!(api.register(&creds()).await.is_ok());
}

#[tokio::test]
async fn toggle_favorite_returns_server_value() {
    let (api, transport) = api(Some("tok"));
    transport.respond(Method::Patch, "/thumbnails/t1/favorite", 200, json!({ "favorite": true }));

    assert!(api.toggle_favorite("t1").await.unwrap());
    assert_eq!(transport.paths(), vec!["PATCH /thumbnails/t1/favorite"]);
}

#[tokio::test]
async fn delete_board_ignores_message_body() {
    let (api, transport) = api(Some("tok"));
    transport.respond(Method::Delete, "/boards/b1", 200, json!({ "message": "Board deleted" }));

    assert!(api.delete_board("b1").await.is_ok());
}

#[tokio::test]
async fn add_thumbnail_posts_to_board_collection() {
    let (api, transport) = api(Some("tok"));
    transport.respond(Method::Post, "/boards/b1/thumbnails", 201, json!({ "id": "t5" }));
    let body = NewThumbnail {
        video_url: "https://youtu.be/xyz".to_owned(),
        title: "Clip".to_owned(),
        category: "music".to_owned(),
    };

    let created = api.add_thumbnail("b1", &body).await.unwrap();

    assert_eq!(created.id, "t5");
    assert_eq!(transport.paths(), vec!["POST /boards/b1/thumbnails"]);
}
