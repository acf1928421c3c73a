use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cloudpad::router::init_router;
use cloudpad::state::AppState;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub email: String,
    pub password: String,
    pub token: String,
}

/// A router over a fresh in-memory store. Clones share the store.
pub fn setup_test_app() -> Router {
    init_router(AppState::for_tests())
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("auth-token", token);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn register_user(app: &Router, name: &str) -> TestUser {
    let email = generate_unique_email();
    let password = "secret".to_string();

    let (status, body) = send(
        app,
        "POST",
        "/api/auth/create-user",
        None,
        Some(json!({ "name": name, "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "registration failed: {body}");

    TestUser {
        email,
        password,
        token: body["authToken"].as_str().unwrap().to_string(),
    }
}

#[allow(dead_code)]
pub async fn add_note(app: &Router, token: &str, title: &str, description: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/notes/add-note",
        Some(token),
        Some(json!({ "title": title, "description": description })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add-note failed: {body}");

    body
}
