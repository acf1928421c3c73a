mod common;

use axum::http::StatusCode;
use common::{add_note, register_user, send, setup_test_app};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_note_lifecycle() {
    let app = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/create-user",
        None,
        Some(json!({ "name": "Ann", "email": "a@x.com", "password": "secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["authToken"].as_str().unwrap().to_string();

    let (_, ann) = send(&app, "POST", "/api/auth/user-details", Some(&token), None).await;

    let note = add_note(&app, &token, "Shop", "Buy milk").await;
    assert_eq!(note["owner"], ann["id"]);
    assert_eq!(note["title"], "Shop");
    assert_eq!(note["description"], "Buy milk");
    assert_eq!(note["tag"], "General");
    let id = note["id"].as_str().unwrap().to_string();

    let (status, notes) = send(&app, "GET", "/api/notes/fetch-all-notes", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(notes, json!([note]));

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&token),
        Some(json!({ "tag": "home" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"]["tag"], "home");
    assert_eq!(body["note"]["title"], "Shop");
    assert_eq!(body["note"]["description"], "Buy milk");

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/notes/delete-note/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Success"], "Note has been deleted!");
    assert_eq!(body["note"]["id"], id.as_str());

    let (status, notes) = send(&app, "GET", "/api/notes/fetch-all-notes", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn test_notes_require_token() {
    let app = setup_test_app();

    let (status, _) = send(&app, "GET", "/api/notes/fetch-all-notes", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/notes/add-note",
        None,
        Some(json!({ "title": "Shop", "description": "Buy milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_add_note_validation() {
    let app = setup_test_app();
    let user = register_user(&app, "Ann").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/notes/add-note",
        Some(&user.token),
        Some(json!({ "title": "ab", "description": "abcd" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["msg"], "Description must be of atleast 5 characters!");
    assert_eq!(errors[1]["msg"], "Title must be of atleast 3 characters!");
    assert_eq!(errors[1]["value"], "ab");

    let (_, notes) = send(&app, "GET", "/api/notes/fetch-all-notes", Some(&user.token), None).await;
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn test_users_only_see_their_own_notes() {
    let app = setup_test_app();
    let ann = register_user(&app, "Ann").await;
    let bob = register_user(&app, "Bob").await;

    add_note(&app, &ann.token, "First", "Ann's first note").await;
    add_note(&app, &bob.token, "Bob's", "Bob's only note").await;
    add_note(&app, &ann.token, "Second", "Ann's second note").await;

    let (_, notes) = send(&app, "GET", "/api/notes/fetch-all-notes", Some(&ann.token), None).await;
    let titles: Vec<_> = notes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_other_user_cannot_modify_note() {
    let app = setup_test_app();
    let ann = register_user(&app, "Ann").await;
    let bob = register_user(&app, "Bob").await;

    let note = add_note(&app, &ann.token, "Shop", "Buy milk").await;
    let id = note["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&bob.token),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Not Allowed!");

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/notes/delete-note/{id}"),
        Some(&bob.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Not Allowed!");

    let (_, notes) = send(&app, "GET", "/api/notes/fetch-all-notes", Some(&ann.token), None).await;
    assert_eq!(notes, json!([note]));

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&ann.token),
        Some(json!({ "title": "Groceries" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields() {
    let app = setup_test_app();
    let user = register_user(&app, "Ann").await;
    let note = add_note(&app, &user.token, "Shop", "Buy milk").await;
    let id = note["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&user.token),
        Some(json!({ "description": "Buy oat milk", "title": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = &body["note"];
    assert_eq!(updated["description"], "Buy oat milk");
    assert_eq!(updated["title"], note["title"]);
    assert_eq!(updated["tag"], note["tag"]);
    assert_eq!(updated["owner"], note["owner"]);
    assert_eq!(updated["created_at"], note["created_at"]);
}

#[tokio::test]
async fn test_missing_note_is_not_found() {
    let app = setup_test_app();
    let user = register_user(&app, "Ann").await;
    let missing = Uuid::new_v4();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/notes/delete-note/{missing}"),
        Some(&user.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found!");

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{missing}"),
        Some(&user.token),
        Some(json!({ "tag": "home" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/notes/delete-note/not-a-uuid",
        Some(&user.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_body_reaches_ownership_checks() {
    let app = setup_test_app();
    let ann = register_user(&app, "Ann").await;
    let bob = register_user(&app, "Bob").await;
    let note = add_note(&app, &ann.token, "Shop", "Buy milk").await;
    let id = note["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{}", Uuid::new_v4()),
        Some(&ann.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found!");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&bob.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Not Allowed!");

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&ann.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"], note);
}

#[tokio::test]
async fn test_update_with_whitespace_tag_keeps_tag() {
    let app = setup_test_app();
    let user = register_user(&app, "Ann").await;
    let note = add_note(&app, &user.token, "Shop", "Buy milk").await;
    let id = note["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/notes/update-note/{id}"),
        Some(&user.token),
        Some(json!({ "tag": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["note"]["tag"], "General");
}
