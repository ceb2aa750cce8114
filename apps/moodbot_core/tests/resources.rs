mod common;

use axum::http::{Method, StatusCode};
use moodbot_core::models::{journal_entry, note, post};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn note_lifecycle_and_ownership() {
    let app = TestApp::new().await;
    let u1 = app.signup("Uma", "u1@example.com").await;
    let u2 = app.signup("Ugo", "u2@example.com").await;
    let a1 = app.admin("Ada", "a1@example.com").await;

    let (status, n1) = app
        .call(
            Method::POST,
            "/api/notes",
            Some(&u1.token),
            Some(json!({ "mood": "calm", "note": "rain on the window", "date": "2025-10-20" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(n1["user"], u1.id);
    let uri = format!("/api/notes/{}", n1["id"]);

    // other users see only their own
    let (_, list) = app.call(Method::GET, "/api/notes", Some(&u2.token), None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);

    let (status, _) = app
        .call(Method::PUT, &uri, Some(&u2.token), Some(json!({ "note": "mine now" })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.call(Method::DELETE, &uri, Some(&u2.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = app
        .call(Method::PUT, &uri, Some(&u1.token), Some(json!({ "mood": "happy" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["mood"], "happy");
    assert_eq!(updated["note"], "rain on the window");

    let (status, body) = app.call(Method::DELETE, &uri, Some(&a1.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted");

    let (status, _) = app.call(Method::DELETE, &uri, Some(&u1.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notes_are_listed_newest_first() {
    let app = TestApp::new().await;
    let u1 = app.signup("Uma", "u1@example.com").await;
    for day in ["2025-10-18", "2025-10-19", "2025-10-20"] {
        let (status, _) = app
            .call(
                Method::POST,
                "/api/notes",
                Some(&u1.token),
                Some(json!({ "mood": "neutral", "note": day, "date": day })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (_, list) = app.call(Method::GET, "/api/notes", Some(&u1.token), None).await;
    let notes: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["note"].as_str().unwrap())
        .collect();
    assert_eq!(notes, ["2025-10-20", "2025-10-19", "2025-10-18"]);
}

#[tokio::test]
async fn note_validation() {
    let app = TestApp::new().await;
    let u1 = app.signup("Uma", "u1@example.com").await;

    let (status, _) = app
        .call(
            Method::POST,
            "/api/notes",
            Some(&u1.token),
            Some(json!({ "mood": "calm", "note": "x", "date": "yesterday" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .call(
            Method::POST,
            "/api/notes",
            Some(&u1.token),
            Some(json!({ "mood": "ecstatic", "note": "x", "date": "2025-10-20" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn journal_lifecycle_and_ownership() {
    let app = TestApp::new().await;
    let u1 = app.signup("Uma", "u1@example.com").await;
    let u2 = app.signup("Ugo", "u2@example.com").await;

    let (status, entry) = app
        .call(
            Method::POST,
            "/api/journal",
            Some(&u1.token),
            Some(json!({
                "text": "long walk",
                "gratitude": "sunshine",
                "mood": "sleepy",
                "date": "2025-10-20"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["mood"], "sleepy");
    let uri = format!("/api/journal/{}", entry["id"]);

    let (status, _) = app.call(Method::DELETE, &uri, Some(&u2.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = app
        .call(
            Method::PUT,
            &uri,
            Some(&u1.token),
            Some(json!({ "text": "longer walk", "date": "2025-10-21" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["text"], "longer walk");
    assert_eq!(updated["gratitude"], "sunshine");
    assert_eq!(updated["date"], "2025-10-21");

    let (_, list) = app.call(Method::GET, "/api/journal", Some(&u1.token), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app.call(Method::DELETE, &uri, Some(&u1.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(journal_entry::Entity::find().count(&app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn wall_posts_and_likes() {
    let app = TestApp::new().await;
    let u1 = app.signup("Uma", "u1@example.com").await;
    let u2 = app.signup("Ugo", "u2@example.com").await;

    let (status, _) = app
        .call(Method::POST, "/api/posts", None, Some(json!({ "content": "hi" })))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, p) = app
        .call(
            Method::POST,
            "/api/posts",
            Some(&u1.token),
            Some(json!({ "content": "first cup of the day" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(p["userName"], "Uma");
    assert_eq!(p["moodTag"], "positive");
    assert_eq!(p["likes"], 0);
    let id = p["id"].as_i64().unwrap();

    // reading the wall is anonymous
    let (status, wall) = app.call(Method::GET, "/api/posts", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wall.as_array().unwrap().len(), 1);

    let like = format!("/api/posts/{id}/like");
    app.call(Method::POST, &like, Some(&u2.token), None).await;
    let (status, liked) = app.call(Method::POST, &like, Some(&u1.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(liked["likes"], 2);

    let (status, _) = app
        .call(Method::POST, "/api/posts/999/like", Some(&u1.token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/posts/{id}");
    let (status, _) = app.call(Method::DELETE, &uri, Some(&u2.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.call(Method::DELETE, &uri, Some(&u1.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post::Entity::find().count(&app.state.db).await.unwrap(), 0);
}

#[tokio::test]
async fn admin_overview_and_user_removal() {
    let app = TestApp::new().await;
    let a1 = app.admin("Ada", "a1@example.com").await;
    let u1 = app.signup("Uma", "u1@example.com").await;

    app.call(
        Method::POST,
        "/api/notes",
        Some(&u1.token),
        Some(json!({ "mood": "sad", "note": "long day", "date": "2025-10-20" })),
    )
    .await;
    app.call(
        Method::POST,
        "/api/posts",
        Some(&u1.token),
        Some(json!({ "content": "hello wall", "moodTag": "support" })),
    )
    .await;

    let (status, _) = app
        .call(Method::GET, "/api/admin/overview", Some(&u1.token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, overview) = app
        .call(Method::GET, "/api/admin/overview", Some(&a1.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(overview["usersCount"], 2);
    assert_eq!(overview["postsCount"], 1);
    let recent = overview["recentUsers"].as_array().unwrap();
    assert_eq!(recent.len(), 2);
    assert!(recent.iter().all(|u| u.get("passwordHash").is_none()));

    let (status, _) = app
        .call(Method::DELETE, "/api/admin/users/999", Some(&a1.token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/admin/users/{}", u1.id);
    let (status, body) = app.call(Method::DELETE, &uri, Some(&a1.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted successfully");

    assert_eq!(note::Entity::find().count(&app.state.db).await.unwrap(), 0);
    assert_eq!(post::Entity::find().count(&app.state.db).await.unwrap(), 0);

    // the removed user's token still verifies, but there is nobody behind it
    let (status, _) = app.call(Method::GET, "/api/auth/me", Some(&u1.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, users) = app.call(Method::GET, "/api/admin/users", Some(&a1.token), None).await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn removed_user_cannot_create_content() {
    let app = TestApp::new().await;
    let a1 = app.admin("Ada", "a1@example.com").await;
    let u1 = app.signup("Uma", "u1@example.com").await;

    let uri = format!("/api/admin/users/{}", u1.id);
    let (status, _) = app.call(Method::DELETE, &uri, Some(&a1.token), None).await;
    assert_eq!(status, StatusCode::OK);

    let attempts = [
        ("/api/notes", json!({ "mood": "calm", "note": "still here?", "date": "2025-10-21" })),
        ("/api/journal", json!({ "text": "dear diary", "date": "2025-10-21" })),
        ("/api/posts", json!({ "content": "anyone?" })),
    ];
    for (uri, body) in attempts {
        let (status, resp) = app.call(Method::POST, uri, Some(&u1.token), Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}: {resp}");
        assert_eq!(resp["message"], "User not found");
    }

    assert_eq!(note::Entity::find().count(&app.state.db).await.unwrap(), 0);
    assert_eq!(journal_entry::Entity::find().count(&app.state.db).await.unwrap(), 0);
    assert_eq!(post::Entity::find().count(&app.state.db).await.unwrap(), 0);
}
