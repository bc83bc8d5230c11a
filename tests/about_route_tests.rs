mod common;

use axum::http::StatusCode;
use common::{body_json, json_request, login, send, spawn_app};

#[tokio::test]
async fn about_is_created_once_then_updated() {
    let t = spawn_app("about").await;

    let resp = send(&t.app, json_request("GET", "/api/about", None, None)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::Value::Null);

    let resp = send(
        &t.app,
        json_request("POST", "/api/about", Some(r#"{"content":"Hi"}"#), None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let cookie = login(&t.app).await;
    let resp = send(
        &t.app,
        json_request("POST", "/api/about", Some(r#"{"content":"Hi"}"#), Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["content"], "Hi");

    // A second create is refused; the caller has to update instead.
    let resp = send(
        &t.app,
        json_request("POST", "/api/about", Some(r#"{"content":"Again"}"#), Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(body_json(resp).await["error"].is_string());

    let update = format!(r#"{{"id":"{id}","content":"Hello there"}}"#);
    let resp = send(
        &t.app,
        json_request("PUT", "/api/about", Some(&update), Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["content"], "Hello there");

    let resp = send(&t.app, json_request("GET", "/api/about", None, None)).await;
    let stored = body_json(resp).await;
    assert_eq!(stored["id"], id.as_str());
    assert_eq!(stored["content"], "Hello there");
}

#[tokio::test]
async fn about_update_needs_an_existing_id() {
    let t = spawn_app("about-missing").await;
    let cookie = login(&t.app).await;

    let resp = send(
        &t.app,
        json_request(
            "PUT",
            "/api/about",
            Some(r#"{"id":"nope","content":"x"}"#),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Failed to update about"})
    );

    let resp = send(
        &t.app,
        json_request("PUT", "/api/about", Some(r#"{"content":"x"}"#), Some(&cookie)),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(t.db.get_about().await.unwrap().is_none());
}

#[tokio::test]
async fn about_update_without_a_session_changes_nothing() {
    let t = spawn_app("about-guard").await;
    let seeded = t.db.create_about("Original".to_string()).await.unwrap();

    let update = format!(r#"{{"id":"{}","content":"Defaced"}}"#, seeded.id);
    let resp = send(
        &t.app,
        json_request("PUT", "/api/about", Some(&update), None),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({"error": "Unauthorized"})
    );

    assert_eq!(t.db.get_about().await.unwrap(), Some(seeded));
}
