#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use folio::config::Config;
use folio::db::DbActorHandle;
use folio::server::{FolioState, folio_router};
use folio::service::Services;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

pub const OWNER_EMAIL: &str = "owner@example.com";
pub const OWNER_PASSWORD: &str = "correct horse battery staple";
pub const OWNER_NAME: &str = "Site Owner";

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn temp_database_url(label: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let seq = DB_COUNTER.fetch_add(1, Ordering::Relaxed);

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "folio-{label}-{}-{nanos}-{seq}.sqlite",
        std::process::id()
    ));
    format!("sqlite:{}", temp_path.display())
}

pub fn test_config() -> Config {
    let mut cfg = Config::default();
    cfg.session.secret = "s".repeat(folio::config::MIN_SECRET_LEN);
    cfg.owner.email = Some(OWNER_EMAIL.to_string());
    cfg.owner.password = Some(OWNER_PASSWORD.to_string());
    cfg.owner.name = Some(OWNER_NAME.to_string());
    cfg
}

pub struct TestApp {
    pub app: Router,
    pub db: DbActorHandle,
}

/// Router over a fresh database with the owner account seeded.
pub async fn spawn_app(label: &str) -> TestApp {
    let cfg = test_config();
    let db = folio::db::spawn(&temp_database_url(label))
        .await
        .expect("failed to spawn db actor");
    let services = Services::new(db.clone());
    services
        .credentials
        .ensure_owner(&cfg.owner)
        .await
        .expect("failed to seed owner");
    let state = FolioState::new(services, &cfg).expect("failed to build state");
    TestApp {
        app: folio_router(state),
        db,
    }
}

pub fn json_request(
    method: &str,
    uri: &str,
    body: Option<&str>,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .expect("failed to build request")
}

pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn body_string(resp: Response<Body>) -> String {
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(body.to_vec()).expect("response body was not utf-8")
}

pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    let body = body_string(resp).await;
    serde_json::from_str(&body).expect("response body was not json")
}

/// `name=value` pair of the session cookie set by `resp`, if any.
pub fn session_cookie_pair(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter(|v| v.starts_with("folio_session="))
        .map(|v| v.split(';').next().unwrap_or_default().to_string())
        .next()
}

/// Signs in as the seeded owner and returns the cookie header value.
pub async fn login(app: &Router) -> String {
    let body = format!(r#"{{"email":"{OWNER_EMAIL}","password":"{OWNER_PASSWORD}"}}"#);
    let resp = send(app, json_request("POST", "/api/auth/login", Some(&body), None)).await;
    assert_eq!(resp.status(), axum::http::StatusCode::OK);
    session_cookie_pair(&resp).expect("login did not set a session cookie")
}
