use crate::auth::{SessionClaims, removal_cookie, session_cookie};
use crate::config::Config;
use crate::error::FolioError;
use crate::server::guards::RequirePageSession;
use crate::server::{pages, routes};
use crate::service::Services;

use axum::{
    Router,
    extract::{FromRef, Request},
    http::{HeaderName, HeaderValue, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use base64::Engine as _;
use chrono::Utc;
use folio_schema::SessionUser;
use rand::RngCore;
use std::time::Instant;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct FolioState {
    pub services: Services,
    pub cookie_key: Key,
    pub session_ttl: chrono::Duration,
    pub insecure_cookie: bool,
}

impl FolioState {
    pub fn new(services: Services, config: &Config) -> Result<Self, FolioError> {
        Ok(Self {
            services,
            cookie_key: config.session.cookie_key()?,
            session_ttl: config.session.ttl(),
            insecure_cookie: config.basic.insecure_cookie,
        })
    }

    /// Adds a freshly issued session cookie for `user` to `jar`.
    pub fn sign_in(
        &self,
        jar: PrivateCookieJar,
        user: &SessionUser,
    ) -> Result<PrivateCookieJar, FolioError> {
        let claims = SessionClaims::issue(user, self.session_ttl, Utc::now());
        let cookie = session_cookie(&claims, self.session_ttl, !self.insecure_cookie)?;
        info!(user = %user.email, "session issued");
        Ok(jar.add(cookie))
    }

    pub fn sign_out(&self, jar: PrivateCookieJar) -> PrivateCookieJar {
        jar.remove(removal_cookie())
    }
}

impl FromRef<FolioState> for Key {
    fn from_ref(state: &FolioState) -> Self {
        state.cookie_key.clone()
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Echo `x-request-id` even when the client did not send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    let path = uri.path();
    let protocol = format_http_version(version);

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    }

    resp
}

pub fn folio_router(state: FolioState) -> Router {
    let admin = pages::admin_router().route_layer(middleware::from_extractor_with_state::<
        RequirePageSession,
        _,
    >(state.clone()));

    Router::new()
        .merge(routes::router())
        .merge(pages::public_router())
        .merge(admin)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}
