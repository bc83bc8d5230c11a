use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use chrono::{DateTime, Utc};
use folio_schema::SessionUser;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, FolioError};

pub const SESSION_COOKIE: &str = "folio_session";

/// Payload sealed inside the private session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Expiry, unix seconds.
    pub exp: i64,
}

impl SessionClaims {
    pub fn issue(user: &SessionUser, ttl: chrono::Duration, now: DateTime<Utc>) -> Self {
        Self {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            exp: (now + ttl).timestamp(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    pub fn user(&self) -> SessionUser {
        SessionUser {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Builds the cookie carrying `claims`; `PrivateCookieJar::add` encrypts it.
pub fn session_cookie(
    claims: &SessionClaims,
    ttl: chrono::Duration,
    secure: bool,
) -> Result<Cookie<'static>, FolioError> {
    let value = serde_json::to_string(claims)?;
    Ok(Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build())
}

/// Cookie matching the session cookie's path, for `PrivateCookieJar::remove`.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Decrypts and validates the session cookie held by `jar`.
pub fn read_session(
    jar: &PrivateCookieJar,
    now: DateTime<Utc>,
) -> Result<SessionClaims, AuthError> {
    let cookie = jar.get(SESSION_COOKIE).ok_or(AuthError::MissingSession)?;
    let claims: SessionClaims =
        serde_json::from_str(cookie.value()).map_err(|_| AuthError::InvalidSession)?;
    if claims.is_expired_at(now) {
        return Err(AuthError::ExpiredSession);
    }
    Ok(claims)
}
