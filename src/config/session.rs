use crate::error::FolioError;
use axum_extra::extract::cookie::Key;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Minimum secret length accepted by `Key::try_from`.
pub const MIN_SECRET_LEN: usize = 64;

#[derive(Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Master secret the cookie encryption key is derived from.
    /// TOML: `session.secret`. Default: empty (random key per process).
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_string_lax")]
    pub secret: String,

    /// Session lifetime in hours.
    /// TOML: `session.ttl_hours`. Default: `24`.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            ttl_hours: default_ttl_hours(),
        }
    }
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret_set", &!self.secret.is_empty())
            .field("ttl_hours", &self.ttl_hours)
            .finish()
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), FolioError> {
        if !self.secret.is_empty() && self.secret.len() < MIN_SECRET_LEN {
            return Err(FolioError::Config(format!(
                "session.secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        if self.ttl_hours == 0 {
            return Err(FolioError::Config(
                "session.ttl_hours must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Key used by `PrivateCookieJar` to encrypt and authenticate session cookies.
    pub fn cookie_key(&self) -> Result<Key, FolioError> {
        self.validate()?;
        if self.secret.is_empty() {
            warn!("session.secret is not set; sessions will not survive a restart");
            return Ok(Key::generate());
        }
        Key::try_from(self.secret.as_bytes())
            .map_err(|e| FolioError::Config(format!("invalid session.secret: {e}")))
    }

    pub fn ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.ttl_hours))
    }
}

fn deserialize_string_lax<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    match v {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(serde::de::Error::custom(
            "expected a string or a number for session.secret",
        )),
    }
}

fn default_ttl_hours() -> u32 {
    24
}
