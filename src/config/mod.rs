mod basic;
mod owner;
mod session;

pub use basic::BasicConfig;
pub use owner::OwnerConfig;
pub use session::{MIN_SECRET_LEN, SessionConfig};

use crate::error::FolioError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::LazyLock};

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Session cookie settings (see `session` table in config.toml).
    #[serde(default)]
    pub session: SessionConfig,

    /// Site owner account created at startup (see `owner` table in config.toml).
    #[serde(default)]
    pub owner: OwnerConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "FOLIO_";

impl Config {
    /// Builds a Figment that merges defaults, a config TOML file and `FOLIO_*` env vars.
    ///
    /// Nested keys use a double underscore: `FOLIO_BASIC__LISTEN_PORT=9000`.
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration by merging defaults, `config.toml` if present and the environment.
    ///
    /// Note: this does **not** validate. Binaries should call [`Config::validate`]
    /// before serving.
    pub fn from_optional_toml() -> Self {
        Self::figment().extract().unwrap_or_else(|err| {
            panic!("failed to extract configuration (defaults + optional config.toml + env): {err}")
        })
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        self.session.validate()?;
        self.owner.validate()
    }
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_optional_toml);
