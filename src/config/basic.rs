use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// `[basic]`: where the site listens, where it stores data, how loudly it logs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BasicConfig {
    /// Interface to bind; `0.0.0.0` serves on every interface.
    #[serde(default = "any_interface")]
    pub listen_addr: IpAddr,

    #[serde(default = "http_port")]
    pub listen_port: u16,

    /// sqlx SQLite URL. The file is created on first start.
    #[serde(default = "sqlite_file")]
    pub database_url: String,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "info_level")]
    pub loglevel: String,

    /// Issue session cookies without `Secure`, for local development over plain HTTP.
    #[serde(default)]
    pub insecure_cookie: bool,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: any_interface(),
            listen_port: http_port(),
            database_url: sqlite_file(),
            loglevel: info_level(),
            insecure_cookie: false,
        }
    }
}

fn any_interface() -> IpAddr {
    Ipv4Addr::UNSPECIFIED.into()
}

fn http_port() -> u16 {
    8080
}

fn sqlite_file() -> String {
    "sqlite://folio.db".to_string()
}

fn info_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::BasicConfig;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: BasicConfig = serde_json::from_str(r#"{"listen_port": 3000}"#).unwrap();
        assert_eq!(cfg.listen_port, 3000);
        assert_eq!(cfg.database_url, "sqlite://folio.db");
        assert_eq!(cfg.loglevel, "info");
        assert!(cfg.listen_addr.is_unspecified());
        assert!(!cfg.insecure_cookie);
    }
}
