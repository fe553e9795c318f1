//! Environment-driven configuration for the intake service.
//!
//! Every setting has a default so the service starts with no environment at
//! all. Missing variables are logged at `info`, unparsable ones at `warn`, and
//! both fall back to the default.

use std::{
    env,
    fmt::{Debug, Display},
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

use axum::http::HeaderValue;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the built frontend (index.html + assets)
    pub static_dir: PathBuf,
    /// Origin allowed to call the API from a separately served frontend
    pub cors_origin: HeaderValue,
}

impl Config {
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            host: try_load("NOEL_HOST", defaults.host),
            port: try_load("NOEL_PORT", defaults.port),
            static_dir: try_load("NOEL_STATIC_DIR", defaults.static_dir),
            cors_origin: try_load("NOEL_CORS_ORIGIN", defaults.cors_origin),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        }
    }
}

/// Log filter for the tracing subscriber: `RUST_LOG` wins, then `NOEL_LOG`,
/// then `info`. Read before the subscriber exists, so it cannot log itself.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = env::var("NOEL_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        EnvFilter::new(directive)
    })
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    load_from(key, env::var(key).ok(), default)
}

fn load_from<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    let Some(raw) = raw else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default:?}");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.index_file(), PathBuf::from("../frontend/dist/index.html"));
        assert_eq!(config.cors_origin, "http://localhost:8080");
    }

    #[test]
    fn test_load_from_uses_value_when_valid() {
        let port: u16 = load_from("NOEL_PORT", Some(" 8081 ".to_string()), DEFAULT_PORT);
        assert_eq!(port, 8081);

        let host: IpAddr = load_from("NOEL_HOST", Some("0.0.0.0".to_string()), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    }

    #[test]
    fn test_load_from_falls_back_on_missing_or_invalid() {
        let port: u16 = load_from("NOEL_PORT", None, DEFAULT_PORT);
        assert_eq!(port, DEFAULT_PORT);

        let port: u16 = load_from("NOEL_PORT", Some("not-a-port".to_string()), DEFAULT_PORT);
        assert_eq!(port, DEFAULT_PORT);

        let port: u16 = load_from("NOEL_PORT", Some("70000".to_string()), DEFAULT_PORT);
        assert_eq!(port, DEFAULT_PORT);
    }
}
