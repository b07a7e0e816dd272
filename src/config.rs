/*
 * Responsibility
 * - Read process configuration from the environment (.env is optional)
 * - Validate values; a malformed value fails startup instead of silently defaulting
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_REQUEST_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(value: Option<&str>) -> Self {
        match value.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub request_body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let timeout_secs: u64 = parse_or(
            &lookup,
            "REQUEST_TIMEOUT_SECONDS",
            DEFAULT_REQUEST_TIMEOUT_SECONDS,
        )?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
        }

        let request_body_limit_bytes = parse_or(
            &lookup,
            "REQUEST_BODY_LIMIT_BYTES",
            DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        )?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            request_timeout: Duration::from_secs(timeout_secs),
            request_body_limit_bytes,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS),
            request_body_limit_bytes: DEFAULT_REQUEST_BODY_LIMIT_BYTES,
        }
    }
}

// Absent → default, present but unparsable → Invalid.
fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
    }

    #[test]
    fn reads_port_and_limits() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("REQUEST_TIMEOUT_SECONDS", "5"),
            ("REQUEST_BODY_LIMIT_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.request_body_limit_bytes, 2048);
    }

    #[test]
    fn rejects_malformed_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("PORT"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err =
            Config::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECONDS", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("REQUEST_TIMEOUT_SECONDS"));
    }

    #[test]
    fn splits_cors_origins_and_drops_blanks() {
        let config = Config::from_lookup(lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            " https://a.example , ,https://b.example,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn app_env_parsing() {
        assert_eq!(AppEnv::parse(Some("PROD")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("production")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("staging")), AppEnv::Development);
        assert_eq!(AppEnv::parse(None), AppEnv::Development);
        assert!(AppEnv::Production.is_production());
    }
}
