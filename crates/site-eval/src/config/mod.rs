use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage of the evaluation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Service configuration. The scoring model itself has no runtime knobs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Loads `.env` when present, then reads `APP_*` variables from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let environment = AppEnvironment::parse(&read("APP_ENV", "development"));
        let host = read("APP_HOST", DEFAULT_HOST);
        let raw_port = read("APP_PORT", DEFAULT_PORT);
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort { value: raw_port })?;
        let log_level = read("APP_LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        value: String,
    },
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { value } => {
                write!(f, "APP_PORT must be a valid u16, got '{}'", value)
            }
            ConfigError::InvalidHost { host, .. } => {
                write!(f, "APP_HOST '{}' must parse to an IPv4 or IPv6 address", host)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { .. } => None,
            ConfigError::InvalidHost { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_variables_missing() {
        let config = config_from(&[]).expect("defaults load");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("APP_ENV", " Production "),
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "8080"),
            ("APP_LOG_LEVEL", "site_eval=debug"),
        ])
        .expect("overrides load");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.telemetry.log_level, "site_eval=debug");
        let addr = config.server.socket_addr().expect("address parses");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([0, 0, 0, 0]), 8080));
    }

    #[test]
    fn ci_maps_to_test_environment() {
        let config = config_from(&[("APP_ENV", "ci")]).expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
    }

    #[test]
    fn rejects_invalid_port() {
        let err = config_from(&[("APP_PORT", "70000")]).expect_err("port overflow");
        assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "70000"));
    }

    #[test]
    fn accepts_localhost_and_rejects_hostnames() {
        let config = config_from(&[("APP_HOST", "localhost")]).expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));

        let config = config_from(&[("APP_HOST", "example.com")]).expect("config loads");
        assert!(matches!(
            config.server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }
}
