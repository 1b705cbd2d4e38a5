use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Staging,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "stage" | "staging" => Self::Staging,
            _ => Self::Development,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env_value("APP_ENV").unwrap_or_else(|| "development".to_string()),
        );

        let host = env_value("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match env_value("APP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { raw, source })?,
            None => 8080,
        };

        let log_level = env_value("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                ansi: matches!(environment, AppEnvironment::Development),
            },
        })
    }
}

/// Blank values behave like unset ones so a sparse `.env` does not misconfigure.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Settings controlling the HTTP server binding.
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

        let ip: IpAddr = self.host.parse().map_err(|source| ConfigError::InvalidHost {
            raw: self.host.clone(),
            source,
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls. ANSI color is tied to the environment: local development
/// gets colored output, staging and production log plain text.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort {
        raw: String,
        source: std::num::ParseIntError,
    },
    InvalidHost {
        raw: String,
        source: std::net::AddrParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort { raw, .. } => {
                write!(f, "APP_PORT '{raw}' is not a valid u16 port")
            }
            ConfigError::InvalidHost { raw, .. } => {
                write!(f, "APP_HOST '{raw}' is not an IPv4/IPv6 address or 'localhost'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort { source, .. } => Some(source),
            ConfigError::InvalidHost { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.telemetry.ansi);
    }

    #[test]
    fn load_applies_environment_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "staging");
        env::set_var("APP_HOST", "0.0.0.0");
        env::set_var("APP_PORT", "9100");
        env::set_var("APP_LOG_LEVEL", "healthscore=debug");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.environment, AppEnvironment::Staging);
        let addr = config.server.socket_addr().expect("bindable address");
        assert_eq!(addr.to_string(), "0.0.0.0:9100");
        assert_eq!(config.telemetry.log_level, "healthscore=debug");
        assert!(!config.telemetry.ansi);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(
            config.server.socket_addr().expect("localhost resolves"),
            SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 8080)
        );
    }

    #[test]
    fn unparseable_host_fails_at_bind_time() {
        let server = ServerConfig {
            host: "steel-mill.internal".to_string(),
            port: 8080,
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidHost { .. })
        ));
    }

    #[test]
    fn rejects_unparseable_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "dashboard");
        let result = AppConfig::load();
        reset_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "  ");
        let config = AppConfig::load().expect("config loads");
        reset_env();
        assert_eq!(config.server.port, 8080);
    }
}
