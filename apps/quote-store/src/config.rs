//! Service Configuration
//!
//! Configuration types for the quote store, loaded from environment
//! variables. Unset or empty variables fall back to their defaults; values
//! that are set but unusable are startup errors.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `PORT` | `3000` |
//! | `BIND_ADDRESS` | `0.0.0.0` |
//! | `MAX_BODY_BYTES` | `102400` |
//! | `QUOTE_ID_STRATEGY` | `sequence` (`sequence` or `length`) |
//! | `METRICS_ENABLED` | `true` |
//! | `LOG_ANSI` | `false` |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::domain::quote::IdStrategy;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default request body limit (100 KiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address to bind.
    pub bind_address: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerSettings {
    /// Socket address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

/// Quote store settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// How new quotes get their ids.
    pub id_strategy: IdStrategy,
}

/// Log output settings. Filtering comes from `RUST_LOG`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Colored output for local development.
    pub ansi: bool,
}

/// Metrics settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSettings {
    /// Install the Prometheus recorder and serve `/metrics`.
    pub enabled: bool,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Store settings.
    pub store: StoreSettings,
    /// Logging settings.
    pub logging: LoggingSettings,
    /// Metrics settings.
    pub metrics: MetricsSettings,
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ServerSettings::default();

        let server = ServerSettings {
            bind_address: parse_or(&get, "BIND_ADDRESS", defaults.bind_address, "an IP address")?,
            port: parse_or(&get, "PORT", defaults.port, "a port number (0-65535)")?,
            max_body_bytes: parse_or(
                &get,
                "MAX_BODY_BYTES",
                defaults.max_body_bytes,
                "a byte count",
            )?,
        };

        let id_strategy = match get("QUOTE_ID_STRATEGY") {
            Some(value) => IdStrategy::from_str_case_insensitive(&value).ok_or_else(|| {
                ConfigError::InvalidValue {
                    key: "QUOTE_ID_STRATEGY".to_string(),
                    value,
                    expected: "`sequence` or `length`",
                }
            })?,
            None => IdStrategy::default(),
        };

        let metrics_enabled = get("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        let ansi = get("LOG_ANSI")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            server,
            store: StoreSettings { id_strategy },
            logging: LoggingSettings { ansi },
            metrics: MetricsSettings {
                enabled: metrics_enabled,
            },
        })
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable is set to something unusable.
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Value found.
        value: String,
        /// Description of accepted values.
        expected: &'static str,
    },
}

fn parse_or<T, G>(get: &G, key: &str, default: T, expected: &'static str) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            expected,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.socket_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.server.max_body_bytes, 102_400);
        assert_eq!(config.store.id_strategy, IdStrategy::Sequence);
        assert!(config.metrics.enabled);
        assert!(!config.logging.ansi);
    }

    #[test]
    fn reads_port_and_bind_address() {
        let config = config_from(&[("PORT", "8080"), ("BIND_ADDRESS", "127.0.0.1")]).unwrap();

        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn empty_port_uses_default() {
        let config = config_from(&[("PORT", "")]).unwrap();
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_is_error() {
        let Err(err) = config_from(&[("PORT", "http")]) else {
            panic!("expected error for non-numeric port");
        };
        let msg = err.to_string();
        assert!(msg.contains("PORT"));
        assert!(msg.contains("http"));
    }

    #[test]
    fn invalid_bind_address_is_error() {
        assert!(config_from(&[("BIND_ADDRESS", "localhost")]).is_err());
    }

    #[test]
    fn id_strategy_selection() {
        let config = config_from(&[("QUOTE_ID_STRATEGY", "Length")]).unwrap();
        assert_eq!(config.store.id_strategy, IdStrategy::CollectionLength);

        let Err(err) = config_from(&[("QUOTE_ID_STRATEGY", "uuid")]) else {
            panic!("expected error for unknown strategy");
        };
        assert!(err.to_string().contains("QUOTE_ID_STRATEGY"));
    }

    #[test]
    fn metrics_can_be_disabled() {
        assert!(!config_from(&[("METRICS_ENABLED", "false")]).unwrap().metrics.enabled);
        assert!(!config_from(&[("METRICS_ENABLED", "0")]).unwrap().metrics.enabled);
        assert!(config_from(&[("METRICS_ENABLED", "yes")]).unwrap().metrics.enabled);
    }

    #[test]
    fn ansi_logging_flag() {
        assert!(config_from(&[("LOG_ANSI", "TRUE")]).unwrap().logging.ansi);
        assert!(config_from(&[("LOG_ANSI", "1")]).unwrap().logging.ansi);
        assert!(!config_from(&[("LOG_ANSI", "no")]).unwrap().logging.ansi);
    }

    #[test]
    fn body_limit_override() {
        let config = config_from(&[("MAX_BODY_BYTES", "2048")]).unwrap();
        assert_eq!(config.server.max_body_bytes, 2048);
    }
}
