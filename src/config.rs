//! Client configuration.
//!
//! Configuration is an explicit value passed to [`Client::new`], never hidden
//! process-wide state; the `enabled` flag is checked at the notification
//! boundary. [`Config::from_env`] parses the following environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEBUGBAR_HOST` | `127.0.0.1` | Hostname or IP of the debug bar server |
//! | `DEBUGBAR_PORT` | `8765` | Port of the debug bar server |
//! | `DEBUGBAR_TIMEOUT_MS` | `1000` | Per-notification timeout in milliseconds |
//! | `DEBUGBAR_ENABLED` | `true` | Master switch (`true`/`false`/`1`/`0`) |
//! | `DEBUGBAR_DOMAIN` | hostname | Domain tag attached to payloads (empty disables) |
//!
//! [`Client::new`]: crate::client::Client::new

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Default debug bar host.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Default debug bar port.
const DEFAULT_PORT: u16 = 8765;

/// Default per-notification timeout. Keep this low: a notification blocks
/// its caller for at most this long when the receiver is unreachable.
const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Errors that can occur during configuration parsing.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Configuration for the debug bar client.
#[derive(Debug, Clone)]
pub struct Config {
    /// Hostname or IP address of the debug bar server.
    pub host: String,

    /// Port of the debug bar server.
    pub port: u16,

    /// Maximum time to wait for the debug bar to accept a notification.
    pub timeout: Duration,

    /// Master switch. When false, every notification is a no-op.
    pub enabled: bool,

    /// Domain tag attached to payloads; groups events per application in the
    /// debug bar. `None` omits the tag.
    pub domain: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            enabled: true,
            domain: Some(hostname()),
        }
    }
}

impl Config {
    /// Creates a `Config` from `DEBUGBAR_*` environment variables, falling
    /// back to defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set but cannot be parsed:
    /// a non-numeric port, a zero or non-numeric timeout, or an enabled flag
    /// that is not one of `true`/`false`/`1`/`0`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("DEBUGBAR_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("DEBUGBAR_PORT") {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "DEBUGBAR_PORT".to_string(),
                message: format!("expected port number, got '{val}'"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let timeout = match env::var("DEBUGBAR_TIMEOUT_MS") {
            Ok(val) => {
                let millis = val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                    key: "DEBUGBAR_TIMEOUT_MS".to_string(),
                    message: format!("expected positive integer, got '{val}'"),
                })?;
                if millis == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "DEBUGBAR_TIMEOUT_MS".to_string(),
                        message: "timeout must be greater than 0".to_string(),
                    });
                }
                Duration::from_millis(millis)
            }
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        let enabled = match env::var("DEBUGBAR_ENABLED") {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DEBUGBAR_ENABLED".to_string(),
                        message: format!("expected true/false/1/0, got '{val}'"),
                    });
                }
            },
            Err(_) => true,
        };

        // An explicitly empty DEBUGBAR_DOMAIN disables the tag entirely.
        let domain = match env::var("DEBUGBAR_DOMAIN") {
            Ok(val) if val.is_empty() => None,
            Ok(val) => Some(val),
            Err(_) => Some(hostname()),
        };

        Ok(Self {
            host,
            port,
            timeout,
            enabled,
            domain,
        })
    }

    /// Builds the URL for an endpoint path, e.g. `endpoint_url("/dump")`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, endpoint)
    }
}

/// Gets the system hostname, falling back to "unknown" if it cannot be
/// determined.
fn hostname() -> String {
    gethostname::gethostname()
        .into_string()
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Helper to run tests with isolated environment variables.
    /// Clears all DEBUGBAR_* vars before the test and restores them after.
    fn with_clean_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let saved_vars: Vec<(String, String)> = env::vars()
            .filter(|(k, _)| k.starts_with("DEBUGBAR_"))
            .collect();

        for (key, _) in &saved_vars {
            env::remove_var(key);
        }

        let result = f();

        for (key, value) in saved_vars {
            env::set_var(key, value);
        }

        result
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        with_clean_env(|| {
            let config = Config::from_env().expect("should parse empty environment");

            assert_eq!(config.host, DEFAULT_HOST);
            assert_eq!(config.port, DEFAULT_PORT);
            assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
            assert!(config.enabled);
            // Domain defaults to the hostname, which is never empty.
            assert!(!config.domain.as_deref().unwrap_or_default().is_empty());
        });
    }

    #[test]
    #[serial]
    fn full_config_from_env() {
        with_clean_env(|| {
            env::set_var("DEBUGBAR_HOST", "192.168.1.10");
            env::set_var("DEBUGBAR_PORT", "9000");
            env::set_var("DEBUGBAR_TIMEOUT_MS", "250");
            env::set_var("DEBUGBAR_ENABLED", "false");
            env::set_var("DEBUGBAR_DOMAIN", "my-app");

            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.host, "192.168.1.10");
            assert_eq!(config.port, 9000);
            assert_eq!(config.timeout, Duration::from_millis(250));
            assert!(!config.enabled);
            assert_eq!(config.domain.as_deref(), Some("my-app"));
        });
    }

    #[test]
    #[serial]
    fn invalid_port_rejected() {
        with_clean_env(|| {
            env::set_var("DEBUGBAR_PORT", "not-a-port");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == "DEBUGBAR_PORT"
            ));
        });
    }

    #[test]
    #[serial]
    fn zero_timeout_rejected() {
        with_clean_env(|| {
            env::set_var("DEBUGBAR_TIMEOUT_MS", "0");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, ref message }
                    if key == "DEBUGBAR_TIMEOUT_MS" && message.contains("greater than 0")
            ));
        });
    }

    #[test]
    #[serial]
    fn invalid_enabled_flag_rejected() {
        with_clean_env(|| {
            env::set_var("DEBUGBAR_ENABLED", "maybe");

            let err = Config::from_env().unwrap_err();
            assert!(matches!(
                err,
                ConfigError::InvalidValue { ref key, .. } if key == "DEBUGBAR_ENABLED"
            ));
        });
    }

    #[test]
    #[serial]
    fn enabled_flag_accepts_numeric_forms() {
        with_clean_env(|| {
            env::set_var("DEBUGBAR_ENABLED", "0");
            let config = Config::from_env().expect("should parse");
            assert!(!config.enabled);

            env::set_var("DEBUGBAR_ENABLED", "1");
            let config = Config::from_env().expect("should parse");
            assert!(config.enabled);
        });
    }

    #[test]
    #[serial]
    fn empty_domain_disables_tag() {
        with_clean_env(|| {
            env::set_var("DEBUGBAR_DOMAIN", "");

            let config = Config::from_env().expect("should parse");
            assert!(config.domain.is_none());
        });
    }

    #[test]
    fn endpoint_url_joins_host_port_and_path() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8765,
            ..Config::default()
        };
        assert_eq!(config.endpoint_url("/dump"), "http://127.0.0.1:8765/dump");
    }

    #[test]
    fn hostname_is_never_empty() {
        assert!(!hostname().is_empty());
    }
}
