//! Client configuration.
//!
//! Loads `xmrlet.yaml` into an immutable [`Config`] value that is handed to
//! client construction. Environment variables take precedence over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding the digest username.
pub const ENV_DIGEST_USER: &str = "XMRLET_DIGEST_USER";
/// Environment variable overriding the digest password.
pub const ENV_DIGEST_PASSWORD: &str = "XMRLET_DIGEST_PASSWORD";
/// Environment variable overriding the wallet RPC address.
pub const ENV_WALLET_RPC_ADDR: &str = "XMRLET_WALLET_RPC_ADDR";

/// Path of the JSON-RPC endpoint on monero-wallet-rpc.
pub const JSON_RPC_PATH: &str = "/json_rpc";

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("global config already initialized")]
    AlreadyInitialized,
}

/// Username/password pair for HTTP digest authentication.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DigestCredentials {
    pub username: String,
    pub password: String,
}

impl DigestCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for DigestCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client configuration, loaded once before the client is built.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// `host:port` of monerod.
    #[serde(default = "default_daemon_rpc_addr")]
    pub daemon_rpc_addr: String,
    /// `host:port` of monero-wallet-rpc.
    #[serde(default = "default_wallet_rpc_addr")]
    pub wallet_rpc_addr: String,
    /// Digest credentials (`--rpc-login` on the wallet RPC side).
    #[serde(default)]
    pub digest: Option<DigestCredentials>,
    /// HTTP read timeout in seconds.
    #[serde(default = "default_http_read_timeout_secs")]
    pub http_read_timeout_secs: u64,
    /// Default log filter (overridden by `RUST_LOG`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log to this file instead of stderr. Unset means stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_daemon_rpc_addr() -> String {
    "127.0.0.1:18081".to_string()
}

fn default_wallet_rpc_addr() -> String {
    "127.0.0.1:18083".to_string()
}

fn default_http_read_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daemon_rpc_addr: default_daemon_rpc_addr(),
            wallet_rpc_addr: default_wallet_rpc_addr(),
            digest: None,
            http_read_timeout_secs: default_http_read_timeout_secs(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from `path` if given, otherwise start from defaults; then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())
    }

    /// Apply overrides looked up through `lookup` (normally `std::env::var`).
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ENV_WALLET_RPC_ADDR) {
            debug!(addr = %addr, "wallet address taken from {ENV_WALLET_RPC_ADDR}");
            self.wallet_rpc_addr = addr;
        }

        let user = lookup(ENV_DIGEST_USER);
        let password = lookup(ENV_DIGEST_PASSWORD);
        match (user, password, self.digest.take()) {
            (Some(username), Some(password), _) => {
                self.digest = Some(DigestCredentials { username, password });
            }
            (Some(username), None, Some(existing)) => {
                self.digest = Some(DigestCredentials {
                    username,
                    password: existing.password,
                });
            }
            (None, Some(password), Some(existing)) => {
                self.digest = Some(DigestCredentials {
                    username: existing.username,
                    password,
                });
            }
            (None, None, existing) => self.digest = existing,
            (Some(_), None, None) | (None, Some(_), None) => {
                return Err(ConfigError::Invalid(format!(
                    "{ENV_DIGEST_USER} and {ENV_DIGEST_PASSWORD} must be set together"
                )));
            }
        }

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.wallet_rpc_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("wallet_rpc_addr is empty".to_string()));
        }
        if self.http_read_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http_read_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Full URL of the wallet JSON-RPC endpoint.
    pub fn wallet_rpc_url(&self) -> String {
        let addr = self.wallet_rpc_addr.trim_end_matches('/');
        if addr.starts_with("http://") || addr.starts_with("https://") {
            format!("{addr}{JSON_RPC_PATH}")
        } else {
            format!("http://{addr}{JSON_RPC_PATH}")
        }
    }

    /// The HTTP read timeout.
    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.http_read_timeout_secs)
    }
}

static GLOBAL: OnceCell<Config> = OnceCell::new();

/// Install the process-wide default config. Can only be done once.
pub fn init_global(config: Config) -> Result<&'static Config, ConfigError> {
    GLOBAL
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    debug!("global config installed");
    GLOBAL.get().ok_or(ConfigError::AlreadyInitialized)
}

/// The process-wide default config, if [`init_global`] has run.
pub fn global() -> Option<&'static Config> {
    GLOBAL.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_monero_ports() {
        let config = Config::default();
        assert_eq!(config.daemon_rpc_addr, "127.0.0.1:18081");
        assert_eq!(config.wallet_rpc_addr, "127.0.0.1:18083");
        assert_eq!(config.read_timeout(), Duration::from_secs(10));
        assert!(config.digest.is_none());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
daemon_rpc_addr: "10.0.0.2:18081"
wallet_rpc_addr: "10.0.0.2:28083"
digest:
  username: monero
  password: hunter2
http_read_timeout_secs: 30
log_level: info
log_file: /var/log/xmrlet.log
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.wallet_rpc_addr, "10.0.0.2:28083");
        assert_eq!(
            config.digest,
            Some(DigestCredentials::new("monero", "hunter2"))
        );
        assert_eq!(config.http_read_timeout_secs, 30);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/xmrlet.log")));
    }

    #[test]
    fn parse_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = Config::from_yaml("http_read_timeout_secs: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xmrlet.yaml");
        std::fs::write(&path, "wallet_rpc_addr: \"127.0.0.1:9999\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.wallet_rpc_url(), "http://127.0.0.1:9999/json_rpc");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/xmrlet.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn env_overrides_file_values() {
        let config = Config {
            digest: Some(DigestCredentials::new("file-user", "file-pass")),
            ..Config::default()
        };
        let config = config
            .apply_env(env(&[
                (ENV_DIGEST_PASSWORD, "env-pass"),
                (ENV_WALLET_RPC_ADDR, "wallet.local:18083"),
            ]))
            .unwrap();

        assert_eq!(
            config.digest,
            Some(DigestCredentials::new("file-user", "env-pass"))
        );
        assert_eq!(config.wallet_rpc_addr, "wallet.local:18083");
    }

    #[test]
    fn env_credentials_without_file_need_both_halves() {
        let err = Config::default()
            .apply_env(env(&[(ENV_DIGEST_USER, "monero")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config = Config::default()
            .apply_env(env(&[(ENV_DIGEST_USER, "monero"), (ENV_DIGEST_PASSWORD, "pw")]))
            .unwrap();
        assert_eq!(config.digest, Some(DigestCredentials::new("monero", "pw")));
    }

    #[test]
    fn wallet_url_keeps_explicit_scheme() {
        let config = Config {
            wallet_rpc_addr: "https://node.example.com/".to_string(),
            ..Config::default()
        };
        assert_eq!(config.wallet_rpc_url(), "https://node.example.com/json_rpc");
    }

    #[test]
    fn debug_redacts_password() {
        let creds = DigestCredentials::new("monero", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("monero"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn global_is_set_once() {
        let first = init_global(Config::default()).unwrap();
        assert_eq!(first.wallet_rpc_addr, "127.0.0.1:18083");
        assert!(matches!(
            init_global(Config::default()),
            Err(ConfigError::AlreadyInitialized)
        ));
        assert!(global().is_some());
    }
}
