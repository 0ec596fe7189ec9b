//! Logging setup for binaries built on xmrlet.

use std::fs::OpenOptions;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Errors from installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to open log file: {0}")]
    File(#[from] std::io::Error),
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Build the filter: `RUST_LOG` wins, then `config.log_level`.
pub fn filter_for(config: &Config) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|source| LoggingError::Filter {
        filter: config.log_level.clone(),
        source,
    })
}

/// Install the global `tracing` subscriber.
///
/// Writes to `config.log_file` (appending, no ANSI colours) when set,
/// otherwise to stderr.
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let filter = filter_for(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_filter_is_reported() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = Config {
            log_level: "xmrlet=loud".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            filter_for(&config),
            Err(LoggingError::Filter { .. })
        ));
    }

    #[test]
    fn default_level_parses() {
        assert!(filter_for(&Config::default()).is_ok());
    }
}
