//! File logging setup.
//!
//! The terminal UI owns stdout, so events are written to a log file through a
//! non-blocking appender. `RUST_LOG` takes precedence over the configured
//! filter.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::engine::config::LogConfig;
use crate::engine::AbacusError;

/// Install the global subscriber. Keep the returned guard alive until exit or
/// buffered lines are lost.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AbacusError> {
    std::fs::create_dir_all(&config.directory)?;

    let appender = tracing_appender::rolling::never(&config.directory, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(build_filter(&config.filter)?)
        .try_init()
        .map_err(|e| AbacusError::Logging(e.to_string()))?;

    Ok(guard)
}

fn build_filter(default_directive: &str) -> Result<EnvFilter, AbacusError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| AbacusError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_writes_to_log_file() {
        let config = LogConfig {
            directory: std::env::temp_dir().join(format!("abacus-log-{}", std::process::id())),
            file_name: "test.log".to_string(),
            filter: "info".to_string(),
        };

        let guard = init(&config).expect("logging should initialize once");
        tracing::error!("log line from test");
        drop(guard);

        let path = config.directory.join(&config.file_name);
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("log line from test"));

        // A second global subscriber is refused
        assert!(matches!(init(&config), Err(AbacusError::Logging(_))));

        fs::remove_dir_all(&config.directory).unwrap();
    }
}
