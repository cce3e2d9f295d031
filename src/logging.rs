use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;

const LOG_FILE_PREFIX: &str = "mastery-engine.log";

/// Keeps the non-blocking file writer flushing until dropped
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber: stdout always, plus a daily rolling file
/// when `file_logs` is set. Returns a guard only if this call installed a
/// file layer; a second call leaves the first subscriber in place and
/// returns `None`.
pub fn init_tracing(config: &EngineConfig) -> Option<FileLogGuard> {
    let env_filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init();

    match installed {
        Ok(()) => guard.map(|guard| FileLogGuard { _guard: guard }),
        Err(_) => None,
    }
}

fn file_writer(config: &EngineConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !config.file_logs {
        return None;
    }
    if let Err(err) = std::fs::create_dir_all(&config.log_dir) {
        eprintln!("failed to create log directory {}: {err}", config.log_dir);
        return None;
    }
    let appender = RollingFileAppender::new(Rotation::DAILY, &config.log_dir, LOG_FILE_PREFIX);
    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = EngineConfig {
            log_level: "not a valid ::: filter".to_string(),
            ..Default::default()
        };
        assert!(init_tracing(&config).is_none());
        assert!(init_tracing(&EngineConfig::default()).is_none());
    }

    #[test]
    fn test_no_guard_when_subscriber_already_installed() {
        init_tracing(&EngineConfig::default());

        let dir = tempfile::tempdir().expect("temp dir");
        let log_dir = dir.path().join("logs");
        let config = EngineConfig {
            file_logs: true,
            log_dir: log_dir.to_string_lossy().into_owned(),
            ..Default::default()
        };

        assert!(init_tracing(&config).is_none());
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_file_writer_skipped_when_disabled() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log_dir = dir.path().join("logs");
        let config = EngineConfig {
            log_dir: log_dir.to_string_lossy().into_owned(),
            ..Default::default()
        };

        assert!(file_writer(&config).is_none());
        assert!(!log_dir.exists());
    }
}
