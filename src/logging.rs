use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Setup tracing output for a run.
///
/// Diagnostics go to stderr so they never mix with the progress lines the
/// orchestrator prints on stdout. `RUST_LOG` overrides the level; without
/// it, debug mode selects `debug` and normal runs stay at `warn`.
///
/// When `log_dir` is set a daily-rotating file layer is added as well.
/// The returned guard must be held for the duration of the program to
/// keep the file appender flushing; `None` when file logging is off.
pub fn setup_logging(
    log_dir: Option<&Utf8Path>,
    debug_mode: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let default_level = if debug_mode { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory: {}", dir))?;
            }

            let file_appender = rolling::daily(dir.as_std_path(), "mdconvert");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .init();

            tracing::info!("Logging initialized: dir={}, debug={}", dir, debug_mode);
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_log_directory_created() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().join("logs")).unwrap();

        // Only exercise directory creation; installing the global
        // subscriber twice in one test process would fail.
        if !log_dir.exists() {
            fs::create_dir_all(&log_dir).unwrap();
        }

        assert!(log_dir.is_dir());
    }
}
