//! Tracing subscriber setup.
//!
//! Installs a console layer and, when configured, a non-blocking file layer. The
//! returned guard must be held for the lifetime of the process so buffered file
//! output is flushed on shutdown.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Crates whose output is capped at `warn` regardless of the configured level.
const QUIET_TARGETS: &[&str] = &["sqlx", "sea_orm", "sea_orm_migration"];

/// Builds the filter directive string for the configured level.
pub fn filter_directives(log_level: &str) -> String {
    let mut directives = log_level.to_lowercase();
    for target in QUIET_TARGETS {
        directives.push_str(&format!(",{target}=warn"));
    }
    directives
}

/// Initialises the global tracing subscriber.
///
/// # Returns
/// - `Ok(Some(WorkerGuard))` - Logging installed with a file sink
/// - `Ok(None)` - Logging installed, console only
/// - `Err(AppError::ConfigErr)` - Invalid level, unwritable log file, or subscriber already set
pub fn init(config: &Config) -> Result<Option<WorkerGuard>, AppError> {
    let filter = EnvFilter::try_new(filter_directives(&config.log_level))
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    let (file_layer, guard) = match &config.log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    tracing::info!("Logging configured with level: {}", config.log_level);

    Ok(guard)
}

fn file_writer(
    path: &str,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), AppError> {
    let path_ref = Path::new(path);
    let directory = path_ref
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path_ref
        .file_name()
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: "LOG_FILE".to_string(),
            value: path.to_string(),
            reason: "path has no file name".to_string(),
        })?;

    std::fs::create_dir_all(directory).map_err(|source| ConfigError::LogFile {
        path: path.to_string(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);

    Ok(tracing_appender::non_blocking(appender))
}
