use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::AppError;

type FileLayer = fmt::Layer<
    Registry,
    fmt::format::DefaultFields,
    fmt::format::Format<fmt::format::Full, fmt::time::ChronoUtc>,
    NonBlocking,
>;

/// Logger thread handles, which must be kept alive for as long as the logging targets will be used.
/// Flushed automatically when dropped.
pub struct LoggingGuards {
    _terminal: WorkerGuard,
    _file: Option<WorkerGuard>,

    /// Where the file logger writes, if there is one
    log_path: Option<PathBuf>,
}

impl LoggingGuards {
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }
}

/// Build a formatted file logger on top of a thread-safe nonblocking writer.
fn build_file_layer(file_writer: NonBlocking) -> FileLayer {
    fmt::layer::<Registry>()
        .with_timer(fmt::time::ChronoUtc::rfc_3339())
        .with_writer(file_writer)
        .with_ansi(false)
}

/// Path of the log file for a run
pub fn log_file_path(log_dir: &Path, op_name: &str) -> PathBuf {
    log_dir.join(format!("{op_name}.log"))
}

/// Set up terminal logging, and file logging if a directory is given.
///
/// Terminal output goes to stderr so that results on stdout stay clean.
pub fn init_logging(log_dir: Option<&Path>, op_name: &str) -> Result<LoggingGuards, AppError> {
    // Build file writer
    let (file_layer, file_guard, log_path) = match log_dir {
        Some(log_dir) => {
            fs::create_dir_all(log_dir)
                .map_err(|e| AppError::Logging(format!("Failed to create log directory: {e}")))?;
            let path = log_file_path(log_dir, op_name);
            let logfile = OpenOptions::new()
                .create(true)
                .truncate(false)
                .append(true)
                .open(&path)
                .map_err(|e| AppError::Logging(format!("Failed to create log file: {e}")))?;

            let (file_writer, file_guard) = tracing_appender::non_blocking(logfile);
            (Some(build_file_layer(file_writer)), Some(file_guard), Some(path))
        }
        None => (None, None, None),
    };

    let (terminal_writer, terminal_guard) = tracing_appender::non_blocking(std::io::stderr());

    // Filter for log level
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| AppError::Logging(format!("Failed to set up logging env filter: {e}")))?;

    // Formatting for terminal logger
    let terminal_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::rfc_3339())
        .with_writer(terminal_writer)
        .with_target(false);

    // Set up global root logger
    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        .with(terminal_layer)
        .try_init()
        .map_err(|e| AppError::Logging(format!("Failed to initialize logging: {e}")))?;

    Ok(LoggingGuards {
        _terminal: terminal_guard,
        _file: file_guard,
        log_path,
    })
}
