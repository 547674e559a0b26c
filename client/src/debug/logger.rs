//! Logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

use super::config::{filter_for, level_directive, LogConfig, LOG_FILE_NAME};

/// Keeps the file writer flushing and allows the filter to change after startup.
///
/// Drop it only when the program is about to exit.
pub struct LogHandle {
    _guard: Option<WorkerGuard>,
    filter: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl LogHandle {
    /// Switch to the configured level name (`DEBUG`, `INFO`, `WARNING`, ...)
    /// unless `RUST_LOG` or `--debug` already decided the filter.
    pub fn apply_level(&self, level: &str) {
        if self.pinned {
            return;
        }

        let Some(directive) = level_directive(level) else {
            tracing::warn!(level = %level, "Unknown log level, keeping current filter");
            return;
        };

        match EnvFilter::try_new(filter_for(directive)) {
            Ok(filter) => {
                if let Err(e) = self.filter.reload(filter) {
                    tracing::warn!(error = %e, "Failed to update log filter");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Invalid log filter"),
        }
    }
}

/// Initialize the logging system
///
/// Sets up:
/// - Human-readable output on stderr
/// - A plain-text log file at `<log_dir>/banking-client.log` written off-thread
/// - A reloadable filter so the configured level can take over once the
///   configuration file is read
/// - A panic hook that records panics in the log
///
/// The log file is skipped with a warning when the directory cannot be created.
pub fn init(config: &LogConfig) -> LogHandle {
    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(filter_for("info")));
    let (filter_layer, filter) = reload::Layer::new(env_filter);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match open_log_file(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false); // No ANSI codes in log files
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(filter_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        setup_panic_hook();
        tracing::debug!(
            log_file = %config.log_file().display(),
            filter = %config.filter,
            "Logging initialized"
        );
    }

    LogHandle {
        _guard: guard,
        filter,
        pinned: config.pinned,
    }
}

fn open_log_file(config: &LogConfig) -> Option<RollingFileAppender> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(&config.log_dir)
        .map_err(|e| eprintln!("Warning: Failed to open log file: {}", e))
        .ok()
}

/// Log panics with their location before the default hook prints them.
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!(location = %location, message = %message, "PANIC");
        default_panic(panic_info);
    }));
}
