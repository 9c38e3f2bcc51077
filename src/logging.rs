use std::{
    fs,
    path::Path,
    sync::{Mutex, PoisonError},
};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::DESKTOP_LOG_FILE;

const STDOUT_DEFAULT_DIRECTIVE: &str = "info";
const FILE_DIRECTIVE: &str = "debug";

/// Keeps the non-blocking file writer alive for the lifetime of the app.
#[derive(Default)]
pub(crate) struct LoggingState {
    guard: Mutex<Option<WorkerGuard>>,
}

impl LoggingState {
    pub(crate) fn new(guard: Option<WorkerGuard>) -> Self {
        Self {
            guard: Mutex::new(guard),
        }
    }

    /// Drops the worker guard, which flushes buffered lines to the file.
    pub(crate) fn flush(&self) {
        self.guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

fn split_log_file_name(file_name: &str) -> (&str, Option<&str>) {
    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
        _ => (file_name, None),
    }
}

fn build_file_appender(log_dir: &Path) -> Result<RollingFileAppender, String> {
    fs::create_dir_all(log_dir).map_err(|error| {
        format!(
            "Failed to create log directory {}: {}",
            log_dir.display(),
            error
        )
    })?;

    let (prefix, suffix) = split_log_file_name(DESKTOP_LOG_FILE);
    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(prefix);
    if let Some(suffix) = suffix {
        builder = builder.filename_suffix(suffix);
    }
    builder.build(log_dir).map_err(|error| {
        format!(
            "Failed to open desktop log in {}: {}",
            log_dir.display(),
            error
        )
    })
}

/// Installs the process-wide subscriber. `log` records emitted by Tauri and
/// its plugins are forwarded into the same sinks.
pub(crate) fn init_logging(log_dir: &Path) -> Result<WorkerGuard, String> {
    let appender = build_file_appender(log_dir)?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let stdout_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(STDOUT_DEFAULT_DIRECTIVE));
    let stdout_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_target(true)
        .with_filter(stdout_filter);
    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new(FILE_DIRECTIVE));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|error| format!("Failed to install log subscriber: {error}"))?;

    Ok(guard)
}

/// Routes panics through the logger with a captured backtrace before the
/// default hook runs.
pub(crate) fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(target: "panic", "{info}\n{backtrace}");
        previous(info);
    }));
}

pub(crate) fn append_desktop_log(message: &str) {
    tracing::info!(target: "desktop", "{message}");
}

pub(crate) fn append_startup_log(message: &str) {
    tracing::info!(target: "startup", "{message}");
}

pub(crate) fn append_update_log(message: &str) {
    tracing::info!(target: "updater", "{message}");
}

pub(crate) fn append_ipc_log(message: &str) {
    tracing::info!(target: "ipc", "{message}");
}
