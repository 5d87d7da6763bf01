//! Logger setup for applications embedding the tuner client.
//!
//! Output goes to stderr by default, or is appended to the configured log
//! file with local-time timestamps.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

/// Log file chosen by the first successful initialization (`None` = stderr).
static LOG_TARGET: OnceCell<Option<PathBuf>> = OnceCell::new();

/// Initialize the global logger.
///
/// `RUST_LOG` takes precedence over the configured level. Returns `false` if
/// the log file cannot be opened or another logger is already installed.
pub fn init_logger(config: &LoggingConfig) -> bool {
    if LOG_TARGET.get().is_some() {
        return true; // Already initialized
    }

    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Some(path) = &config.file {
        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => file,
            Err(_) => return false,
        };
        builder
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format(|buf, record| {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
                writeln!(
                    buf,
                    "[{}] [{:<5}] {}: {}",
                    timestamp,
                    record.level(),
                    record.target(),
                    record.args()
                )
            });
    }

    if builder.try_init().is_err() {
        return false;
    }

    let _ = LOG_TARGET.set(config.file.clone());
    log::info!("Radio tuner client logging initialized");
    true
}

/// Log file in use, if logging was initialized with one.
pub fn log_file() -> Option<&'static Path> {
    LOG_TARGET.get()?.as_deref()
}
