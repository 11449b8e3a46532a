//! Logging setup.
//!
//! Logs go to stderr so stdout stays reserved for the track listing. When
//! `logging.file` is configured, a copy is appended to that file as well.

use std::fs::{self, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::LoggingSettings;

fn log_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Install the global logger according to `settings`.
///
/// Failing to open the log file downgrades to stderr-only logging rather
/// than aborting.
pub fn init_logging(settings: &LoggingSettings) {
    let level = LevelFilter::from(settings.level);
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        log_config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let mut file_error = None;
    if let Some(path) = &settings.file {
        match open_log_file(path) {
            Ok(file) => loggers.push(WriteLogger::new(level, log_config(), file)),
            Err(e) => file_error = Some(e),
        }
    }

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("trackbridge: logger already initialized");
        return;
    }

    if let (Some(path), Some(e)) = (&settings.file, file_error) {
        log::warn!("could not open log file {}: {}", path.display(), e);
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
