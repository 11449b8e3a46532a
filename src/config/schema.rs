use std::path::PathBuf;

use log::LevelFilter;
use serde::Deserialize;

use crate::bridge::DEFAULT_MAX_TEXT_BYTES;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/trackbridge/config.toml` or `~/.config/trackbridge/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKBRIDGE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bridge: BridgeSettings,
    pub library: LibrarySettings,
    pub listing: ListingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeSettings {
    /// Largest text field accepted from the native engine, in bytes.
    /// Longer descriptors are treated as corrupt.
    pub max_text_bytes: usize,
    /// Log descriptor addresses at trace level. Diagnostics only.
    pub trace_descriptors: bool,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
            trace_descriptors: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "ogg".into(),
                "aiff".into(),
            ],
            follow_links: true,
            include_hidden: false,
            recursive: true,
            max_depth: None,
        }
    }
}

/// A column of the track list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    #[serde(alias = "name")]
    Title,
    Duration,
    Artist,
    Album,
    Genre,
    #[serde(alias = "date_added", alias = "added")]
    DateAdded,
    #[serde(alias = "bit_rate", alias = "bitrate")]
    BitRate,
    #[serde(alias = "sample_rate", alias = "samplerate")]
    SampleRate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Which columns to print, and in what order.
    ///
    /// Example: ["title", "artist", "duration"]
    pub columns: Vec<Column>,
    /// Separator used to join columns.
    pub separator: String,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            columns: vec![
                Column::Title,
                Column::Duration,
                Column::Artist,
                Column::Album,
                Column::Genre,
                Column::DateAdded,
                Column::BitRate,
                Column::SampleRate,
            ],
            separator: " | ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevelSetting {
    Off,
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelSetting> for LevelFilter {
    fn from(level: LogLevelSetting) -> Self {
        match level {
            LogLevelSetting::Off => LevelFilter::Off,
            LogLevelSetting::Error => LevelFilter::Error,
            LogLevelSetting::Warn => LevelFilter::Warn,
            LogLevelSetting::Info => LevelFilter::Info,
            LogLevelSetting::Debug => LevelFilter::Debug,
            LogLevelSetting::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level written to stderr and the log file.
    pub level: LogLevelSetting,
    /// Optional file that receives a copy of the log.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevelSetting::Info,
            file: None,
        }
    }
}
