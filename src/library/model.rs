use std::path::PathBuf;

/// Metadata for one audio file, as held by the native engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedTrack {
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// Local date the file was last modified, `YYYY-MM-DD`.
    pub date_added: String,
    pub duration_secs: u64,
    /// Saturates at `u8::MAX`; the engine ABI carries an 8-bit value.
    pub bit_rate_kbps: u8,
    pub sample_rate_hz: u64,
}
