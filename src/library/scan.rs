use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::ScannedTrack;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn format_date(t: SystemTime) -> String {
    DateTime::<Local>::from(t).format("%Y-%m-%d").to_string()
}

fn non_blank(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn read_track(path: &Path) -> ScannedTrack {
    let mut track = ScannedTrack {
        path: path.to_path_buf(),
        title: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string(),
        ..ScannedTrack::default()
    };

    if let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) {
        track.date_added = format_date(modified);
    }

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let props = tagged.properties();
            track.duration_secs = props.duration().as_secs();
            track.bit_rate_kbps = props
                .audio_bitrate()
                .map(|kbps| u8::try_from(kbps).unwrap_or(u8::MAX))
                .unwrap_or(0);
            track.sample_rate_hz = props.sample_rate().map(u64::from).unwrap_or(0);

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = non_blank(tag.title()) {
                    track.title = v;
                }
                track.artist = non_blank(tag.artist()).unwrap_or_default();
                track.album = non_blank(tag.album()).unwrap_or_default();
                track.genre = non_blank(tag.genre()).unwrap_or_default();
            }
        }
        Err(e) => debug!("no readable tags in {}: {}", path.display(), e),
    }

    track
}

/// Scan `dir` for audio files, ordered by path.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<ScannedTrack> {
    let mut tracks: Vec<ScannedTrack> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            tracks.push(read_track(path));
        }
    }

    tracks.sort_by(|a, b| a.path.cmp(&b.path));
    debug!("scanned {} tracks under {}", tracks.len(), dir.display());
    tracks
}
