//! Plain-text rendering of a catalog.
//!
//! One header line of column labels, then one line per record with the
//! configured columns joined by the configured separator.

use crate::catalog::{Catalog, Diagnostic, TrackRecord};
use crate::config::{Column, ListingSettings};

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Title => "Track Name",
            Column::Duration => "Duration",
            Column::Artist => "Artist",
            Column::Album => "Album",
            Column::Genre => "Genre",
            Column::DateAdded => "Date Added",
            Column::BitRate => "Bit Rate",
            Column::SampleRate => "Sample Rate",
        }
    }
}

/// `m:ss`, or `h:mm:ss` from one hour up.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

fn cell(record: &TrackRecord, column: Column) -> String {
    match column {
        Column::Title => record.title().to_string(),
        Column::Duration => format_duration(record.duration_secs()),
        Column::Artist => record.artist().to_string(),
        Column::Album => record.album().to_string(),
        Column::Genre => record.genre().to_string(),
        Column::DateAdded => record.date_added().to_string(),
        Column::BitRate => format!("{} kbps", record.bit_rate_kbps()),
        Column::SampleRate => format!("{} Hz", record.sample_rate_hz()),
    }
}

pub fn header(columns: &[Column], sep: &str) -> String {
    columns
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(sep)
}

pub fn row(record: &TrackRecord, columns: &[Column], sep: &str) -> String {
    columns
        .iter()
        .map(|c| cell(record, *c))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Header followed by every record, in catalog order.
pub fn render(catalog: &Catalog, settings: &ListingSettings) -> Vec<String> {
    let mut lines = Vec::with_capacity(catalog.len() + 1);
    lines.push(header(&settings.columns, &settings.separator));
    lines.extend(
        catalog
            .iter()
            .map(|r| row(r, &settings.columns, &settings.separator)),
    );
    lines
}

/// The user-facing summary of the last build, if there is anything to say.
pub fn diagnostic_line(diag: &Diagnostic) -> Option<String> {
    if diag.dropped == 0 {
        return None;
    }
    let mut line = format!(
        "{} of {} tracks could not be read",
        diag.dropped, diag.total
    );
    if let Some(err) = &diag.last_error {
        line.push_str(&format!(" (last: {err})"));
    }
    Some(line)
}
