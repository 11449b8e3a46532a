use crate::bridge::{OwnedText, TextField};

/// The text fields of a track, all already transferred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackText {
    pub title: OwnedText,
    pub artist: OwnedText,
    pub album: OwnedText,
    pub genre: OwnedText,
    pub date_added: OwnedText,
}

impl TrackText {
    pub fn get(&self, field: TextField) -> &OwnedText {
        match field {
            TextField::Title => &self.title,
            TextField::Artist => &self.artist,
            TextField::Album => &self.album,
            TextField::Genre => &self.genre,
            TextField::DateAdded => &self.date_added,
        }
    }
}

/// One catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    id: u64,
    text: TrackText,
    duration_secs: u64,
    bit_rate_kbps: u8,
    sample_rate_hz: u64,
}

impl TrackRecord {
    pub fn new(
        id: u64,
        text: TrackText,
        duration_secs: u64,
        bit_rate_kbps: u8,
        sample_rate_hz: u64,
    ) -> Self {
        Self {
            id,
            text,
            duration_secs,
            bit_rate_kbps,
            sample_rate_hz,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.text.title
    }

    pub fn artist(&self) -> &str {
        &self.text.artist
    }

    pub fn album(&self) -> &str {
        &self.text.album
    }

    pub fn genre(&self) -> &str {
        &self.text.genre
    }

    pub fn date_added(&self) -> &str {
        &self.text.date_added
    }

    pub fn text(&self, field: TextField) -> &OwnedText {
        self.text.get(field)
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn bit_rate_kbps(&self) -> u8 {
        self.bit_rate_kbps
    }

    pub fn sample_rate_hz(&self) -> u64 {
        self.sample_rate_hz
    }
}
