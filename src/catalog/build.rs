use std::collections::HashSet;
use std::slice;
use std::sync::Arc;

use log::{debug, error, warn};

use crate::bridge::{OwnedText, TextField, TransferChannel};
use crate::engine::NativeEngine;
use crate::error::{BridgeError, CatalogError};

use super::record::{TrackRecord, TrackText};

/// An ordered, read-only sequence of track records.
///
/// Cloning shares the records; two separate builds never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Arc<[TrackRecord]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::new()),
        }
    }
}

/// An entry left out of a catalog, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedEntry {
    /// Position in the engine's report.
    pub index: u64,
    pub error: CatalogError,
}

/// Outcome of a catalog build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Entries the engine reported.
    pub total: u64,
    pub dropped: Vec<DroppedEntry>,
}

/// The single value the presentation layer surfaces about the last build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostic {
    pub total: u64,
    pub dropped: usize,
    pub last_error: Option<CatalogError>,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// `PartialCatalogBuild` when any entry was dropped.
    pub fn status(&self) -> Result<(), CatalogError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(CatalogError::PartialCatalogBuild {
                dropped: self.dropped.len(),
                total: self.total,
            })
        }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        Diagnostic {
            total: self.total,
            dropped: self.dropped.len(),
            last_error: self.dropped.last().map(|d| d.error.clone()),
        }
    }
}

impl Catalog {
    /// Build a catalog from every entry `engine` reports.
    ///
    /// Each text descriptor is transferred before the engine is called
    /// again. An entry is kept only if all five text fields transfer and
    /// its id has not been seen earlier in this build; otherwise it is
    /// recorded in the report and skipped.
    ///
    /// # Panics
    ///
    /// In debug builds, when the engine hands out a null descriptor with a
    /// non-zero length. Release builds log the defect and drop the entry.
    pub fn build<E>(engine: &mut E, channel: &TransferChannel) -> (Catalog, BuildReport)
    where
        E: NativeEngine + ?Sized,
    {
        let total = engine.track_count();
        let mut report = BuildReport {
            total,
            dropped: Vec::new(),
        };
        let mut records = Vec::new();
        let mut seen = HashSet::new();

        for index in 0..total {
            let result = read_entry(engine, channel, index).and_then(|record| {
                if seen.insert(record.id()) {
                    Ok(record)
                } else {
                    Err(CatalogError::DuplicateId { id: record.id() })
                }
            });

            match result {
                Ok(record) => records.push(record),
                Err(err) => {
                    if let CatalogError::Field {
                        source: BridgeError::NullDescriptor { .. },
                        ..
                    } = &err
                    {
                        if cfg!(debug_assertions) {
                            panic!("native engine defect at entry {index}: {err}");
                        }
                        error!("native engine defect at entry {index}: {err}");
                    } else {
                        warn!("dropping catalog entry {index}: {err}");
                    }
                    report.dropped.push(DroppedEntry { index, error: err });
                }
            }
        }

        debug!(
            "built catalog: {} of {} entries",
            records.len(),
            report.total
        );
        let catalog = Catalog {
            records: Arc::from(records),
        };
        (catalog, report)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TrackRecord> {
        self.records.get(index)
    }

    pub fn find(&self, id: u64) -> Option<&TrackRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Iterate in engine order. Can be repeated without touching the engine.
    pub fn iter(&self) -> slice::Iter<'_, TrackRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[TrackRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TrackRecord;
    type IntoIter = slice::Iter<'a, TrackRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn transfer_field<E>(
    engine: &mut E,
    channel: &TransferChannel,
    index: u64,
    field: TextField,
) -> Result<OwnedText, CatalogError>
where
    E: NativeEngine + ?Sized,
{
    let desc = engine.text(index, field);
    // SAFETY: the engine keeps the buffer readable until its next call,
    // and the transfer copies it out before returning.
    unsafe { channel.transfer(desc) }.map_err(|source| CatalogError::Field { field, source })
}

fn read_entry<E>(
    engine: &mut E,
    channel: &TransferChannel,
    index: u64,
) -> Result<TrackRecord, CatalogError>
where
    E: NativeEngine + ?Sized,
{
    let id = engine.track_id(index);
    let text = TrackText {
        title: transfer_field(engine, channel, index, TextField::Title)?,
        artist: transfer_field(engine, channel, index, TextField::Artist)?,
        album: transfer_field(engine, channel, index, TextField::Album)?,
        genre: transfer_field(engine, channel, index, TextField::Genre)?,
        date_added: transfer_field(engine, channel, index, TextField::DateAdded)?,
    };

    Ok(TrackRecord::new(
        id,
        text,
        engine.duration_secs(index),
        engine.bit_rate_kbps(index),
        engine.sample_rate_hz(index),
    ))
}
