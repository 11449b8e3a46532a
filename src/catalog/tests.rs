use super::*;
use crate::bridge::{RawTextDescriptor, TextField, TransferChannel};
use crate::engine::NativeEngine;
use crate::error::{BridgeError, CatalogError};
use std::ptr;
use std::sync::mpsc;
use std::thread;

#[derive(Clone)]
struct Entry {
    id: u64,
    text: [Vec<u8>; 5],
    null_field: Option<TextField>,
    duration_secs: u64,
    bit_rate_kbps: u8,
    sample_rate_hz: u64,
}

fn entry(id: u64, title: &str) -> Entry {
    Entry {
        id,
        text: [
            title.as_bytes().to_vec(),
            b"Darude".to_vec(),
            b"Who knows".to_vec(),
            b"Trance".to_vec(),
            b"2020-04-04".to_vec(),
        ],
        null_field: None,
        duration_secs: 666,
        bit_rate_kbps: 24,
        sample_rate_hz: 48_000,
    }
}

/// In-memory engine that also counts how often it was asked for its size.
struct FixtureEngine {
    entries: Vec<Entry>,
    count_calls: usize,
}

impl FixtureEngine {
    fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            count_calls: 0,
        }
    }
}

impl NativeEngine for FixtureEngine {
    fn track_count(&mut self) -> u64 {
        self.count_calls += 1;
        self.entries.len() as u64
    }

    fn track_id(&mut self, index: u64) -> u64 {
        self.entries[index as usize].id
    }

    fn text(&mut self, index: u64, field: TextField) -> RawTextDescriptor {
        let e = &self.entries[index as usize];
        if e.null_field == Some(field) {
            return RawTextDescriptor {
                start: ptr::null(),
                len: 3,
            };
        }
        let bytes = &e.text[field as usize];
        RawTextDescriptor {
            start: bytes.as_ptr(),
            len: bytes.len(),
        }
    }

    fn duration_secs(&mut self, index: u64) -> u64 {
        self.entries[index as usize].duration_secs
    }

    fn bit_rate_kbps(&mut self, index: u64) -> u8 {
        self.entries[index as usize].bit_rate_kbps
    }

    fn sample_rate_hz(&mut self, index: u64) -> u64 {
        self.entries[index as usize].sample_rate_hz
    }
}

fn titles(catalog: &Catalog) -> Vec<&str> {
    catalog.iter().map(|r| r.title()).collect()
}

#[test]
fn build_populates_every_field() {
    let mut engine = FixtureEngine::new(vec![entry(7, "Sandstorm")]);
    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::default());

    assert!(report.is_complete());
    assert_eq!(report.status(), Ok(()));
    let r = catalog.get(0).unwrap();
    assert_eq!(r.id(), 7);
    assert_eq!(r.title(), "Sandstorm");
    assert_eq!(r.artist(), "Darude");
    assert_eq!(r.album(), "Who knows");
    assert_eq!(r.genre(), "Trance");
    assert_eq!(r.date_added(), "2020-04-04");
    assert_eq!(r.text(TextField::Genre), "Trance");
    assert_eq!(r.duration_secs(), 666);
    assert_eq!(r.bit_rate_kbps(), 24);
    assert_eq!(r.sample_rate_hz(), 48_000);
}

#[test]
fn build_preserves_engine_order() {
    let mut engine = FixtureEngine::new(vec![entry(1, "B"), entry(2, "A"), entry(3, "C")]);
    let (catalog, _) = Catalog::build(&mut engine, &TransferChannel::default());
    assert_eq!(titles(&catalog), vec!["B", "A", "C"]);
}

#[test]
fn equal_titles_are_not_deduplicated() {
    let mut engine = FixtureEngine::new(vec![entry(1, "Same"), entry(2, "Same")]);
    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::default());
    assert_eq!(catalog.len(), 2);
    assert!(report.is_complete());
}

#[test]
fn bit_rate_keeps_full_u8_range() {
    let mut loud = entry(1, "Loud");
    loud.bit_rate_kbps = 255;
    let mut silent = entry(2, "Silent");
    silent.bit_rate_kbps = 0;
    let mut engine = FixtureEngine::new(vec![loud, silent]);

    let (catalog, _) = Catalog::build(&mut engine, &TransferChannel::default());
    assert_eq!(catalog.get(0).unwrap().bit_rate_kbps(), 255);
    assert_eq!(catalog.get(1).unwrap().bit_rate_kbps(), 0);
}

#[test]
fn malformed_field_drops_the_whole_entry() {
    let mut bad = entry(2, "Broken");
    bad.text[TextField::Album as usize] = vec![0x80];
    let mut engine = FixtureEngine::new(vec![entry(1, "B"), bad, entry(3, "C")]);

    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::default());

    assert_eq!(titles(&catalog), vec!["B", "C"]);
    assert!(catalog.find(2).is_none());
    assert_eq!(report.total, 3);
    assert_eq!(
        report.dropped,
        vec![DroppedEntry {
            index: 1,
            error: CatalogError::Field {
                field: TextField::Album,
                source: BridgeError::Encoding {
                    valid_up_to: 0,
                    len: 1
                },
            },
        }]
    );
    assert_eq!(
        report.status(),
        Err(CatalogError::PartialCatalogBuild {
            dropped: 1,
            total: 3
        })
    );
}

#[test]
fn oversized_field_drops_the_entry() {
    let mut long = entry(1, "Long");
    long.text[TextField::Title as usize] = vec![b'x'; 32];
    let mut engine = FixtureEngine::new(vec![long, entry(2, "Short")]);

    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::new(16));
    assert_eq!(titles(&catalog), vec!["Short"]);
    assert!(matches!(
        report.dropped[0].error,
        CatalogError::Field {
            field: TextField::Title,
            source: BridgeError::LengthOverflow { len: 32, max: 16 },
        }
    ));
}

#[test]
fn duplicate_id_drops_the_later_entry() {
    let mut engine = FixtureEngine::new(vec![entry(5, "First"), entry(5, "Second")]);
    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::default());

    assert_eq!(titles(&catalog), vec!["First"]);
    assert_eq!(report.dropped[0].index, 1);
    assert_eq!(report.dropped[0].error, CatalogError::DuplicateId { id: 5 });
}

#[test]
fn empty_text_fields_are_kept() {
    let mut sparse = entry(1, "");
    sparse.text[TextField::Genre as usize].clear();
    let mut engine = FixtureEngine::new(vec![sparse]);

    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::default());
    assert!(report.is_complete());
    assert_eq!(catalog.get(0).unwrap().title(), "");
    assert_eq!(catalog.get(0).unwrap().genre(), "");
}

#[test]
#[cfg_attr(debug_assertions, should_panic(expected = "null descriptor"))]
fn null_descriptor_is_a_defect() {
    let mut bad = entry(2, "Null");
    bad.null_field = Some(TextField::Artist);
    let mut engine = FixtureEngine::new(vec![entry(1, "Fine"), bad]);

    // Release builds log and drop the entry instead of panicking.
    let (catalog, report) = Catalog::build(&mut engine, &TransferChannel::default());
    assert_eq!(titles(&catalog), vec!["Fine"]);
    assert!(matches!(
        report.dropped[0].error,
        CatalogError::Field {
            source: BridgeError::NullDescriptor { len: 3 },
            ..
        }
    ));
}

#[test]
fn enumeration_is_restartable_without_the_engine() {
    let mut engine = FixtureEngine::new(vec![entry(1, "B"), entry(2, "A")]);
    let (catalog, _) = Catalog::build(&mut engine, &TransferChannel::default());
    assert_eq!(engine.count_calls, 1);

    let first: Vec<u64> = catalog.iter().map(|r| r.id()).collect();
    let second: Vec<u64> = (&catalog).into_iter().map(|r| r.id()).collect();
    assert_eq!(first, second);
    assert_eq!(engine.count_calls, 1);
}

#[test]
fn two_builds_are_equal_but_independently_owned() {
    let mut engine = FixtureEngine::new(vec![entry(1, "B"), entry(2, "A"), entry(3, "C")]);
    let channel = TransferChannel::default();

    let (a, _) = Catalog::build(&mut engine, &channel);
    let (b, _) = Catalog::build(&mut engine, &channel);

    assert_eq!(a, b);
    assert_ne!(a.as_slice().as_ptr(), b.as_slice().as_ptr());
}

#[test]
fn catalog_outlives_the_engine_buffers() {
    let mut engine = FixtureEngine::new(vec![entry(1, "Gone soon")]);
    let (catalog, _) = Catalog::build(&mut engine, &TransferChannel::default());
    drop(engine);
    assert_eq!(catalog.get(0).unwrap().title(), "Gone soon");
}

#[test]
fn diagnostic_summarises_the_last_drop() {
    let mut first = entry(1, "x");
    first.text[0] = vec![0xFF];
    let mut engine = FixtureEngine::new(vec![first, entry(1, "y"), entry(1, "z")]);

    let (_, report) = Catalog::build(&mut engine, &TransferChannel::default());
    let diag = report.diagnostic();
    assert_eq!(diag.total, 3);
    assert_eq!(diag.dropped, 2);
    assert_eq!(diag.last_error, Some(CatalogError::DuplicateId { id: 1 }));
}

#[test]
fn handle_starts_empty_and_publishes_after_refresh() {
    let handle = CatalogHandle::new(
        FixtureEngine::new(vec![entry(1, "B"), entry(2, "A")]),
        TransferChannel::default(),
    );
    assert!(handle.snapshot().is_empty());
    assert_eq!(handle.diagnostic(), Diagnostic::default());

    let report = handle.refresh().unwrap();
    assert!(report.is_complete());
    assert_eq!(titles(&handle.snapshot()), vec!["B", "A"]);
    assert_eq!(handle.diagnostic().total, 2);
}

#[test]
fn old_snapshot_is_unaffected_by_refresh() {
    let handle = CatalogHandle::new(
        FixtureEngine::new(vec![entry(1, "Old")]),
        TransferChannel::default(),
    );
    handle.refresh().unwrap();
    let before = handle.snapshot();

    handle
        .with_engine(|e| e.entries = vec![entry(9, "New")])
        .unwrap();
    handle.refresh().unwrap();

    assert_eq!(titles(&before), vec!["Old"]);
    assert_eq!(titles(&handle.snapshot()), vec!["New"]);
}

/// Blocks inside `track_count` until released, to hold a refresh open.
struct GateEngine {
    entered: mpsc::Sender<()>,
    release: mpsc::Receiver<()>,
}

impl NativeEngine for GateEngine {
    fn track_count(&mut self) -> u64 {
        self.entered.send(()).unwrap();
        self.release.recv().unwrap();
        0
    }

    fn track_id(&mut self, _index: u64) -> u64 {
        0
    }

    fn text(&mut self, _index: u64, _field: TextField) -> RawTextDescriptor {
        RawTextDescriptor::empty()
    }

    fn duration_secs(&mut self, _index: u64) -> u64 {
        0
    }

    fn bit_rate_kbps(&mut self, _index: u64) -> u8 {
        0
    }

    fn sample_rate_hz(&mut self, _index: u64) -> u64 {
        0
    }
}

#[test]
fn concurrent_refresh_is_rejected() {
    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    let handle = CatalogHandle::new(
        GateEngine {
            entered: entered_tx,
            release: release_rx,
        },
        TransferChannel::default(),
    );

    let background = handle.clone();
    let worker = thread::spawn(move || background.refresh());

    entered_rx.recv().unwrap();
    assert_eq!(handle.refresh(), Err(CatalogError::RefreshInProgress));
    assert!(matches!(
        handle.with_engine(|_| ()),
        Err(CatalogError::RefreshInProgress)
    ));

    release_tx.send(()).unwrap();
    let report = worker.join().unwrap().unwrap();
    assert_eq!(report.total, 0);
}
