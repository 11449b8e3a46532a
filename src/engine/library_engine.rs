use std::ffi::c_void;
use std::path::Path;

use crate::bridge::{RawTextDescriptor, TextField};
use crate::config::LibrarySettings;
use crate::library::{ScannedTrack, scan};

use super::{ForeignEngine, NativeEngine, NativeEngineVTable};

/// The librarian engine: owns scanned track metadata and serves it through
/// [`NativeEngine`] and the `trackbridge_engine_*` C entry points.
///
/// Text descriptors point straight into the engine's own strings, so they
/// stay valid until the engine is rescanned or dropped.
#[derive(Debug, Default)]
pub struct LibraryEngine {
    tracks: Vec<ScannedTrack>,
}

impl LibraryEngine {
    pub fn new(tracks: Vec<ScannedTrack>) -> Self {
        Self { tracks }
    }

    pub fn open(dir: &Path, settings: &LibrarySettings) -> Self {
        Self::new(scan(dir, settings))
    }

    /// Replace the engine's tracks with a fresh scan of `dir`.
    pub fn rescan(&mut self, dir: &Path, settings: &LibrarySettings) {
        self.tracks = scan(dir, settings);
    }

    pub fn tracks(&self) -> &[ScannedTrack] {
        &self.tracks
    }

    fn track(&self, index: u64) -> Option<&ScannedTrack> {
        usize::try_from(index).ok().and_then(|i| self.tracks.get(i))
    }

    /// Function table over this engine, for hosts that speak the C ABI.
    pub fn vtable(&mut self) -> NativeEngineVTable {
        NativeEngineVTable {
            ctx: (self as *mut LibraryEngine).cast(),
            track_count: trackbridge_engine_track_count,
            track_id: trackbridge_engine_track_id,
            text: trackbridge_engine_text,
            duration_secs: trackbridge_engine_duration_secs,
            bit_rate_kbps: trackbridge_engine_bit_rate_kbps,
            sample_rate_hz: trackbridge_engine_sample_rate_hz,
        }
    }

    /// Reach this engine through its own C entry points.
    pub fn foreign(&mut self) -> ForeignEngine<'_> {
        let vtable = self.vtable();
        // SAFETY: the table points at `self`, which the returned engine
        // borrows mutably for its whole lifetime.
        unsafe { ForeignEngine::new(vtable) }
    }
}

impl NativeEngine for LibraryEngine {
    fn track_count(&mut self) -> u64 {
        self.tracks.len() as u64
    }

    fn track_id(&mut self, index: u64) -> u64 {
        // Scan order is stable within one scan, so the index doubles as id.
        self.track(index).map(|_| index).unwrap_or(0)
    }

    fn text(&mut self, index: u64, field: TextField) -> RawTextDescriptor {
        let Some(t) = self.track(index) else {
            return RawTextDescriptor::empty();
        };
        let s = match field {
            TextField::Title => &t.title,
            TextField::Artist => &t.artist,
            TextField::Album => &t.album,
            TextField::Genre => &t.genre,
            TextField::DateAdded => &t.date_added,
        };
        RawTextDescriptor::for_str(s)
    }

    fn duration_secs(&mut self, index: u64) -> u64 {
        self.track(index).map(|t| t.duration_secs).unwrap_or(0)
    }

    fn bit_rate_kbps(&mut self, index: u64) -> u8 {
        self.track(index).map(|t| t.bit_rate_kbps).unwrap_or(0)
    }

    fn sample_rate_hz(&mut self, index: u64) -> u64 {
        self.track(index).map(|t| t.sample_rate_hz).unwrap_or(0)
    }
}

/// # Safety
///
/// `ctx` must point at a live [`LibraryEngine`] not otherwise borrowed for
/// the duration of the call.
unsafe fn engine<'a>(ctx: *mut c_void) -> Option<&'a mut LibraryEngine> {
    unsafe { ctx.cast::<LibraryEngine>().as_mut() }
}

/// Number of tracks held by the engine at `ctx`. A null `ctx` has none.
///
/// # Safety
///
/// `ctx` must be null or point at a live `LibraryEngine`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn trackbridge_engine_track_count(ctx: *mut c_void) -> u64 {
    unsafe { engine(ctx) }.map(|e| e.track_count()).unwrap_or(0)
}

/// # Safety
///
/// `ctx` must be null or point at a live `LibraryEngine`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn trackbridge_engine_track_id(ctx: *mut c_void, index: u64) -> u64 {
    unsafe { engine(ctx) }.map(|e| e.track_id(index)).unwrap_or(0)
}

/// Text of one field. Unknown fields and out-of-range indices yield the
/// empty descriptor. The bytes remain owned by the engine.
///
/// # Safety
///
/// `ctx` must be null or point at a live `LibraryEngine`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn trackbridge_engine_text(
    ctx: *mut c_void,
    index: u64,
    field: u32,
) -> RawTextDescriptor {
    match (unsafe { engine(ctx) }, TextField::from_raw(field)) {
        (Some(e), Some(field)) => e.text(index, field),
        _ => RawTextDescriptor::empty(),
    }
}

/// # Safety
///
/// `ctx` must be null or point at a live `LibraryEngine`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn trackbridge_engine_duration_secs(ctx: *mut c_void, index: u64) -> u64 {
    unsafe { engine(ctx) }.map(|e| e.duration_secs(index)).unwrap_or(0)
}

/// # Safety
///
/// `ctx` must be null or point at a live `LibraryEngine`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn trackbridge_engine_bit_rate_kbps(ctx: *mut c_void, index: u64) -> u8 {
    unsafe { engine(ctx) }.map(|e| e.bit_rate_kbps(index)).unwrap_or(0)
}

/// # Safety
///
/// `ctx` must be null or point at a live `LibraryEngine`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn trackbridge_engine_sample_rate_hz(ctx: *mut c_void, index: u64) -> u64 {
    unsafe { engine(ctx) }.map(|e| e.sample_rate_hz(index)).unwrap_or(0)
}
