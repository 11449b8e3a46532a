//! The boundary with the native metadata engine.
//!
//! The catalog only talks to engines through [`NativeEngine`]. Engines built
//! as separate libraries are reached through a C ABI function table
//! ([`NativeEngineVTable`], wrapped by [`ForeignEngine`]); the librarian
//! engine in this crate ([`LibraryEngine`]) exports the same entry points.
//!
//! Engine contract: a descriptor returned by [`NativeEngine::text`] points at
//! memory the engine owns and keeps readable at least until the next call
//! on the same engine. Callers never free it.

mod foreign;
mod library_engine;

pub use foreign::{ForeignEngine, NativeEngineVTable};
pub use library_engine::{
    LibraryEngine, trackbridge_engine_bit_rate_kbps, trackbridge_engine_duration_secs,
    trackbridge_engine_sample_rate_hz, trackbridge_engine_text, trackbridge_engine_track_count,
    trackbridge_engine_track_id,
};

use crate::bridge::{RawTextDescriptor, TextField};

/// Per-track accessors exposed by a native engine.
///
/// Indices run from `0` to `track_count() - 1`. Engines are not assumed to
/// be thread-safe, hence `&mut self` throughout.
pub trait NativeEngine {
    fn track_count(&mut self) -> u64;

    fn track_id(&mut self, index: u64) -> u64;

    /// Descriptor for one text field; valid until the next call on `self`.
    fn text(&mut self, index: u64, field: TextField) -> RawTextDescriptor;

    fn duration_secs(&mut self, index: u64) -> u64;

    fn bit_rate_kbps(&mut self, index: u64) -> u8;

    fn sample_rate_hz(&mut self, index: u64) -> u64;
}
