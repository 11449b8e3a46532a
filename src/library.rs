//! Music directory scanning for the native engine.
//!
//! `scan` walks a directory, reads tags and stream properties with lofty
//! and returns the engine-owned `ScannedTrack` list the bridge later
//! exposes over the C ABI.

mod model;
mod scan;

pub use model::ScannedTrack;
pub use scan::scan;
