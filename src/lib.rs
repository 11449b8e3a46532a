//! Track catalog bridge.
//!
//! A native metadata engine exposes tracks over a C ABI; text crosses as
//! `(pointer, length)` descriptors that [`bridge::TransferChannel`] copies
//! into owned, validated [`bridge::OwnedText`]. [`catalog::Catalog`] turns
//! an engine's entries into immutable [`catalog::TrackRecord`]s in the
//! engine's order, and [`catalog::CatalogHandle`] serialises refreshes for
//! the presentation layer.

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod library;
pub mod listing;
pub mod logging;
pub mod runtime;

pub use bridge::{OwnedText, RawTextDescriptor, TextField, TransferChannel};
pub use catalog::{BuildReport, Catalog, CatalogHandle, Diagnostic, TrackRecord};
pub use engine::{ForeignEngine, LibraryEngine, NativeEngine, NativeEngineVTable};
pub use error::{BridgeError, CatalogError};
