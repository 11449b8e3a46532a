//! Track records and the catalog the presentation layer enumerates.
//!
//! A catalog is built in one pass over a [`NativeEngine`](crate::engine::NativeEngine),
//! transferring every text field through the bridge as soon as the engine
//! returns it. Entries whose text cannot be transferred are dropped and
//! listed in the [`BuildReport`]; the remaining records keep the engine's
//! order. Catalogs are immutable: to see new data, build a new one.

mod build;
mod handle;
mod record;

pub use build::{BuildReport, Catalog, Diagnostic, DroppedEntry};
pub use handle::CatalogHandle;
pub use record::{TrackRecord, TrackText};

#[cfg(test)]
mod tests;
