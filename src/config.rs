//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the bridge,
//! the library scanner and the listing, plus helpers to load it from disk.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
