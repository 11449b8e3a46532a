use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use log::{info, warn};

use crate::bridge::TransferChannel;
use crate::catalog::CatalogHandle;
use crate::engine::LibraryEngine;
use crate::listing;
use crate::logging;

mod settings;

/// Scan the directory given as the first argument (or the current one),
/// build the catalog through the C ABI bridge and print it.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init_logging(&settings.logging);

    let dir = match env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => env::current_dir()?,
    };
    info!("scanning {}", dir.display());

    let mut native = LibraryEngine::open(&dir, &settings.library);
    let handle = CatalogHandle::new(
        native.foreign(),
        TransferChannel::from_settings(&settings.bridge),
    );
    handle.refresh()?;

    let catalog = handle.snapshot();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in listing::render(&catalog, &settings.listing) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    if let Some(line) = listing::diagnostic_line(&handle.diagnostic()) {
        warn!("{line}");
    }

    Ok(())
}
