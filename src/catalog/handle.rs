use std::sync::{Arc, Mutex, PoisonError, RwLock, TryLockError};

use log::info;

use crate::bridge::TransferChannel;
use crate::engine::NativeEngine;
use crate::error::{CatalogError, Result};

use super::build::{BuildReport, Catalog, Diagnostic};

struct Inner<E> {
    engine: Mutex<E>,
    channel: TransferChannel,
    current: RwLock<Catalog>,
    diagnostic: Mutex<Diagnostic>,
}

/// Owns a native engine and the catalog last built from it.
///
/// At most one build runs against the engine at a time: a refresh that
/// finds the engine busy is rejected with
/// [`CatalogError::RefreshInProgress`]. Readers see the previous catalog
/// until a build has finished, then the new one.
pub struct CatalogHandle<E> {
    inner: Arc<Inner<E>>,
}

impl<E> Clone for CatalogHandle<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: NativeEngine> CatalogHandle<E> {
    /// Starts with an empty catalog; call [`refresh`](Self::refresh) to fill it.
    pub fn new(engine: E, channel: TransferChannel) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine: Mutex::new(engine),
                channel,
                current: RwLock::new(Catalog::default()),
                diagnostic: Mutex::new(Diagnostic::default()),
            }),
        }
    }

    /// Rebuild the catalog from the engine and publish it.
    pub fn refresh(&self) -> Result<BuildReport> {
        let mut engine = match self.inner.engine.try_lock() {
            Ok(guard) => guard,
            Err(TryLockError::WouldBlock) => return Err(CatalogError::RefreshInProgress),
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        };

        let (catalog, report) = Catalog::build(&mut *engine, &self.inner.channel);
        info!(
            "catalog refreshed: {} tracks, {} dropped",
            catalog.len(),
            report.dropped.len()
        );

        *self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = catalog;
        *self
            .inner
            .diagnostic
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = report.diagnostic();

        Ok(report)
    }

    /// Run `f` with exclusive access to the engine, e.g. to rescan it.
    /// Rejected while a refresh is running.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut E) -> R) -> Result<R> {
        match self.inner.engine.try_lock() {
            Ok(mut guard) => Ok(f(&mut *guard)),
            Err(TryLockError::WouldBlock) => Err(CatalogError::RefreshInProgress),
            Err(TryLockError::Poisoned(poisoned)) => Ok(f(&mut *poisoned.into_inner())),
        }
    }

    /// The current catalog.
    pub fn snapshot(&self) -> Catalog {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Summary of the most recent build.
    pub fn diagnostic(&self) -> Diagnostic {
        self.inner
            .diagnostic
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
