use std::ffi::c_void;
use std::marker::PhantomData;

use crate::bridge::{RawTextDescriptor, TextField};

use super::NativeEngine;

/// Function table a native engine hands to the host.
///
/// Every entry receives `ctx` as its first argument. `text` takes the raw
/// [`TextField`] discriminant.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct NativeEngineVTable {
    pub ctx: *mut c_void,
    pub track_count: unsafe extern "C" fn(ctx: *mut c_void) -> u64,
    pub track_id: unsafe extern "C" fn(ctx: *mut c_void, index: u64) -> u64,
    pub text: unsafe extern "C" fn(ctx: *mut c_void, index: u64, field: u32) -> RawTextDescriptor,
    pub duration_secs: unsafe extern "C" fn(ctx: *mut c_void, index: u64) -> u64,
    pub bit_rate_kbps: unsafe extern "C" fn(ctx: *mut c_void, index: u64) -> u8,
    pub sample_rate_hz: unsafe extern "C" fn(ctx: *mut c_void, index: u64) -> u64,
}

/// A [`NativeEngine`] reached through a C function table.
///
/// The lifetime ties the wrapper to whatever owns `ctx` when the table
/// comes from this process.
#[derive(Debug)]
pub struct ForeignEngine<'a> {
    vtable: NativeEngineVTable,
    _ctx: PhantomData<&'a mut c_void>,
}

impl<'a> ForeignEngine<'a> {
    /// Wrap a function table.
    ///
    /// # Safety
    ///
    /// Every function in `vtable` must be callable with `vtable.ctx` for
    /// as long as the returned engine lives, and must honor the descriptor
    /// contract documented on [`crate::engine`].
    pub unsafe fn new(vtable: NativeEngineVTable) -> Self {
        Self {
            vtable,
            _ctx: PhantomData,
        }
    }
}

impl NativeEngine for ForeignEngine<'_> {
    fn track_count(&mut self) -> u64 {
        // SAFETY: table validity is the constructor's contract.
        unsafe { (self.vtable.track_count)(self.vtable.ctx) }
    }

    fn track_id(&mut self, index: u64) -> u64 {
        unsafe { (self.vtable.track_id)(self.vtable.ctx, index) }
    }

    fn text(&mut self, index: u64, field: TextField) -> RawTextDescriptor {
        unsafe { (self.vtable.text)(self.vtable.ctx, index, field as u32) }
    }

    fn duration_secs(&mut self, index: u64) -> u64 {
        unsafe { (self.vtable.duration_secs)(self.vtable.ctx, index) }
    }

    fn bit_rate_kbps(&mut self, index: u64) -> u8 {
        unsafe { (self.vtable.bit_rate_kbps)(self.vtable.ctx, index) }
    }

    fn sample_rate_hz(&mut self, index: u64) -> u64 {
        unsafe { (self.vtable.sample_rate_hz)(self.vtable.ctx, index) }
    }
}
