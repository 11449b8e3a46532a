use std::slice;

use log::trace;

use crate::config::BridgeSettings;
use crate::error::BridgeError;

use super::descriptor::RawTextDescriptor;
use super::text::OwnedText;

/// Upper bound on a single text field unless configured otherwise.
pub const DEFAULT_MAX_TEXT_BYTES: usize = 64 * 1024;

/// Copies foreign text into host-owned, validated storage.
#[derive(Debug, Clone)]
pub struct TransferChannel {
    max_len: usize,
    trace_descriptors: bool,
}

impl Default for TransferChannel {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_BYTES)
    }
}

impl TransferChannel {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            trace_descriptors: false,
        }
    }

    pub fn from_settings(settings: &BridgeSettings) -> Self {
        Self {
            max_len: settings.max_text_bytes,
            trace_descriptors: settings.trace_descriptors,
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Copy the bytes behind `desc` and decode them as UTF-8.
    ///
    /// An empty descriptor yields empty text without touching `start`, even
    /// when it is null. A null `start` with a non-zero length and lengths
    /// above [`max_len`](Self::max_len) are refused before any read. The
    /// bytes are copied before decoding, so nothing returned refers back to
    /// the foreign buffer, and the buffer is never freed here.
    ///
    /// # Safety
    ///
    /// When `desc.len` is non-zero and `desc.start` is non-null, `desc.start`
    /// must be valid for reads of `desc.len` bytes for the duration of this
    /// call.
    pub unsafe fn transfer(&self, desc: RawTextDescriptor) -> Result<OwnedText, BridgeError> {
        if self.trace_descriptors {
            trace!("transfer descriptor start={:p} len={}", desc.start, desc.len);
        }

        if desc.len == 0 {
            return Ok(OwnedText::empty());
        }
        if desc.start.is_null() {
            return Err(BridgeError::NullDescriptor { len: desc.len });
        }
        self.check_len(desc.len)?;

        // SAFETY: non-null, bounded, and readable for `len` bytes per the
        // caller's contract. The slice does not outlive this statement.
        let bytes = unsafe { slice::from_raw_parts(desc.start, desc.len) }.to_vec();
        decode(bytes)
    }

    /// Validate and copy text from a slice the caller already borrows.
    pub fn transfer_bytes(&self, bytes: &[u8]) -> Result<OwnedText, BridgeError> {
        if bytes.is_empty() {
            return Ok(OwnedText::empty());
        }
        self.check_len(bytes.len())?;
        decode(bytes.to_vec())
    }

    fn check_len(&self, len: usize) -> Result<(), BridgeError> {
        if len > self.max_len {
            return Err(BridgeError::LengthOverflow {
                len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

fn decode(bytes: Vec<u8>) -> Result<OwnedText, BridgeError> {
    let len = bytes.len();
    String::from_utf8(bytes)
        .map(OwnedText::from)
        .map_err(|e| BridgeError::Encoding {
            valid_up_to: e.utf8_error().valid_up_to(),
            len,
        })
}
