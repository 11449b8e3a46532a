//! Foreign string transfer.
//!
//! The native engine hands text across the C ABI as a `(start, len)` pair
//! pointing into memory it owns. `TransferChannel` copies those bytes into
//! host-owned storage during the call, validates them as UTF-8 and hands
//! back an immutable `OwnedText`. Malformed input is always an error; the
//! channel never substitutes placeholder text.

mod descriptor;
mod text;
mod transfer;

pub use descriptor::{RawTextDescriptor, TextField};
pub use text::OwnedText;
pub use transfer::{DEFAULT_MAX_TEXT_BYTES, TransferChannel};
