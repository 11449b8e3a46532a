use std::fmt;
use std::ptr;

/// A borrowed view of foreign text: `len` bytes starting at `start`.
///
/// The memory belongs to whoever produced the descriptor. It is only
/// guaranteed readable until the producer is called again, so the
/// descriptor must be consumed by [`TransferChannel::transfer`] right away.
///
/// [`TransferChannel::transfer`]: super::TransferChannel::transfer
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct RawTextDescriptor {
    pub start: *const u8,
    pub len: usize,
}

impl RawTextDescriptor {
    /// The empty string. Carries a null pointer, which is never read.
    pub const fn empty() -> Self {
        Self {
            start: ptr::null(),
            len: 0,
        }
    }

    /// Describe a string the caller keeps alive for the descriptor's use.
    pub fn for_str(s: &str) -> Self {
        Self {
            start: s.as_ptr(),
            len: s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for RawTextDescriptor {
    fn default() -> Self {
        Self::empty()
    }
}

/// The text fields of a track, in the order the catalog requests them.
///
/// Also used as the field selector on the C ABI, hence the fixed
/// discriminants.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextField {
    Title = 0,
    Artist = 1,
    Album = 2,
    Genre = 3,
    DateAdded = 4,
}

impl TextField {
    pub const ALL: [TextField; 5] = [
        TextField::Title,
        TextField::Artist,
        TextField::Album,
        TextField::Genre,
        TextField::DateAdded,
    ];

    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| *f as u32 == raw)
    }

    pub fn name(self) -> &'static str {
        match self {
            TextField::Title => "title",
            TextField::Artist => "artist",
            TextField::Album => "album",
            TextField::Genre => "genre",
            TextField::DateAdded => "date added",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
