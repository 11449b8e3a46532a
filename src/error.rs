use thiserror::Error;

use crate::bridge::TextField;

/// Failures of a single descriptor transfer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A null start address paired with a non-zero length.
    #[error("null descriptor with length {len}")]
    NullDescriptor { len: usize },

    #[error("descriptor length {len} exceeds the {max} byte limit")]
    LengthOverflow { len: usize, max: usize },

    #[error("invalid UTF-8 after {valid_up_to} of {len} bytes")]
    Encoding { valid_up_to: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog built with {dropped} of {total} entries dropped")]
    PartialCatalogBuild { dropped: usize, total: u64 },

    #[error("track id {id} already present in this catalog")]
    DuplicateId { id: u64 },

    #[error("a catalog refresh is already in progress")]
    RefreshInProgress,

    #[error("{field} field: {source}")]
    Field {
        field: TextField,
        #[source]
        source: BridgeError,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
