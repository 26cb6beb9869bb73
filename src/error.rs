//! Error types for contentful2sanity.

use thiserror::Error;

/// Result type for contentful2sanity operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a link from being resolved at all.
///
/// Gaps in the exported data (a missing asset, a draft target, an absent
/// locale) are not errors; they end in [`crate::Resolution::Unresolvable`].
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The export could not be parsed as JSON.
    #[error("Failed to parse export JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A link whose `linkType` is neither `Asset` nor `Entry`.
    #[error("Malformed link [{id}]: unsupported link type {link_type:?}")]
    MalformedLink { id: String, link_type: String },
}
