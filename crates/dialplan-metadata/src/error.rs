//! Error types for metadata store operations.

use thiserror::Error;

/// Errors that can occur while building or querying a [`MetadataStore`].
///
/// Only structural problems are errors. A field a record leaves out is never
/// an error; the views model it as absence with a documented default.
///
/// [`MetadataStore`]: crate::MetadataStore
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The table is missing, is not an object, lacks the country mapping, or
    /// a country record fails the minimal presence check.
    #[error("invalid metadata: {reason}")]
    InvalidMetadata { reason: String },

    /// The country identifier is not in the table.
    #[error("unknown country: {id}")]
    UnknownCountry { id: String },

    /// A calling code could not be resolved to a known country.
    ///
    /// Only raised when [`StoreConfig::strict_calling_codes`] is set.
    ///
    /// [`StoreConfig::strict_calling_codes`]: crate::StoreConfig::strict_calling_codes
    #[error("no known country for calling code: {code}")]
    UnknownCallingCode { code: u32 },

    /// The table text is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetadataError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for metadata operations.
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;
