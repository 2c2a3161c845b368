//! Error types for PSV parsing

use thiserror::Error;

/// Result type for PSV operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a PSV document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field type specification did not parse
    #[error("Invalid field type: {field_type}")]
    InvalidFieldType { field_type: String },

    /// Header line did not parse
    #[error("Invalid header format: {reason}")]
    InvalidHeader { reason: String },

    /// The same field name appeared twice in the header
    #[error("Duplicate field name: {field}")]
    DuplicateField { field: String },

    /// Document contained no content at all
    #[error("Document is empty")]
    EmptyDocument,
}
