//! Error type for document generation.
//!
//! Invalid style values never surface here; setters fall back to defaults. Only
//! precondition violations and unreadable configuration reach the caller.
use thiserror::Error;

/// Main error type for docweave operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A part writer was invoked without a root document
    #[error("No document assigned.")]
    NoDocumentAssigned,

    /// Formatting failure while building part XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Malformed style sheet or writer options
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for docweave operations.
pub type Result<T> = std::result::Result<T, Error>;
