//! Error types for the restgen generator.

use thiserror::Error;

/// Errors that can occur while acquiring a schema or materializing output.
///
/// Generation itself is infallible; every variant here comes from the two
/// I/O boundaries around it.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The schema source address could not be understood
    #[error("Invalid schema source '{address}': {reason}")]
    InvalidSource { address: String, reason: String },

    /// Transport, status, or I/O failure while fetching the schema
    #[error("Failed to fetch schema from '{address}': {reason}")]
    Fetch { address: String, reason: String },

    /// The schema document is not valid JSON of the expected shape
    #[error("Failed to parse schema document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to remove the previous output tree
    #[error("Failed to remove output directory '{path}': {source}")]
    RemoveDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create an output directory
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A manifest entry would land outside the output directory.
    ///
    /// Only reachable when a model name is not a plain identifier
    /// (e.g. contains `..` or a leading `/`).
    #[error("Refusing to write '{0}': path escapes the output directory")]
    UnsafePath(String),
}
