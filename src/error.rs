//! Error types surfaced by loading, sorting and serializing records.
//!
//! A cell that cannot be coerced to its field type is not an error, the field silently takes its
//! default value. Only structural failures reach the caller.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input file could not be opened or read.
    #[error("Failed to read {}: {source}", .path.to_string_lossy())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file cannot be reconciled with the requested record shape.
    #[error("File {} does not hold {shape} records: {reason}", .path.to_string_lossy())]
    SchemaMismatch {
        path: PathBuf,
        shape: &'static str,
        reason: String,
    },

    /// There are no records to order.
    #[error("No {shape} records to sort")]
    EmptyInput {
        shape: &'static str,
    },

    /// The criterion name does not denote any known criterion for the record shape.
    #[error("Unknown {shape} sort criterion: {name}, expected one of: {expected}")]
    UnknownCriterion {
        shape: &'static str,
        name: String,
        expected: String,
    },

    /// Sorted records could not be rendered as JSON.
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}
