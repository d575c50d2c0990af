use std::io;

use thiserror::Error;

/// Error returned by a [`DuplicateReporter`](crate::report::DuplicateReporter) sink.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing the message to the underlying sink failed.
    #[error("failed to write duplicate report: {0}")]
    Io(#[from] io::Error),
    /// Sink-specific failure.
    #[error("duplicate reporter failed: {0}")]
    Other(String),
}

/// Errors surfaced by key indexing, duplicate counting and record decoding.
#[derive(Debug, Error)]
pub enum DedupError {
    /// A record lacks one of the key schema's columns.
    #[error("missing property {column} in row")]
    MissingKey {
        /// Name of the first missing key column, in schema order.
        column: String,
    },
    /// The key schema is unusable.
    #[error("invalid key schema: {0}")]
    Configuration(String),
    /// The duplicate reporter failed; the pass was aborted.
    #[error(transparent)]
    Report(#[from] ReportError),
    /// A JSON Lines input line could not be parsed.
    #[error("invalid JSON on line {line}: {source}")]
    Json {
        /// 1-based line number.
        line: usize,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// A JSON Lines input line held something other than an object.
    #[error("line {line} is not a JSON object")]
    NotAnObject {
        /// 1-based line number.
        line: usize,
    },
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}
