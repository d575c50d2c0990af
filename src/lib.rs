#![deny(missing_docs)]
//! Composite-key duplicate detection.
//!
//! A [`CompositeKeyIndex`] records which combinations of key column values have been
//! seen, nesting one hash level per key column instead of hashing whole tuples.
//! [`count_duplicates`] runs a single in-order pass over a sequence of rows and
//! reports every row whose key tuple already appeared.
//!
//! ```
//! use dupkey::{count_duplicates, DedupOptions, KeySchema, MemoryReporter, Record};
//!
//! let rows = vec![
//!     Record::from([("aaa", "A1"), ("bbb", "B1")]),
//!     Record::from([("aaa", "A2"), ("bbb", "B2")]),
//!     Record::from([("aaa", "A1"), ("bbb", "B1")]),
//! ];
//! let schema = KeySchema::new(["aaa", "bbb"]).unwrap();
//! let mut reporter = MemoryReporter::new();
//!
//! let count = count_duplicates(&rows, &schema, &DedupOptions::default(), &mut reporter).unwrap();
//! assert_eq!(count, 1);
//! assert_eq!(reporter.messages(), ["duplicate    aaa: A1      bbb: B1"]);
//! ```

mod inmem;
mod observability;

/// Duplicate counting.
pub mod dedup;

/// Error types.
pub mod error;

/// Scalar key values.
pub mod key;

/// Options for a duplicate counting pass.
pub mod option;

/// Row access, owned records, projection and JSON Lines decoding.
pub mod record;

/// Duplicate report sinks.
pub mod report;

/// Key schema declaration.
pub mod schema;

pub use crate::{
    dedup::{count_duplicates, format_duplicate},
    error::{DedupError, ReportError},
    inmem::composite::CompositeKeyIndex,
    key::KeyValue,
    option::DedupOptions,
    record::{
        extract::{extract_key_columns, project_row},
        json::{read_json_lines, record_from_json},
        Record, Row,
    },
    report::{DuplicateReporter, MemoryReporter, WriterReporter},
    schema::{KeySchema, KeySchemaBuilder},
};
