//! Key column projection.
//!
//! Projection never fails: columns a record does not carry are left out of its
//! projection instead of being filled with a placeholder.

use super::{Record, Row};

/// Project a single row onto `columns`, keeping only the ones it carries.
pub fn project_row<R, S>(row: &R, columns: &[S]) -> Record
where
    R: Row + ?Sized,
    S: AsRef<str>,
{
    columns
        .iter()
        .filter_map(|column| {
            let column = column.as_ref();
            row.column(column)
                .map(|value| (column.to_owned(), value.clone()))
        })
        .collect()
}

/// Project every record onto `columns`, one output per input, in input order.
pub fn extract_key_columns<R, S>(records: &[R], columns: &[S]) -> Vec<Record>
where
    R: Row,
    S: AsRef<str>,
{
    records
        .iter()
        .map(|record| project_row(record, columns))
        .collect()
}
