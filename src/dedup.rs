//! Duplicate counting over a sequence of rows.

use crate::{
    error::DedupError,
    inmem::composite::CompositeKeyIndex,
    observability::{log_debug, log_trace},
    option::DedupOptions,
    record::Row,
    report::DuplicateReporter,
    schema::KeySchema,
};

const DUPLICATE_PREFIX: &str = "duplicate    ";
const PAIR_SEPARATOR: &str = "      ";

/// Default duplicate message.
///
/// `"duplicate    "` followed by `column: value` pairs in key order, joined by six
/// spaces. A column the row lacks renders as `null`.
///
/// ```
/// use dupkey::{format_duplicate, KeySchema, Record};
///
/// let schema = KeySchema::new(["aaa", "bbb"]).unwrap();
/// let row = Record::from([("aaa", "testA1"), ("bbb", "testB1")]);
/// assert_eq!(
///     format_duplicate(&row, &schema),
///     "duplicate    aaa: testA1      bbb: testB1",
/// );
/// ```
pub fn format_duplicate(row: &dyn Row, schema: &KeySchema) -> String {
    let pairs = schema
        .columns()
        .iter()
        .map(|column| match row.column(column) {
            Some(value) => format!("{column}: {value}"),
            None => format!("{column}: null"),
        })
        .collect::<Vec<_>>();
    format!("{DUPLICATE_PREFIX}{}", pairs.join(PAIR_SEPARATOR))
}

/// Count rows whose key tuple already appeared earlier in `rows`.
///
/// Rows are processed strictly in order. The first occurrence of a key tuple is
/// inserted into a fresh [`CompositeKeyIndex`] and never counted; every later
/// occurrence is counted and, unless [`DedupOptions::quiet`] is set, reported to
/// `reporter` with the configured message.
///
/// # Errors
/// - [`DedupError::MissingKey`] when a first-seen row lacks a key column.
/// - [`DedupError::Report`] when `reporter` fails.
///
/// Either aborts the pass.
pub fn count_duplicates<I, P>(
    rows: I,
    schema: &KeySchema,
    options: &DedupOptions,
    reporter: &mut P,
) -> Result<usize, DedupError>
where
    I: IntoIterator,
    I::Item: Row,
    P: DuplicateReporter + ?Sized,
{
    let rows = rows.into_iter();
    log_debug!(
        component = "dedup",
        event = "dedup_pass_started",
        key_schema = %schema,
        rows_hint = rows.size_hint().0,
        quiet = options.quiet,
    );

    let mut index = CompositeKeyIndex::new(schema.clone());
    let mut count = 0;

    for (position, row) in rows.enumerate() {
        if !index.contains(&row) {
            index.insert(&row)?;
            continue;
        }
        count += 1;
        log_trace!(component = "dedup", event = "duplicate_found", position);
        if options.quiet {
            continue;
        }
        let message = match options.log_message.as_deref() {
            Some(log_message) => log_message(&row, schema),
            None => format_duplicate(&row, schema),
        };
        reporter.report(&message)?;
    }

    log_debug!(
        component = "dedup",
        event = "dedup_pass_finished",
        duplicates = count,
        unique = index.len(),
    );
    Ok(count)
}
