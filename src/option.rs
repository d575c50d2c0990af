use std::fmt;

use crate::{record::Row, schema::KeySchema};

/// Builds the message reported for a duplicate row.
pub type LogMessage = dyn Fn(&dyn Row, &KeySchema) -> String;

/// Options for [`count_duplicates`](crate::dedup::count_duplicates).
///
/// ```
/// use dupkey::DedupOptions;
///
/// let options = DedupOptions::default()
///     .quiet(false)
///     .log_message(|_row, schema| format!("dup on {schema}"));
/// ```
#[derive(Default)]
pub struct DedupOptions {
    pub(crate) quiet: bool,
    pub(crate) log_message: Option<Box<LogMessage>>,
}

impl DedupOptions {
    /// Suppress reporting; duplicates are still counted.
    pub fn quiet(self, quiet: bool) -> Self {
        DedupOptions { quiet, ..self }
    }

    /// Replace the default duplicate message.
    pub fn log_message<F>(self, log_message: F) -> Self
    where
        F: Fn(&dyn Row, &KeySchema) -> String + 'static,
    {
        DedupOptions {
            log_message: Some(Box::new(log_message)),
            ..self
        }
    }
}

impl fmt::Debug for DedupOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DedupOptions")
            .field("quiet", &self.quiet)
            .field("custom_log_message", &self.log_message.is_some())
            .finish()
    }
}
