//! Logging infrastructure for dupkey.
//!
//! dupkey uses `tracing` for structured logging. All events use target "dupkey"
//! and include an `event` field for filtering.
//!
//! The library never initializes a global subscriber; the `dupkey` binary
//! installs one that writes to stderr.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: module/subsystem (e.g., "dedup", "index")
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all dupkey log events.
pub(crate) const DUPKEY_TARGET: &str = "dupkey";

/// Macro for debug-level log events.
///
/// # Example
/// ```ignore
/// log_debug!(
///     component = "dedup",
///     event = "dedup_pass_started",
///     key_columns = schema.len(),
/// );
/// ```
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::DUPKEY_TARGET, $($field)*)
    };
}

/// Macro for trace-level log events.
macro_rules! log_trace {
    ($($field:tt)*) => {
        ::tracing::trace!(target: $crate::observability::DUPKEY_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_trace;
