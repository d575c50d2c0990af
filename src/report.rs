//! Sinks for duplicate reports.
//!
//! The counter never writes anywhere on its own; callers hand it a
//! [`DuplicateReporter`]. The `dupkey` binary wires a [`WriterReporter`] over stdout.

use std::io::Write;

use crate::error::ReportError;

/// Receives one message per duplicate, in row order.
pub trait DuplicateReporter {
    /// Deliver a single duplicate message. A failure aborts the counting pass.
    fn report(&mut self, message: &str) -> Result<(), ReportError>;
}

impl<P: DuplicateReporter + ?Sized> DuplicateReporter for &mut P {
    fn report(&mut self, message: &str) -> Result<(), ReportError> {
        (**self).report(message)
    }
}

impl<P: DuplicateReporter + ?Sized> DuplicateReporter for Box<P> {
    fn report(&mut self, message: &str) -> Result<(), ReportError> {
        (**self).report(message)
    }
}

/// Writes each message as its own line.
#[derive(Debug)]
pub struct WriterReporter<W> {
    writer: W,
}

impl<W: Write> WriterReporter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DuplicateReporter for WriterReporter<W> {
    fn report(&mut self, message: &str) -> Result<(), ReportError> {
        writeln!(self.writer, "{message}")?;
        Ok(())
    }
}

/// Collects messages in memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryReporter {
    messages: Vec<String>,
}

impl MemoryReporter {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the collector and return its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl DuplicateReporter for MemoryReporter {
    fn report(&mut self, message: &str) -> Result<(), ReportError> {
        self.messages.push(message.to_owned());
        Ok(())
    }
}
