//! Report sinks
//!
//! A sink receives finished text lines. Writing never fails from the caller's
//! point of view: a sink that cannot write logs the failure and drops the
//! rest of its output.

use std::io::{self, BufWriter, StdoutLock, Write};

use tracing::error;

/// Destination for report lines
pub trait ReportSink {
    /// Write one line of report text (without a trailing newline)
    fn write_line(&mut self, line: &str);
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Sink that keeps every line in memory
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines joined with `\n`, each one newline-terminated
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl ReportSink for BufferSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Sink writing newline-terminated lines to any [`Write`] implementation
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Whether a write has failed and output is being dropped
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Flush buffered output, logging a failure instead of returning it
    pub fn flush(&mut self) {
        if self.failed {
            return;
        }
        if let Err(e) = self.writer.flush() {
            error!(error = %e, "Failed to flush report output");
            self.failed = true;
        }
    }

    pub fn into_inner(mut self) -> W
    where
        W: Default,
    {
        self.flush();
        std::mem::take(&mut self.writer)
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) {
        if self.failed {
            return;
        }
        if let Err(e) = writeln!(self.writer, "{}", line) {
            error!(error = %e, "Failed to write report output, dropping remaining lines");
            self.failed = true;
        }
    }
}

impl<W: Write> Drop for WriterSink<W> {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Buffered sink over the process's standard output
pub type StdoutSink = WriterSink<BufWriter<StdoutLock<'static>>>;

/// Create a sink writing to standard output
pub fn stdout_sink() -> StdoutSink {
    WriterSink::new(BufWriter::new(io::stdout().lock()))
}
