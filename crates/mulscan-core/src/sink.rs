//! Destinations for matched `mul(a,b)` literals.
//!
//! Summation takes a [`MatchSink`] so the side effect of logging matches stays
//! outside the arithmetic. Pass [`NoopSink`] when logging is disabled.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// Receives every counted match literal, in encounter order.
pub trait MatchSink {
    /// Record one literal such as `mul(2,4)`.
    fn record(&mut self, literal: &str) -> io::Result<()>;
}

impl<S: MatchSink + ?Sized> MatchSink for &mut S {
    fn record(&mut self, literal: &str) -> io::Result<()> {
        (**self).record(literal)
    }
}

/// Collects literals in memory.
impl MatchSink for Vec<String> {
    fn record(&mut self, literal: &str) -> io::Result<()> {
        self.push(literal.to_string());
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl MatchSink for NoopSink {
    fn record(&mut self, _literal: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Appends one literal per line to a file.
///
/// The file is created if missing and never truncated, so repeated runs
/// accumulate. Concurrent writers are not coordinated and may interleave.
#[derive(Debug)]
pub struct AppendFileSink {
    path: PathBuf,
    writer: LineWriter<File>,
    recorded: usize,
}

impl AppendFileSink {
    /// Open `path` in append mode.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        debug!(path = %path.display(), "Opened match log");
        Ok(Self {
            path,
            writer: LineWriter::new(file),
            recorded: 0,
        })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of literals written through this handle.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Flush buffered output and close the file, surfacing any write error.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        debug!(path = %self.path.display(), recorded = self.recorded, "Closed match log");
        Ok(self.recorded)
    }
}

impl MatchSink for AppendFileSink {
    fn record(&mut self, literal: &str) -> io::Result<()> {
        writeln!(self.writer, "{literal}")?;
        self.recorded += 1;
        Ok(())
    }
}
