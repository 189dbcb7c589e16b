//! Line-by-line summation over a text source.
//!
//! Part one counts every match. Part two threads a single [`GateState`]
//! through all lines of the source.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::ScanError;
use crate::gate::GateState;
use crate::pattern::{self, accumulate};
use crate::sink::{MatchSink, NoopSink};

/// Sum `a*b` over every match in `reader`, ignoring toggle tokens.
pub fn sum_ungated<R: BufRead, S: MatchSink>(reader: R, sink: &mut S) -> Result<u128, ScanError> {
    let mut sum = 0u128;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for mul in pattern::matches(&line) {
            sum = accumulate(sum, &mul)?;
            sink.record(mul.as_str())?;
        }
        debug!(line = index + 1, sum = %sum, "Scanned line");
    }
    Ok(sum)
}

/// Sum `a*b` over matches seen while the gate is open.
///
/// The gate starts open and is never reset between lines.
pub fn sum_gated<R: BufRead, S: MatchSink>(reader: R, sink: &mut S) -> Result<u128, ScanError> {
    let mut state = GateState::new();
    for (index, line) in reader.lines().enumerate() {
        state = state.feed(&line?, sink)?;
        debug!(
            line = index + 1,
            active = state.active(),
            sum = %state.sum(),
            "Scanned line"
        );
    }
    Ok(state.sum())
}

/// [`sum_ungated`] over an in-memory string.
pub fn sum_ungated_str(text: &str) -> Result<u128, ScanError> {
    sum_ungated(text.as_bytes(), &mut NoopSink)
}

/// [`sum_gated`] over an in-memory string.
pub fn sum_gated_str(text: &str) -> Result<u128, ScanError> {
    sum_gated(text.as_bytes(), &mut NoopSink)
}

fn open(path: &Path) -> Result<BufReader<File>, ScanError> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "Opened input");
    Ok(BufReader::new(file))
}

/// Ungated sum of the file at `path`.
pub fn part_one(path: &Path) -> Result<u128, ScanError> {
    sum_ungated(open(path)?, &mut NoopSink)
}

/// Gated sum of the file at `path`, recording counted matches in `sink`.
pub fn part_two<S: MatchSink>(path: &Path, sink: &mut S) -> Result<u128, ScanError> {
    sum_gated(open(path)?, sink)
}
