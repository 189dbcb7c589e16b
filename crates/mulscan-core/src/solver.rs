//! Runs both parts against a configured input.

use std::path::Path;

use tracing::info;

use mulscan_config::AppConfig;

use crate::error::ScanError;
use crate::report::Report;
use crate::sink::{AppendFileSink, MatchSink, NoopSink};
use crate::summation;

/// Drives a full run from an [`AppConfig`].
pub struct Solver {
    config: AppConfig,
}

impl Solver {
    /// Create a solver with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Solve both parts for `input.path`.
    ///
    /// Part two appends its counted matches to `match_log.path` when the match
    /// log is enabled. Part one never logs.
    pub fn run(&self) -> Result<Report, ScanError> {
        let input = self.config.input.path.as_path();
        info!(
            input = %input.display(),
            match_log = self.config.match_log.enabled,
            "Solving"
        );

        // The log is only created once the input has been read successfully.
        let part_one = summation::part_one(input)?;
        let part_two = if self.config.match_log.enabled {
            let mut sink = AppendFileSink::open(&self.config.match_log.path)?;
            let part_two = summation::part_two(input, &mut sink)?;
            let recorded = sink.finish()?;
            info!(
                path = %self.config.match_log.path.display(),
                recorded,
                "Appended matches to log"
            );
            part_two
        } else {
            summation::part_two(input, &mut NoopSink)?
        };
        let report = Report { part_one, part_two };

        info!(
            part_one = %report.part_one,
            part_two = %report.part_two,
            "Solved"
        );
        Ok(report)
    }

    /// Solve both parts for `input`, recording part-two matches in `sink`.
    pub fn solve_with_sink<S: MatchSink>(input: &Path, sink: &mut S) -> Result<Report, ScanError> {
        let part_one = summation::part_one(input)?;
        let part_two = summation::part_two(input, sink)?;
        Ok(Report { part_one, part_two })
    }

    /// Get a reference to the solver's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
