use crate::aggregate::{Aggregator, RunWindow};
use crate::conf::RunPlan;
use crate::matcher::{Matcher, Pattern};
use crate::pipeline::outcome::PassOutcome;
use crate::scan::{ScanError, Scanner, open_source};
use crate::stats::StatsRecorder;
use std::io::Read;

/// Scan, filter and aggregate over one byte stream.
#[derive(Debug, Clone)]
pub struct Pipeline {
    matcher: Matcher,
    window: RunWindow,
    buffer_size: usize,
}

impl Pipeline {
    pub fn new(pattern: Pattern, window: RunWindow, buffer_size: usize) -> Self {
        Self {
            matcher: Matcher::new(pattern),
            window,
            buffer_size,
        }
    }

    pub fn from_plan(plan: &RunPlan) -> Self {
        Self::new(plan.pattern.clone(), plan.window.clone(), plan.buffer_size)
    }

    pub fn window(&self) -> &RunWindow {
        &self.window
    }

    /// Runs a single forward pass over `reader`.
    ///
    /// Every dated record counts as seen. A record counts as matched when the
    /// pattern accepts its text and the aggregator places it in a bucket.
    /// The pass ends at end of stream, at the first record past the window,
    /// or at the first read error.
    pub fn run<R: Read>(&self, reader: R) -> PassOutcome {
        let mut scanner = Scanner::new(reader, self.buffer_size, self.window.tz_offset());
        let mut aggregator = Aggregator::new(self.window.clone());
        let mut recorder = StatsRecorder::new();
        let mut stopped_early = false;
        let mut interrupted = None;

        recorder.start();
        loop {
            let record = match scanner.next_record() {
                Ok(Some(record)) => record,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(error = %err, "scan interrupted, keeping partial results");
                    interrupted = Some(err);
                    break;
                }
            };
            let Some(ts) = record.timestamp else {
                continue;
            };

            if self.window.is_past(ts) {
                tracing::debug!(timestamp = %ts, "record past window, ending pass");
                stopped_early = true;
                break;
            }

            let matched = self.matcher.matches(record.raw_text) && aggregator.observe(ts);
            recorder.record_seen(record.len as u64, matched);
        }
        recorder.stop();

        PassOutcome {
            window: self.window.clone(),
            buckets: aggregator.resolved(),
            stats: recorder.summary(),
            counters: scanner.counters(),
            dropped: aggregator.overflowed(),
            stopped_early,
            interrupted,
        }
    }
}

/// Opens the plan's source and runs one pass over it.
///
/// Only a failure to open the source is an error here; failures once
/// reading has started end up in [`PassOutcome::interrupted`].
pub fn run_pass(plan: &RunPlan) -> Result<PassOutcome, ScanError> {
    let source = open_source(&plan.source)?;
    tracing::info!(
        source = source.name(),
        compression = %source.compression(),
        pattern = plan.pattern.as_str(),
        bucket_width = plan.window.bucket_width(),
        buffer_size = plan.buffer_size,
        "pass started"
    );

    let outcome = Pipeline::from_plan(plan).run(source);

    tracing::info!(
        records_seen = outcome.stats.records_seen,
        records_matched = outcome.stats.records_matched,
        buckets = outcome.buckets.len(),
        undated_lines = outcome.counters.undated_lines,
        truncated_lines = outcome.counters.truncated_lines,
        stopped_early = outcome.stopped_early,
        complete = outcome.is_complete(),
        "pass finished"
    );
    Ok(outcome)
}
