use crate::aggregate::{ResolvedBucket, RunWindow};
use crate::scan::{ScanCounters, ScanError};
use crate::stats::RunStats;

/// Everything one pass produced.
///
/// A pass that hit a read or decompression error still carries the buckets
/// and statistics gathered up to that point, with the error in
/// [`PassOutcome::interrupted`].
#[derive(Debug)]
pub struct PassOutcome {
    pub window: RunWindow,
    pub buckets: Vec<ResolvedBucket>,
    pub stats: RunStats,
    pub counters: ScanCounters,
    /// Matching records dropped because the bucket cap was reached.
    pub dropped: u64,
    /// The pass ended at the first record past `stop`/`until`.
    pub stopped_early: bool,
    pub interrupted: Option<ScanError>,
}

impl PassOutcome {
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }

    pub fn total_count(&self) -> u64 {
        self.buckets.iter().map(|b| b.count).sum()
    }
}
