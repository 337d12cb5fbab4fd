use crate::pipeline::PassOutcome;
use crate::stats::RunStats;
use serde::Serialize;

/// The rendered shape of a pass, shared by every output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub records: Vec<RecordRow>,
    pub statistics: StatisticsView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow {
    /// Local bucket start, `YYYY-MM-DD HH:MM:SS` plus ` +HHMM` off UTC.
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    /// Bytes of every dated record seen.
    pub total_bytes: u64,
    /// Dated records seen.
    pub total_length: u64,
    pub total_search_bytes: u64,
    pub total_search_length: u64,
    pub elapsed: String,
    pub system_time: String,
    pub user_time: String,
}

impl From<&RunStats> for StatisticsView {
    fn from(stats: &RunStats) -> Self {
        Self {
            total_bytes: stats.bytes_seen,
            total_length: stats.records_seen,
            total_search_bytes: stats.bytes_matched,
            total_search_length: stats.records_matched,
            elapsed: stats.elapsed_display().to_string(),
            system_time: stats.system_time_display().to_string(),
            user_time: stats.user_time_display().to_string(),
        }
    }
}

impl ReportView {
    /// Builds the view of `outcome` restricted to `page`.
    pub fn new(outcome: &PassOutcome, page: crate::conf::Page) -> Self {
        let tz = outcome.window.tz_offset();
        let records = page
            .apply(&outcome.buckets)
            .iter()
            .map(|bucket| RecordRow {
                date: tz.format_local(bucket.local_start),
                count: bucket.count,
            })
            .collect();

        Self {
            records,
            statistics: StatisticsView::from(&outcome.stats),
        }
    }
}
