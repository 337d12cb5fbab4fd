use crate::stats::cpu::CpuTimes;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::warn;

/// Smallest non-zero time shown in a report (one hundredth of a second).
pub const MIN_DISPLAY_UNIT: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub bytes_seen: u64,
    pub records_seen: u64,
    pub bytes_matched: u64,
    pub records_matched: u64,
    pub elapsed: Duration,
    pub user_time: Duration,
    pub system_time: Duration,
}

impl RunStats {
    /// `elapsed` as `S.CCs`.
    pub fn elapsed_display(&self) -> DisplayDuration {
        DisplayDuration(self.elapsed)
    }

    pub fn user_time_display(&self) -> DisplayDuration {
        DisplayDuration(self.user_time)
    }

    pub fn system_time_display(&self) -> DisplayDuration {
        DisplayDuration(self.system_time)
    }
}

/// Seconds with two decimals and an `s` suffix, e.g. `12.07s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDuration(pub Duration);

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}s", self.0.as_secs(), self.0.subsec_millis() / 10)
    }
}

/// Throughput and timing for one pass.
///
/// Counts only grow. Timings are fixed by the first [`StatsRecorder::stop`];
/// later calls change nothing.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    stats: RunStats,
    wall_start: Option<Instant>,
    cpu_start: Option<CpuTimes>,
    stopped: bool,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.wall_start = Some(Instant::now());
        self.cpu_start = match CpuTimes::now() {
            Ok(cpu) => Some(cpu),
            Err(err) => {
                warn!(error = %err, "cpu time unavailable, reporting zero");
                None
            }
        };
    }

    pub fn record_seen(&mut self, bytes: u64, matched: bool) {
        self.stats.records_seen += 1;
        self.stats.bytes_seen += bytes;
        if matched {
            self.stats.records_matched += 1;
            self.stats.bytes_matched += bytes;
        }
    }

    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        let elapsed = self.wall_start.map(|t| t.elapsed()).unwrap_or_default();
        let cpu = match (self.cpu_start, CpuTimes::now()) {
            (Some(start), Ok(now)) => now.since(start),
            _ => CpuTimes::default(),
        };

        self.stats.elapsed = self.floor(elapsed);
        self.stats.user_time = self.floor(cpu.user);
        self.stats.system_time = self.floor(cpu.system);
    }

    // Timings are kept in whole display units. A pass that matched something
    // never reports "0.00s"; one that matched nothing reports a true zero.
    fn floor(&self, measured: Duration) -> Duration {
        let units = measured.as_nanos() / MIN_DISPLAY_UNIT.as_nanos();
        if units == 0 && self.stats.records_matched > 0 {
            return MIN_DISPLAY_UNIT;
        }
        MIN_DISPLAY_UNIT * units.min(u128::from(u32::MAX)) as u32
    }

    pub fn summary(&self) -> RunStats {
        self.stats
    }
}
