use crate::conf::ConfigError;
use crate::time::{Timestamp, TzOffset};

/// Most buckets a single pass may hold.
pub const MAX_BUCKETS: usize = 1_000_000;

pub const HOUR: i64 = 3600;
pub const DAY: i64 = 24 * HOUR;

/// The time range under analysis and how it is sliced.
///
/// `start` is inclusive. `stop` is inclusive at bucket granularity: records
/// count until one full bucket width past it, so the exclusive end of the
/// grid is `stop + bucket_width`. `until` is an exclusive cut that filters records
/// without touching the grid. Any bound may be absent (unbounded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunWindow {
    start: Option<Timestamp>,
    stop: Option<Timestamp>,
    until: Option<Timestamp>,
    bucket_width: i64,
    tz_offset: TzOffset,
}

impl RunWindow {
    pub fn new(
        start: Option<Timestamp>,
        stop: Option<Timestamp>,
        until: Option<Timestamp>,
        bucket_width: i64,
        tz_offset: TzOffset,
    ) -> Result<Self, ConfigError> {
        if bucket_width <= 0 {
            return Err(ConfigError::NonPositiveBucketWidth {
                seconds: bucket_width,
            });
        }
        if let (Some(start), Some(stop)) = (start, stop) {
            if stop < start {
                return Err(ConfigError::StopBeforeStart { start, stop });
            }
        }
        if let (Some(start), Some(until)) = (start, until) {
            if until <= start {
                return Err(ConfigError::UntilNotAfterStart { start, until });
            }
        }

        let window = Self {
            start,
            stop,
            until,
            bucket_width,
            tz_offset,
        };
        if let Some(buckets) = window.bucket_count() {
            if buckets > MAX_BUCKETS as u64 {
                return Err(ConfigError::WindowTooLarge {
                    buckets,
                    max: MAX_BUCKETS,
                });
            }
        }
        Ok(window)
    }

    pub fn unbounded(bucket_width: i64, tz_offset: TzOffset) -> Result<Self, ConfigError> {
        Self::new(None, None, None, bucket_width, tz_offset)
    }

    pub fn start(&self) -> Option<Timestamp> {
        self.start
    }

    pub fn stop(&self) -> Option<Timestamp> {
        self.stop
    }

    pub fn until(&self) -> Option<Timestamp> {
        self.until
    }

    pub fn bucket_width(&self) -> i64 {
        self.bucket_width
    }

    pub fn tz_offset(&self) -> TzOffset {
        self.tz_offset
    }

    /// Exclusive end of the bucket grid.
    pub fn end(&self) -> Option<Timestamp> {
        self.stop.map(|stop| stop.saturating_add(self.bucket_width))
    }

    /// First instant no record may have: the earlier of `end` and `until`.
    pub fn limit(&self) -> Option<Timestamp> {
        match (self.end(), self.until) {
            (Some(end), Some(until)) => Some(end.min(until)),
            (end, until) => end.or(until),
        }
    }

    pub fn contains(&self, ts: Timestamp) -> bool {
        self.start.is_none_or(|start| ts >= start) && self.limit().is_none_or(|limit| ts < limit)
    }

    /// True once `ts` is at or beyond the upper bound; in a chronological log
    /// nothing after it can be counted.
    pub fn is_past(&self, ts: Timestamp) -> bool {
        self.limit().is_some_and(|limit| ts >= limit)
    }

    /// Local-clock seconds of the slot boundary at or before `ts`.
    pub fn align_local(&self, ts: Timestamp) -> i64 {
        let local = self.tz_offset.to_local(ts);
        local.div_euclid(self.bucket_width).saturating_mul(self.bucket_width)
    }

    /// Number of slots between the aligned start and the end, when both are
    /// known.
    pub fn bucket_count(&self) -> Option<u64> {
        let origin = self.align_local(self.start?);
        self.slots_from(origin)
    }

    pub(crate) fn slots_from(&self, origin: i64) -> Option<u64> {
        let end_local = self.tz_offset.to_local(self.end()?);
        let span = end_local.saturating_sub(origin).max(0);
        Some(span.div_euclid(self.bucket_width) as u64 + u64::from(span % self.bucket_width != 0))
    }
}
