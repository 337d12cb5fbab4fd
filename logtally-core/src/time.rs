use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use std::fmt;

/// Seconds since the Unix epoch, UTC.
///
/// Every timestamp that leaves the scanner or the configuration layer is
/// already normalised to UTC; local time only exists while parsing and when
/// bucket labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn secs(self) -> i64 {
        self.0
    }

    pub fn saturating_add(self, secs: i64) -> Self {
        Timestamp(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%SZ")),
            None => write!(f, "@{}", self.0),
        }
    }
}

/// Calendar fields exactly as written, before any offset is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Seconds since the epoch reading the fields as UTC.
    ///
    /// Returns `None` for fields that do not name a real instant
    /// (February 30th, hour 24, ...).
    pub fn to_epoch(&self) -> Option<i64> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)
            .map(|dt| dt.and_utc().timestamp())
    }
}

/// Offset of the log writer's clock from UTC, in seconds east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TzOffset(i32);

impl TzOffset {
    pub const UTC: TzOffset = TzOffset(0);

    /// Largest offset accepted, same as RFC 3339 / ISO 8601 practice.
    pub const MAX_SECS: i32 = 18 * 3600;

    pub fn from_secs(secs: i32) -> Option<Self> {
        (secs.abs() <= Self::MAX_SECS).then_some(Self(secs))
    }

    pub fn secs(self) -> i64 {
        i64::from(self.0)
    }

    pub fn is_utc(self) -> bool {
        self.0 == 0
    }

    /// `civil_to_epoch(fields)` shifted from the writer's clock onto UTC.
    pub fn normalize(self, civil: &CivilTime) -> Option<Timestamp> {
        civil.to_epoch().map(|secs| Timestamp(secs - self.secs()))
    }

    /// Epoch-style seconds on the writer's local clock, saturating at the
    /// ends of `i64`.
    pub fn to_local(self, ts: Timestamp) -> i64 {
        ts.0.saturating_add(self.secs())
    }

    /// Formats local clock seconds as `YYYY-MM-DD HH:MM:SS`, with a ` +HHMM`
    /// suffix unless the offset is zero.
    pub fn format_local(self, local_secs: i64) -> String {
        let Some(utc) = DateTime::from_timestamp(local_secs.saturating_sub(self.secs()), 0) else {
            return format!("@{local_secs}");
        };
        let local = utc.with_timezone(&self.fixed());
        if self.is_utc() {
            local.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            local.format("%Y-%m-%d %H:%M:%S %z").to_string()
        }
    }

    fn fixed(self) -> FixedOffset {
        FixedOffset::east_opt(self.0).unwrap_or_else(|| Utc.fix())
    }
}

impl fmt::Display for TzOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{:02}{:02}", abs / 3600, (abs % 3600) / 60)
    }
}
