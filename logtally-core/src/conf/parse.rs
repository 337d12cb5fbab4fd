use crate::aggregate::{DAY, HOUR};
use crate::conf::error::ConfigError;
use crate::conf::types::SizeSetting;
use crate::scan::timestamp::{parse_date_only, parse_prefix};
use crate::time::{Timestamp, TzOffset};
use chrono::DateTime;

pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;
pub const MIN_BUFFER_SIZE: usize = 64;
pub const MAX_BUFFER_SIZE: usize = 1 << 30;

pub const DEFAULT_INTERVAL: i64 = HOUR;

/// `Z`, `+HH`, `+HHMM` or `+HH:MM` (either sign).
pub fn parse_tz_offset(value: &str) -> Result<TzOffset, ConfigError> {
    let invalid = || ConfigError::InvalidTzOffset {
        value: value.to_string(),
    };

    let text = value.trim();
    if text.eq_ignore_ascii_case("z") {
        return Ok(TzOffset::UTC);
    }

    let (sign, rest) = match text.as_bytes().first() {
        Some(b'+') => (1, &text[1..]),
        Some(b'-') => (-1, &text[1..]),
        _ => return Err(invalid()),
    };
    if !rest.is_ascii() {
        return Err(invalid());
    }
    let (hours, minutes) = match rest.len() {
        2 => (rest, "00"),
        4 => (&rest[..2], &rest[2..]),
        5 if rest.as_bytes()[2] == b':' => (&rest[..2], &rest[3..]),
        _ => return Err(invalid()),
    };
    if !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    TzOffset::from_secs(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// A point in time from configuration.
///
/// Accepts the log timestamp grammar, a bare date (midnight), or `@<secs>`
/// for a raw epoch value. Calendar forms are read on the `tz` clock.
pub fn parse_time(field: &'static str, value: &str, tz: TzOffset) -> Result<Timestamp, ConfigError> {
    let invalid = || ConfigError::InvalidTime {
        field,
        value: value.to_string(),
    };

    let text = value.trim();
    if let Some(epoch) = text.strip_prefix('@') {
        let secs = epoch.parse::<i64>().map_err(|_| invalid())?;
        // same range as calendar values, so labels can always be rendered
        if DateTime::from_timestamp(secs, 0).is_none() {
            return Err(invalid());
        }
        return Ok(Timestamp(secs));
    }

    let bytes = text.as_bytes();
    let civil = match parse_prefix(bytes) {
        Some((civil, used)) if used == bytes.len() => Some(civil),
        _ => parse_date_only(bytes),
    };
    civil
        .and_then(|civil| tz.normalize(&civil))
        .ok_or_else(invalid)
}

pub fn parse_buffer_size(setting: &SizeSetting) -> Result<usize, ConfigError> {
    let (value, bytes) = match setting {
        SizeSetting::Bytes(n) => (n.to_string(), Some(*n)),
        SizeSetting::Text(text) => (text.clone(), parse_size_text(text)),
    };
    let invalid = |reason: &str| ConfigError::InvalidBufferSize {
        value: value.clone(),
        reason: reason.to_string(),
    };

    let bytes = bytes.ok_or_else(|| invalid("expected a number of bytes, optionally with a K suffix"))?;
    let bytes = usize::try_from(bytes).map_err(|_| invalid("too large"))?;
    if bytes < MIN_BUFFER_SIZE {
        return Err(invalid(&format!("must be at least {MIN_BUFFER_SIZE} bytes")));
    }
    if bytes > MAX_BUFFER_SIZE {
        return Err(invalid(&format!("must be at most {MAX_BUFFER_SIZE} bytes")));
    }
    Ok(bytes)
}

fn parse_size_text(text: &str) -> Option<u64> {
    let text = text.trim();
    let (digits, scale) = match text.strip_suffix(['K', 'k']) {
        Some(digits) => (digits, 1024),
        None => (text, 1),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()?.checked_mul(scale)
}

/// Bucket width in seconds: `hourly`, `daily`, or `<n>` followed by one of
/// `s`, `m`, `h`, `d`.
pub fn parse_interval(value: &str) -> Result<i64, ConfigError> {
    let invalid = || ConfigError::InvalidInterval {
        value: value.to_string(),
    };

    let text = value.trim().to_ascii_lowercase();
    if !text.is_ascii() {
        return Err(invalid());
    }
    match text.as_str() {
        "hourly" => return Ok(HOUR),
        "daily" => return Ok(DAY),
        _ => {}
    }

    let split = text.len().checked_sub(1).ok_or_else(invalid)?;
    let (count, unit) = text.split_at(split);
    let scale = match unit {
        "s" => 1,
        "m" => 60,
        "h" => HOUR,
        "d" => DAY,
        _ => return Err(invalid()),
    };
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let count: i64 = count.parse().map_err(|_| invalid())?;
    match count.checked_mul(scale) {
        Some(width) if width > 0 => Ok(width),
        _ => Err(invalid()),
    }
}
