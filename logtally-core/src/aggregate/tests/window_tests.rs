use crate::aggregate::{DAY, HOUR, MAX_BUCKETS, RunWindow};
use crate::conf::ConfigError;
use crate::time::{Timestamp, TzOffset};

// 2021-06-01T00:00:00Z
const MIDNIGHT: i64 = 1_622_505_600;

fn ts(offset: i64) -> Timestamp {
    Timestamp(MIDNIGHT + offset)
}

#[test]
fn stop_is_inclusive_at_bucket_granularity() {
    // Arrange
    let window = RunWindow::new(Some(ts(0)), Some(ts(2 * HOUR)), None, HOUR, TzOffset::UTC).unwrap();

    // Assert
    assert_eq!(window.end(), Some(ts(3 * HOUR)));
    assert_eq!(window.bucket_count(), Some(3));
    assert!(window.contains(ts(2 * HOUR + 3599)));
    assert!(!window.contains(ts(3 * HOUR)));
}

#[test]
fn until_cuts_without_changing_the_grid() {
    let window = RunWindow::new(
        Some(ts(0)),
        Some(ts(2 * HOUR)),
        Some(ts(90 * 60)),
        HOUR,
        TzOffset::UTC,
    )
    .unwrap();

    assert_eq!(window.bucket_count(), Some(3));
    assert_eq!(window.limit(), Some(ts(90 * 60)));
    assert!(window.contains(ts(90 * 60 - 1)));
    assert!(!window.contains(ts(90 * 60)));
    assert!(window.is_past(ts(90 * 60)));
}

#[test]
fn missing_bounds_are_unbounded() {
    let window = RunWindow::unbounded(HOUR, TzOffset::UTC).unwrap();

    assert!(window.contains(Timestamp(i64::MIN / 2)));
    assert!(window.contains(Timestamp(i64::MAX / 2)));
    assert!(!window.is_past(Timestamp(i64::MAX / 2)));
    assert_eq!(window.bucket_count(), None);
}

#[test]
fn start_is_aligned_on_the_local_clock() {
    // Arrange: +01:00, start at 00:30 UTC = 01:30 local
    let tz = TzOffset::from_secs(3600).unwrap();
    let window = RunWindow::new(Some(ts(30 * 60)), None, None, HOUR, tz).unwrap();

    // Act
    let aligned = window.align_local(window.start().unwrap());

    // Assert: 01:00 local
    assert_eq!(aligned, MIDNIGHT + HOUR);
}

#[test]
fn daily_alignment_handles_negative_offsets() {
    let tz = TzOffset::from_secs(-5 * 3600).unwrap();
    let window = RunWindow::unbounded(DAY, tz).unwrap();

    // 03:00 UTC on June 1st is 22:00 on May 31st at -05:00
    assert_eq!(window.align_local(ts(3 * HOUR)), MIDNIGHT - DAY);
}

#[test]
fn zero_width_is_rejected() {
    let err = RunWindow::unbounded(0, TzOffset::UTC).unwrap_err();

    assert!(matches!(err, ConfigError::NonPositiveBucketWidth { seconds: 0 }));
}

#[test]
fn stop_before_start_is_rejected() {
    let err = RunWindow::new(Some(ts(HOUR)), Some(ts(0)), None, HOUR, TzOffset::UTC).unwrap_err();

    assert!(matches!(err, ConfigError::StopBeforeStart { .. }));
}

#[test]
fn until_at_start_is_rejected() {
    let err = RunWindow::new(Some(ts(0)), None, Some(ts(0)), HOUR, TzOffset::UTC).unwrap_err();

    assert!(matches!(err, ConfigError::UntilNotAfterStart { .. }));
}

#[test]
fn oversized_grid_is_rejected() {
    let stop = ts(MAX_BUCKETS as i64 + 10);

    let err = RunWindow::new(Some(ts(0)), Some(stop), None, 1, TzOffset::UTC).unwrap_err();

    assert!(matches!(err, ConfigError::WindowTooLarge { .. }));
}

#[test]
fn extreme_timestamps_saturate_instead_of_overflowing() {
    let east = TzOffset::from_secs(3600).unwrap();
    let west = TzOffset::from_secs(-3600).unwrap();
    let top = Timestamp(i64::MAX - 10);

    let high = RunWindow::new(Some(top), Some(top), None, HOUR, east).unwrap();
    let low = RunWindow::new(Some(Timestamp(i64::MIN)), None, None, HOUR, west).unwrap();

    assert_eq!(high.end(), Some(Timestamp(i64::MAX)));
    assert!(high.bucket_count().is_some());
    assert_eq!(low.align_local(Timestamp(i64::MIN)), i64::MIN);
}
