use crate::aggregate::RunWindow;
use crate::matcher::Pattern;
use crate::pipeline::Pipeline;
use crate::scan::ScanError;
use crate::time::{Timestamp, TzOffset};
use pretty_assertions::assert_eq;
use std::io::{self, Cursor, Read};

// 2021-06-01T00:00:00Z
const MIDNIGHT: i64 = 1_622_505_600;
const HOUR: i64 = 3600;

fn window(start: i64, stop: i64) -> RunWindow {
    RunWindow::new(
        Some(Timestamp(start)),
        Some(Timestamp(stop)),
        None,
        HOUR,
        TzOffset::UTC,
    )
    .unwrap()
}

fn pipeline(pattern: &str, window: RunWindow) -> Pipeline {
    Pipeline::new(Pattern::compile(pattern).unwrap(), window, 4096)
}

fn counts(outcome: &crate::pipeline::PassOutcome) -> Vec<u64> {
    outcome.buckets.iter().map(|b| b.count).collect()
}

/// Yields its data, then fails.
struct BrokenReader {
    data: Cursor<Vec<u8>>,
}

impl Read for BrokenReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "disk went away")),
            n => Ok(n),
        }
    }
}

#[test]
fn two_line_log_fills_matching_bucket_only() {
    // Arrange
    let log = "2021-06-01T00:05:00 hello\n2021-06-01T01:10:00 world\n";
    let pipeline = pipeline("hello", window(MIDNIGHT, MIDNIGHT + HOUR));

    // Act
    let outcome = pipeline.run(Cursor::new(log));

    // Assert
    assert_eq!(counts(&outcome), vec![1, 0]);
    assert_eq!(outcome.stats.records_seen, 2);
    assert_eq!(outcome.stats.records_matched, 1);
    assert_eq!(outcome.stats.bytes_seen, log.len() as u64);
    assert_eq!(outcome.stats.bytes_matched, 26);
    assert!(outcome.is_complete());
    assert!(!outcome.stopped_early);
}

/// Stop at 02:00 is inclusive at bucket granularity, so the grid carries a
/// third, empty slot for 02:00..03:00.
#[test]
fn two_line_log_with_stop_two_hours_out_keeps_the_stop_bucket() {
    // Arrange
    let log = "2021-06-01T00:05:00 hello\n2021-06-01T01:10:00 world\n";
    let pipeline = pipeline("hello", window(MIDNIGHT, MIDNIGHT + 2 * HOUR));

    // Act
    let outcome = pipeline.run(Cursor::new(log));

    // Assert
    assert_eq!(outcome.buckets[0].count, 1);
    assert_eq!(outcome.buckets[1].count, 0);
    assert_eq!(counts(&outcome), vec![1, 0, 0]);
    assert_eq!(outcome.stats.records_seen, 2);
    assert_eq!(outcome.stats.records_matched, 1);
}

/// A record stamped exactly at stop lands in the last slot; one a full
/// width later is outside the window.
#[test]
fn records_at_stop_count_and_records_a_width_later_do_not() {
    // Arrange
    let log = "2021-06-01T00:05:00 a\n\
               2021-06-01T02:00:00 a\n\
               2021-06-01T02:59:59 a\n\
               2021-06-01T03:00:00 a\n";
    let pipeline = pipeline("", window(MIDNIGHT, MIDNIGHT + 2 * HOUR));

    // Act
    let outcome = pipeline.run(Cursor::new(log));

    // Assert
    assert_eq!(counts(&outcome), vec![1, 0, 2]);
    assert_eq!(outcome.stats.records_matched, 3);
}

#[test]
fn bucket_labels_follow_the_aligned_start() {
    let log = "2021-06-01T00:05:00 a\n";
    let pipeline = pipeline("", window(MIDNIGHT + 1800, MIDNIGHT + 3 * HOUR));

    let outcome = pipeline.run(Cursor::new(log));

    let starts: Vec<i64> = outcome.buckets.iter().map(|b| b.local_start).collect();
    assert_eq!(
        starts,
        vec![MIDNIGHT, MIDNIGHT + HOUR, MIDNIGHT + 2 * HOUR, MIDNIGHT + 3 * HOUR]
    );
    // before start: seen, not matched
    assert_eq!(outcome.stats.records_seen, 1);
    assert_eq!(outcome.stats.records_matched, 0);
}

#[test]
fn undated_lines_are_invisible_to_statistics() {
    // Arrange
    let log = "banner line\n\
               2021-06-01T00:05:00 GET /a\n\
               \tat stack.frame(Foo.java:1)\n\
               2021-06-01T00:06:00 GET /b\n\
               trailing junk";
    let pipeline = pipeline("GET", window(MIDNIGHT, MIDNIGHT));

    // Act
    let outcome = pipeline.run(Cursor::new(log));

    // Assert
    assert_eq!(counts(&outcome), vec![2]);
    assert_eq!(outcome.stats.records_seen, 2);
    assert_eq!(outcome.counters.undated_lines, 3);
    assert_eq!(outcome.counters.lines, 5);
}

#[test]
fn pass_ends_at_first_record_past_stop() {
    // Arrange
    let log = "2021-06-01T00:05:00 a\n\
               2021-06-01T01:00:00 b\n\
               2021-06-01T00:30:00 late but unseen\n";
    let pipeline = pipeline("", window(MIDNIGHT, MIDNIGHT));

    // Act
    let outcome = pipeline.run(Cursor::new(log));

    // Assert
    assert!(outcome.stopped_early);
    assert_eq!(counts(&outcome), vec![1]);
    assert_eq!(outcome.stats.records_seen, 1);
    assert_eq!(outcome.counters.lines, 2);
}

#[test]
fn until_cuts_inside_the_last_bucket() {
    let log = "2021-06-01T00:05:00 a\n2021-06-01T00:20:00 b\n2021-06-01T00:40:00 c\n";
    let window = RunWindow::new(
        Some(Timestamp(MIDNIGHT)),
        None,
        Some(Timestamp(MIDNIGHT + 30 * 60)),
        HOUR,
        TzOffset::UTC,
    )
    .unwrap();

    let outcome = pipeline("", window).run(Cursor::new(log));

    assert_eq!(counts(&outcome), vec![2]);
    assert!(outcome.stopped_early);
}

#[test]
fn unbounded_window_anchors_on_first_match() {
    // Arrange
    let log = "2021-06-01T02:15:00 x\n2021-06-01T04:45:00 x\n";
    let window = RunWindow::unbounded(HOUR, TzOffset::UTC).unwrap();

    // Act
    let outcome = pipeline("x", window).run(Cursor::new(log));

    // Assert
    assert_eq!(counts(&outcome), vec![1, 0, 1]);
    assert_eq!(outcome.buckets[0].local_start, MIDNIGHT + 2 * HOUR);
    assert_eq!(outcome.total_count(), 2);
}

#[test]
fn read_failure_keeps_what_was_counted() {
    // Arrange
    let log = b"2021-06-01T00:05:00 a\n2021-06-01T00:06:00 b\n".to_vec();
    let reader = BrokenReader {
        data: Cursor::new(log),
    };
    let pipeline = pipeline("", window(MIDNIGHT, MIDNIGHT));

    // Act
    let outcome = pipeline.run(reader);

    // Assert
    assert!(matches!(outcome.interrupted, Some(ScanError::Read { .. })));
    assert_eq!(counts(&outcome), vec![2]);
    assert_eq!(outcome.stats.records_matched, 2);
}
