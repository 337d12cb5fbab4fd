use integration_tests::harness::{LogDir, access_log, gzip, plan_for};
use logtally_core::conf::RunConfig;
use logtally_core::pipeline::run_pass;
use logtally_core::scan::ScanError;
use pretty_assertions::assert_eq;

fn config() -> RunConfig {
    RunConfig {
        pattern: Some("GET".into()),
        interval: Some("15m".into()),
        ..RunConfig::default()
    }
}

#[test]
fn gzip_and_plain_give_identical_outcomes() {
    // Arrange
    let dir = LogDir::new();
    let text = access_log(500, 37);
    let plain = dir.write_plain("access.log", &text);
    let packed = dir.write_gzip("access.log.gz", &text);

    // Act
    let from_plain = run_pass(&plan_for(&plain, config())).unwrap();
    let from_gzip = run_pass(&plan_for(&packed, config())).unwrap();

    // Assert
    assert_eq!(from_plain.buckets, from_gzip.buckets);
    assert_eq!(from_plain.counters, from_gzip.counters);
    assert_eq!(from_plain.stats.records_seen, from_gzip.stats.records_seen);
    assert_eq!(from_plain.stats.bytes_matched, from_gzip.stats.bytes_matched);
    assert_eq!(from_gzip.stats.records_matched, 250);
}

#[test]
fn concatenated_members_read_as_one_stream() {
    // Arrange
    let dir = LogDir::new();
    let text = access_log(40, 60);
    let (first, second) = text.split_at(text.len() / 2 + 3);
    let plain = dir.write_plain("access.log", &text);
    let packed = dir.write_gzip_members("access.log.gz", &[first, second]);

    // Act
    let from_plain = run_pass(&plan_for(&plain, config())).unwrap();
    let from_gzip = run_pass(&plan_for(&packed, config())).unwrap();

    // Assert
    assert_eq!(from_gzip.buckets, from_plain.buckets);
    assert_eq!(from_gzip.stats.records_seen, 40);
}

#[test]
fn trailing_garbage_keeps_the_valid_prefix() {
    // Arrange
    let dir = LogDir::new();
    let text = access_log(20, 60);
    let mut bytes = gzip(text.as_bytes());
    bytes.extend_from_slice(b"this is not a gzip member");
    let packed = dir.write_bytes("broken.log.gz", &bytes);

    // Act
    let outcome = run_pass(&plan_for(&packed, config())).unwrap();

    // Assert
    assert!(matches!(
        outcome.interrupted,
        Some(ScanError::Decompress { .. })
    ));
    assert_eq!(outcome.stats.records_seen, 20);
    assert_eq!(outcome.stats.records_matched, 10);
    assert_eq!(outcome.counters.bytes_read, text.len() as u64);
}

#[test]
fn corrupt_stream_is_reported_not_panicked() {
    // Arrange
    let dir = LogDir::new();
    let mut bytes = gzip(access_log(200, 60).as_bytes());
    let middle = bytes.len() / 2;
    for b in &mut bytes[middle..middle + 16] {
        *b = !*b;
    }
    let packed = dir.write_bytes("corrupt.log.gz", &bytes);

    // Act
    let outcome = run_pass(&plan_for(&packed, config())).unwrap();

    // Assert
    let err = outcome.interrupted.as_ref().expect("corruption goes unnoticed");
    assert!(matches!(err, ScanError::Decompress { .. }), "{err:?}");
}
