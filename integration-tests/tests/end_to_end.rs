use integration_tests::harness::{LogDir, access_log, plan_for};
use logtally_core::conf::{OutputFormat, RunConfig};
use logtally_core::pipeline::run_pass;
use logtally_core::report::render;
use pretty_assertions::assert_eq;

fn counts(outcome: &logtally_core::pipeline::PassOutcome) -> Vec<u64> {
    outcome.buckets.iter().map(|b| b.count).collect()
}

/// Two records an hour apart, only the first matching.
#[test]
fn two_line_log_over_two_hourly_buckets() {
    // Arrange
    let dir = LogDir::new();
    let log = dir.write_plain(
        "app.log",
        "2021-06-01 00:05:00 hello\n2021-06-01 01:10:00 world\n",
    );
    let plan = plan_for(
        &log,
        RunConfig {
            pattern: Some("hello".into()),
            start: Some("2021-06-01 00:00:00".into()),
            stop: Some("2021-06-01 01:00:00".into()),
            ..RunConfig::default()
        },
    );

    // Act
    let outcome = run_pass(&plan).unwrap();

    // Assert
    assert_eq!(counts(&outcome), vec![1, 0]);
    assert_eq!(outcome.stats.records_seen, 2);
    assert_eq!(outcome.stats.records_matched, 1);
    assert!(outcome.is_complete());
}

/// Same log with stop two hours out; stop is inclusive at bucket
/// granularity, so the 02:00 slot is on the grid and stays empty.
#[test]
fn two_line_log_with_inclusive_stop_has_three_buckets() {
    // Arrange
    let dir = LogDir::new();
    let log = dir.write_plain(
        "app.log",
        "2021-06-01T00:05:00 hello\n2021-06-01T01:10:00 world\n",
    );
    let plan = plan_for(
        &log,
        RunConfig {
            pattern: Some("hello".into()),
            start: Some("2021-06-01 00:00:00".into()),
            stop: Some("2021-06-01 02:00:00".into()),
            ..RunConfig::default()
        },
    );

    // Act
    let outcome = run_pass(&plan).unwrap();

    // Assert
    assert_eq!(counts(&outcome), vec![1, 0, 0]);
    assert_eq!(outcome.stats.records_seen, 2);
    assert_eq!(outcome.stats.records_matched, 1);
}

#[test]
fn xml_report_of_a_full_day() {
    // Arrange
    let dir = LogDir::new();
    let log = dir.write_plain("access.log", &access_log(48, 1800));
    let plan = plan_for(
        &log,
        RunConfig {
            format: Some(OutputFormat::Xml),
            pattern: Some("^.*POST".into()),
            start: Some("2021-06-01".into()),
            stop: Some("2021-06-01 23:00:00".into()),
            ..RunConfig::default()
        },
    );

    // Act
    let outcome = run_pass(&plan).unwrap();
    let xml = render(&outcome, plan.format, plan.page).unwrap();

    // Assert
    assert_eq!(counts(&outcome), vec![1; 24]);
    assert_eq!(outcome.stats.records_seen, 48);
    assert_eq!(outcome.stats.records_matched, 24);
    assert_eq!(xml.matches("<property key=\"date\">").count(), 24);
    assert!(xml.contains("<time>2021-06-01 23:00:00</time>"));
    assert!(xml.contains("<property key=\"totalLength\">\n\t\t\t\t<integer>48</integer>"));
    assert!(xml.contains("<property key=\"totalSearchLength\">\n\t\t\t\t<integer>24</integer>"));
}

#[test]
fn stop_boundary_ends_the_pass_early() {
    // Arrange
    let dir = LogDir::new();
    let log = dir.write_plain("access.log", &access_log(100, 600));
    let plan = plan_for(
        &log,
        RunConfig {
            start: Some("2021-06-01 02:00:00".into()),
            stop: Some("2021-06-01 03:00:00".into()),
            ..RunConfig::default()
        },
    );

    // Act
    let outcome = run_pass(&plan).unwrap();

    // Assert
    assert_eq!(counts(&outcome), vec![6, 6]);
    assert!(outcome.stopped_early);
    // lines before start are seen, the one at 04:00 ends the pass unseen
    assert_eq!(outcome.stats.records_seen, 24);
}

#[test]
fn offset_clock_shifts_labels_and_bounds() {
    // Arrange
    let dir = LogDir::new();
    let log = dir.write_plain(
        "app.log",
        "2021-06-01 09:15:00 a\n2021-06-01 10:45:00 b\n2021-06-01 11:05:00 c\n",
    );
    let plan = plan_for(
        &log,
        RunConfig {
            format: Some(OutputFormat::Json),
            start: Some("2021-06-01 09:00:00".into()),
            stop: Some("2021-06-01 10:00:00".into()),
            tz_offset: Some("+09:00".into()),
            ..RunConfig::default()
        },
    );

    // Act
    let outcome = run_pass(&plan).unwrap();
    let json = render(&outcome, plan.format, plan.page).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(counts(&outcome), vec![1, 1]);
    assert_eq!(value["records"][0]["date"], "2021-06-01 09:00:00 +0900");
    assert_eq!(value["records"][1]["date"], "2021-06-01 10:00:00 +0900");
}

#[test]
fn paging_trims_rendered_rows_only() {
    let dir = LogDir::new();
    let log = dir.write_plain("access.log", &access_log(10, 3600));
    let plan = plan_for(
        &log,
        RunConfig {
            skip: Some(3),
            limit: Some(4),
            ..RunConfig::default()
        },
    );

    let outcome = run_pass(&plan).unwrap();
    let text = render(&outcome, plan.format, plan.page).unwrap();

    assert_eq!(outcome.buckets.len(), 10);
    let rows: Vec<&str> = text.lines().take_while(|l| !l.is_empty()).collect();
    assert_eq!(
        rows,
        vec![
            "2021-06-01 03:00:00  1",
            "2021-06-01 04:00:00  1",
            "2021-06-01 05:00:00  1",
            "2021-06-01 06:00:00  1",
        ]
    );
}

#[test]
fn lines_longer_than_the_buffer_are_truncated_not_lost() {
    // Arrange
    let dir = LogDir::new();
    let long = format!("2021-06-01 00:10:00 {}\n", "x".repeat(500));
    let text = format!("2021-06-01 00:05:00 short\n{long}2021-06-01 00:20:00 short\n");
    let log = dir.write_plain("app.log", &text);
    let plan = plan_for(
        &log,
        RunConfig {
            buffer_size: Some(logtally_core::conf::SizeSetting::Bytes(128)),
            ..RunConfig::default()
        },
    );

    // Act
    let outcome = run_pass(&plan).unwrap();

    // Assert
    assert_eq!(counts(&outcome), vec![3]);
    assert_eq!(outcome.counters.truncated_lines, 1);
    assert_eq!(outcome.counters.bytes_read, text.len() as u64);
}
