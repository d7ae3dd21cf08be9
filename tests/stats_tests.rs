use prv_sync::output::{read_round_trips, read_summary, write_summary};
use prv_sync::rtt::RoundTrip;
use prv_sync::stats::{quantile, render_summary_table, summarize, trimmed_mean};
use std::io::Cursor;

fn sample(size_bytes: u64, duration_ns: i64) -> RoundTrip {
    RoundTrip {
        size_bytes,
        sender: 1,
        receiver: 2,
        duration_ns,
    }
}

#[test]
fn test_quantile_interpolates() {
    let values = [1, 2, 3, 4];

    assert_eq!(quantile(&values, 0.5), 2.5);
    assert_eq!(quantile(&values, 0.25), 1.75);
    assert_eq!(quantile(&values, 0.75), 3.25);
    assert_eq!(quantile(&[9], 0.75), 9.0);
}

#[test]
fn test_trimmed_mean_drops_tails() {
    let mut values: Vec<i64> = (1..=19).collect();
    values.push(1000);

    assert_eq!(trimmed_mean(&values, 0.05), 10.5);
    // too few values to cut anything
    assert_eq!(trimmed_mean(&[1, 2, 3], 0.05), 2.0);
}

#[test]
fn test_summarize_filters_and_groups() {
    let samples = vec![
        sample(0, 5),
        sample(8, 20),
        sample(8, 10),
        sample(64, 40),
        sample(200_000, 99),
    ];

    let summary = summarize(&samples, 131_072, "table.csv");

    assert_eq!(summary.samples_used, 3);
    assert_eq!(summary.samples_dropped, 2);
    assert_eq!(summary.by_size.len(), 2);

    let small = &summary.by_size[0];
    assert_eq!(small.size_bytes, 8);
    assert_eq!(small.count, 2);
    assert_eq!((small.min_ns, small.max_ns), (10, 20));
    assert_eq!(small.mean_ns, 15.0);
    assert!((small.sem_ns.unwrap() - 5.0).abs() < 1e-9);

    let large = &summary.by_size[1];
    assert_eq!(large.size_bytes, 64);
    assert_eq!(large.sem_ns, None);
}

#[test]
fn test_read_round_trips_from_csv() {
    let csv = "size_bytes,sender,receiver,duration_ns\n16,1,2,150\n\n32,2,1,-4\n";

    let samples = read_round_trips(Cursor::new(csv)).unwrap();

    assert_eq!(samples, vec![
        RoundTrip { size_bytes: 16, sender: 1, receiver: 2, duration_ns: 150 },
        RoundTrip { size_bytes: 32, sender: 2, receiver: 1, duration_ns: -4 },
    ]);
}

#[test]
fn test_read_round_trips_rejects_bad_input() {
    assert!(read_round_trips(Cursor::new("a,b\n1,2\n")).is_err());
    assert!(read_round_trips(Cursor::new(
        "size_bytes,sender,receiver,duration_ns\n16,1,2\n"
    ))
    .is_err());
}

#[test]
fn test_summary_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    let summary = summarize(&[sample(8, 10), sample(8, 30)], 131_072, "t.csv");

    write_summary(&summary, &path).unwrap();
    let loaded = read_summary(&path).unwrap();

    assert_eq!(loaded.by_size, summary.by_size);
    assert_eq!(loaded.source, "t.csv");
}

#[test]
fn test_render_mentions_each_size() {
    colored::control::set_override(false);
    let summary = summarize(&[sample(8, 10), sample(1024, 30)], 131_072, "t.csv");

    let table = render_summary_table(&summary);

    assert!(table.contains("t.csv"));
    assert!(table.contains("1024"));
}

#[test]
fn test_quantile_handles_extreme_durations() {
    let values = [i64::MIN, 10];

    let median = quantile(&values, 0.5);

    assert!(median.is_finite());
    assert!(median < 0.0);
}
