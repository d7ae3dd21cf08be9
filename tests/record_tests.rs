use pretty_assertions::assert_eq;
use prv_sync::record::{sort_canonical, EventPair, Node, Record};
use prv_sync::utils::error::ParseError;

fn parse(line: &str) -> Record {
    line.parse().unwrap()
}

#[test]
fn test_equal_time_orders_communication_event_state() {
    let mut records = vec![
        parse("1:1:1:1:1:100:200:1"),
        parse("2:1:1:1:1:100:5:1"),
        parse("3:1:1:1:1:100:100:2:1:2:1:150:150:8:0"),
    ];

    sort_canonical(&mut records);

    let tags: Vec<u8> = records.iter().map(Record::kind_tag).collect();
    assert_eq!(tags, vec![3, 2, 1]);
}

#[test]
fn test_sort_time_dominates_kind_tag() {
    let mut records = vec![
        parse("3:1:1:1:1:200:200:2:1:2:1:250:250:8:0"),
        parse("1:1:1:1:1:100:200:1"),
    ];

    sort_canonical(&mut records);

    assert_eq!(records[0].kind_tag(), 1);
    assert_eq!(records[1].kind_tag(), 3);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut records = vec![
        parse("2:2:1:2:1:100:7:1"),
        parse("2:1:1:1:1:100:7:2"),
        parse("2:3:1:3:1:100:7:3"),
    ];

    sort_canonical(&mut records);

    let text: Vec<String> = records.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        text,
        vec!["2:2:1:2:1:100:7:1", "2:1:1:1:1:100:7:2", "2:3:1:3:1:100:7:3"]
    );
}

#[test]
fn test_lines_reserialize_exactly() {
    let lines = [
        "1:1:1:1:1:0:4500:1",
        "2:2:1:2:1:3000",
        "2:2:1:2:1:3000:50000002:0:50000001:12",
        "3:1:1:1:1:1000:1010:2:1:2:1:1500:1520:1024:7",
    ];

    for line in lines {
        assert_eq!(parse(line).to_string(), line);
    }
}

#[test]
fn test_event_fields() {
    let record = parse("2:4:1:3:2:77:10:1:20:2");
    let event = record.as_event().unwrap();

    assert_eq!(event.node, Node::new(4, 1, 3, 2));
    assert_eq!(event.time, 77);
    assert_eq!(event.events, vec![EventPair::new(10, 1), EventPair::new(20, 2)]);
    assert!(event.contains_event(20, 2));
    assert!(!event.contains_event(20, 1));
}

#[test]
fn test_adjust_then_reverse_restores() {
    let lines = [
        "1:2:1:2:1:1000:2000:1",
        "2:2:1:2:1:1000:1:1",
        "3:2:1:2:1:1000:1005:2:1:2:1:1100:1110:64:0",
    ];

    for line in lines {
        let mut record = parse(line);
        record.adjust_for_recorder(2, 50);
        assert_ne!(record.to_string(), line);
        record.adjust_for_recorder(2, -50);
        assert_eq!(record.to_string(), line);
    }
}

#[test]
fn test_zero_timestamps_are_not_shifted() {
    let mut event = parse("2:2:1:2:1:0:40000001:1");
    event.adjust_for_recorder(2, 100);
    assert_eq!(event.to_string(), "2:2:1:2:1:0:40000001:1");

    let mut comm = parse("3:2:1:2:1:500:0:2:1:2:1:0:900:8:1");
    comm.adjust_for_recorder(2, 100);
    assert_eq!(comm.to_string(), "3:2:1:2:1:600:0:2:1:2:1:0:1000:8:1");
}

#[test]
fn test_state_end_time_shifts_even_when_zero() {
    let mut state = parse("1:2:1:1:1:0:0:0");
    state.adjust_for_recorder(2, 5);
    assert_eq!(state.to_string(), "1:2:1:1:1:0:5:0");

    state.adjust_for_recorder(2, -5);
    assert_eq!(state.to_string(), "1:2:1:1:1:0:0:0");
}

#[test]
fn test_communication_sides_adjust_independently() {
    let mut comm = parse("3:1:1:1:1:100:110:2:1:2:1:200:210:8:0");

    comm.adjust_for_recorder(2, -40);
    assert_eq!(comm.to_string(), "3:1:1:1:1:100:110:2:1:2:1:160:170:8:0");

    comm.adjust_for_recorder(1, 5);
    assert_eq!(comm.to_string(), "3:1:1:1:1:105:115:2:1:2:1:160:170:8:0");
}

#[test]
fn test_other_recorders_untouched() {
    let mut state = parse("1:3:1:3:1:100:200:1");
    state.adjust_for_recorder(2, 1000);
    assert_eq!(state.to_string(), "1:3:1:3:1:100:200:1");
}

#[test]
fn test_unknown_kind_tag_fails() {
    let result = "9:1:1:1:1:100".parse::<Record>();
    assert!(matches!(result, Err(ParseError::UnknownKind { ref tag, .. }) if tag == "9"));
}

#[test]
fn test_wrong_field_counts_fail() {
    for line in [
        "1:1:1:1:1:100:200",
        "1:1:1:1:1:100:200:1:9",
        "2:1:1:1",
        "2:1:1:1:1:100:5",
        "3:1:1:1:1:100:100:2:1:2:1:150:150:8",
        "2:1:1:1:1:abc",
    ] {
        assert!(
            matches!(line.parse::<Record>(), Err(ParseError::MalformedRecord { .. })),
            "{} should be malformed",
            line
        );
    }
}
