use pretty_assertions::assert_eq;
use prv_sync::parser::{parse_line, records, TraceLine, TraceReader};
use prv_sync::utils::error::ParseError;
use std::io::Cursor;

#[test]
fn test_header_and_communicator_lines_pass_through() {
    let header = "#Paraver (18/03/2016 at 10:00):1000_ns:0:1:1(2:1)";
    let comm = "c:1:1:2:1:2";

    assert_eq!(
        parse_line(header).unwrap(),
        TraceLine::PassThrough(header.to_string())
    );
    assert_eq!(
        parse_line(comm).unwrap(),
        TraceLine::PassThrough(comm.to_string())
    );
}

#[test]
fn test_record_lines_are_parsed() {
    match parse_line("2:1:1:1:1:100:5:1").unwrap() {
        TraceLine::Record(record) => assert_eq!(record.kind_tag(), 2),
        other => panic!("expected record, got {:?}", other),
    }
}

#[test]
fn test_empty_line_is_malformed() {
    assert!(matches!(parse_line(""), Err(ParseError::EmptyLine { .. })));
}

#[test]
fn test_reader_numbers_lines() {
    let input = "#header\n2:1:1:1:1:100\n1:1:1:1:1:100:200:1\n";
    let lines: Vec<usize> = TraceReader::new(Cursor::new(input))
        .map(|item| item.unwrap().0)
        .collect();

    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn test_reader_handles_missing_final_newline() {
    let input = "#header\n2:1:1:1:1:100";
    let items: Vec<_> = TraceReader::new(Cursor::new(input))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(items.len(), 2);
}

#[test]
fn test_malformed_line_is_fatal() {
    let input = "#header\n2:1:1:1:1:100\n9:1:1:1:1:100\n2:1:1:1:1:200\n";
    let result: Result<Vec<_>, _> = records(Cursor::new(input)).collect();

    assert!(matches!(result, Err(ParseError::UnknownKind { line: 3, .. })));
}

#[test]
fn test_records_skip_pass_through() {
    let input = "#header\nc:1:1:2:1:2\n2:1:1:1:1:100\n";
    let parsed: Vec<_> = records(Cursor::new(input))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].to_string(), "2:1:1:1:1:100");
}
