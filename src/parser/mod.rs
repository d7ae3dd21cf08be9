//! Line-oriented trace parsing.
//!
//! Each line is either pass-through metadata (header or communicator
//! definition, starting with `#` or `c`) or a record. There is no recovery
//! mode: the first malformed line aborts the scan.

use crate::record::Record;
use crate::utils::config::PASS_THROUGH_PREFIXES;
use crate::utils::error::ParseError;
use log::debug;
use std::io::BufRead;

/// A classified trace line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLine {
    /// Copied verbatim to any output, without the line terminator
    PassThrough(String),
    Record(Record),
}

/// Classify and parse a single line (without its terminator)
pub fn parse_line(line: &str) -> Result<TraceLine, ParseError> {
    match line.as_bytes().first() {
        None => Err(ParseError::EmptyLine { line: 0 }),
        Some(b) if PASS_THROUGH_PREFIXES.contains(b) => Ok(TraceLine::PassThrough(line.to_string())),
        Some(_) => line.parse().map(TraceLine::Record),
    }
}

/// Streaming reader yielding `(line_number, TraceLine)` pairs.
///
/// Line numbers are 1-based.
pub struct TraceReader<R> {
    reader: R,
    buf: String,
    line_number: usize,
}

impl<R: BufRead> TraceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<(usize, TraceLine), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                debug!("Trace exhausted after {} lines", self.line_number());
                None
            }
            Ok(_) => {
                self.line_number += 1;
                let number = self.line_number;
                let line = self.buf.trim_end_matches(['\n', '\r']);
                Some(
                    parse_line(line)
                        .map(|parsed| (number, parsed))
                        .map_err(|e| e.at_line(number)),
                )
            }
            Err(e) => Some(Err(ParseError::Io(e))),
        }
    }
}

/// Iterate only the records of a trace, skipping pass-through lines
pub fn records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Record, ParseError>> {
    TraceReader::new(reader).filter_map(|item| match item {
        Ok((_, TraceLine::Record(record))) => Some(Ok(record)),
        Ok((_, TraceLine::PassThrough(_))) => None,
        Err(e) => Some(Err(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_crlf_is_stripped() {
        let mut reader = TraceReader::new(Cursor::new("2:1:1:1:1:5\r\n"));
        let (line, parsed) = reader.next().unwrap().unwrap();
        assert_eq!(line, 1);
        assert_eq!(parsed, parse_line("2:1:1:1:1:5").unwrap());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_error_reports_line_number() {
        let input = "#Paraver header\n2:1:1:1:1:5\n9:1:2\n";
        let err = TraceReader::new(Cursor::new(input))
            .find_map(|item| item.err())
            .unwrap();
        assert!(matches!(err, ParseError::UnknownKind { line: 3, .. }));
    }

    #[test]
    fn test_line_number_tracks_consumed_lines() {
        let mut reader = TraceReader::new(Cursor::new("#h
2:1:1:1:1:5
"));
        assert_eq!(reader.line_number(), 0);
        reader.next();
        assert_eq!(reader.line_number(), 1);
        while reader.next().is_some() {}
        assert_eq!(reader.line_number(), 2);
    }
}
