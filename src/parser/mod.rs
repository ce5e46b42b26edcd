//! JSON Lines parser for GeoJSON feature feeds.
//!
//! The input framing is strict: every line holds one complete JSON
//! value, parsed independently. Blank lines and values spread over
//! several lines are errors, not extensions - the first bad line aborts
//! the run with its 1-based line number.
//!
//! Two iteration strategies share the same per-line parse: a streaming
//! reader ([`parse_reader`]) and a bulk-loaded buffer ([`parse_str`]).
//! They are behaviorally identical.

use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ParseError, ParseResult};

/// Parse a single input line.
///
/// `number` is the 1-based position of the line in its source, carried
/// into the error when the line is blank or not valid JSON. Leading and
/// trailing whitespace (including a stray `\r`) is tolerated.
pub fn parse_line(line: &str, number: usize) -> ParseResult<Value> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::BlankLine { line: number });
    }
    serde_json::from_str(trimmed).map_err(|e| ParseError::InvalidJson {
        line: number,
        message: e.to_string(),
    })
}

/// Parse JSON Lines from a buffered reader, one value per line.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<Vec<Value>> {
    let mut features = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        features.push(parse_line(&line, idx + 1)?);
    }
    Ok(features)
}

/// Parse JSON Lines held in memory.
///
/// # Example
/// ```ignore
/// use quakeload::parse_str;
///
/// let features = parse_str("{\"id\":1}\n{\"id\":2}\n").unwrap();
/// assert_eq!(features.len(), 2);
/// assert_eq!(features[1]["id"], 2);
/// ```
pub fn parse_str(content: &str) -> ParseResult<Vec<Value>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Parse a JSON Lines file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> ParseResult<Vec<Value>> {
    let file = File::open(path.as_ref())?;
    parse_reader(BufReader::new(file))
}
