//! High-level pipeline API for GeoJSON to bulk conversion.
//!
//! This module provides entry points that combine all steps: parsing,
//! feature mapping, and payload serialization. They are tiered by how
//! much the caller has already done:
//!
//! - [`convert_file`] reads a file and writes the payload to disk,
//! - [`convert_str`] converts in-memory text and returns the payload,
//! - [`transform_records`] maps features the caller already parsed.
//!
//! [`check_str`] is the diagnostic counterpart: it evaluates every line
//! independently and reports all problems instead of aborting on the
//! first one.
//!
//! # Example
//!
//! ```rust,ignore
//! use quakeload::transform::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = convert_file(
//!         Path::new("events.json"),
//!         Path::new("events.bulk"),
//!         &ConvertOptions::default(),
//!     )?;
//!
//!     println!("Converted {} events", report.features);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{ParseError, PipelineError, PipelineResult};
use crate::models::{BulkPair, DEFAULT_INDEX};
use crate::parser::{parse_file, parse_line, parse_str};
use crate::transform::mapper::map_feature;
use crate::writer::{bulk_to_string, write_bulk_file};

/// Options for the conversion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Index name stamped on every action line
    pub index: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX.to_string(),
        }
    }
}

/// Result of a complete file conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    /// Number of features converted
    pub features: usize,

    /// Number of payload lines written (two per feature)
    pub lines: usize,
}

/// Result of a line-by-line diagnostic pass
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Number of lines that parse and map cleanly
    pub valid: usize,

    /// Number of lines that do not
    pub invalid: usize,

    /// One `(line number, problem)` entry per failing line, in input
    /// order. Problem texts are position-free; the 1-based line number
    /// rides alongside.
    pub problems: Vec<(usize, String)>,
}

/// Convert a GeoJSON lines file to a bulk payload file.
///
/// This is the main entry point for the pipeline. It:
/// 1. Parses the input as JSON lines
/// 2. Maps every feature to an action/document pair
/// 3. Writes the payload to `output` in one atomic step
///
/// The output file appears only when every feature converts; a failed
/// run leaves no partial file behind.
///
/// # Arguments
/// * `input` - path to the GeoJSON lines file
/// * `output` - path the bulk payload is written to
/// * `options` - conversion options
///
/// # Returns
/// A `ConvertReport` with feature and line counts
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> PipelineResult<ConvertReport> {
    let features = parse_file(input)?;
    let pairs = transform_records(&features, options)?;
    write_bulk_file(output, &pairs)?;

    Ok(ConvertReport {
        features: pairs.len(),
        lines: pairs.len() * 2,
    })
}

/// Convert in-memory GeoJSON lines text to the bulk payload string.
///
/// Same contract as [`convert_file`] without touching the filesystem.
pub fn convert_str(content: &str, options: &ConvertOptions) -> PipelineResult<String> {
    let features = parse_str(content)?;
    let pairs = transform_records(&features, options)?;
    Ok(bulk_to_string(&pairs)?)
}

/// Map already-parsed features to action/document pairs.
///
/// Input order is preserved. The first structural failure aborts the
/// whole batch and carries the 1-based position of the offending
/// feature.
pub fn transform_records(
    features: &[Value],
    options: &ConvertOptions,
) -> PipelineResult<Vec<BulkPair>> {
    features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            map_feature(feature, &options.index).map_err(|source| PipelineError::Structural {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

/// Check every line of `content` independently.
///
/// Unlike [`convert_str`] this never aborts: each line is parsed and
/// mapped on its own, and every failing line lands in the report. The
/// problem texts carry no position of their own (the line number is in
/// the tuple), so callers can prefix them uniformly.
pub fn check_str(content: &str, options: &ConvertOptions) -> CheckReport {
    let mut valid = 0;
    let mut problems = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let number = idx + 1;
        let problem = match parse_line(line, number) {
            Ok(feature) => map_feature(&feature, &options.index)
                .err()
                .map(|e| e.to_string()),
            Err(ParseError::InvalidJson { message, .. }) => {
                Some(format!("invalid JSON: {}", message))
            }
            Err(ParseError::BlankLine { .. }) => {
                Some("blank line (every line must hold one JSON object)".to_string())
            }
            Err(e) => Some(e.to_string()),
        };

        match problem {
            None => valid += 1,
            Some(message) => problems.push((number, message)),
        }
    }

    CheckReport {
        valid,
        invalid: problems.len(),
        problems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StructuralError;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{"id":"us1000abc","properties":{"mag":5.6,"place":"10km N of Test","time":1700000000000,"type":"earthquake"},"geometry":{"coordinates":[-122.1,37.4,10.5]}}"#;

    fn expected_sample_payload() -> String {
        let action = r#"{"index":{"_index":"earthquakes","_id":"us1000abc"}}"#;
        let document = concat!(
            r#"{"mag":5.6,"place":"10km N of Test","time":1700000000000,"#,
            r#""updated":null,"tz":null,"url":null,"detail":null,"felt":null,"#,
            r#""cdi":null,"mmi":null,"alert":null,"status":null,"tsunami":null,"#,
            r#""sig":null,"net":null,"code":null,"ids":null,"sources":null,"#,
            r#""types":null,"nst":null,"dmin":null,"rms":null,"gap":null,"#,
            r#""magType":null,"event_type":"earthquake","#,
            r#""location":{"lat":37.4,"lon":-122.1},"depth":10.5}"#,
        );
        format!("{}\n{}\n", action, document)
    }

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.index, "earthquakes");
    }

    #[test]
    fn test_convert_str_golden_payload() {
        let payload = convert_str(SAMPLE, &ConvertOptions::default()).unwrap();
        assert_eq!(payload, expected_sample_payload());
    }

    #[test]
    fn test_lines_alternate_action_document() {
        let content = format!("{}\n{}\n{}\n", SAMPLE, SAMPLE, SAMPLE);
        let payload = convert_str(&content, &ConvertOptions::default()).unwrap();

        let lines: Vec<&str> = payload.lines().collect();
        assert_eq!(lines.len(), 6);
        for pair in lines.chunks(2) {
            assert!(pair[0].starts_with(r#"{"index":"#));
            assert!(pair[1].starts_with(r#"{"mag":"#));
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let features = vec![
            json!({"id": "a", "properties": {}, "geometry": {"coordinates": [1, 2, 3]}}),
            json!({"id": "b", "properties": {}, "geometry": {"coordinates": [1, 2, 3]}}),
            json!({"id": "c", "properties": {}, "geometry": {"coordinates": [1, 2, 3]}}),
        ];
        let pairs = transform_records(&features, &ConvertOptions::default()).unwrap();
        let ids: Vec<_> = pairs.iter().map(|p| p.action.index.id.clone()).collect();
        assert_eq!(ids, vec![json!("a"), json!("b"), json!("c")]);
    }

    #[test]
    fn test_custom_index_reaches_every_action() {
        let options = ConvertOptions {
            index: "seismic-events".to_string(),
        };
        let content = format!("{}\n{}\n", SAMPLE, SAMPLE);
        let payload = convert_str(&content, &options).unwrap();
        assert_eq!(payload.matches(r#""_index":"seismic-events""#).count(), 2);
    }

    #[test]
    fn test_structural_failure_carries_position() {
        let content = format!("{}\n{{\"id\":\"broken\"}}\n", SAMPLE);
        let err = convert_str(&content, &ConvertOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("Line 2:"));
        match err {
            PipelineError::Structural { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, StructuralError::MissingField("properties"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_yields_lone_newline() {
        let payload = convert_str("", &ConvertOptions::default()).unwrap();
        assert_eq!(payload, "\n");
    }

    #[test]
    fn test_convert_file_writes_payload() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("events.bulk");
        fs::write(&input, format!("{}\n", SAMPLE)).unwrap();

        let report = convert_file(&input, &output, &ConvertOptions::default()).unwrap();

        assert_eq!(report.features, 1);
        assert_eq!(report.lines, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), expected_sample_payload());
    }

    #[test]
    fn test_failed_run_leaves_no_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("events.bulk");
        fs::write(&input, "not json\n").unwrap();

        let result = convert_file(&input, &output, &ConvertOptions::default());

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_structural_failure_leaves_no_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("events.bulk");
        let short = r#"{"id":"x","properties":{},"geometry":{"coordinates":[-122.1,37.4]}}"#;
        fs::write(&input, format!("{}\n{}\n", SAMPLE, short)).unwrap();

        let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Structural {
                line: 2,
                source: StructuralError::CoordinateCount(2),
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_check_str_counts_clean_input() {
        let content = format!("{}\n{}\n", SAMPLE, SAMPLE);
        let report = check_str(&content, &ConvertOptions::default());
        assert_eq!(report.valid, 2);
        assert_eq!(report.invalid, 0);
        assert!(report.problems.is_empty());
    }

    #[test]
    fn test_check_str_reports_every_failing_line() {
        let short = r#"{"id":"x","properties":{},"geometry":{"coordinates":[1,2]}}"#;
        let content = format!("{}\nnot json\n{}\n{}\n", SAMPLE, SAMPLE, short);
        let report = check_str(&content, &ConvertOptions::default());

        assert_eq!(report.valid, 2);
        assert_eq!(report.invalid, 2);

        let (line, message) = &report.problems[0];
        assert_eq!(*line, 2);
        assert!(message.starts_with("invalid JSON:"));

        let (line, message) = &report.problems[1];
        assert_eq!(*line, 4);
        assert_eq!(message, "geometry.coordinates has 2 element(s), expected 3");
    }

    #[test]
    fn test_check_str_problems_carry_no_position_of_their_own() {
        // Positions live in the tuple; a problem text that embedded its
        // own would render doubled when the caller prefixes it.
        let content = "not json\n\n{\"id\":\"x\"}\n";
        let report = check_str(content, &ConvertOptions::default());

        assert_eq!(report.invalid, 3);
        for (_, message) in &report.problems {
            assert!(!message.contains("Line"), "positioned text: {}", message);
        }
        assert!(report.problems[1].1.starts_with("blank line"));
        assert_eq!(report.problems[2].1, "missing required field 'properties'");
    }

    #[test]
    fn test_missing_input_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("absent.json");
        let output = dir.path().join("events.bulk");

        let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, PipelineError::Parse(_)));
        assert!(!output.exists());
    }
}
