//! Error types for the Quakeload conversion pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ParseError`] - JSON Lines framing errors
//! - [`StructuralError`] - required-field errors on a single feature
//! - [`WriteError`] - bulk serialization and output errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.
//!
//! The split between [`ParseError`] and [`StructuralError`] mirrors the
//! two failure classes of the input contract: a line that is not valid
//! JSON at all, versus a well-formed JSON value that is not a usable
//! feature. Absent `properties` keys are neither - they become explicit
//! nulls in the output document.

use thiserror::Error;

// =============================================================================
// Parse Errors (JSON Lines framing)
// =============================================================================

/// Errors while reading and framing the JSON Lines input.
///
/// Line numbers are 1-based positions in the input file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A line contained only whitespace. Blank lines are not part of
    /// the JSON Lines framing and abort the run.
    #[error("Line {line}: blank line (every line must hold one JSON object)")]
    BlankLine { line: usize },

    /// A line was not a complete, valid JSON value.
    #[error("Line {line}: invalid JSON: {message}")]
    InvalidJson { line: usize, message: String },
}

// =============================================================================
// Structural Errors (required-field access on one feature)
// =============================================================================

/// Errors raised when a feature is missing one of the fields the mapper
/// accesses unconditionally, or holds it with the wrong JSON type.
///
/// These are position-free; the pipeline attaches the input line number
/// when it wraps them into [`PipelineError::Structural`].
#[derive(Debug, Error, PartialEq)]
pub enum StructuralError {
    /// The parsed line is not a JSON object.
    #[error("feature is not a JSON object")]
    NotAnObject,

    /// A required member (`id`, `properties`, `geometry`,
    /// `geometry.coordinates`) is absent.
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    /// A required member holds a value of the wrong JSON type.
    #[error("field '{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// `geometry.coordinates` holds fewer than the three elements
    /// `[longitude, latitude, depth]`.
    #[error("geometry.coordinates has {0} element(s), expected 3")]
    CoordinateCount(usize),

    /// A coordinate element in positions 0-2 is not a number.
    #[error("geometry.coordinates[{0}] is not a number")]
    NonNumericCoordinate(usize),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while serializing the bulk stream or writing the output file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write or rename the output file.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by
/// [`crate::transform::pipeline::convert_file`] and friends. It wraps
/// all lower-level errors and attaches input positions where the lower
/// layer has none.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input framing error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// A feature failed required-field access. `line` is the 1-based
    /// input line the feature was read from.
    #[error("Line {line}: {source}")]
    Structural {
        line: usize,
        source: StructuralError,
    },

    /// Output serialization or file write error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for input parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for the feature mapper.
pub type MapResult<T> = Result<T, StructuralError>;

/// Result type for bulk output.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
