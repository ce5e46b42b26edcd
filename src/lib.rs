//! # Quakeload - GeoJSON to Elasticsearch bulk conversion
//!
//! Quakeload converts earthquake event feeds (one GeoJSON feature per line,
//! as published by USGS-style catalogs) into the newline-delimited payload
//! the Elasticsearch bulk API ingests.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ GeoJSON file│────▶│   Parser    │────▶│   Mapper    │────▶│ Bulk payload│
//! │ (JSON lines)│     │ (per line)  │     │  (flatten)  │     │   (NDJSON)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quakeload::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let report = convert_file(
//!         Path::new("events.json"),
//!         Path::new("events.bulk"),
//!         &ConvertOptions::default(),
//!     ).unwrap();
//!     println!("Converted {} events", report.features);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Wire shapes (IndexAction, EventDocument, GeoPoint)
//! - [`parser`] - JSON lines parsing
//! - [`transform`] - Feature mapping and the conversion pipeline
//! - [`writer`] - Payload serialization and atomic file output

// Core modules
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    MapResult,
    ParseError,
    ParseResult,
    PipelineError,
    PipelineResult,
    StructuralError,
    WriteError,
    WriteResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    BulkPair,
    EventDocument,
    GeoPoint,
    IndexAction,
    IndexTarget,
    DEFAULT_INDEX,
};

// =============================================================================
// Re-exports - Parsing
// =============================================================================

pub use parser::{parse_file, parse_line, parse_reader, parse_str};

// =============================================================================
// Re-exports - Mapper
// =============================================================================

pub use transform::map_feature;

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    check_str,
    convert_file,
    convert_str,
    transform_records,
    CheckReport,
    ConvertOptions,
    ConvertReport,
};

// =============================================================================
// Re-exports - Writer
// =============================================================================

pub use writer::{bulk_to_string, write_bulk_file};
