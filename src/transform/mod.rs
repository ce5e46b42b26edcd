//! Transformation module.
//!
//! This module handles GeoJSON to bulk transformation:
//! - Mapper: One feature to one action/document pair
//! - Pipeline: Batch conversion over whole inputs

pub mod mapper;
pub mod pipeline;

pub use mapper::map_feature;
pub use pipeline::*;
