//! Domain models for the Quakeload conversion pipeline.
//!
//! This module contains the output-side data structures:
//!
//! - [`IndexAction`] - the bulk metadata line naming index and id
//! - [`EventDocument`] - the flattened earthquake document
//! - [`GeoPoint`] - Elasticsearch `geo_point` representation
//! - [`BulkPair`] - one feature's action/document pair
//!
//! All property fields are [`serde_json::Value`] so that input values
//! pass through verbatim, whatever their JSON type, and absent fields
//! serialize as explicit `null` rather than being omitted. Coordinates
//! are [`serde_json::Number`] for the same reason: an integer depth in
//! the input stays an integer in the output.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Index name used when the caller does not supply one.
pub const DEFAULT_INDEX: &str = "earthquakes";

// =============================================================================
// Index Action (bulk metadata line)
// =============================================================================

/// The metadata line of a bulk pair:
/// `{"index":{"_index":"earthquakes","_id":...}}`.
///
/// Identifies where the document line that follows should be written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexAction {
    /// The `index` operation; the only bulk operation this tool emits.
    pub index: IndexTarget,
}

/// Target coordinates of an index operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexTarget {
    /// Destination index (collection) name.
    #[serde(rename = "_index")]
    pub index: String,

    /// Document id, copied from the feature's `id` without
    /// transformation. String ids stay strings, numeric ids stay
    /// numeric; duplicates pass through for the store to arbitrate.
    #[serde(rename = "_id")]
    pub id: Value,
}

impl IndexAction {
    /// Create an index action for the given index name and document id.
    pub fn new(index: impl Into<String>, id: Value) -> Self {
        Self {
            index: IndexTarget {
                index: index.into(),
                id,
            },
        }
    }
}

// =============================================================================
// Geo Point
// =============================================================================

/// Elasticsearch `geo_point` object, built from the feature's
/// `geometry.coordinates` (GeoJSON orders them `[lon, lat, depth]`;
/// this struct holds them the way the index store expects).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    /// Latitude: `geometry.coordinates[1]`, copied exactly.
    pub lat: Number,
    /// Longitude: `geometry.coordinates[0]`, copied exactly.
    pub lon: Number,
}

// =============================================================================
// Event Document (bulk data line)
// =============================================================================

/// The flattened earthquake document emitted after each index action.
///
/// Field order here is serialization order, matching the upstream USGS
/// property order with the derived `location` and `depth` at the end.
/// Every field is always present in the output; properties absent from
/// the input appear as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventDocument {
    /// Magnitude of the event.
    pub mag: Value,
    /// Human-readable description of the location.
    pub place: Value,
    /// Origin time, epoch milliseconds.
    pub time: Value,
    /// Last update time, epoch milliseconds.
    pub updated: Value,
    /// Timezone offset from UTC, minutes.
    pub tz: Value,
    /// Link to the USGS event page.
    pub url: Value,
    /// Link to the GeoJSON detail feed.
    pub detail: Value,
    /// Number of "Did You Feel It?" reports.
    pub felt: Value,
    /// Reported intensity (community decimal intensity).
    pub cdi: Value,
    /// Estimated instrumental intensity.
    pub mmi: Value,
    /// PAGER alert level (green/yellow/orange/red).
    pub alert: Value,
    /// Review status (automatic/reviewed/deleted).
    pub status: Value,
    /// Whether the event occurred in an oceanic region (0/1).
    pub tsunami: Value,
    /// Significance score.
    pub sig: Value,
    /// Preferred contributor network.
    pub net: Value,
    /// Network-assigned event code.
    pub code: Value,
    /// All event ids, comma separated.
    pub ids: Value,
    /// All contributing networks, comma separated.
    pub sources: Value,
    /// Product types available for the event.
    pub types: Value,
    /// Number of stations used for the solution.
    pub nst: Value,
    /// Horizontal distance to the nearest station, degrees.
    pub dmin: Value,
    /// Root-mean-square travel time residual, seconds.
    pub rms: Value,
    /// Largest azimuthal gap between stations, degrees.
    pub gap: Value,
    /// Magnitude algorithm (e.g. `md`, `ml`, `mw`).
    #[serde(rename = "magType")]
    pub mag_type: Value,
    /// Event type (`properties.type` renamed; the key `type` itself
    /// never appears in the output).
    pub event_type: Value,
    /// Epicenter as an index-store geo point.
    pub location: GeoPoint,
    /// Depth in km: `geometry.coordinates[2]`, copied exactly.
    pub depth: Number,
}

// =============================================================================
// Bulk Pair
// =============================================================================

/// One feature's complete bulk output: the action line followed by the
/// document line, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkPair {
    /// Metadata line.
    pub action: IndexAction,
    /// Data line.
    pub document: EventDocument,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn null_document() -> EventDocument {
        EventDocument {
            mag: Value::Null,
            place: Value::Null,
            time: Value::Null,
            updated: Value::Null,
            tz: Value::Null,
            url: Value::Null,
            detail: Value::Null,
            felt: Value::Null,
            cdi: Value::Null,
            mmi: Value::Null,
            alert: Value::Null,
            status: Value::Null,
            tsunami: Value::Null,
            sig: Value::Null,
            net: Value::Null,
            code: Value::Null,
            ids: Value::Null,
            sources: Value::Null,
            types: Value::Null,
            nst: Value::Null,
            dmin: Value::Null,
            rms: Value::Null,
            gap: Value::Null,
            mag_type: Value::Null,
            event_type: Value::Null,
            location: GeoPoint {
                lat: Number::from_f64(37.4).unwrap(),
                lon: Number::from_f64(-122.1).unwrap(),
            },
            depth: Number::from_f64(10.5).unwrap(),
        }
    }

    #[test]
    fn test_index_action_serialization() {
        let action = IndexAction::new(DEFAULT_INDEX, json!("us1000abc"));
        let line = serde_json::to_string(&action).unwrap();
        assert_eq!(line, r#"{"index":{"_index":"earthquakes","_id":"us1000abc"}}"#);
    }

    #[test]
    fn test_index_action_numeric_id() {
        let action = IndexAction::new("quakes", json!(42));
        let line = serde_json::to_string(&action).unwrap();
        assert_eq!(line, r#"{"index":{"_index":"quakes","_id":42}}"#);
    }

    #[test]
    fn test_geo_point_serialization() {
        let point = GeoPoint {
            lat: Number::from_f64(37.4).unwrap(),
            lon: Number::from_f64(-122.1).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"lat":37.4,"lon":-122.1}"#
        );
    }

    #[test]
    fn test_document_absent_fields_serialize_as_null() {
        let line = serde_json::to_string(&null_document()).unwrap();
        assert!(line.contains(r#""mag":null"#));
        assert!(line.contains(r#""magType":null"#));
        assert!(line.contains(r#""event_type":null"#));
        // Every enumerated key is present even when the value is null.
        assert_eq!(line.matches("null").count(), 25);
    }

    #[test]
    fn test_document_key_order_is_declaration_order() {
        let line = serde_json::to_string(&null_document()).unwrap();
        assert!(line.starts_with(r#"{"mag":"#));
        assert!(line.ends_with(r#""location":{"lat":37.4,"lon":-122.1},"depth":10.5}"#));
        let mag_type = line.find(r#""magType""#).unwrap();
        let event_type = line.find(r#""event_type""#).unwrap();
        assert!(mag_type < event_type);
    }

    #[test]
    fn test_document_never_emits_a_type_key() {
        let mut doc = null_document();
        doc.event_type = json!("earthquake");
        let value: Value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("type").is_none());
        assert_eq!(value["event_type"], json!("earthquake"));
    }

    #[test]
    fn test_document_roundtrip() {
        let mut doc = null_document();
        doc.mag = json!(5.6);
        doc.place = json!("10km N of Test");
        let line = serde_json::to_string(&doc).unwrap();
        let back: EventDocument = serde_json::from_str(&line).unwrap();
        assert_eq!(back, doc);
    }
}
