//! Feature-to-bulk mapping.
//!
//! Maps one parsed GeoJSON feature to its bulk output pair: the index
//! action naming the destination and document id, and the flattened
//! event document. The mapping is pure - no I/O, no mutation of the
//! input.
//!
//! Two access modes are deliberately distinct:
//!
//! - required access ([`require`]) for `id`, `properties`, `geometry`
//!   and `geometry.coordinates`, which fails loudly, and
//! - permissive access ([`get_or_null`]) for everything inside
//!   `properties`, where an absent key becomes an explicit `null` in
//!   the output document.

use serde_json::{Map, Number, Value};

use crate::error::{MapResult, StructuralError};
use crate::models::{BulkPair, EventDocument, GeoPoint, IndexAction};

/// Required-field access: absence is a structural failure.
fn require<'a>(obj: &'a Map<String, Value>, field: &'static str) -> MapResult<&'a Value> {
    obj.get(field).ok_or(StructuralError::MissingField(field))
}

/// Permissive lookup over `properties`: an absent key yields an
/// explicit null, never an error.
fn get_or_null(properties: &Map<String, Value>, field: &str) -> Value {
    properties.get(field).cloned().unwrap_or(Value::Null)
}

/// Pull one coordinate element, insisting it is a number.
fn coordinate(coordinates: &[Value], index: usize) -> MapResult<Number> {
    match coordinates.get(index) {
        Some(Value::Number(n)) => Ok(n.clone()),
        _ => Err(StructuralError::NonNumericCoordinate(index)),
    }
}

/// Map one feature to its bulk pair.
///
/// # Arguments
/// * `feature` - one parsed input line
/// * `index` - destination index name for the action line
///
/// # Errors
/// Returns a [`StructuralError`] when the feature is not an object,
/// when `id`, `properties`, `geometry` or `geometry.coordinates` is
/// missing or has the wrong type, or when the first three coordinate
/// elements are not numbers. Elements past index 2 are ignored.
pub fn map_feature(feature: &Value, index: &str) -> MapResult<BulkPair> {
    let feature = feature.as_object().ok_or(StructuralError::NotAnObject)?;

    let id = require(feature, "id")?.clone();

    let properties = require(feature, "properties")?
        .as_object()
        .ok_or(StructuralError::WrongType {
            field: "properties",
            expected: "an object",
        })?;

    let geometry = require(feature, "geometry")?
        .as_object()
        .ok_or(StructuralError::WrongType {
            field: "geometry",
            expected: "an object",
        })?;

    let coordinates = geometry
        .get("coordinates")
        .ok_or(StructuralError::MissingField("geometry.coordinates"))?
        .as_array()
        .ok_or(StructuralError::WrongType {
            field: "geometry.coordinates",
            expected: "an array",
        })?;

    if coordinates.len() < 3 {
        return Err(StructuralError::CoordinateCount(coordinates.len()));
    }

    // GeoJSON orders coordinates [lon, lat, depth].
    let lon = coordinate(coordinates, 0)?;
    let lat = coordinate(coordinates, 1)?;
    let depth = coordinate(coordinates, 2)?;

    let document = EventDocument {
        mag: get_or_null(properties, "mag"),
        place: get_or_null(properties, "place"),
        time: get_or_null(properties, "time"),
        updated: get_or_null(properties, "updated"),
        tz: get_or_null(properties, "tz"),
        url: get_or_null(properties, "url"),
        detail: get_or_null(properties, "detail"),
        felt: get_or_null(properties, "felt"),
        cdi: get_or_null(properties, "cdi"),
        mmi: get_or_null(properties, "mmi"),
        alert: get_or_null(properties, "alert"),
        status: get_or_null(properties, "status"),
        tsunami: get_or_null(properties, "tsunami"),
        sig: get_or_null(properties, "sig"),
        net: get_or_null(properties, "net"),
        code: get_or_null(properties, "code"),
        ids: get_or_null(properties, "ids"),
        sources: get_or_null(properties, "sources"),
        types: get_or_null(properties, "types"),
        nst: get_or_null(properties, "nst"),
        dmin: get_or_null(properties, "dmin"),
        rms: get_or_null(properties, "rms"),
        gap: get_or_null(properties, "gap"),
        mag_type: get_or_null(properties, "magType"),
        event_type: get_or_null(properties, "type"),
        location: GeoPoint { lat, lon },
        depth,
    };

    Ok(BulkPair {
        action: IndexAction::new(index, id),
        document,
    })
}
