//! Bulk payload serialization and file output.
//!
//! The payload interleaves one action line and one document line per
//! feature, newline-joined with a single trailing newline. An empty
//! batch still produces the trailing newline, so the payload is never
//! the empty string.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{WriteError, WriteResult};
use crate::models::BulkPair;

/// Serialize action/document pairs into the bulk payload string.
pub fn bulk_to_string(pairs: &[BulkPair]) -> WriteResult<String> {
    let mut lines = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        lines.push(serde_json::to_string(&pair.action)?);
        lines.push(serde_json::to_string(&pair.document)?);
    }
    Ok(lines.join("\n") + "\n")
}

/// Write the bulk payload to `path`, all or nothing.
///
/// The payload goes to a temporary file in the destination directory
/// first and is renamed over `path` once complete. A failed run never
/// leaves a partial or empty destination file behind.
pub fn write_bulk_file(path: &Path, pairs: &[BulkPair]) -> WriteResult<()> {
    let payload = bulk_to_string(pairs)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(payload.as_bytes())?;
    tmp.persist(path).map_err(|e| WriteError::Io(e.error))?;

    Ok(())
}
