//! # Record Loader
//!
//! Reads annotation record dumps produced by an external bytecode reader.
//!
//! The dump is a JSON array of records:
//!
//! ```json
//! [
//!   {
//!     "kind": "Lio/swagger/v3/oas/annotations/Operation;",
//!     "fields": { "operationId": { "scalar": "getUser" } }
//!   }
//! ]
//! ```

use crate::annotation::AnnotationRecord;
use crate::error::AppResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses a JSON array of annotation records.
pub fn parse_annotation_records(json: &str) -> AppResult<Vec<AnnotationRecord>> {
    let records: Vec<AnnotationRecord> = serde_json::from_str(json)?;
    debug!("parsed {} annotation records", records.len());
    Ok(records)
}

/// Reads and parses a JSON record dump from disk.
pub fn read_annotation_records(path: impl AsRef<Path>) -> AppResult<Vec<AnnotationRecord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("reading annotation records from {}", path.display());
    parse_annotation_records(&content)
}
