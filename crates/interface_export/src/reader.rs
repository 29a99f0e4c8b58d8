//! Raw record ingestion.

use std::fs;
use std::path::Path;

use domain_resubmission::RawRecord;

use crate::error::ExportError;

/// Reads a JSON array of raw records from disk.
///
/// Records are kept loosely typed here; canonicalization and validation
/// happen inside the pipeline so a malformed row rejects that row, not
/// the whole file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, ExportError> {
    let text = fs::read_to_string(path)?;
    let records = serde_json::from_str(&text)?;
    Ok(records)
}
