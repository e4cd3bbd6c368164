//! CSV batch input and output
//!
//! The CSV surface accepts the same column names as [`crate::types::RawRecord`];
//! count columns stay strings here so a garbage cell drops one row during
//! cleaning instead of failing the whole upload.


use crate::error::Result;
use crate::types::RawRecord;
use std::path::Path;
use tracing::warn;

/// Read a raw-record batch from CSV. Rows that do not deserialize at all
/// (e.g. wrong column count) are excluded, matching the pipeline's
/// drop-by-omission policy.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut records = Vec::new();
    for (row_idx, row) in reader.deserialize::<RawRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => warn!(row = row_idx + 1, error = %e, "skipping malformed CSV row"),
        }
    }
    Ok(records)
}

/// Write a raw-record batch to CSV (used by the `fetch` command to build
/// offline training sets).
pub fn write_csv(path: impl AsRef<Path>, records: &[RawRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
