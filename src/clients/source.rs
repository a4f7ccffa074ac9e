//! Shared reader setup for the headerless, comma-delimited record files.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;

/// Opens `path` for reading rows without a header line.
///
/// Rows may have any number of fields; callers check the count so a short
/// row is reported against its line number.
pub(crate) fn open_records(path: &Path) -> std::io::Result<csv::Reader<File>> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file))
}

/// 1-based line number of a record, or 0 if the reader did not track it.
pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |position| position.line())
}
