use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the price table from a CSV file as raw string rows.
///
/// The first row is the location header and is consumed later by the
/// reshaper, so the reader treats every row as data. Width checks are
/// also deferred to the reshaper, hence the flexible reader.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file '{}'", path.display()))?;
    read_table_from_reader(file)
}

/// Read raw string rows from any reader (used by tests).
pub fn read_table_from_reader<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("Failed to parse CSV record")?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(rows)
}
