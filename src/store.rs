//! CSV persistence: full read, in-memory transform, full rewrite.
//!
//! There is no append path and no concurrent writer; the file is the sole
//! persisted state and is always rewritten wholesale.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("csv file not found: {0}")]
    NotFound(String),
    #[error("row {row} has {found} columns, header has {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("read csv: {0}")]
    Read(#[source] csv::Error),
    #[error("write csv: {0}")]
    Write(#[source] csv::Error),
    #[error("flush csv: {0}")]
    Flush(#[source] std::io::Error),
}

/// A whole tabular file: one header plus data rows in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read the whole file. Fails with [`StoreError::NotFound`] when the file
/// is missing and [`StoreError::MalformedRow`] when a row's column count
/// differs from the header's.
pub fn read_all(path: &Path) -> Result<Table, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(StoreError::Read)?;

    let mut header = Vec::new();
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(StoreError::Read)?;
        let fields: Vec<String> = record.iter().map(str::to_owned).collect();
        if index == 0 {
            header = fields;
            continue;
        }
        if fields.len() != header.len() {
            return Err(StoreError::MalformedRow {
                row: index + 1,
                expected: header.len(),
                found: fields.len(),
            });
        }
        rows.push(fields);
    }

    Ok(Table { header, rows })
}

/// Write the header, then every row in its original order, overwriting
/// whatever is at `path`.
pub fn write_all(path: &Path, table: &Table) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path).map_err(StoreError::Write)?;

    writer.write_record(&table.header).map_err(StoreError::Write)?;
    for row in &table.rows {
        writer.write_record(row).map_err(StoreError::Write)?;
    }
    writer.flush().map_err(StoreError::Flush)?;

    Ok(())
}
