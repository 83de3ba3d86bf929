//! CSV reading for the holdings input file.
//!
//! Reads the input into an untyped table of strings. All normalization and
//! filtering happens in the row validator; this module only deals with the
//! tabular structure.

use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::errors::{IngestError, Result};

/// Raw tabular input: trimmed header names plus string-valued data rows,
/// each normalized to the header width.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads a CSV file with a header row into a [`RawTable`].
///
/// Fails with [`IngestError::Unreadable`] when the file is missing or not
/// parsable as tabular data. A header with zero data rows is valid. Rows
/// whose cells are all empty are preserved; the validator counts them as
/// discards.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let content = std::fs::read(path).map_err(|e| IngestError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_table(&content, path)
}

fn parse_table(content: &[u8], path: &Path) -> Result<RawTable> {
    let unreadable = |message: String| IngestError::Unreadable {
        path: path.display().to_string(),
        message,
    };

    // Skip a UTF-8 BOM (EF BB BF) if present
    let content =
        if content.len() >= 3 && content[0] == 0xEF && content[1] == 0xBB && content[2] == 0xBF {
            &content[3..]
        } else {
            content
        };

    let mut reader = ReaderBuilder::new()
        .has_headers(false) // We handle headers manually for more control
        .flexible(true) // Allow varying number of fields
        .from_reader(content);

    let mut records: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| unreadable(e.to_string()))?;
        records.push(record.iter().map(|s| s.to_string()).collect());
    }

    let mut records = records.into_iter();
    let headers: Vec<String> = match records.next() {
        Some(row) => row.iter().map(|h| h.trim().to_string()).collect(),
        None => return Err(unreadable("file contains no header row".to_string()).into()),
    };

    // Normalize row lengths to match the header count
    let header_count = headers.len();
    let rows: Vec<Vec<String>> = records
        .map(|mut row| {
            if row.len() < header_count {
                row.resize(header_count, String::new());
            } else if row.len() > header_count {
                row.truncate(header_count);
            }
            row
        })
        .collect();

    debug!("Read {} data row(s) from {}", rows.len(), path.display());

    Ok(RawTable { headers, rows })
}
