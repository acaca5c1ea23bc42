//! CSV batch source
//!
//! Reads the identifier and serialized-record columns from a CSV file with a
//! header row. Column positions are resolved by name.

use crate::config::BatchConfig;
use crate::domain::context::ResultExt;
use crate::domain::{RecordId, RedactorError, Result};
use std::path::Path;

/// One row of the batch source
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// Record identifier, copied verbatim to the output
    pub record_id: RecordId,

    /// Serialized record as read from the source cell
    pub data: String,
}

impl SourceRow {
    /// Create a new source row
    pub fn new(record_id: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            record_id: RecordId::new(record_id),
            data: data.into(),
        }
    }
}

/// Reads every row of the source file.
///
/// Short rows are tolerated: a missing cell reads as an empty string, which
/// the engine passes through as undecodable.
///
/// # Errors
///
/// Returns [`RedactorError::Input`] if the file does not exist or a configured
/// column is absent from the header, and [`RedactorError::Csv`] on malformed
/// CSV.
pub fn read_source(path: &Path, config: &BatchConfig) -> Result<Vec<SourceRow>> {
    if !path.exists() {
        return Err(RedactorError::Input(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .clone();
    let id_idx = column_index(&headers, &config.id_column, path)?;
    let data_idx = column_index(&headers, &config.data_column, path)?;

    let mut rows = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read data row {}", line + 1))?;
        rows.push(SourceRow::new(
            record.get(id_idx).unwrap_or_default(),
            record.get(data_idx).unwrap_or_default(),
        ));
    }

    tracing::debug!(
        input = %path.display(),
        rows = rows.len(),
        "Read batch source"
    );

    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers.iter().position(|h| h == column).ok_or_else(|| {
        RedactorError::Input(format!(
            "Column '{}' not found in {} (available: {})",
            column,
            path.display(),
            headers.iter().collect::<Vec<_>>().join(", ")
        ))
    })
}
