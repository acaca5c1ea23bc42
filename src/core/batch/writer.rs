//! CSV batch sink

use crate::anonymization::ProcessedRecord;
use crate::domain::context::ResultExt;
use crate::domain::{RecordId, RedactorError, Result};
use std::path::Path;

/// Output header, in column order
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Textual form of the PII flag in the output
pub fn pii_flag(pii_found: bool) -> &'static str {
    if pii_found {
        "True"
    } else {
        "False"
    }
}

/// Writes processed rows to `path`, replacing any existing file.
///
/// Returns the number of data rows written.
pub fn write_output<'a, I>(path: &Path, rows: I) -> Result<usize>
where
    I: IntoIterator<Item = (&'a RecordId, &'a ProcessedRecord)>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            RedactorError::Output(format!(
                "Failed to create output directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        RedactorError::Output(format!("Failed to open {}: {}", path.display(), e))
    })?;

    writer.write_record(OUTPUT_HEADER)?;

    let mut written = 0;
    for (record_id, processed) in rows {
        writer.write_record([
            record_id.as_str(),
            processed.output.as_str(),
            pii_flag(processed.pii_found),
        ])
        .with_context(|| format!("Failed to write row for record {}", record_id))?;
        written += 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    tracing::debug!(output = %path.display(), rows = written, "Wrote batch output");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::RedactionEngine;

    #[test]
    fn test_pii_flag() {
        assert_eq!(pii_flag(true), "True");
        assert_eq!(pii_flag(false), "False");
    }

    #[test]
    fn test_write_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        let engine = RedactionEngine::new();

        let rows = vec![
            (RecordId::new("1"), engine.redact_raw(r#"{"phone":"9876543210"}"#)),
            (RecordId::new("2"), engine.redact_raw("not json")),
        ];

        let written = write_output(&path, rows.iter().map(|(id, p)| (id, p))).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "record_id,redacted_data_json,is_pii");
        assert_eq!(lines[1], r#"1,"{""phone"": ""XXXXXX3210""}",True"#);
        assert_eq!(lines[2], "2,not json,False");
    }
}
