//! CSV report export.
//!
//! Thin wrapper over the `csv` crate: header row with the fixed column
//! labels, then one row per surviving record. Rejected records never get
//! here; the batch layer drops them before aggregation.

use crate::record::{ResultRecord, COLUMNS};
use std::path::Path;

/// Write the report to `path`, creating parent directories as needed.
/// Returns the number of data rows written.
pub fn write_csv(path: &Path, records: &[ResultRecord]) -> Result<usize, ReportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(ReportError::Io)?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(ReportError::Csv)?;
    writer.write_record(COLUMNS).map_err(ReportError::Csv)?;
    for rec in records {
        writer.write_record(rec.csv_row()).map_err(ReportError::Csv)?;
    }
    writer.flush().map_err(ReportError::Io)?;
    Ok(records.len())
}

#[derive(Debug)]
pub enum ReportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "I/O error writing report: {e}"),
            ReportError::Csv(e) => write!(f, "CSV error writing report: {e}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            ReportError::Csv(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::build_record;
    use tempfile::TempDir;

    #[test]
    fn test_header_labels_exact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.csv");
        write_csv(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.trim_end(),
            "molecule,force_field,basis,comp_method,bond_length (Å),\
             heat_of_formation (kcal/mol),Total Energy (Hartrees),Run_Time (s),Completion"
        );
    }

    #[test]
    fn test_rows_and_sentinels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("summary.csv");

        let rec = build_record("Water_FF1_631G_HF.log", "TOTAL ENERGY =  -76.01\n");
        let written = write_csv(&path, &[rec]).unwrap();
        assert_eq!(written, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        let data_line = contents.lines().nth(1).unwrap();
        assert_eq!(data_line, "Water,FF1,631G,HF,NA,NA,-76.01,NA,Incomplete");
    }
}
