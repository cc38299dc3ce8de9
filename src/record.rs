//! Record assembly: one normalized `ResultRecord` per log file.
//!
//! `build_record` is the pure combination step: run every extractor once,
//! resolve metadata once, classify once. Records are immutable after
//! assembly; rendering fills every absent cell with the `NA` sentinel so the
//! report never has an empty cell.

use crate::classify::{self, CompletionStatus};
use crate::extract;
use crate::metadata::Metadata;

/// Sentinel for any cell whose value could not be determined.
pub const NA: &str = "NA";

/// Report column labels, in output order.
pub const COLUMNS: [&str; 9] = [
    "molecule",
    "force_field",
    "basis",
    "comp_method",
    "bond_length (Å)",
    "heat_of_formation (kcal/mol)",
    "Total Energy (Hartrees)",
    "Run_Time (s)",
    "Completion",
];

/// The four scalar results extraction can recover from one log. Each is
/// independently present or absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractedFields {
    pub bond_length: Option<f64>,
    pub heat_of_formation: Option<f64>,
    pub total_energy: Option<f64>,
    pub run_time: Option<f64>,
}

impl ExtractedFields {
    pub fn extract(text: &str) -> Self {
        Self {
            bond_length: extract::bond_length(text),
            heat_of_formation: extract::heat_of_formation(text),
            total_energy: extract::total_energy(text),
            run_time: extract::run_time(text),
        }
    }
}

/// One summarized run: metadata, extracted fields, completion status.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub file_name: String,
    pub metadata: Metadata,
    pub fields: ExtractedFields,
    pub status: CompletionStatus,
}

impl ResultRecord {
    /// Render the record as one report row, in [`COLUMNS`] order, with `NA`
    /// in every absent cell.
    pub fn csv_row(&self) -> Vec<String> {
        vec![
            string_cell(&self.metadata.molecule),
            string_cell(&self.metadata.force_field),
            string_cell(&self.metadata.basis),
            string_cell(&self.metadata.method),
            float_cell(self.fields.bond_length),
            float_cell(self.fields.heat_of_formation),
            float_cell(self.fields.total_energy),
            float_cell(self.fields.run_time),
            self.status.label().to_string(),
        ]
    }
}

fn string_cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NA.to_string())
}

fn float_cell(value: Option<f64>) -> String {
    value.map_or_else(|| NA.to_string(), |v| v.to_string())
}

/// Build the record for one log file: extract, resolve, classify, assemble.
pub fn build_record(file_name: &str, text: &str) -> ResultRecord {
    let fields = ExtractedFields::extract(text);
    let metadata = Metadata::resolve(file_name, text);
    let status = classify::classify(text, &fields);
    ResultRecord {
        file_name: file_name.to_string(),
        metadata,
        fields,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_LOG: &str = "\
 INPUT CARD>! Water | optimize | HF/6-31G
 INTERNUCLEAR DISTANCES (ANGS.)

      1 O     0.9472 *
 FINAL   HEAT OF FORMATION IS     -57.7990 KCAL/MOL
               TOTAL ENERGY =     -76.0107465155
 TOTAL WALL CLOCK TIME=        5.1 SECONDS
 TOTAL WALL CLOCK TIME=       12.3 SECONDS
 EXECUTION OF GAMESS TERMINATED NORMALLY
";

    #[test]
    fn test_build_record_complete() {
        let rec = build_record("Water_FF1_631G_HF.log", COMPLETE_LOG);
        assert_eq!(rec.status, CompletionStatus::Completed);
        assert_eq!(rec.fields.bond_length, Some(0.9472));
        assert_eq!(rec.fields.heat_of_formation, Some(-57.799));
        assert_eq!(rec.fields.total_energy, Some(-76.0107465155));
        assert_eq!(rec.fields.run_time, Some(12.3));
        assert_eq!(rec.metadata.molecule.as_deref(), Some("Water"));
        assert_eq!(rec.metadata.force_field.as_deref(), Some("FF1"));
    }

    #[test]
    fn test_build_record_is_idempotent() {
        let a = build_record("Water_FF1_631G_HF.log", COMPLETE_LOG);
        let b = build_record("Water_FF1_631G_HF.log", COMPLETE_LOG);
        assert_eq!(a, b);
    }

    #[test]
    fn test_incomplete_run_keeps_partial_fields() {
        let text = "               TOTAL ENERGY =     -76.0107465155\n";
        let rec = build_record("Water_FF1_631G_HF.log", text);
        assert_eq!(rec.status, CompletionStatus::Incomplete);
        assert_eq!(rec.fields.total_energy, Some(-76.0107465155));
        assert_eq!(rec.fields.bond_length, None);
    }

    #[test]
    fn test_csv_row_fills_absent_cells_with_na() {
        let text = "               TOTAL ENERGY =     -76.5\n";
        let rec = build_record("badname.log", text);
        let row = rec.csv_row();
        assert_eq!(row.len(), COLUMNS.len());
        // Unresolved metadata and absent fields all render as the sentinel.
        assert_eq!(row[0], NA);
        assert_eq!(row[4], NA);
        assert_eq!(row[6], "-76.5");
        assert_eq!(row[8], "Incomplete");
    }

    #[test]
    fn test_fallback_metadata_in_row() {
        let rec = build_record("badname.log", COMPLETE_LOG);
        let row = rec.csv_row();
        assert_eq!(row[0], "Water");
        assert_eq!(row[1], "Unknown");
        assert_eq!(row[2], "6-31G");
        assert_eq!(row[3], "HF");
    }
}
