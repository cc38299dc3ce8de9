//! Run completion classification.
//!
//! GAMESS prints a literal termination banner when the host program exits
//! cleanly. Its presence, combined with which numeric fields extraction
//! recovered, decides the fate of the record:
//!
//! - banner absent → `Incomplete` (still reported; partial runs are useful
//!   for triage)
//! - banner present, at least one numeric result → `Completed`
//! - banner present, no numeric result at all → `Rejected` (dropped; the log
//!   is structurally unexpected and the row would be all sentinels)

use crate::record::ExtractedFields;

const TERMINATION_MARKER: &str = "EXECUTION OF GAMESS TERMINATED NORMALLY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Completed,
    Incomplete,
    Rejected,
}

impl CompletionStatus {
    /// Label written to the report's `Completion` column. `Rejected` rows
    /// never reach the report, so there is no label for them.
    pub fn label(&self) -> &'static str {
        match self {
            CompletionStatus::Completed => "Completed",
            CompletionStatus::Incomplete => "Incomplete",
            CompletionStatus::Rejected => "Rejected",
        }
    }
}

/// Classify one log given its raw text and the extraction results.
///
/// Run time deliberately does not count as a numeric result here: a crashed
/// run still prints wall clock lines, and a bare run time with no chemistry
/// is exactly the "nothing extractable" case `Rejected` exists for.
pub fn classify(text: &str, fields: &ExtractedFields) -> CompletionStatus {
    if !text.contains(TERMINATION_MARKER) {
        return CompletionStatus::Incomplete;
    }
    if fields.bond_length.is_some()
        || fields.heat_of_formation.is_some()
        || fields.total_energy.is_some()
    {
        CompletionStatus::Completed
    } else {
        CompletionStatus::Rejected
    }
}
