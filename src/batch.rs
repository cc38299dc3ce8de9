//! Batch processing: discover log files, process each one in isolation,
//! collect the surviving records in a stable order.
//!
//! One bad file never aborts the run. Every discovered file resolves to a
//! `FileOutcome` (a record, a rejection, or a skip with a reason) and the
//! batch summary keeps the counts so "no data" and "processing error" stay
//! distinguishable without digging through console output.

use crate::classify::CompletionStatus;
use crate::record::{self, ResultRecord};
use std::path::{Path, PathBuf};

/// What happened to one discovered file.
#[derive(Debug)]
pub enum FileOutcome {
    /// A record that will appear in the report.
    Record(ResultRecord),
    /// Terminated normally but nothing extractable; dropped from the report.
    Rejected { file_name: String },
    /// Not processed at all (skip list, unreadable, bad file name).
    Skipped { file_name: String, reason: String },
}

/// Aggregate result of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub records: Vec<ResultRecord>,
    pub rejected: usize,
    pub skipped: usize,
}

/// Discover files matching `pattern` under `input_dir`, sorted by path so
/// the report order is reproducible regardless of discovery order.
pub fn discover(input_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
    let full_pattern = input_dir.join(pattern).to_string_lossy().into_owned();
    let mut files: Vec<PathBuf> = glob::glob(&full_pattern)?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable path during discovery");
                None
            }
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Process every discovered file and fold the outcomes into a summary.
pub fn run(files: &[PathBuf], skip_names: &[String]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for path in files {
        match process_file(path, skip_names) {
            FileOutcome::Record(rec) => {
                tracing::debug!(file = %rec.file_name, status = rec.status.label(), "record built");
                summary.records.push(rec);
            }
            FileOutcome::Rejected { file_name } => {
                tracing::info!(file = %file_name, "rejected: terminated normally but no extractable fields");
                summary.rejected += 1;
            }
            FileOutcome::Skipped { file_name, reason } => {
                tracing::warn!(file = %file_name, reason = %reason, "skipped");
                summary.skipped += 1;
            }
        }
    }
    summary
}

/// Process a single file into its outcome. All failure modes resolve locally;
/// this function never returns an error.
pub fn process_file(path: &Path, skip_names: &[String]) -> FileOutcome {
    let file_name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => {
            return FileOutcome::Skipped {
                file_name: path.display().to_string(),
                reason: "file name is not valid UTF-8".to_string(),
            }
        }
    };

    let lower = file_name.to_lowercase();
    if skip_names.iter().any(|s| s.to_lowercase() == lower) {
        return FileOutcome::Skipped {
            file_name,
            reason: "on the skip list".to_string(),
        };
    }

    // Lossy read: GAMESS logs occasionally carry stray non-UTF-8 bytes and
    // those must not cost us the whole file.
    let text = match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            return FileOutcome::Skipped {
                file_name,
                reason: format!("read failed: {e}"),
            }
        }
    };

    let rec = record::build_record(&file_name, &text);
    if !rec.metadata.is_resolved() {
        tracing::debug!(file = %file_name, "metadata unresolved by both tiers");
    }
    if rec.status == CompletionStatus::Rejected {
        FileOutcome::Rejected { file_name }
    } else {
        FileOutcome::Record(rec)
    }
}
