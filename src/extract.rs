//! Field extraction: locate scalar results inside raw GAMESS log text.
//!
//! Each extractor is a stateless function over the whole log body. A pattern
//! that does not match (or a capture that fails to parse as a float) yields
//! `None`, never an error. Extractors are independent of each other; the
//! order they run in does not matter.

use regex::Regex;
use std::sync::LazyLock;

/// First tabulated bond length after the internuclear distances header.
/// `(?s)` so the gap between the header and the first row can span lines.
static BOND_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)INTERNUCLEAR DISTANCES \(ANGS\.\).*?\n\s*\d+\s+[A-Z]+\s+([0-9]+\.\d+)\s+\*")
        .unwrap()
});

static HEAT_OF_FORMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HEAT OF FORMATION IS\s+(-?\d+\.\d+)").unwrap());

static TOTAL_ENERGY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TOTAL ENERGY\s+=\s+(-?\d+\.\d+)").unwrap());

static WALL_CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TOTAL WALL CLOCK TIME=\s+([0-9]+\.\d+)").unwrap());

/// First bond length from the `INTERNUCLEAR DISTANCES (ANGS.)` section, in
/// angstroms. Only the first row of the first section counts; later bond
/// lengths in the same table are ignored.
pub fn bond_length(text: &str) -> Option<f64> {
    first_capture(&BOND_LENGTH, text)
}

/// Heat of formation in kcal/mol, from the first `HEAT OF FORMATION IS` line.
pub fn heat_of_formation(text: &str) -> Option<f64> {
    first_capture(&HEAT_OF_FORMATION, text)
}

/// Total energy in Hartrees, from the first `TOTAL ENERGY =` line.
pub fn total_energy(text: &str) -> Option<f64> {
    first_capture(&TOTAL_ENERGY, text)
}

/// Elapsed run time in seconds. GAMESS prints a wall clock line at every
/// checkpoint, so the *last* occurrence is the total for the run.
pub fn run_time(text: &str) -> Option<f64> {
    WALL_CLOCK_TIME
        .captures_iter(text)
        .last()
        .and_then(|c| c[1].parse().ok())
}

fn first_capture(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text).and_then(|c| c[1].parse().ok())
}
