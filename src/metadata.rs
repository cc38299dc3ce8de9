//! Experiment metadata resolution.
//!
//! Two tiers, tried in fixed order and never mixed within one record:
//!
//! 1. Filename convention: `<molecule>_<forceField>_<basisSet>_<method>.log`.
//!    All-or-nothing: anything other than exactly four non-empty segments
//!    fails the whole tier.
//! 2. Input echo fallback: the `INPUT CARD>!` line GAMESS echoes from the
//!    job input. The force field is not recorded there, so it is always
//!    reported as "Unknown".
//!
//! If both tiers fail, every field is unresolved and the record is still
//! emitted (with sentinel cells) downstream.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Echo line shape: `INPUT CARD>! <molecule> | <anything> | <method>/<basis>`.
/// Greedy middle so method/basis comes from after the *last* `|` on the line.
static INPUT_ECHO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)INPUT CARD>!\s*(.*?)\s*\|.*\|\s*(.*?)\s*$").unwrap());

/// Resolved (or unresolved) experiment metadata for one log file.
///
/// Either all four fields are `Some` (one tier succeeded) or all four are
/// `None`; partially resolved metadata never escapes this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub molecule: Option<String>,
    pub force_field: Option<String>,
    pub basis: Option<String>,
    pub method: Option<String>,
}

impl Metadata {
    fn unresolved() -> Self {
        Self {
            molecule: None,
            force_field: None,
            basis: None,
            method: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.molecule.is_some()
    }

    /// Resolve metadata for one log file: filename tier first, input echo
    /// fallback only on total filename failure.
    pub fn resolve(file_name: &str, text: &str) -> Self {
        if let Some(meta) = Self::from_filename(file_name) {
            return meta;
        }
        Self::from_input_echo(text).unwrap_or_else(Self::unresolved)
    }

    /// Tier 1: split the file stem on `_` into exactly four non-empty
    /// segments, in order molecule / force field / basis set / method.
    fn from_filename(file_name: &str) -> Option<Self> {
        let stem = Path::new(file_name).file_stem()?.to_str()?;
        let parts: Vec<&str> = stem.split('_').map(str::trim).collect();
        match parts[..] {
            [molecule, force_field, basis, method]
                if !molecule.is_empty()
                    && !force_field.is_empty()
                    && !basis.is_empty()
                    && !method.is_empty() =>
            {
                Some(Self {
                    molecule: Some(molecule.to_string()),
                    force_field: Some(force_field.to_string()),
                    basis: Some(basis.to_string()),
                    method: Some(method.to_string()),
                })
            }
            _ => None,
        }
    }

    /// Tier 2: parse the input echo line. Molecule is the text before the
    /// first `|`; method/basis is the text after the last `|`, split on the
    /// first `/` (no `/` means the whole segment is the method and the basis
    /// is "Unknown").
    fn from_input_echo(text: &str) -> Option<Self> {
        let caps = INPUT_ECHO.captures(text)?;
        let molecule = caps[1].trim();
        let method_basis = caps[2].trim();
        if molecule.is_empty() || method_basis.is_empty() {
            return None;
        }
        let (method, basis) = match method_basis.split_once('/') {
            Some((method, basis)) => (method.trim(), basis.trim()),
            None => (method_basis, "Unknown"),
        };
        if method.is_empty() || basis.is_empty() {
            return None;
        }
        Some(Self {
            molecule: Some(molecule.to_string()),
            force_field: Some("Unknown".to_string()),
            basis: Some(basis.to_string()),
            method: Some(method.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(molecule: &str, ff: &str, basis: &str, method: &str) -> Metadata {
        Metadata {
            molecule: Some(molecule.to_string()),
            force_field: Some(ff.to_string()),
            basis: Some(basis.to_string()),
            method: Some(method.to_string()),
        }
    }

    #[test]
    fn test_filename_tier() {
        let meta = Metadata::resolve("Water_FF1_631G_HF.log", "");
        assert_eq!(meta, resolved("Water", "FF1", "631G", "HF"));
    }

    #[test]
    fn test_filename_tier_shadows_echo() {
        // Tier 1 succeeds, so the echo line (with different values) is ignored.
        let text = " INPUT CARD>! Methane | optimize | B3LYP/6-31G*\n";
        let meta = Metadata::resolve("Water_FF1_631G_HF.log", text);
        assert_eq!(meta, resolved("Water", "FF1", "631G", "HF"));
    }

    #[test]
    fn test_filename_too_few_segments_falls_back() {
        let text = " INPUT CARD>! Methane | ignored | B3LYP/6-31G*\n";
        let meta = Metadata::resolve("badname.log", text);
        assert_eq!(meta, resolved("Methane", "Unknown", "6-31G*", "B3LYP"));
    }

    #[test]
    fn test_filename_too_many_segments_falls_back() {
        let text = " INPUT CARD>! Ethanol | run 4 | MP2/cc-pVDZ\n";
        let meta = Metadata::resolve("a_b_c_d_e.log", text);
        assert_eq!(meta, resolved("Ethanol", "Unknown", "cc-pVDZ", "MP2"));
    }

    #[test]
    fn test_filename_empty_segment_fails_whole_tier() {
        // "Water__631G_HF" splits into four segments but one is empty; the
        // tier fails entirely rather than keeping the three good fields.
        let meta = Metadata::resolve("Water__631G_HF.log", "");
        assert_eq!(meta, Metadata::unresolved());
    }

    #[test]
    fn test_echo_without_slash_defaults_basis() {
        let text = " INPUT CARD>! Benzene | single point | AM1\n";
        let meta = Metadata::resolve("benzene.log", text);
        assert_eq!(meta, resolved("Benzene", "Unknown", "Unknown", "AM1"));
    }

    #[test]
    fn test_echo_takes_segment_after_last_pipe() {
        let text = " INPUT CARD>! Water | opt | extra notes | HF/6-31G\n";
        let meta = Metadata::resolve("water.log", text);
        assert_eq!(meta, resolved("Water", "Unknown", "6-31G", "HF"));
    }

    #[test]
    fn test_both_tiers_fail() {
        let meta = Metadata::resolve("badname.log", "no echo line in this log");
        assert_eq!(meta, Metadata::unresolved());
        assert!(!meta.is_resolved());
    }

    #[test]
    fn test_echo_single_pipe_is_not_enough() {
        // The echo shape needs two separators; one pipe leaves the
        // method/basis segment ambiguous, so the tier fails.
        let meta = Metadata::resolve("bad.log", " INPUT CARD>! Water | HF/6-31G\n");
        assert_eq!(meta, Metadata::unresolved());
    }
}
