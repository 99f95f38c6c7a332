use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::core::record::ExpectedRecord;
use crate::core::registration::Registration;

/// Registrations present on only one side of the candidate/dataset
/// comparison, space-stripped (case as it appears in the sources).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DriftReport {
    /// Extracted from text, absent from the expected dataset.
    pub extracted_only: BTreeSet<String>,

    /// In the expected dataset, never extracted from text.
    pub expected_only: BTreeSet<String>,
}

impl DriftReport {
    /// The full symmetric difference: registrations on exactly one side.
    #[must_use]
    pub fn symmetric_difference(&self) -> BTreeSet<String> {
        self.extracted_only
            .union(&self.expected_only)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extracted_only.is_empty() && self.expected_only.is_empty()
    }
}

/// Compute the drift between extracted candidates and the expected dataset.
///
/// Both sides are compared space-stripped. The report is always logged when
/// non-empty and never halts anything downstream; pairing proceeds on the
/// intersection regardless.
#[must_use]
pub fn reconcile(candidates: &[Registration], records: &[ExpectedRecord]) -> DriftReport {
    let extracted: BTreeSet<String> = candidates.iter().map(Registration::compact).collect();
    let expected: BTreeSet<String> = records
        .iter()
        .filter_map(ExpectedRecord::registration)
        .map(|reg| reg.replace(' ', ""))
        .collect();

    let report = DriftReport {
        extracted_only: extracted.difference(&expected).cloned().collect(),
        expected_only: expected.difference(&extracted).cloned().collect(),
    };

    if !report.is_empty() {
        warn!(
            extracted_only = ?report.extracted_only,
            expected_only = ?report.expected_only,
            "extracted and expected registration sets differ"
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(s: &str) -> Registration {
        Registration::parse(s).unwrap()
    }

    fn record(registration: &str) -> ExpectedRecord {
        [("VARIANT_REG".to_string(), registration.to_string())]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_agreeing_sets_have_no_drift() {
        let candidates = vec![reg("AB12 CDE"), reg("XY34ZZZ")];
        let records = vec![record("AB12CDE"), record("XY34 ZZZ")];

        let report = reconcile(&candidates, &records);
        assert!(report.is_empty());
        assert!(report.symmetric_difference().is_empty());
    }

    #[test]
    fn test_drift_is_split_by_side() {
        let candidates = vec![reg("AB12 CDE"), reg("XY34ZZZ")];
        let records = vec![record("AB12CDE"), record("KL56MNO")];

        let report = reconcile(&candidates, &records);
        assert_eq!(
            report.extracted_only,
            BTreeSet::from(["XY34ZZZ".to_string()])
        );
        assert_eq!(report.expected_only, BTreeSet::from(["KL56MNO".to_string()]));
        assert_eq!(report.symmetric_difference().len(), 2);
    }

    #[test]
    fn test_symmetric_difference_commutes() {
        let candidates = vec![reg("AB12CDE")];
        let records = vec![record("XY34ZZZ")];

        let forward = reconcile(&candidates, &records);

        // Swap roles: candidates built from the record side and vice versa
        let swapped_candidates = vec![reg("XY34ZZZ")];
        let swapped_records = vec![record("AB12CDE")];
        let backward = reconcile(&swapped_candidates, &swapped_records);

        assert_eq!(
            forward.symmetric_difference(),
            backward.symmetric_difference()
        );
    }

    #[test]
    fn test_records_without_registration_are_ignored() {
        let candidates = vec![reg("AB12CDE")];
        let no_reg: ExpectedRecord = [("MAKE".to_string(), "Ford".to_string())]
            .into_iter()
            .collect();
        let records = vec![record("AB12CDE"), no_reg];

        let report = reconcile(&candidates, &records);
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_both_sides() {
        let report = reconcile(&[], &[]);
        assert!(report.is_empty());
    }
}
