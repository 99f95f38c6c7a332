use serde::Serialize;
use tracing::warn;

use crate::core::record::ExpectedRecord;
use crate::core::registration::Registration;

/// A verified (candidate, expected-record) association: the unit of work
/// handed to the valuation-site workflow.
///
/// Invariant: the candidate's normalized registration equals the record's
/// normalized `VARIANT_REG`.
#[derive(Debug, Clone, Serialize)]
pub struct PairedCase {
    pub registration: Registration,
    pub expected: ExpectedRecord,
}

/// Pair each extracted candidate with its expected record.
///
/// Matching is on the space-stripped, lowercased registration. Candidates
/// with no matching record are warned about and excluded; partial datasets
/// are normal while test data is being curated. When several records share
/// a registration the first in dataset order wins, so repeated runs pair
/// identically. Output order follows candidate order.
#[must_use]
pub fn pair(candidates: &[Registration], records: &[ExpectedRecord]) -> Vec<PairedCase> {
    let mut cases = Vec::new();

    for candidate in candidates {
        let key = candidate.key();
        let matched = records
            .iter()
            .find(|record| record.registration_key().as_deref() == Some(key.as_str()));

        match matched {
            Some(record) => cases.push(PairedCase {
                registration: candidate.clone(),
                expected: record.clone(),
            }),
            None => {
                warn!(
                    registration = %candidate,
                    "no expected record for extracted registration, it will be ignored"
                );
            }
        }
    }

    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(s: &str) -> Registration {
        Registration::parse(s).unwrap()
    }

    fn record(pairs: &[(&str, &str)]) -> ExpectedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pairs_across_spacing_difference() {
        let candidates = vec![reg("AB12CDE")];
        let records = vec![record(&[("VARIANT_REG", "AB12 CDE"), ("MAKE", "Ford")])];

        let cases = pair(&candidates, &records);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].registration.as_str(), "AB12CDE");
        assert_eq!(cases[0].expected.get("MAKE"), Some("Ford"));
    }

    #[test]
    fn test_unmatched_candidate_is_excluded_not_fatal() {
        let candidates = vec![reg("XY99 ZZZ")];
        let records = vec![record(&[("VARIANT_REG", "AB12CDE")])];

        let cases = pair(&candidates, &records);
        assert!(cases.is_empty());
    }

    #[test]
    fn test_duplicate_records_resolve_to_first_in_dataset_order() {
        let candidates = vec![reg("AB12CDE")];
        let records = vec![
            record(&[("VARIANT_REG", "AB12CDE"), ("MAKE", "Ford")]),
            record(&[("VARIANT_REG", "AB12CDE"), ("MAKE", "Kia")]),
        ];

        for _ in 0..3 {
            let cases = pair(&candidates, &records);
            assert_eq!(cases.len(), 1);
            assert_eq!(cases[0].expected.get("MAKE"), Some("Ford"));
        }
    }

    #[test]
    fn test_output_follows_candidate_order() {
        let candidates = vec![reg("XY34ZZZ"), reg("AB12CDE")];
        let records = vec![
            record(&[("VARIANT_REG", "AB12CDE")]),
            record(&[("VARIANT_REG", "XY34ZZZ")]),
        ];

        let cases = pair(&candidates, &records);
        assert_eq!(cases[0].registration.as_str(), "XY34ZZZ");
        assert_eq!(cases[1].registration.as_str(), "AB12CDE");
    }

    #[test]
    fn test_paired_case_invariant_holds() {
        let candidates = vec![reg("AB12 CDE"), reg("XY34ZZZ")];
        let records = vec![
            record(&[("VARIANT_REG", "XY34 ZZZ")]),
            record(&[("VARIANT_REG", "AB12CDE")]),
        ];

        for case in pair(&candidates, &records) {
            assert_eq!(
                Some(case.registration.key()),
                case.expected.registration_key()
            );
        }
    }
}
