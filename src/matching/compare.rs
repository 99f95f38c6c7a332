use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::record::{ExpectedRecord, REGISTRATION_COLUMN};

/// One scraped attribute that does not agree with the expected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMismatch {
    /// Attribute name as scraped (uppercase).
    pub field: String,

    /// Value read from the valuation site.
    pub scraped: String,

    /// Value from the expected record, `None` when the record has no such
    /// column.
    pub expected: Option<String>,
}

/// Outcome of comparing scraped vehicle details against an expected record.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonReport {
    /// Attributes that agreed.
    pub matched: Vec<String>,

    /// Attributes that disagreed, or were absent from the expected record.
    pub mismatches: Vec<FieldMismatch>,
}

impl ComparisonReport {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare scraped vehicle details against the expected record of a paired
/// case.
///
/// All comparisons are case-insensitive. The registration column is
/// additionally compared space-insensitively: the sites and the datasets do
/// not agree on whether the plate carries its separating space, and that
/// difference is not a real mismatch. Whether any mismatch fails the run is
/// the caller's decision.
#[must_use]
pub fn compare_details(
    scraped: &BTreeMap<String, String>,
    expected: &ExpectedRecord,
) -> ComparisonReport {
    let mut report = ComparisonReport::default();

    for (field, scraped_value) in scraped {
        let Some(expected_value) = expected.get(field) else {
            report.mismatches.push(FieldMismatch {
                field: field.clone(),
                scraped: scraped_value.clone(),
                expected: None,
            });
            continue;
        };

        let agrees = if field == REGISTRATION_COLUMN {
            expected_value
                .replace(' ', "")
                .eq_ignore_ascii_case(&scraped_value.replace(' ', ""))
        } else {
            expected_value.eq_ignore_ascii_case(scraped_value)
        };

        if agrees {
            report.matched.push(field.clone());
        } else {
            report.mismatches.push(FieldMismatch {
                field: field.clone(),
                scraped: scraped_value.clone(),
                expected: Some(expected_value.to_string()),
            });
        }
    }

    report
}
