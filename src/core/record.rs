use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column holding the vehicle registration in the expected dataset.
pub const REGISTRATION_COLUMN: &str = "VARIANT_REG";

/// One row of the expected-results dataset.
///
/// Keys are the dataset's column headers, case-sensitive, exactly as they
/// appear in the file (`VARIANT_REG`, `MAKE`, `MODEL`, ...). Every record is
/// expected to carry a [`REGISTRATION_COLUMN`] value; rows without one can
/// never be paired with an extracted registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedRecord {
    fields: BTreeMap<String, String>,
}

impl ExpectedRecord {
    /// Look up a field by its column header.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// The record's registration, if the [`REGISTRATION_COLUMN`] is present.
    #[must_use]
    pub fn registration(&self) -> Option<&str> {
        self.get(REGISTRATION_COLUMN)
    }

    /// Space-stripped, lowercased registration key for candidate lookup.
    #[must_use]
    pub fn registration_key(&self) -> Option<String> {
        self.registration()
            .map(|reg| reg.replace(' ', "").to_ascii_lowercase())
    }

    /// Iterate over `(column, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for ExpectedRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> ExpectedRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let rec = record(&[("MAKE", "Ford")]);
        assert_eq!(rec.get("MAKE"), Some("Ford"));
        assert_eq!(rec.get("make"), None);
    }

    #[test]
    fn test_registration_key_normalizes() {
        let rec = record(&[("VARIANT_REG", "AB12 CDE")]);
        assert_eq!(rec.registration(), Some("AB12 CDE"));
        assert_eq!(rec.registration_key(), Some("ab12cde".to_string()));
    }

    #[test]
    fn test_registration_missing() {
        let rec = record(&[("MAKE", "Ford")]);
        assert!(rec.registration().is_none());
        assert!(rec.registration_key().is_none());
    }
}
