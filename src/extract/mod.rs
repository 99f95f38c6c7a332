//! Registration-number extraction from free text.
//!
//! UK current-format registrations are matched with a fixed, word-bounded
//! grammar: two uppercase letters, two digits, an optional single space,
//! three uppercase letters. Tokens embedded in longer alphanumeric runs are
//! not matched.
//!
//! Duplicates are collapsed on the normalized (space-stripped) form; the
//! first spelling encountered is the one kept, and output order is
//! first-appearance order, so repeated runs over the same input produce
//! identical candidate lists.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use crate::core::registration::Registration;
use crate::parsing::{source, SourceIssue};

/// Word-bounded grammar for a current-format UK registration.
const REGISTRATION_PATTERN: &str = r"\b[A-Z]{2}[0-9]{2} ?[A-Z]{3}\b";

/// Candidates extracted from a configured text source.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub candidates: Vec<Registration>,
    pub issues: Vec<SourceIssue>,
}

/// Extract all distinct registration candidates from `text`.
///
/// Returns the deduplicated candidates in first-appearance order. Empty
/// text yields an empty list.
#[must_use]
pub fn registrations(text: &str) -> Vec<Registration> {
    let pattern = Regex::new(REGISTRATION_PATTERN).unwrap();

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for token in pattern.find_iter(text) {
        // The grammar regex only produces well-formed tokens
        let Some(registration) = Registration::parse(token.as_str()) else {
            continue;
        };
        if seen.insert(registration.key()) {
            candidates.push(registration);
        }
    }
    candidates
}

/// Extract registration candidates from a text source on disk.
///
/// The source resolves, relative to `base`, to a single file or to a
/// directory whose files are concatenated before matching (duplicates
/// across files collapse like duplicates within one file). A missing or
/// unreadable source yields no candidates and a recorded issue, never an
/// error.
#[must_use]
pub fn from_source(base: &Path, path: &Path) -> Extraction {
    let text = source::read(base, path);
    Extraction {
        candidates: registrations(&text.content),
        issues: text.issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_spaced_and_unspaced_forms() {
        let text = "Selling AB12 CDE, previously listed as XY34ZZZ.";
        let candidates = registrations(text);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].as_str(), "AB12 CDE");
        assert_eq!(candidates[1].as_str(), "XY34ZZZ");
    }

    #[test]
    fn test_empty_text_yields_no_candidates() {
        assert!(registrations("").is_empty());
    }

    #[test]
    fn test_duplicates_collapse_to_distinct_normalized_tokens() {
        let text = "AB12 CDE again AB12CDE and once more AB12 CDE";
        let candidates = registrations(text);
        assert_eq!(candidates.len(), 1);
        // First spelling encountered wins
        assert_eq!(candidates[0].as_str(), "AB12 CDE");
    }

    #[test]
    fn test_word_boundary_rejects_embedded_tokens() {
        assert!(registrations("orderAB12CDE").is_empty());
        assert!(registrations("AB12CDE9").is_empty());
        assert!(registrations("AB12 CDEF").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Plates AB12 CDE and XY34 ZZZ, plus AB12CDE.";
        assert_eq!(registrations(text), registrations(text));
    }

    #[test]
    fn test_lowercase_tokens_are_not_candidates() {
        assert!(registrations("ab12 cde").is_empty());
    }

    #[test]
    fn test_from_source_missing_path_is_empty_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let extraction = from_source(dir.path(), Path::new("absent.txt"));
        assert!(extraction.candidates.is_empty());
        assert_eq!(extraction.issues.len(), 1);
    }

    #[test]
    fn test_from_source_directory_aggregates_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        std::fs::create_dir(&input).unwrap();
        std::fs::write(input.join("a.txt"), "first car AB12 CDE\n").unwrap();
        std::fs::write(input.join("b.txt"), "second car XY34 ZZZ\n").unwrap();

        let extraction = from_source(dir.path(), &input);
        assert_eq!(extraction.candidates.len(), 2);
        assert!(extraction.issues.is_empty());
    }
}
