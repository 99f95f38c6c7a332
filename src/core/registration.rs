use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A UK vehicle registration candidate.
///
/// The current-format grammar is two uppercase letters, two digits, an
/// optional single space, and three uppercase letters (`AB12 CDE` or
/// `AB12CDE`). The form as originally written is retained for display;
/// equality and hashing use the normalized (space-stripped, case-folded)
/// form, so the spaced and unspaced spellings of the same plate compare
/// equal.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Registration {
    raw: String,
}

impl Registration {
    /// Parse a registration from text, validating it against the grammar.
    ///
    /// Returns `None` if the input is not a well-formed current-format
    /// registration.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let tail = match bytes.len() {
            7 => &bytes[4..],
            8 if bytes[4] == b' ' => &bytes[5..],
            _ => return None,
        };

        let head_ok = bytes[0].is_ascii_uppercase()
            && bytes[1].is_ascii_uppercase()
            && bytes[2].is_ascii_digit()
            && bytes[3].is_ascii_digit();
        let tail_ok = tail.iter().all(u8::is_ascii_uppercase);

        if head_ok && tail_ok {
            Some(Self { raw: s.to_string() })
        } else {
            None
        }
    }

    /// The registration as originally written, spacing included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The registration with all spaces removed, case preserved.
    ///
    /// This is the form used when reconciling against expected datasets,
    /// which mostly store registrations unspaced.
    #[must_use]
    pub fn compact(&self) -> String {
        self.raw.replace(' ', "")
    }

    /// Space-stripped, lowercased key used for equality and record lookup.
    #[must_use]
    pub fn key(&self) -> String {
        self.compact().to_ascii_lowercase()
    }
}

impl PartialEq for Registration {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Registration {}

impl Hash for Registration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_space() {
        let reg = Registration::parse("AB12 CDE").unwrap();
        assert_eq!(reg.as_str(), "AB12 CDE");
        assert_eq!(reg.compact(), "AB12CDE");
    }

    #[test]
    fn test_parse_without_space() {
        let reg = Registration::parse("AB12CDE").unwrap();
        assert_eq!(reg.as_str(), "AB12CDE");
        assert_eq!(reg.compact(), "AB12CDE");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Registration::parse("").is_none());
        assert!(Registration::parse("AB12").is_none());
        assert!(Registration::parse("ab12 cde").is_none());
        assert!(Registration::parse("AB12  CDE").is_none());
        assert!(Registration::parse("A912 CDE").is_none());
        assert!(Registration::parse("AB12 CD3").is_none());
        assert!(Registration::parse("AB12 CDEF").is_none());
    }

    #[test]
    fn test_spacing_insensitive_equality() {
        let spaced = Registration::parse("AB12 CDE").unwrap();
        let unspaced = Registration::parse("AB12CDE").unwrap();
        assert_eq!(spaced, unspaced);
    }

    #[test]
    fn test_display_preserves_original_form() {
        let reg = Registration::parse("AB12 CDE").unwrap();
        assert_eq!(format!("{reg}"), "AB12 CDE");
    }

    #[test]
    fn test_non_ascii_input_is_rejected() {
        // Multi-byte characters must not panic the byte-level checks
        assert!(Registration::parse("ÅB12 CDE").is_none());
        assert!(Registration::parse("AB12 CDÉ").is_none());
    }
}
