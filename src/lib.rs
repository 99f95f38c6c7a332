//! # reg-verify
//!
//! A library for validating vehicle-valuation test data against a third-party
//! valuation website.
//!
//! Acceptance-test fixtures for valuation sites arrive as free text (emails,
//! seller notes, exported chat logs) containing UK vehicle registration
//! numbers, alongside an expected-results dataset with one row per vehicle.
//! Before a browser run can start, the two sides have to be lined up:
//! registrations extracted from the text, cross-checked against the dataset,
//! and paired with the row that describes the vehicle.
//!
//! `reg-verify` does exactly that, and deliberately never fails a run over
//! bad fixture data: missing files, unreadable files, and unmatched
//! registrations all degrade to empty results with a logged diagnostic.
//!
//! ## Example
//!
//! ```rust
//! use reg_verify::{extract, matching, ExpectedRecord};
//!
//! let text = "Seller confirmed the plate AB12 CDE over the phone.";
//! let candidates = extract::registrations(text);
//! assert_eq!(candidates.len(), 1);
//!
//! let record: ExpectedRecord = [("VARIANT_REG", "AB12CDE"), ("MAKE", "Ford")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let cases = matching::pair(&candidates, &[record]);
//! assert_eq!(cases.len(), 1);
//! assert_eq!(cases[0].expected.get("MAKE"), Some("Ford"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for registrations and expected records
//! - [`extract`]: Registration-number extraction from free text
//! - [`parsing`]: Readers for text sources and expected-results datasets
//! - [`matching`]: Reconciliation, pairing, and field comparison
//! - [`locators`]: Element-locator repository for valuation sites
//! - [`sites`]: Valuation-site page flows over an abstract browser
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod extract;
pub mod locators;
pub mod matching;
pub mod parsing;
pub mod sites;

// Re-export commonly used types for convenience
pub use crate::core::record::{ExpectedRecord, REGISTRATION_COLUMN};
pub use crate::core::registration::Registration;
pub use crate::locators::LocatorRepository;
pub use crate::matching::pairing::PairedCase;
pub use crate::matching::reconcile::DriftReport;
