//! Cross-validation of extracted registrations against expected records.
//!
//! Three steps, all deliberately non-fatal:
//!
//! 1. [`reconcile`]: symmetric difference between the extracted candidates
//!    and the dataset's registration column. Drift is a diagnostic, not a
//!    failure; the two sides legitimately diverge while test data is being
//!    curated.
//! 2. [`pair`]: associate each candidate with its expected record
//!    (space/case-insensitive on the registration). Candidates without a
//!    record are warned about and dropped.
//! 3. [`compare_details`]: field-by-field comparison of scraped vehicle
//!    details against a paired record, case-insensitive, with the
//!    registration itself additionally space-insensitive.

pub mod compare;
pub mod pairing;
pub mod reconcile;

pub use compare::{compare_details, ComparisonReport, FieldMismatch};
pub use pairing::{pair, PairedCase};
pub use reconcile::{reconcile, DriftReport};
