//! Core data types for registration extraction and cross-validation.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Registration`](registration::Registration): a vehicle registration
//!   candidate extracted from free text
//! - [`ExpectedRecord`](record::ExpectedRecord): one row of the
//!   expected-results dataset, keyed by column header
//!
//! ## Registration spacing
//!
//! Current-format UK registrations are written both with and without the
//! separating space (`AB12 CDE` / `AB12CDE`), and the two conventions are
//! mixed freely across input text and expected datasets. Equality between
//! registrations is therefore defined on the space-stripped form; the form
//! as originally written is kept for display.

pub mod record;
pub mod registration;
