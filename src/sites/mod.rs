//! Valuation-site page flows over an abstract browser.
//!
//! Browser automation itself is an external collaborator: this crate only
//! defines the [`Browser`](driver::Browser) trait it needs (navigate, wait,
//! fill, click, read), and drives page flows through it. Anything that can
//! open pages and read elements can stand behind the trait, including the
//! scripted fake used in tests.
//!
//! [`MotorwaySite`](motorway::MotorwaySite) is the first implemented
//! vendor flow; further vendors follow the same pattern against their own
//! locator sets.

pub mod driver;
pub mod motorway;
pub mod testdata;

pub use driver::{Browser, BrowserError};
pub use motorway::{MotorwaySite, SiteError};
pub use testdata::{random_mileage, ContactProfile};
