//! Element-locator repository for valuation sites.
//!
//! Locators live in a JSON document shaped `site → page → element-role →
//! CSS selector` and are loaded once into a [`LocatorRepository`] owned by
//! whatever constructs the site workflow; there is no process-wide
//! repository. Lookups return `Option` at every level so an unconfigured
//! site, page, or role is an explicit "not found" at the call site rather
//! than a panic deep in a page flow.
//!
//! Result-page roles are deliberately snake_case (`variant_reg`,
//! `fuel_type`): scraped detail maps key by the uppercased role, which must
//! line up with the expected dataset's column headers (`VARIANT_REG`,
//! `FUEL_TYPE`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Failed to read locator repository: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse locator repository: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Element-role → CSS selector mapping for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageLocators {
    elements: BTreeMap<String, String>,
}

impl PageLocators {
    /// Selector for an element role, if configured.
    #[must_use]
    pub fn get(&self, role: &str) -> Option<&str> {
        self.elements.get(role).map(String::as_str)
    }

    /// Iterate over `(role, selector)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.elements
            .iter()
            .map(|(role, selector)| (role.as_str(), selector.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Page → locators mapping for one site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteLocators {
    pages: BTreeMap<String, PageLocators>,
}

impl SiteLocators {
    /// Locators for a page, if configured.
    #[must_use]
    pub fn page(&self, page: &str) -> Option<&PageLocators> {
        self.pages.get(page)
    }

    /// Iterate over `(page, locators)` pairs in page order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageLocators)> {
        self.pages.iter().map(|(page, locs)| (page.as_str(), locs))
    }
}

/// The full locator repository across valuation sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocatorRepository {
    sites: BTreeMap<String, SiteLocators>,
}

impl LocatorRepository {
    /// Load the embedded default repository.
    ///
    /// # Errors
    ///
    /// Returns `LocatorError::Parse` if the embedded document is invalid,
    /// which would indicate a packaging defect.
    pub fn load_embedded() -> Result<Self, LocatorError> {
        const EMBEDDED_LOCATORS: &str = include_str!("../../locators/valuation_sites.json");
        Self::from_json(EMBEDDED_LOCATORS)
    }

    /// Load a repository from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `LocatorError::Read` if the file cannot be read, or
    /// `LocatorError::Parse` if it is not a valid locator document.
    pub fn load_from_file(path: &Path) -> Result<Self, LocatorError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a repository from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `LocatorError::Parse` if the string is not a valid locator
    /// document.
    pub fn from_json(json: &str) -> Result<Self, LocatorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Locators for a site, if configured.
    #[must_use]
    pub fn site(&self, site: &str) -> Option<&SiteLocators> {
        self.sites.get(site)
    }

    /// Iterate over `(site, locators)` pairs in site order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteLocators)> {
        self.sites.iter().map(|(site, locs)| (site.as_str(), locs))
    }

    /// Number of configured sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
