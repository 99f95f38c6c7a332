use std::collections::BTreeMap;
use std::time::Duration;

use thiserror::Error;

use crate::core::registration::Registration;
use crate::locators::{LocatorRepository, SiteLocators};
use crate::sites::driver::{Browser, BrowserError};
use crate::sites::testdata::ContactProfile;

/// Site key under which motorway.co.uk locators are configured.
pub const SITE_KEY: &str = "motorway.co.uk";

/// Default explicit wait for slow page loads.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(100);

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("no locators configured for site '{site}'")]
    UnknownSite { site: String },

    #[error("no locators configured for page '{page}' on '{site}'")]
    UnknownPage { site: String, page: String },

    #[error("no locator for element '{role}' on page '{page}' of '{site}'")]
    UnknownElement {
        site: String,
        page: String,
        role: String,
    },

    #[error(transparent)]
    Browser(#[from] BrowserError),
}

/// The motorway.co.uk valuation flow: submit a registration on the home
/// page, scrape the vehicle details, confirm mileage and contact details,
/// and read the offered price.
pub struct MotorwaySite<B> {
    browser: B,
    registration: Registration,
    locators: SiteLocators,
    wait_timeout: Duration,
}

impl<B: Browser> MotorwaySite<B> {
    /// Build the flow for one registration.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::UnknownSite` if the repository has no locators
    /// for [`SITE_KEY`].
    pub fn new(
        browser: B,
        registration: Registration,
        locators: &LocatorRepository,
    ) -> Result<Self, SiteError> {
        let site = locators
            .site(SITE_KEY)
            .cloned()
            .ok_or_else(|| SiteError::UnknownSite {
                site: SITE_KEY.to_string(),
            })?;

        Ok(Self {
            browser,
            registration,
            locators: site,
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_wait_timeout(mut self, wait_timeout: Duration) -> Self {
        self.wait_timeout = wait_timeout;
        self
    }

    fn selector(&self, page: &str, role: &str) -> Result<String, SiteError> {
        let locators = self
            .locators
            .page(page)
            .ok_or_else(|| SiteError::UnknownPage {
                site: SITE_KEY.to_string(),
                page: page.to_string(),
            })?;

        locators
            .get(role)
            .map(str::to_string)
            .ok_or_else(|| SiteError::UnknownElement {
                site: SITE_KEY.to_string(),
                page: page.to_string(),
                role: role.to_string(),
            })
    }

    /// Open the home page, wait for it to finish loading, and return the
    /// page title for verification.
    ///
    /// # Errors
    ///
    /// Returns an error if locators are missing or the browser fails.
    pub fn navigate(&mut self) -> Result<String, SiteError> {
        let submit_button = self.selector("homepage", "submitButton")?;

        self.browser.goto(&format!("https://{SITE_KEY}"))?;
        self.browser.wait_for(&submit_button, self.wait_timeout)?;
        Ok(self.browser.title()?)
    }

    /// Submit the registration on the home page and return the text of the
    /// validation element (the recognised vehicle description).
    ///
    /// # Errors
    ///
    /// Returns an error if locators are missing or the browser fails.
    pub fn submit_registration(&mut self) -> Result<String, SiteError> {
        let reg_input = self.selector("homepage", "registrationInput")?;
        let submit_button = self.selector("homepage", "submitButton")?;
        let validation = self.selector("homepage", "validationElement")?;

        self.browser.fill(&reg_input, self.registration.as_str())?;
        self.browser.click(&submit_button)?;
        self.browser.wait_for(&validation, self.wait_timeout)?;
        Ok(self.browser.text(&validation)?)
    }

    /// Scrape the vehicle details from the result page, keyed by uppercase
    /// attribute name to line up with the expected dataset's columns.
    ///
    /// The site shows make and model as one combined element: the first
    /// word is the make, the remainder the model. Both are omitted when the
    /// element is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if locators are missing or the browser fails.
    pub fn vehicle_details(&mut self) -> Result<BTreeMap<String, String>, SiteError> {
        let roles: Vec<(String, String)> = self
            .locators
            .page("resultPage")
            .ok_or_else(|| SiteError::UnknownPage {
                site: SITE_KEY.to_string(),
                page: "resultPage".to_string(),
            })?
            .iter()
            .map(|(role, selector)| (role.to_string(), selector.to_string()))
            .collect();

        let mut details = BTreeMap::new();
        for (role, selector) in roles {
            let value = self.browser.text(&selector)?;
            match role.as_str() {
                "make" => {
                    if !value.is_empty() {
                        let make = value.split(' ').next().unwrap_or(&value);
                        details.insert(role.to_uppercase(), make.to_string());
                    }
                }
                "model" => {
                    if !value.is_empty() {
                        let model = value.split_once(' ').map_or(value.as_str(), |(_, rest)| rest);
                        details.insert(role.to_uppercase(), model.to_string());
                    }
                }
                _ => {
                    details.insert(role.to_uppercase(), value);
                }
            }
        }

        Ok(details)
    }

    /// Confirm the vehicle's mileage and enter the seller's contact
    /// details.
    ///
    /// # Errors
    ///
    /// Returns an error if locators are missing or the browser fails.
    pub fn confirm_mileage_and_details(
        &mut self,
        mileage: u32,
        contact: &ContactProfile,
    ) -> Result<(), SiteError> {
        let mileage_input = self.selector("confirmMileage", "mileageInput")?;
        let mileage_confirm = self.selector("confirmMileage", "mileageConfirmButton")?;

        self.browser.clear(&mileage_input)?;
        self.browser.fill(&mileage_input, &mileage.to_string())?;
        self.browser.click(&mileage_confirm)?;

        let full_name = self.selector("yourDetails", "fullName")?;
        let email_input = self.selector("yourDetails", "emailInput")?;
        let telephone = self.selector("yourDetails", "telephone")?;
        let submit_button = self.selector("yourDetails", "submitButton")?;

        self.browser.wait_for(&submit_button, self.wait_timeout)?;
        self.browser.fill(&full_name, &contact.full_name)?;
        self.browser.fill(&email_input, &contact.email)?;
        self.browser.fill(&telephone, &contact.telephone)?;
        self.browser.click(&submit_button)?;

        Ok(())
    }

    /// Wait for the valuation to appear and return the offered price text.
    ///
    /// # Errors
    ///
    /// Returns an error if locators are missing or the browser fails.
    pub fn valuation_price(&mut self) -> Result<String, SiteError> {
        let price = self.selector("valuationDiscovery", "price")?;

        self.browser.wait_for(&price, self.wait_timeout)?;
        Ok(self.browser.text(&price)?)
    }
}
