use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("timed out after {timeout:?} waiting for '{selector}'")]
    WaitTimeout { selector: String, timeout: Duration },

    #[error("element not found: '{0}'")]
    ElementNotFound(String),

    #[error("driver error: {0}")]
    Driver(String),
}

/// The browser-automation collaborator, reduced to what the page flows
/// need.
///
/// Selectors are CSS. `wait_for` blocks until the element is present and
/// interactable or the timeout elapses; the other element operations act on
/// the first match immediately. Implementations own their timing and
/// transport concerns; the page flows treat them as opaque.
pub trait Browser {
    /// Load a URL.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::Navigation` if the page cannot be loaded.
    fn goto(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Title of the current page.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::Driver` if the title cannot be read.
    fn title(&mut self) -> Result<String, BrowserError>;

    /// Wait until the element is present and interactable.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::WaitTimeout` if the element does not appear
    /// within `timeout`.
    fn wait_for(&mut self, selector: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// Type text into the element.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::ElementNotFound` if the element is absent.
    fn fill(&mut self, selector: &str, text: &str) -> Result<(), BrowserError>;

    /// Clear the element's current value.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::ElementNotFound` if the element is absent.
    fn clear(&mut self, selector: &str) -> Result<(), BrowserError>;

    /// Click the element.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::ElementNotFound` if the element is absent.
    fn click(&mut self, selector: &str) -> Result<(), BrowserError>;

    /// Visible text of the element.
    ///
    /// # Errors
    ///
    /// Returns `BrowserError::ElementNotFound` if the element is absent.
    fn text(&mut self, selector: &str) -> Result<String, BrowserError>;
}
