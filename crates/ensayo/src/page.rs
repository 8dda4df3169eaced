//! Page objects for the TechGlobal Training application.
//!
//! A page object owns the selectors for one page and exposes intent-level
//! operations over them, so test cases never mention raw CSS. The
//! [`PageObject`] trait carries the shared mechanics (URL resolution,
//! element lookup, the basic interactions); concrete pages add their
//! selector table and domain operations like [`LoginPage::login`].

use crate::config::SuiteConfig;
use crate::driver::{BrowserDriver, ElementHandle};
use crate::fixture::Credentials;
use crate::locator::{Locator, Selector};
use crate::result::{EnsayoError, EnsayoResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Common behavior of every page in the suite.
#[async_trait]
pub trait PageObject: Send + Sync {
    /// Human-readable page name for logs and reports
    fn name(&self) -> &str;

    /// Path under the base URL, without a leading slash
    fn path(&self) -> &str;

    /// Driver this page operates against
    fn driver(&self) -> &Arc<dyn BrowserDriver>;

    /// Suite configuration (base URL and wait behavior)
    fn config(&self) -> &SuiteConfig;

    /// Selector for a named element, if the page declares one
    fn selector_for(&self, element: &str) -> Option<Selector>;

    /// Build a locator for a named element with the suite's wait options.
    ///
    /// # Errors
    ///
    /// An element name the page does not declare is `ElementNotFound`
    /// immediately, with no wait.
    fn locator(&self, element: &str) -> EnsayoResult<Locator> {
        let selector =
            self.selector_for(element)
                .ok_or_else(|| EnsayoError::ElementNotFound {
                    selector: element.to_string(),
                    timeout_ms: 0,
                })?;
        Ok(Locator::from_selector(selector)
            .with_timeout(self.config().timeout)
            .with_poll_interval(self.config().poll_interval))
    }

    /// Navigate to the page, always through a fresh URL load.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the browser cannot reach the page.
    async fn open(&self) -> EnsayoResult<()> {
        let url = self.config().url_for(self.path());
        tracing::debug!(page = self.name(), url, "opening page");
        self.driver().navigate(&url).await
    }

    /// Resolve a named element on the current page.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the element does not resolve within
    /// the wait window.
    async fn find(&self, element: &str) -> EnsayoResult<ElementHandle> {
        self.driver().find_element(&self.locator(element)?).await
    }

    /// Type text into a named element, replacing its value.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` or `ActionFailed`.
    async fn fill(&self, element: &str, text: &str) -> EnsayoResult<()> {
        let handle = self.find(element).await?;
        self.driver().set_value(&handle, text).await
    }

    /// Click a named element.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` or `ActionFailed`.
    async fn click_on(&self, element: &str) -> EnsayoResult<()> {
        let handle = self.find(element).await?;
        self.driver().click(&handle).await
    }

    /// Text content of a named element.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the element does not resolve.
    async fn text_of(&self, element: &str) -> EnsayoResult<String> {
        let handle = self.find(element).await?;
        self.driver().text_of(&handle).await
    }

    /// Whether a named element is currently visible.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the element does not resolve.
    async fn is_visible(&self, element: &str) -> EnsayoResult<bool> {
        let handle = self.find(element).await?;
        self.driver().is_visible(&handle).await
    }
}

/// The application landing page.
pub struct HomePage {
    driver: Arc<dyn BrowserDriver>,
    config: SuiteConfig,
}

impl HomePage {
    /// Create the home page over a driver
    #[must_use]
    pub fn new(driver: Arc<dyn BrowserDriver>, config: SuiteConfig) -> Self {
        Self { driver, config }
    }

    /// Title of the current page.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn title(&self) -> EnsayoResult<String> {
        self.driver.title().await
    }

    /// URL of the current page.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    pub async fn current_url(&self) -> EnsayoResult<String> {
        self.driver.current_url().await
    }
}

impl std::fmt::Debug for HomePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomePage")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PageObject for HomePage {
    fn name(&self) -> &str {
        "Home"
    }

    fn path(&self) -> &str {
        ""
    }

    fn driver(&self) -> &Arc<dyn BrowserDriver> {
        &self.driver
    }

    fn config(&self) -> &SuiteConfig {
        &self.config
    }

    fn selector_for(&self, _element: &str) -> Option<Selector> {
        None
    }
}

/// The project-2 login page.
pub struct LoginPage {
    driver: Arc<dyn BrowserDriver>,
    config: SuiteConfig,
}

impl LoginPage {
    /// Path of the login page under the base URL
    pub const PATH: &'static str = "frontend/project-2";

    /// Create the login page over a driver
    #[must_use]
    pub fn new(driver: Arc<dyn BrowserDriver>, config: SuiteConfig) -> Self {
        Self { driver, config }
    }

    /// Submit the login form: username, then password, then the button.
    ///
    /// Fails on the first step that cannot complete; later steps are not
    /// attempted.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` or `ActionFailed` from the failing step.
    pub async fn login(&self, credentials: &Credentials) -> EnsayoResult<()> {
        self.fill("username", &credentials.username).await?;
        self.fill("password", &credentials.password).await?;
        self.click_on("login_button").await
    }

    /// Click the logout button.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` or `ActionFailed`.
    pub async fn logout(&self) -> EnsayoResult<()> {
        self.click_on("logout_button").await
    }

    /// Resolve the success message element without asserting anything
    /// about it.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if it does not resolve within the wait
    /// window.
    pub async fn success_message(&self) -> EnsayoResult<ElementHandle> {
        self.find("success_message").await
    }
}

impl std::fmt::Debug for LoginPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginPage")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PageObject for LoginPage {
    fn name(&self) -> &str {
        "Login"
    }

    fn path(&self) -> &str {
        Self::PATH
    }

    fn driver(&self) -> &Arc<dyn BrowserDriver> {
        &self.driver
    }

    fn config(&self) -> &SuiteConfig {
        &self.config
    }

    fn selector_for(&self, element: &str) -> Option<Selector> {
        match element {
            "username" => Some(Selector::id("username")),
            "password" => Some(Selector::id("password")),
            "login_button" => Some(Selector::id("login_btn")),
            "success_message" => Some(Selector::id("success_lgn")),
            "logout_button" => Some(Selector::id("logout")),
            _ => None,
        }
    }
}
