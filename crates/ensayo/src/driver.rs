//! `BrowserDriver` - abstract browser automation capability.
//!
//! The driver is the single seam between page objects and a real browser.
//! Two implementations ship with the crate: a CDP-backed driver
//! ([`crate::cdp::CdpDriver`], behind the `browser` feature) and a
//! scriptable in-memory driver ([`crate::mock::MockDriver`]) used by the
//! unit and integration tests.
//!
//! Every driver call may suspend up to the configured implicit wait while
//! the browser settles; these calls are the only blocking points in a test
//! case, and the timeout is the sole bounding mechanism.

use crate::locator::{Locator, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use crate::result::EnsayoResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Reference to a resolved UI element, valid for the current page state.
///
/// Handles carry no liveness guarantee beyond the page state they were
/// resolved against; a navigation invalidates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Unique identifier for this resolution
    pub id: String,
    /// CSS selector the handle was resolved from
    pub selector: String,
}

impl ElementHandle {
    /// Create a new element handle for a resolved selector
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            selector: selector.into(),
        }
    }
}

/// Browser configuration for drivers
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Implicit wait for element resolution
    pub implicit_wait: Duration,
    /// Polling interval while waiting
    pub poll_interval: Duration,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            implicit_wait: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl DriverConfig {
    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set the implicit wait
    #[must_use]
    pub const fn with_implicit_wait(mut self, wait: Duration) -> Self {
        self.implicit_wait = wait;
        self
    }

    /// Set the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

/// Abstract browser automation capability.
///
/// Page objects and test cases depend on this trait only; swapping the
/// real CDP driver for the scripted mock changes nothing above the seam.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
    /// Navigate the session to a URL.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the browser cannot reach the URL.
    async fn navigate(&self, url: &str) -> EnsayoResult<()>;

    /// Resolve a locator to a live element on the current page.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if the selector does not resolve within
    /// the locator's wait window.
    async fn find_element(&self, locator: &Locator) -> EnsayoResult<ElementHandle>;

    /// Replace the element's value with the given text.
    ///
    /// # Errors
    ///
    /// Returns `ActionFailed` if the element is not interactable.
    async fn set_value(&self, element: &ElementHandle, text: &str) -> EnsayoResult<()>;

    /// Click the element.
    ///
    /// # Errors
    ///
    /// Returns `ActionFailed` if the element is not interactable.
    async fn click(&self, element: &ElementHandle) -> EnsayoResult<()>;

    /// Text content of the element.
    async fn text_of(&self, element: &ElementHandle) -> EnsayoResult<String>;

    /// Whether the element is currently visible.
    async fn is_visible(&self, element: &ElementHandle) -> EnsayoResult<bool>;

    /// Title of the current page.
    async fn title(&self) -> EnsayoResult<String>;

    /// URL of the current page.
    async fn current_url(&self) -> EnsayoResult<String>;
}
