//! Scriptable in-memory driver for testing without a browser.
//!
//! [`MockDriver`] implements [`BrowserDriver`] against a scripted set of
//! pages. Scripts declare which elements exist on which URL, their text
//! and visibility, and what clicking them does (reveal another element,
//! hide one, or reveal conditionally on previously typed values - enough
//! to model a login form end to end).
//!
//! The mock honors the implicit wait: an element scripted to appear after
//! a delay resolves only once the delay has elapsed, and a selector that
//! never resolves fails with `ElementNotFound` when the wait window
//! closes, not indefinitely.

use crate::driver::{BrowserDriver, DriverConfig, ElementHandle};
use crate::locator::Locator;
use crate::result::{EnsayoError, EnsayoResult};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// What clicking a scripted element does to the session.
#[derive(Debug, Clone)]
pub enum ClickEffect {
    /// Make the element with this selector visible
    Reveal(String),
    /// Make the element with this selector invisible
    Hide(String),
    /// Reveal a selector only if every listed field holds the expected value
    RevealIfValues {
        /// Pairs of (field selector, expected typed value)
        conditions: Vec<(String, String)>,
        /// Selector revealed when all conditions hold
        reveal: String,
    },
}

/// A scripted element on a mock page.
#[derive(Debug, Clone)]
pub struct ScriptedElement {
    selector: String,
    text: String,
    visible: bool,
    interactable: bool,
    appears_after: Option<Duration>,
    on_click: Vec<ClickEffect>,
}

impl ScriptedElement {
    /// Create a visible, interactable element with no text
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            text: String::new(),
            visible: true,
            interactable: true,
            appears_after: None,
            on_click: Vec::new(),
        }
    }

    /// Set the element's text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Script the element as initially hidden
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Script the element as present but not interactable
    #[must_use]
    pub const fn not_interactable(mut self) -> Self {
        self.interactable = false;
        self
    }

    /// Delay the element's appearance after navigation
    #[must_use]
    pub const fn appears_after(mut self, delay: Duration) -> Self {
        self.appears_after = Some(delay);
        self
    }

    /// Add a click effect
    #[must_use]
    pub fn on_click(mut self, effect: ClickEffect) -> Self {
        self.on_click.push(effect);
        self
    }
}

/// A scripted page, matched by exact URL.
#[derive(Debug, Clone)]
pub struct MockPage {
    url: String,
    title: String,
    elements: Vec<ScriptedElement>,
}

impl MockPage {
    /// Create a page served at the given URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            elements: Vec::new(),
        }
    }

    /// Set the page title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a scripted element
    #[must_use]
    pub fn with_element(mut self, element: ScriptedElement) -> Self {
        self.elements.push(element);
        self
    }
}

/// Per-navigation session state. Reset on every navigation, which is what
/// gives test cases their isolation guarantee against this driver.
#[derive(Debug, Default)]
struct SessionState {
    current_url: String,
    page_idx: Option<usize>,
    loaded_at: Option<Instant>,
    typed_values: HashMap<String, String>,
    revealed: HashSet<String>,
    hidden: HashSet<String>,
}

/// In-memory [`BrowserDriver`] over scripted pages.
#[derive(Debug)]
pub struct MockDriver {
    config: DriverConfig,
    pages: Vec<MockPage>,
    state: Mutex<SessionState>,
}

impl MockDriver {
    /// Create a driver with no pages scripted
    #[must_use]
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            pages: Vec::new(),
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Add a scripted page
    #[must_use]
    pub fn with_page(mut self, page: MockPage) -> Self {
        self.pages.push(page);
        self
    }

    /// Get the driver configuration
    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// The value last typed into a selector, if any
    #[must_use]
    pub fn typed_value(&self, selector: &str) -> Option<String> {
        self.lock_state().typed_values.get(selector).cloned()
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().expect("mock session state poisoned")
    }

    /// Whether the scripted element is present on the current page right now.
    fn element_present(&self, state: &SessionState, selector: &str) -> Option<ScriptedElement> {
        let page = self.pages.get(state.page_idx?)?;
        let element = page.elements.iter().find(|e| e.selector == selector)?;
        if let (Some(delay), Some(loaded_at)) = (element.appears_after, state.loaded_at) {
            if loaded_at.elapsed() < delay {
                return None;
            }
        }
        Some(element.clone())
    }

    fn element_visible(state: &SessionState, element: &ScriptedElement) -> bool {
        if state.hidden.contains(&element.selector) {
            return false;
        }
        if state.revealed.contains(&element.selector) {
            return true;
        }
        element.visible
    }

    fn apply_effect(state: &mut SessionState, effect: &ClickEffect) {
        match effect {
            ClickEffect::Reveal(selector) => {
                state.hidden.remove(selector);
                let _ = state.revealed.insert(selector.clone());
            }
            ClickEffect::Hide(selector) => {
                state.revealed.remove(selector);
                let _ = state.hidden.insert(selector.clone());
            }
            ClickEffect::RevealIfValues { conditions, reveal } => {
                let all_match = conditions.iter().all(|(field, expected)| {
                    state.typed_values.get(field).map(String::as_str) == Some(expected.as_str())
                });
                if all_match {
                    state.hidden.remove(reveal);
                    let _ = state.revealed.insert(reveal.clone());
                }
            }
        }
    }
}

#[async_trait]
impl BrowserDriver for MockDriver {
    async fn navigate(&self, url: &str) -> EnsayoResult<()> {
        let mut state = self.lock_state();
        *state = SessionState {
            current_url: url.to_string(),
            page_idx: self.pages.iter().position(|p| p.url == url),
            loaded_at: Some(Instant::now()),
            ..SessionState::default()
        };
        tracing::debug!(url, matched = state.page_idx.is_some(), "mock navigate");
        Ok(())
    }

    async fn find_element(&self, locator: &Locator) -> EnsayoResult<ElementHandle> {
        let selector = locator.to_css();
        let deadline = Instant::now() + locator.options().timeout;
        loop {
            {
                let state = self.lock_state();
                if self.element_present(&state, &selector).is_some() {
                    return Ok(ElementHandle::new(selector));
                }
            }
            if Instant::now() >= deadline {
                return Err(EnsayoError::ElementNotFound {
                    selector,
                    timeout_ms: locator.options().timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(locator.options().poll_interval).await;
        }
    }

    async fn set_value(&self, element: &ElementHandle, text: &str) -> EnsayoResult<()> {
        let mut state = self.lock_state();
        let Some(scripted) = self.element_present(&state, &element.selector) else {
            return Err(EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: "element no longer present".to_string(),
            });
        };
        if !scripted.interactable {
            return Err(EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: "element is not interactable".to_string(),
            });
        }
        let _ = state
            .typed_values
            .insert(element.selector.clone(), text.to_string());
        Ok(())
    }

    async fn click(&self, element: &ElementHandle) -> EnsayoResult<()> {
        let mut state = self.lock_state();
        let Some(scripted) = self.element_present(&state, &element.selector) else {
            return Err(EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: "element no longer present".to_string(),
            });
        };
        if !scripted.interactable {
            return Err(EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: "element is not interactable".to_string(),
            });
        }
        for effect in &scripted.on_click {
            Self::apply_effect(&mut state, effect);
        }
        Ok(())
    }

    async fn text_of(&self, element: &ElementHandle) -> EnsayoResult<String> {
        let state = self.lock_state();
        Ok(self
            .element_present(&state, &element.selector)
            .map(|e| e.text)
            .unwrap_or_default())
    }

    async fn is_visible(&self, element: &ElementHandle) -> EnsayoResult<bool> {
        let state = self.lock_state();
        Ok(self
            .element_present(&state, &element.selector)
            .is_some_and(|e| Self::element_visible(&state, &e)))
    }

    async fn title(&self) -> EnsayoResult<String> {
        let state = self.lock_state();
        Ok(state
            .page_idx
            .and_then(|i| self.pages.get(i))
            .map(|p| p.title.clone())
            .unwrap_or_default())
    }

    async fn current_url(&self) -> EnsayoResult<String> {
        Ok(self.lock_state().current_url.clone())
    }
}
