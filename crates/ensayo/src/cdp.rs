//! CDP-backed driver over chromiumoxide, behind the `browser` feature.
//!
//! Element handles are resolved fresh for every action: the handle only
//! records the selector, and each interaction re-queries the live page
//! within the configured implicit wait. That keeps handles valid across
//! DOM churn at the cost of one extra query per action.

use crate::driver::{BrowserDriver, DriverConfig, ElementHandle};
use crate::locator::Locator;
use crate::result::{EnsayoError, EnsayoResult};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page as CdpPage;
use futures::StreamExt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Quote a selector for embedding in a JavaScript expression.
fn js_quote(selector: &str) -> String {
    format!("{selector:?}")
}

/// Real browser driver speaking the Chrome DevTools Protocol.
#[derive(Debug)]
pub struct CdpDriver {
    config: DriverConfig,
    page: Arc<Mutex<CdpPage>>,
    browser: Arc<Mutex<CdpBrowser>>,
    #[allow(dead_code)]
    handler: tokio::task::JoinHandle<()>,
}

impl CdpDriver {
    /// Launch a browser and open a blank page.
    ///
    /// # Errors
    ///
    /// Returns `BrowserLaunch` if the executable cannot be found or the
    /// CDP session fails to start.
    pub async fn launch(config: DriverConfig) -> EnsayoResult<Self> {
        let mut builder =
            CdpConfig::builder().window_size(config.viewport_width, config.viewport_height);

        if !config.headless {
            builder = builder.with_head();
        }

        if !config.sandbox {
            builder = builder.no_sandbox();
        }

        if let Some(ref path) = config.chromium_path {
            builder = builder.chrome_executable(path);
        }

        let cdp_config = builder.build().map_err(|e| EnsayoError::BrowserLaunch {
            message: e.to_string(),
        })?;

        let (browser, mut handler_stream) =
            CdpBrowser::launch(cdp_config)
                .await
                .map_err(|e| EnsayoError::BrowserLaunch {
                    message: e.to_string(),
                })?;

        let handler = tokio::spawn(async move {
            while let Some(h) = handler_stream.next().await {
                if h.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| EnsayoError::BrowserLaunch {
                message: e.to_string(),
            })?;

        tracing::info!(
            headless = config.headless,
            width = config.viewport_width,
            height = config.viewport_height,
            "browser launched"
        );

        Ok(Self {
            config,
            page: Arc::new(Mutex::new(page)),
            browser: Arc::new(Mutex::new(browser)),
            handler,
        })
    }

    /// Get the driver configuration
    #[must_use]
    pub const fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Close the browser session.
    ///
    /// # Errors
    ///
    /// Returns `BrowserLaunch` if the session does not shut down cleanly.
    pub async fn close(self) -> EnsayoResult<()> {
        let mut browser = self.browser.lock().await;
        browser
            .close()
            .await
            .map_err(|e| EnsayoError::BrowserLaunch {
                message: e.to_string(),
            })?;
        Ok(())
    }

    /// Resolve a selector on the live page, polling up to the wait window.
    async fn resolve(
        &self,
        selector: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> EnsayoResult<Element> {
        let deadline = Instant::now() + timeout;
        loop {
            {
                let page = self.page.lock().await;
                if let Ok(element) = page.find_element(selector).await {
                    return Ok(element);
                }
            }
            if Instant::now() >= deadline {
                return Err(EnsayoError::ElementNotFound {
                    selector: selector.to_string(),
                    timeout_ms: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Resolve an already-located handle with the driver's implicit wait.
    async fn resolve_handle(&self, element: &ElementHandle) -> EnsayoResult<Element> {
        self.resolve(
            &element.selector,
            self.config.implicit_wait,
            self.config.poll_interval,
        )
        .await
    }
}

#[async_trait]
impl BrowserDriver for CdpDriver {
    async fn navigate(&self, url: &str) -> EnsayoResult<()> {
        let page = self.page.lock().await;
        page.goto(url)
            .await
            .map_err(|e| EnsayoError::NavigationFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        tracing::debug!(url, "navigated");
        Ok(())
    }

    async fn find_element(&self, locator: &Locator) -> EnsayoResult<ElementHandle> {
        let selector = locator.to_css();
        self.resolve(
            &selector,
            locator.options().timeout,
            locator.options().poll_interval,
        )
        .await?;
        Ok(ElementHandle::new(selector))
    }

    async fn set_value(&self, element: &ElementHandle, text: &str) -> EnsayoResult<()> {
        let live = self.resolve_handle(element).await?;
        live.focus().await.map_err(|e| EnsayoError::ActionFailed {
            selector: element.selector.clone(),
            message: e.to_string(),
        })?;

        // Clear any existing value so set_value replaces, not appends
        let clear = format!(
            "(() => {{ const el = document.querySelector({}); if (el) el.value = ''; }})()",
            js_quote(&element.selector)
        );
        {
            let page = self.page.lock().await;
            page.evaluate(clear)
                .await
                .map_err(|e| EnsayoError::ActionFailed {
                    selector: element.selector.clone(),
                    message: e.to_string(),
                })?;
        }

        live.type_str(text)
            .await
            .map_err(|e| EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    async fn click(&self, element: &ElementHandle) -> EnsayoResult<()> {
        let live = self.resolve_handle(element).await?;
        live.click().await.map_err(|e| EnsayoError::ActionFailed {
            selector: element.selector.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    async fn text_of(&self, element: &ElementHandle) -> EnsayoResult<String> {
        let live = self.resolve_handle(element).await?;
        let text = live
            .inner_text()
            .await
            .map_err(|e| EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: e.to_string(),
            })?;
        Ok(text.unwrap_or_default())
    }

    async fn is_visible(&self, element: &ElementHandle) -> EnsayoResult<bool> {
        let expr = format!(
            "(() => {{ \
                const el = document.querySelector({}); \
                if (!el) return false; \
                const rect = el.getBoundingClientRect(); \
                const style = window.getComputedStyle(el); \
                return rect.width > 0 && rect.height > 0 \
                    && style.visibility !== 'hidden' && style.display !== 'none'; \
            }})()",
            js_quote(&element.selector)
        );
        let page = self.page.lock().await;
        let result = page
            .evaluate(expr)
            .await
            .map_err(|e| EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: e.to_string(),
            })?;
        result
            .into_value::<bool>()
            .map_err(|e| EnsayoError::ActionFailed {
                selector: element.selector.clone(),
                message: e.to_string(),
            })
    }

    async fn title(&self) -> EnsayoResult<String> {
        let page = self.page.lock().await;
        let title = page
            .get_title()
            .await
            .map_err(|e| EnsayoError::ActionFailed {
                selector: "document".to_string(),
                message: e.to_string(),
            })?;
        Ok(title.unwrap_or_default())
    }

    async fn current_url(&self) -> EnsayoResult<String> {
        let page = self.page.lock().await;
        let url = page.url().await.map_err(|e| EnsayoError::ActionFailed {
            selector: "document".to_string(),
            message: e.to_string(),
        })?;
        Ok(url.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_quote_escapes_for_embedding() {
        assert_eq!(js_quote("#login_btn"), "\"#login_btn\"");
        assert_eq!(js_quote("a\"b"), "\"a\\\"b\"");
    }
}
