use crate::actions::{extract_domain, BrowserActions};
use crate::error::{BrowserError, Result};
use bizreg_core::BrowserConfig as BrowserSettings;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Interval between element lookups while waiting for a selector.
const POLL_INTERVAL_MS: u64 = 250;

/// Browser automation engine
///
/// Owns one Chromium instance, either launched locally or attached to over
/// a remote DevTools websocket.
pub struct BrowserEngine {
    browser: Browser,
    handler_task: JoinHandle<()>,
    page_load_timeout: Duration,
}

impl BrowserEngine {
    /// Launch or connect according to `settings.remote_url`.
    pub async fn from_config(settings: &BrowserSettings) -> Result<Self> {
        match &settings.remote_url {
            Some(remote_url) => Self::connect(remote_url, settings).await,
            None => Self::launch(settings).await,
        }
    }

    /// Launch a local Chromium.
    pub async fn launch(settings: &BrowserSettings) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .window_size(settings.window_width, settings.window_height)
            .request_timeout(Duration::from_secs(settings.page_load_timeout_secs));
        if !settings.headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(BrowserError::ChromiumError)?;

        let (browser, handler) = Browser::launch(config).await?;
        tracing::debug!("Launched local browser (headless: {})", settings.headless);

        Ok(Self::with_handler(browser, handler, settings))
    }

    /// Attach to a browser already listening on `remote_url`.
    pub async fn connect(remote_url: &str, settings: &BrowserSettings) -> Result<Self> {
        let (browser, handler) = Browser::connect(remote_url).await?;
        tracing::debug!("Connected to remote browser at {}", remote_url);

        Ok(Self::with_handler(browser, handler, settings))
    }

    fn with_handler(
        browser: Browser,
        mut handler: chromiumoxide::Handler,
        settings: &BrowserSettings,
    ) -> Self {
        // Spawn browser handler
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("Browser handler event error: {}", e);
                }
            }
        });

        Self {
            browser,
            handler_task,
            page_load_timeout: Duration::from_secs(settings.page_load_timeout_secs),
        }
    }

    /// Open a blank page to drive.
    pub async fn new_session(&self) -> Result<BrowserSession> {
        let page = self.browser.new_page("about:blank").await?;
        Ok(BrowserSession {
            page,
            page_load_timeout: self.page_load_timeout,
        })
    }

    /// Close the browser and stop its event handler.
    pub async fn close(mut self) -> Result<()> {
        let result = self.browser.close().await;
        self.handler_task.abort();
        result?;
        Ok(())
    }
}

/// A single page driven by [`BrowserActions`].
pub struct BrowserSession {
    page: Page,
    page_load_timeout: Duration,
}

impl BrowserSession {
    /// Close the underlying page.
    pub async fn close(self) -> Result<()> {
        self.page.close().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserActions for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", extract_domain(url)?);

        match tokio::time::timeout(self.page_load_timeout, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(BrowserError::NavigationError(format!("{url}: {e}"))),
            Err(_) => Err(BrowserError::Timeout(format!(
                "page load of {url} after {:?}",
                self.page_load_timeout
            ))),
        }
    }

    async fn fill_field(&self, selector: &str, value: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))?;
        element.click().await?;
        element.type_str(value).await?;
        Ok(())
    }

    async fn press_enter(&self, selector: &str) -> Result<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))?;
        element.press_key("Enter").await?;
        Ok(())
    }

    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<()> {
        let deadline = Instant::now() + Duration::from_millis(timeout_ms);

        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(BrowserError::Timeout(format!(
                    "{selector} after {timeout_ms}ms"
                )));
            }
            tokio::time::sleep(Duration::from_millis(POLL_INTERVAL_MS)).await;
        }
    }

    async fn outer_html(&self, selector: &str) -> Result<String> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::SelectorNotFound(selector.to_string()))?;

        element
            .outer_html()
            .await?
            .ok_or_else(|| BrowserError::SelectorNotFound(selector.to_string()))
    }
}
