//! Headless-Chromium implementation of the DOM session capability.
//!
//! Everything browser-specific lives here: process lifecycle, the CDP
//! event handler task, and interstitial dismissal. The rest of the crate
//! only ever sees the [`DomSession`] trait.

use anyhow::Context as _;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::{Element, Page};
use futures::StreamExt as _;
use tokio::task::JoinHandle;

use crate::dom::{DomError, DomSession};

/// Interstitials (location prompt, donation banner) cover the listing on
/// first load and expose a `.close` control.
const OVERLAY_CLOSE_SELECTOR: &str = ".close";

pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Page,
}

impl BrowserSession {
    pub async fn launch() -> anyhow::Result<Self> {
        let config = BrowserConfig::builder()
            .build()
            .map_err(|err| anyhow::anyhow!("build browser config: {err}"))?;

        let (browser, mut events) = Browser::launch(config).await.context("launch chromium")?;
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("open browser page")?;

        Ok(Self {
            browser,
            handler,
            page,
        })
    }

    pub async fn close(mut self) -> anyhow::Result<()> {
        self.browser.close().await.context("close browser")?;
        self.handler.abort();
        Ok(())
    }

    async fn dismiss_overlays(&self) {
        let Ok(closers) = self.page.find_elements(OVERLAY_CLOSE_SELECTOR).await else {
            return;
        };
        if let Some(close) = closers.first()
            && let Err(err) = close.click().await
        {
            tracing::debug!(%err, "overlay dismissal click failed");
        }
    }
}

#[async_trait]
impl DomSession for BrowserSession {
    type Node = Element;

    async fn goto(&mut self, url: &str) -> Result<(), DomError> {
        self.page
            .goto(url)
            .await
            .map_err(|err| DomError::Navigation(format!("{url}: {err}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|err| DomError::Navigation(format!("{url}: {err}")))?;
        self.dismiss_overlays().await;
        Ok(())
    }

    async fn query_all(
        &self,
        scope: Option<&Element>,
        selector: &str,
    ) -> Result<Vec<Element>, DomError> {
        let found = match scope {
            Some(element) => element.find_elements(selector).await,
            None => self.page.find_elements(selector).await,
        };
        found.map_err(|err| DomError::Query(format!("{selector}: {err}")))
    }

    async fn text_content(&self, node: &Element) -> Result<String, DomError> {
        let text = node
            .inner_text()
            .await
            .map_err(|err| DomError::Query(format!("read text: {err}")))?;
        Ok(text.unwrap_or_default())
    }
}
