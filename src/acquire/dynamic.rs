use std::ffi::OsStr;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use tracing::debug;

use crate::acquire::Acquirer;
use crate::config::ScraperConfig;
use crate::extract;
use crate::models::ProductRecord;
use crate::utils::error::AcquireError;

/// The expensive path: a full browser session that executes the page's
/// scripts before extracting from the live DOM.
///
/// Each call owns its session exclusively. The `Browser` is scoped to the
/// call and its Chrome process is killed when it drops, so every exit path
/// (success, fault, timeout) releases the session before the orchestrator
/// regains control.
pub struct DynamicAcquirer {
    config: ScraperConfig,
}

impl DynamicAcquirer {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    fn launch(&self) -> Result<Browser, AcquireError> {
        let mut launch_options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false) // Needed in containerized environments
            .args(vec![
                OsStr::new("--no-sandbox"),
                OsStr::new("--disable-setuid-sandbox"),
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-accelerated-2d-canvas"),
                OsStr::new("--disable-gpu"),
            ])
            .build()
            .map_err(|e| AcquireError::Launch(e.to_string()))?;

        if let Some(chrome_path) = &self.config.chrome_path {
            launch_options.path = Some(PathBuf::from(chrome_path));
        }

        Browser::new(launch_options).map_err(|e| AcquireError::Launch(e.to_string()))
    }

    fn render_and_extract(
        &self,
        browser: &Browser,
        url: &str,
    ) -> Result<Vec<ProductRecord>, AcquireError> {
        let tab = browser
            .new_tab()
            .map_err(|e| AcquireError::Launch(e.to_string()))?;

        tab.set_default_timeout(Duration::from_secs(self.config.navigation_timeout));
        tab.set_user_agent(&self.config.user_agent, None, None)
            .map_err(|e| AcquireError::Navigation(e.to_string()))?;

        tab.navigate_to(url)
            .map_err(|e| AcquireError::Navigation(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| AcquireError::Navigation(e.to_string()))?;

        // Shorter bound than navigation: the page responded, the question now
        // is whether the content container ever materializes.
        tab.wait_for_element_with_custom_timeout(
            extract::CARD_CONTENT,
            Duration::from_secs(self.config.selector_timeout),
        )
        .map_err(|e| AcquireError::SelectorWait(e.to_string()))?;

        let evaluated = tab
            .evaluate(&extract::extraction_script(), false)
            .map_err(|e| AcquireError::Extract(e.to_string()))?;

        let raw = evaluated
            .value
            .as_ref()
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .ok_or_else(|| AcquireError::Extract("extraction script returned no value".to_string()))?;

        records_from_script_output(&raw)
    }
}

/// Parses the serialized record list produced by the in-page script.
fn records_from_script_output(raw: &str) -> Result<Vec<ProductRecord>, AcquireError> {
    serde_json::from_str(raw).map_err(|e| AcquireError::Extract(e.to_string()))
}

#[async_trait]
impl Acquirer for DynamicAcquirer {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    async fn acquire(&self, url: &str) -> Result<Vec<ProductRecord>, AcquireError> {
        let browser = self.launch()?;
        debug!("browser session launched");

        let result = self.render_and_extract(&browser, url);

        // `browser` drops here on every path, killing the Chrome process; no
        // session survives the call.
        result
    }
}
