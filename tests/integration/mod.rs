// Integration tests for Catalog Scout
// These tests verify that the acquisition tiers and the web surface work
// together correctly.

pub mod web_tests;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

pub use catalog_scout::acquire::Acquirer;
pub use catalog_scout::config::{AppConfig, ScraperConfig, ServerConfig};
pub use catalog_scout::utils::error::AcquireError;
pub use catalog_scout::web::{create_router, AppState};
pub use catalog_scout::{Orchestrator, ProductRecord};

/// Test configuration for integration tests
pub fn get_test_config(target_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 4005,
        },
        scraper: ScraperConfig {
            target_url: target_url.to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            request_timeout: 10,
            navigation_timeout: 10,
            selector_timeout: 2,
            chrome_path: None,
        },
    }
}

pub fn record(title: &str, price: &str, image: &str) -> ProductRecord {
    ProductRecord {
        title: title.to_string(),
        price: price.to_string(),
        image_url: image.to_string(),
    }
}

/// Catalog page markup in the target's structural pattern.
pub fn catalog_markup(items: &[(&str, &str, &str)]) -> String {
    let cards: String = items
        .iter()
        .map(|(title, price, image)| {
            format!(
                r#"<div class="a-list-item">
                    <span class="octopus-pc-asin-title">{title}</span>
                    <span class="a-price"><span class="a-offscreen">{price}</span></span>
                    <img src="{image}">
                </div>"#
            )
        })
        .collect();
    format!(
        r#"<html><body><div class="a-section octopus-pc-card-content">{cards}</div></body></html>"#
    )
}

pub enum StubOutcome {
    Records(Vec<ProductRecord>),
    Fault,
}

/// Scripted acquirer with an invocation counter, for exercising the
/// orchestrator and web surface without network or Chrome.
pub struct StubAcquirer {
    name: &'static str,
    outcome: StubOutcome,
    pub calls: Arc<AtomicUsize>,
}

impl StubAcquirer {
    pub fn boxed(name: &'static str, outcome: StubOutcome) -> (Box<dyn Acquirer>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let stub = Self {
            name,
            outcome,
            calls: Arc::clone(&calls),
        };
        (Box::new(stub), calls)
    }
}

#[async_trait]
impl Acquirer for StubAcquirer {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn acquire(&self, _url: &str) -> Result<Vec<ProductRecord>, AcquireError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Records(records) => Ok(records.clone()),
            StubOutcome::Fault => Err(AcquireError::SelectorWait(
                "container never appeared".to_string(),
            )),
        }
    }
}

/// Application state backed by scripted acquirers.
pub fn stub_app_state(static_outcome: StubOutcome, dynamic_outcome: StubOutcome) -> AppState {
    let (static_acq, _) = StubAcquirer::boxed("static", static_outcome);
    let (dynamic_acq, _) = StubAcquirer::boxed("dynamic", dynamic_outcome);
    let orchestrator = Arc::new(Orchestrator::new(
        "https://example.com/catalog",
        static_acq,
        dynamic_acq,
    ));
    AppState {
        orchestrator,
        config: get_test_config("https://example.com/catalog"),
    }
}

pub fn stub_app(static_outcome: StubOutcome, dynamic_outcome: StubOutcome) -> axum::Router {
    create_router(stub_app_state(static_outcome, dynamic_outcome))
}
