use thiserror::Error;

/// Classified faults from a single acquisition strategy.
///
/// Each acquirer folds its lower-layer failures into exactly one of these
/// before returning, so the orchestrator only ever sees classified faults.
#[derive(Error, Debug)]
pub enum AcquireError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("content container did not appear: {0}")]
    SelectorWait(String),

    #[error("in-page extraction failed: {0}")]
    Extract(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("no products found")]
    NoProductsFound,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
