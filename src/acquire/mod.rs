use async_trait::async_trait;

use crate::models::ProductRecord;
use crate::utils::error::AcquireError;

pub mod dynamic;
pub mod static_fetch;

pub use dynamic::DynamicAcquirer;
pub use static_fetch::StaticAcquirer;

/// One strategy for obtaining a rendered document and extracting its records.
///
/// Both implementations satisfy the same extraction contract: the returned
/// sequence mirrors document order, every record carries all three fields,
/// and an empty page yields `Ok(vec![])` rather than an error. How empty is
/// interpreted belongs to the orchestrator, not the strategy.
#[async_trait]
pub trait Acquirer: Send + Sync {
    /// Strategy name, for logging.
    fn name(&self) -> &'static str;

    /// Runs one acquisition against the target URL. Any lower-layer fault is
    /// folded into a single classified [`AcquireError`].
    async fn acquire(&self, url: &str) -> Result<Vec<ProductRecord>, AcquireError>;
}
