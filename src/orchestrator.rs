use tracing::{error, info, warn};

use crate::acquire::Acquirer;
use crate::models::{AcquisitionResult, ProductRecord};
use crate::utils::error::AppError;

/// Phases of one acquisition run. Escalation is an explicit transition here,
/// not a side effect of error handling: a static success with zero records
/// moves to `TryingDynamic` exactly like a static fault does.
enum AcquisitionState {
    TryingStatic,
    TryingDynamic,
    Done(Vec<ProductRecord>),
}

/// Sequences the cheap strategy, escalates to the expensive one when the
/// cheap result is a fault or inconclusive (empty), and stamps the final
/// result. Strategies run strictly in sequence, never concurrently.
pub struct Orchestrator {
    target_url: String,
    static_acquirer: Box<dyn Acquirer>,
    dynamic_acquirer: Box<dyn Acquirer>,
}

impl Orchestrator {
    pub fn new(
        target_url: impl Into<String>,
        static_acquirer: Box<dyn Acquirer>,
        dynamic_acquirer: Box<dyn Acquirer>,
    ) -> Self {
        Self {
            target_url: target_url.into(),
            static_acquirer,
            dynamic_acquirer,
        }
    }

    /// Runs one acquisition to completion.
    ///
    /// An empty sequence from the static tier is inconclusive (the page may
    /// be script-rendered) and escalates. An empty sequence from the dynamic
    /// tier is authoritative: both tiers agree there is nothing to show, and
    /// that is surfaced as [`AppError::NoProductsFound`] rather than a silent
    /// empty success.
    pub async fn run(&self) -> Result<AcquisitionResult, AppError> {
        let mut state = AcquisitionState::TryingStatic;

        loop {
            state = match state {
                AcquisitionState::TryingStatic => {
                    match self.static_acquirer.acquire(&self.target_url).await {
                        Ok(records) if !records.is_empty() => AcquisitionState::Done(records),
                        Ok(_) => {
                            info!("static acquisition found no records, escalating");
                            AcquisitionState::TryingDynamic
                        }
                        Err(e) => {
                            warn!("static acquisition failed, escalating: {}", e);
                            AcquisitionState::TryingDynamic
                        }
                    }
                }
                AcquisitionState::TryingDynamic => {
                    match self.dynamic_acquirer.acquire(&self.target_url).await {
                        Ok(records) => AcquisitionState::Done(records),
                        Err(e) => {
                            error!("dynamic acquisition failed: {}", e);
                            AcquisitionState::Done(Vec::new())
                        }
                    }
                }
                AcquisitionState::Done(records) => {
                    if records.is_empty() {
                        return Err(AppError::NoProductsFound);
                    }
                    let result = AcquisitionResult::new(records);
                    info!(
                        "acquired {} records at {}",
                        result.records.len(),
                        result.timestamp
                    );
                    return Ok(result);
                }
            };
        }
    }
}
