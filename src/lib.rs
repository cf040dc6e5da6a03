pub mod acquire;
pub mod config;
pub mod extract;
pub mod models;
pub mod orchestrator;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use config::AppConfig;
pub use models::{AcquisitionResult, ProductRecord};
pub use orchestrator::Orchestrator;
pub use utils::error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;
