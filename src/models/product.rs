use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog item as displayed on the target page.
///
/// All three fields are always present; markup that lacks a sub-field yields
/// an empty string rather than an omitted field, so downstream rendering
/// never has to special-case partial records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: String,
    /// Price exactly as displayed, currency symbol included.
    pub price: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

/// Outcome of one acquisition run: records in document order plus the instant
/// the winning strategy returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionResult {
    pub records: Vec<ProductRecord>,
    pub timestamp: DateTime<Utc>,
}

impl AcquisitionResult {
    pub fn new(records: Vec<ProductRecord>) -> Self {
        Self {
            records,
            timestamp: Utc::now(),
        }
    }
}
