use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::models::{AcquisitionResult, ProductRecord};

use super::responses::{ApiResponse, AppError};
use super::AppState;

/// Message shown to users on terminal failure. Internal fault detail stays in
/// the logs.
const RETRY_MESSAGE: &str = "Unable to fetch products at this time. Please try again later.";

#[derive(Template)]
#[template(path = "catalog.html")]
struct CatalogTemplate {
    records: Vec<ProductRecord>,
    timestamp: String,
    error: Option<String>,
}

/// Runs one acquisition and renders the catalog page. Terminal failure
/// renders an empty list plus a generic retry message with a 500 status.
pub async fn catalog_page(State(state): State<AppState>) -> Response {
    match state.orchestrator.run().await {
        Ok(result) => {
            tracing::info!("rendering catalog with {} records", result.records.len());
            let template = CatalogTemplate {
                timestamp: result.timestamp.to_rfc3339(),
                records: result.records,
                error: None,
            };
            template.into_response()
        }
        Err(e) => {
            tracing::error!("acquisition failed: {}", e);
            let template = CatalogTemplate {
                records: Vec::new(),
                timestamp: String::new(),
                error: Some(RETRY_MESSAGE.to_string()),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, template).into_response()
        }
    }
}

/// JSON variant of the catalog route.
pub async fn fetch_catalog(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AcquisitionResult>>, AppError> {
    match state.orchestrator.run().await {
        Ok(result) => {
            tracing::info!("acquired {} records", result.records.len());
            Ok(Json(ApiResponse::success(result)))
        }
        Err(e) => {
            tracing::error!("acquisition failed: {}", e);
            Err(AppError::unavailable(RETRY_MESSAGE))
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "catalog-scout",
        "target": state.config.scraper.target_url
    }))
}
