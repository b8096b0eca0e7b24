pub mod channels;

use axum::Json;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;

// Re-export all handlers
pub use channels::{add_channel, get_channel, get_unverified_channels, update_verification};

/// Serve the OpenAPI document
pub async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
