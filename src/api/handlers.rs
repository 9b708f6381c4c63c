use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use std::collections::BTreeMap;
use tracing::info;

/// Byte-exact health payload; serializing `{"alive": true}` through serde
/// would drop the space.
pub const HEALTH_BODY: &str = r#"{"alive": true}"#;

pub async fn root(uri: Uri) -> StatusCode {
    info!(path = uri.path(), "Endpoint called");
    StatusCode::OK
}

pub async fn health(uri: Uri) -> impl IntoResponse {
    info!(path = uri.path(), "Endpoint called");
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        HEALTH_BODY,
    )
}

pub async fn metrics(
    State(state): State<AppState>,
    uri: Uri,
) -> Json<BTreeMap<String, u64>> {
    info!(path = uri.path(), "Endpoint called");
    Json(state.metrics.snapshot())
}
