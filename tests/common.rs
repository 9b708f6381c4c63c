use anyhow::Result;
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt as _;
use imageswap_webhook::{app, AppState};

pub fn test_app() -> Router {
    app(AppState::new())
}

pub async fn read_body(response: axum::response::Response) -> Result<Bytes> {
    let collected = response.into_body().collect().await?;
    Ok(collected.to_bytes())
}
