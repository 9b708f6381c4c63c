use crate::{api::handlers, AppState};
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root).post(handlers::root))
        .route("/healthz", get(handlers::health))
        .route("/metricsz", get(handlers::metrics))
}
