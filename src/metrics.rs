use crate::AppState;
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: DashMap<String, u64>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self, route: &str) {
        *self.requests.entry(route.to_string()).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.requests
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

/// Records the matched path before the handler runs, so a `/metricsz`
/// response counts itself. Runs for any path-matched request: a 405 on a
/// registered path still counts, unmatched paths never reach this layer.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(matched) = request.extensions().get::<MatchedPath>() {
        state.metrics.record_request(matched.as_str());
    }
    next.run(request).await
}
