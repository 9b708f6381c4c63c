use axum::{middleware, Router};
use axum_server::Handle;
use futures::Future;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod shutdown;

use errors::ServerError;
use metrics::MetricsRegistry;

#[derive(Clone, Default)]
pub struct AppState {
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::routes())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_requests,
        ))
        .layer(TimeoutLayer::new(config::REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds synchronously, so an unusable address surfaces before signal-wait.
pub async fn serve(
    addr: &str,
    handle: Handle<SocketAddr>,
) -> Result<(impl Future<Output = Result<(), std::io::Error>>, SocketAddr), ServerError> {
    let app = app(AppState::new());

    let addr: SocketAddr = addr.parse().map_err(|source| ServerError::InvalidAddress {
        addr: addr.to_string(),
        source,
    })?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let actual_addr = listener.local_addr()?;
    let std_listener = listener.into_std()?;

    let server_future = async move {
        axum_server::from_tcp(std_listener)
            .map_err(std::io::Error::other)?
            .handle(handle)
            .serve(app.into_make_service())
            .await
    };

    Ok((server_future, actual_addr))
}
