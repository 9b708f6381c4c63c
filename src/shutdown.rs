use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;
#[cfg(not(unix))]
use tracing::error;

/// One-shot shutdown coordinator; clones share the same state.
#[derive(Clone)]
pub struct ShutdownController {
    token: CancellationToken,
    initiated: Arc<AtomicBool>,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` only for the call that initiated the shutdown.
    pub fn request(&self) -> bool {
        if self.initiated.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.token.cancel();
        true
    }

    pub fn is_requested(&self) -> bool {
        self.initiated.load(Ordering::SeqCst)
    }

    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}

impl Default for ShutdownController {
    fn default() -> Self {
        Self::new()
    }
}

/// Installs the SIGINT/SIGTERM streams up front so a failure surfaces as a
/// startup error instead of inside a spawned task.
#[cfg(unix)]
pub fn signal_listener(
    controller: ShutdownController,
) -> io::Result<impl Future<Output = ()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    Ok(async move {
        loop {
            tokio::select! {
                _ = sigint.recv() => {}
                _ = sigterm.recv() => {}
            }
            if !controller.request() {
                debug!("Shutdown already in progress; ignoring repeated signal");
            }
        }
    })
}

#[cfg(not(unix))]
pub fn signal_listener(
    controller: ShutdownController,
) -> io::Result<impl Future<Output = ()>> {
    Ok(async move {
        loop {
            if let Err(error) = tokio::signal::ctrl_c().await {
                error!(%error, "failed to listen for Ctrl+C");
                return;
            }
            if !controller.request() {
                debug!("Shutdown already in progress; ignoring repeated signal");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_initiates_shutdown() {
        let controller = ShutdownController::new();
        assert!(!controller.is_requested());
        assert!(controller.request());
        assert!(controller.is_requested());
    }

    #[test]
    fn test_repeated_requests_are_noops() {
        let controller = ShutdownController::new();
        assert!(controller.request());
        assert!(!controller.request());
        assert!(!controller.request());
    }

    #[test]
    fn test_clones_share_shutdown_state() {
        let controller = ShutdownController::new();
        let clone = controller.clone();
        assert!(clone.request());
        assert!(controller.is_requested());
        assert!(!controller.request());
    }

    #[tokio::test]
    async fn test_cancelled_completes_after_request() {
        let controller = ShutdownController::new();
        controller.request();
        controller.cancelled().await;
    }

    #[tokio::test]
    async fn test_cancelled_waits_for_request() {
        let controller = ShutdownController::new();
        let waiter = controller.clone();
        let task = tokio::spawn(async move {
            waiter.cancelled().await;
        });

        // Not yet requested: the task must still be pending.
        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        controller.request();
        task.await.unwrap();
    }
}
