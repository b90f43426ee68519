//! In-process mock HerdLink backend for integration tests.
//!
//! Tests hand [`MockBackend::spawn`] an `axum::Router` describing the
//! responses they need; the backend binds an ephemeral localhost port and
//! shuts down gracefully on [`MockBackend::stop`] (or on drop).

use anyhow::Context as _;
use axum::Json;
use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub struct MockBackend {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MockBackend {
    /// Serve `app` on an ephemeral localhost port.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the port or reading its address fails.
    pub async fn spawn(app: Router) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind ephemeral port")?;
        let addr = listener.local_addr().context("local_addr")?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let handle = tokio::spawn(async move {
            let _ = server.await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shut the server down and wait for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the server task panicked.
    pub async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.context("mock backend task join")?;
        }
        Ok(())
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// `{success: true, data}` — the backend's happy-path envelope.
#[must_use]
pub fn ok_envelope(data: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

/// `{success: false, error}` — failure with explicit error text.
#[must_use]
pub fn error_envelope(error: &str) -> Json<Value> {
    Json(json!({ "success": false, "error": error }))
}

/// `{success: false}` — failure without saying why.
#[must_use]
pub fn failed_envelope() -> Json<Value> {
    Json(json!({ "success": false }))
}
