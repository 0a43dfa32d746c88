pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::store::ResultStore;
use crate::transcribe::GroqClient;
use crate::translate::Translator;

pub use error::ApiError;
pub use routes::router;

/// Shared dependencies for the HTTP handlers
pub struct AppState {
    /// Result store written once per processed upload
    pub store: Arc<dyn ResultStore>,
    /// Transcription client; `None` when the provider key is not configured
    pub transcriber: Option<GroqClient>,
    /// Segment translator used by the analysis passes
    pub translator: Arc<dyn Translator>,
    /// Directory for uploaded videos and extracted audio
    pub upload_dir: PathBuf,
}

/// Bind and run the analysis service until the process is stopped
pub async fn serve(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "analysis service listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
