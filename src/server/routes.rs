use std::path::Path as FsPath;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::analysis::analyze;
use crate::models::AnalysisReport;
use crate::transcribe::{MAX_AUDIO_BYTES, extract_audio};

use super::AppState;
use super::error::ApiError;

/// Multipart field carrying the uploaded video
const VIDEO_FIELD: &str = "video";

/// Upload size ceiling; the audio limit is enforced separately after
/// extraction, this only bounds the raw video body
const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub id: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(liveness))
        .route("/video", post(upload_video))
        .route("/video/{id}", get(get_analysis))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state)
}

async fn liveness(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "message": "basira analysis service is running",
        "transcription_available": state.transcriber.is_some(),
    }))
}

async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let transcriber = state
        .transcriber
        .as_ref()
        .ok_or(ApiError::TranscriberUnavailable)?;

    let (video_path, original_name) = save_upload(multipart, &state).await?;
    info!(path = ?video_path, "video upload saved");

    let audio_path = extract_audio(&video_path, &state.upload_dir)
        .await
        .map_err(|e| ApiError::Internal(e.context("Audio extraction failed")))?;

    let audio = tokio::fs::read(&audio_path)
        .await
        .context("Failed to read extracted audio")
        .map_err(ApiError::Internal)?;
    if audio.len() as u64 > MAX_AUDIO_BYTES {
        return Err(ApiError::AudioTooLarge);
    }

    info!(bytes = audio.len(), "starting transcription");
    let transcript = transcriber.transcribe(audio, &original_name).await?;
    info!(segments = transcript.len(), "transcription complete");

    let report = analyze(&transcript, state.translator.as_ref()).await;
    let id = state.store.put(report);
    info!(%id, "analysis stored");

    Ok(Json(UploadResponse {
        message: "Video processed successfully".to_string(),
        id,
    }))
}

async fn get_analysis(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisReport>, ApiError> {
    state.store.get(&id).map(Json).ok_or(ApiError::NotFound)
}

/// Persist the uploaded video field under a uuid-prefixed name.
///
/// Returns the saved path and the client's file name (basename only, so a
/// crafted name cannot escape the upload directory).
async fn save_upload(
    mut multipart: Multipart,
    state: &AppState,
) -> Result<(std::path::PathBuf, String), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadUpload(e.to_string()))?
    {
        if field.name() != Some(VIDEO_FIELD) {
            continue;
        }

        let original_name = field
            .file_name()
            .and_then(|name| FsPath::new(name).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or("upload.mp4")
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadUpload(e.to_string()))?;
        if data.is_empty() {
            return Err(ApiError::BadUpload("empty video payload".to_string()));
        }

        let path = state
            .upload_dir
            .join(format!("{}_{}", uuid::Uuid::new_v4().simple(), original_name));
        tokio::fs::write(&path, &data)
            .await
            .context("Failed to persist upload")
            .map_err(ApiError::Internal)?;

        return Ok((path, original_name));
    }

    Err(ApiError::BadUpload(format!(
        "missing multipart field '{VIDEO_FIELD}'"
    )))
}
