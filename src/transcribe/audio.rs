use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;
use tracing::debug;

/// Extract the audio track of a video into a 16 kHz mono WAV.
///
/// Shells out to `ffmpeg`; the output lands in `output_dir` under a
/// uuid-prefixed name so concurrent extractions never collide.
pub async fn extract_audio(video_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = format!("{}_audio.wav", uuid::Uuid::new_v4().simple());
    let output_path = output_dir.join(file_name);

    debug!(input = ?video_path, output = ?output_path, "extracting audio track");

    let status = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(video_path)
        .args(["-vn", "-acodec", "pcm_s16le", "-ar", "16000", "-ac", "1"])
        .arg(&output_path)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .context("Failed to run ffmpeg - is it installed?")?;

    if !status.success() {
        bail!("ffmpeg exited with status {status} for {video_path:?}");
    }

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_audio(Path::new("/nonexistent/video.mp4"), dir.path()).await;
        assert!(result.is_err());
    }
}
