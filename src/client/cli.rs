use crate::cli::ResizeArgs;
use crate::client::api::{HttpResizeApi, ResizeApi};
use crate::client::errors::ClientError;
use crate::client::state::{Effect, ImageSlot, Msg, ResizerState, SourceImage, Toast};
use axum::body::Bytes;
use image::ImageFormat;
use std::path::{Path, PathBuf};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn run(args: &ResizeArgs) -> Result<PathBuf, ClientError> {
    let api = HttpResizeApi::new(&args.service_url)?;
    resize_file(&api, &args.file, &args.percentage, &args.output_dir).await
}

/// Drives the client state machine for a single file and saves the result into `output_dir`.
pub async fn resize_file(
    api: &dyn ResizeApi,
    file: &Path,
    percentage: &str,
    output_dir: &Path,
) -> Result<PathBuf, ClientError> {
    let source = read_source(file).await?;
    let mut state = ResizerState::default();

    state.update(Msg::FileSelected(source));
    state.update(Msg::PercentageChanged(percentage.to_string()));
    if let Some(Effect::Submit(submission)) = state.update(Msg::ResizeRequested) {
        tracing::info!(
            file = %file.display(),
            percentage = %submission.percentage,
            "Submitting image for resizing."
        );
        let msg = match api.resize(submission).await {
            Ok(bytes) => Msg::ResizeSucceeded(bytes),
            Err(err) => Msg::ResizeFailed(err.to_string()),
        };
        state.update(msg);
    }
    report_toasts(&state.toasts);

    if let Some(error) = state.error.take() {
        return Err(ClientError::Rejected(error));
    }
    match state.update(Msg::DownloadRequested(ImageSlot::Resized)) {
        Some(Effect::Download { filename, bytes }) => save(output_dir, &filename, &bytes).await,
        _ => Err(ClientError::Rejected(String::from("No resized image was produced"))),
    }
}

async fn read_source(file: &Path) -> Result<SourceImage, ClientError> {
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ClientError::NoFileName(file.to_path_buf()))?;
    let bytes = tokio::fs::read(file)
        .await
        .map_err(|source| ClientError::Io {
            path: file.to_path_buf(),
            source,
        })?;
    let content_type = ImageFormat::from_path(file)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE);

    Ok(SourceImage {
        name,
        content_type: content_type.to_string(),
        bytes: Bytes::from(bytes),
    })
}

async fn save(output_dir: &Path, filename: &str, bytes: &Bytes) -> Result<PathBuf, ClientError> {
    let path = output_dir.join(filename);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| ClientError::Io {
            path: path.clone(),
            source,
        })?;
    tracing::info!(path = %path.display(), size = bytes.len(), "Saved resized image.");
    Ok(path)
}

fn report_toasts(toasts: &[Toast]) {
    for toast in toasts {
        if toast.destructive {
            tracing::error!(title = %toast.title, "{}", toast.description);
        } else {
            tracing::info!(title = %toast.title, "{}", toast.description);
        }
    }
}
