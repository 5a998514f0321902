use crate::app_context;
use crate::cli::tests::fake_serve_args;
use crate::client::api::{HttpResizeApi, LocalResizeApi, ResizeApi};
use crate::client::cli::resize_file;
use crate::client::errors::ClientError;
use crate::client::state::{
    Effect, ImageSlot, Msg, Phase, ResizeSubmission, ResizerState, SourceImage,
};
use crate::http::router;
use crate::http::tests::png_bytes;
use crate::resize::codec::ImageCrateCodec;
use crate::resize::service::ResizeService;
use axum::body::Bytes;
use url::Url;

fn source(name: &str) -> SourceImage {
    SourceImage {
        name: name.to_string(),
        content_type: String::from("image/png"),
        bytes: Bytes::from(png_bytes(200, 100)),
    }
}

async fn spawn_service() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind a test listener.");
    let address = listener.local_addr().unwrap();
    let router = router::new(&fake_serve_args(), app_context::init());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{}", address)).unwrap()
}

#[test]
fn test_selecting_a_file_sanitizes_and_resets() {
    let mut state = ResizerState {
        error: Some(String::from("old failure")),
        preview: Some(ImageSlot::Resized),
        ..ResizerState::default()
    };
    assert_eq!(state.phase(), Phase::Idle);

    let effect = state.update(Msg::FileSelected(source("my photo!.png")));

    assert_eq!(effect, None);
    assert_eq!(state.phase(), Phase::FileSelected);
    assert_eq!(state.source.as_ref().unwrap().name, "my_photo_.png");
    assert_eq!(state.error, None);
    assert_eq!(state.result, None);
    assert_eq!(state.preview, None);
    assert_eq!(state.percentage, "33");
}

#[test]
fn test_resize_cycle_success() {
    let mut state = ResizerState::default();
    state.update(Msg::FileSelected(source("cat.png")));
    state.update(Msg::PercentageChanged(String::from("50")));

    let effect = state.update(Msg::ResizeRequested);

    assert_eq!(
        effect,
        Some(Effect::Submit(ResizeSubmission {
            image: state.source.clone().unwrap(),
            percentage: String::from("50"),
        }))
    );
    assert_eq!(state.phase(), Phase::Resizing);
    // The trigger is disabled while a request is outstanding.
    assert_eq!(state.update(Msg::ResizeRequested), None);

    state.update(Msg::ResizeSucceeded(Bytes::from_static(b"jpeg")));

    assert_eq!(state.phase(), Phase::FileSelected);
    let result = state.result.as_ref().unwrap();
    assert_eq!(result.filename, "resized_cat.png");
    assert_eq!(state.toasts.last().unwrap().title, "Image resized successfully!");
    assert!(!state.toasts.last().unwrap().destructive);
}

#[test]
fn test_resize_cycle_failure() {
    let mut state = ResizerState::default();
    state.update(Msg::FileSelected(source("cat.png")));
    state.update(Msg::ResizeRequested);

    state.update(Msg::ResizeFailed(String::from("Invalid percentage value")));

    assert_eq!(state.phase(), Phase::FileSelected);
    assert_eq!(state.error.as_deref(), Some("Invalid percentage value"));
    let toast = state.toasts.last().unwrap();
    assert_eq!(toast.title, "Error resizing image");
    assert!(toast.destructive);
}

#[test]
fn test_resize_without_file_does_nothing() {
    let mut state = ResizerState::default();

    assert_eq!(state.update(Msg::ResizeRequested), None);
    assert!(!state.in_flight);
}

#[test]
fn test_new_file_discards_previous_result() {
    let mut state = ResizerState::default();
    state.update(Msg::FileSelected(source("a.png")));
    state.update(Msg::ResizeRequested);
    state.update(Msg::ResizeSucceeded(Bytes::from_static(b"jpeg")));

    state.update(Msg::FileSelected(source("b c.png")));

    assert_eq!(state.result, None);
    assert_eq!(state.source.as_ref().unwrap().name, "b_c.png");
}

#[test]
fn test_copy_download_and_preview_actions() {
    let mut state = ResizerState::default();
    assert_eq!(state.update(Msg::CopyRequested(ImageSlot::Original)), None);
    assert_eq!(state.update(Msg::DownloadRequested(ImageSlot::Resized)), None);

    state.update(Msg::FileSelected(source("holiday pic.png")));
    state.update(Msg::ResizeRequested);
    state.update(Msg::ResizeSucceeded(Bytes::from_static(b"jpeg")));

    assert_eq!(
        state.update(Msg::CopyRequested(ImageSlot::Resized)),
        Some(Effect::CopyToClipboard(ImageSlot::Resized))
    );
    state.update(Msg::CopyFinished(Ok(())));
    assert_eq!(state.toasts.last().unwrap().title, "URL copied!");
    state.update(Msg::CopyFinished(Err(String::from("denied"))));
    assert_eq!(state.toasts.last().unwrap().title, "Failed to copy URL");

    match state.update(Msg::DownloadRequested(ImageSlot::Original)) {
        Some(Effect::Download { filename, .. }) => assert_eq!(filename, "holiday_pic.png"),
        other => panic!("Unexpected effect: {:?}", other),
    }
    match state.update(Msg::DownloadRequested(ImageSlot::Resized)) {
        Some(Effect::Download { filename, bytes }) => {
            assert_eq!(filename, "resized_holiday_pic.png");
            assert_eq!(bytes, Bytes::from_static(b"jpeg"));
        }
        other => panic!("Unexpected effect: {:?}", other),
    }

    state.update(Msg::PreviewOpened(ImageSlot::Resized));
    assert_eq!(state.preview, Some(ImageSlot::Resized));
    state.update(Msg::PreviewClosed);
    assert_eq!(state.preview, None);
}

#[tokio::test]
async fn test_local_api_reports_service_errors() {
    let api = LocalResizeApi::new(ResizeService::new(ImageCrateCodec));
    let submission = ResizeSubmission {
        image: source("a.png"),
        percentage: String::from("250"),
    };

    let err = api.resize(submission).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid percentage value");
}

#[tokio::test]
async fn test_http_api_round_trip() {
    let service_url = spawn_service().await;
    let api = HttpResizeApi::new(&service_url).unwrap();

    let bytes = api
        .resize(ResizeSubmission {
            image: source("a.png"),
            percentage: String::from("50"),
        })
        .await
        .unwrap();

    let resized = image::load_from_memory(&bytes).unwrap();
    assert_eq!((resized.width(), resized.height()), (100, 50));
}

#[tokio::test]
async fn test_http_api_surfaces_processing_message() {
    let service_url = spawn_service().await;
    let api = HttpResizeApi::new(&service_url).unwrap();
    let broken = SourceImage {
        bytes: Bytes::from_static(b"not an image"),
        ..source("a.png")
    };

    let err = api
        .resize(ResizeSubmission {
            image: broken,
            percentage: String::from("50"),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rejected(_)));
    assert_ne!(err.to_string(), "Error processing image");
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_http_api_falls_back_to_error_summary() {
    let service_url = spawn_service().await;
    let api = HttpResizeApi::new(&service_url).unwrap();

    let err = api
        .resize(ResizeSubmission {
            image: source("a.png"),
            percentage: String::from("0"),
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid percentage value");
}

#[tokio::test]
async fn test_resize_file_saves_under_sanitized_name() {
    let service_url = spawn_service().await;
    let api = HttpResizeApi::new(&service_url).unwrap();
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("my photo!.png");
    std::fs::write(&input, png_bytes(200, 100)).unwrap();

    let saved = resize_file(&api, &input, "50", output_dir.path())
        .await
        .unwrap();

    assert_eq!(saved, output_dir.path().join("resized_my_photo_.png"));
    // The extension is kept from the upload, the content is always JPEG.
    let resized = image::load_from_memory(&std::fs::read(&saved).unwrap()).unwrap();
    assert_eq!((resized.width(), resized.height()), (100, 50));
}
