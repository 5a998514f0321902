use crate::app_context::AppContext;
use crate::client::api::{LocalResizeApi, ResizeApi};
use crate::client::state::{Effect, Msg, ResizerState, SourceImage};
use crate::resize::codec::ImageCodec;
use crate::resize::errors::ResizeError;
use crate::resize::requests::ResizeForm;
use crate::ui::view;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use maud::Markup;

const SCRIPT: &str = include_str!("static/ui.js");
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn index() -> Markup {
    view::page(&ResizerState::default())
}

pub async fn script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], SCRIPT)
}

/// Replays the submitted form through the client state machine and renders the outcome.
pub async fn submit<C>(
    State(app_context): State<AppContext<C>>,
    form: Result<ResizeForm, ResizeError>,
) -> Markup
where
    C: ImageCodec,
{
    let mut state = ResizerState::default();
    let form = match form {
        Ok(form) => form,
        Err(err) => {
            state.update(Msg::ResizeFailed(err.to_string()));
            return view::page(&state);
        }
    };

    if let Some(image) = form.image {
        state.update(Msg::FileSelected(SourceImage {
            name: image.file_name,
            content_type: image
                .content_type
                .unwrap_or_else(|| String::from(FALLBACK_CONTENT_TYPE)),
            bytes: image.bytes,
        }));
    }
    if let Some(percentage) = form.percentage {
        state.update(Msg::PercentageChanged(percentage));
    }

    match state.update(Msg::ResizeRequested) {
        Some(Effect::Submit(submission)) => {
            let api = LocalResizeApi::new(app_context.resize_service.clone());
            let msg = match api.resize(submission).await {
                Ok(bytes) => Msg::ResizeSucceeded(bytes),
                Err(err) => Msg::ResizeFailed(err.to_string()),
            };
            state.update(msg);
        }
        _ => {
            state.update(Msg::ResizeFailed(ResizeError::NoImage.to_string()));
        }
    }

    view::page(&state)
}
