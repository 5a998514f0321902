use crate::app_context::AppContext;
use crate::resize::codec::ImageCodec;
use crate::resize::errors::ResizeError;
use crate::resize::requests::{ResizeForm, ResizeRequest};
use crate::resize::service::ResizeResult;
use axum::extract::State;

pub async fn resize<C>(
    State(app_context): State<AppContext<C>>,
    form: ResizeForm,
) -> Result<ResizeResult, ResizeError>
where
    C: ImageCodec,
{
    let request = ResizeRequest::try_from(form)?;
    app_context.resize_service.resize(request).await
}

pub async fn method_not_allowed() -> ResizeError {
    ResizeError::MethodNotAllowed
}
