use crate::resize::errors::ResizeError;
use crate::resize::filename::FALLBACK_FILENAME;
use crate::resize::percentage::Percentage;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};

pub const IMAGE_FIELD: &str = "image";
pub const PERCENTAGE_FIELD: &str = "percentage";

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Raw multipart submission, before any validation.
#[derive(Debug, Default)]
pub struct ResizeForm {
    pub image: Option<UploadedImage>,
    pub percentage: Option<String>,
}

impl ResizeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ResizeError> {
        let mut form = ResizeForm::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(IMAGE_FIELD) if form.image.is_none() => {
                    let file_name = field
                        .file_name()
                        .filter(|name| !name.is_empty())
                        .map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(invalid_form)?;
                    // Browsers submit an untouched file input as a nameless, empty part.
                    if file_name.is_none() && bytes.is_empty() {
                        continue;
                    }
                    let file_name = file_name.unwrap_or_else(|| FALLBACK_FILENAME.to_string());
                    form.image = Some(UploadedImage {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                Some(PERCENTAGE_FIELD) if form.percentage.is_none() => {
                    form.percentage = Some(field.text().await.map_err(invalid_form)?);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

#[async_trait]
impl<S> FromRequest<S> for ResizeForm
where
    S: Send + Sync,
{
    type Rejection = ResizeError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let multipart = Multipart::from_request(request, state)
            .await
            .map_err(|rejection| ResizeError::InvalidForm {
                status: rejection.status(),
                reason: rejection.body_text(),
            })?;
        Self::from_multipart(multipart).await
    }
}

fn invalid_form(err: MultipartError) -> ResizeError {
    ResizeError::InvalidForm {
        status: err.status(),
        reason: err.body_text(),
    }
}

/// A submission that passed input validation.
#[derive(Debug, Clone)]
pub struct ResizeRequest {
    pub image_bytes: Bytes,
    pub original_filename: String,
    pub percentage: Percentage,
}

impl TryFrom<ResizeForm> for ResizeRequest {
    type Error = ResizeError;

    fn try_from(form: ResizeForm) -> Result<Self, Self::Error> {
        let image = form.image.ok_or(ResizeError::NoImage)?;
        let percentage = Percentage::parse(form.percentage.as_deref())?;
        Ok(ResizeRequest {
            image_bytes: image.bytes,
            original_filename: image.file_name,
            percentage,
        })
    }
}
