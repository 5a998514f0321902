use crate::client::errors::ClientError;
use crate::client::state::ResizeSubmission;
use crate::resize::codec::ImageCodec;
use crate::resize::errors::ResizeError;
use crate::resize::percentage::Percentage;
use crate::resize::requests::ResizeRequest;
use crate::resize::service::ResizeService;
use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use url::Url;

pub const RESIZE_ENDPOINT: &str = "api/resize";
const GENERIC_FAILURE: &str = "Resize failed";

/// Transport used by the client to reach the resize service.
#[async_trait]
pub trait ResizeApi: Send + Sync {
    async fn resize(&self, submission: ResizeSubmission) -> Result<Bytes, ClientError>;
}

/// Calls the service in-process, skipping HTTP entirely.
pub struct LocalResizeApi<C> {
    service: ResizeService<C>,
}

impl<C: ImageCodec> LocalResizeApi<C> {
    pub fn new(service: ResizeService<C>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<C: ImageCodec> ResizeApi for LocalResizeApi<C> {
    async fn resize(&self, submission: ResizeSubmission) -> Result<Bytes, ClientError> {
        let percentage =
            Percentage::parse(Some(submission.percentage.as_str())).map_err(rejected)?;
        let request = ResizeRequest {
            image_bytes: submission.image.bytes,
            original_filename: submission.image.name,
            percentage,
        };
        let result = self.service.resize(request).await.map_err(rejected)?;
        Ok(Bytes::from(result.encoded_bytes))
    }
}

fn rejected(err: ResizeError) -> ClientError {
    ClientError::Rejected(err.to_string())
}

/// Talks to a remote service over HTTP.
pub struct HttpResizeApi {
    http_client: reqwest::Client,
    endpoint: Url,
}

impl HttpResizeApi {
    pub fn new(service_url: &Url) -> Result<Self, ClientError> {
        Ok(Self {
            http_client: reqwest::Client::new(),
            endpoint: service_url.join(RESIZE_ENDPOINT)?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

#[async_trait]
impl ResizeApi for HttpResizeApi {
    async fn resize(&self, submission: ResizeSubmission) -> Result<Bytes, ClientError> {
        let image_part = Part::stream(submission.image.bytes)
            .file_name(submission.image.name)
            .mime_str(&submission.image.content_type)?;
        let form = Form::new()
            .part("image", image_part)
            .text("percentage", submission.percentage);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.bytes().await?);
        }

        let status = response.status();
        let raw_body = response.bytes().await?;
        let body = serde_json::from_slice::<ErrorBody>(&raw_body).unwrap_or_default();
        tracing::debug!(status = status.as_u16(), ?body, "Resize service rejected the request.");
        let message = body
            .message
            .or(body.error)
            .unwrap_or_else(|| String::from(GENERIC_FAILURE));
        Err(ClientError::Rejected(message))
    }
}
