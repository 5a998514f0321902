use crate::resize::codec::{Dimensions, ImageCodec};
use crate::resize::errors::ResizeError;
use crate::resize::filename;
use crate::resize::requests::ResizeRequest;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeResult {
    pub encoded_bytes: Vec<u8>,
    pub download_filename: String,
    pub bounds: Dimensions,
}

/// Stateless resize pipeline: read dimensions, scale them, resample and re-encode.
pub struct ResizeService<C> {
    codec: Arc<C>,
}

impl<C> Clone for ResizeService<C> {
    fn clone(&self) -> Self {
        Self {
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<C: ImageCodec> ResizeService<C> {
    pub fn new(codec: C) -> Self {
        Self {
            codec: Arc::new(codec),
        }
    }

    pub async fn resize(&self, request: ResizeRequest) -> Result<ResizeResult, ResizeError> {
        let ResizeRequest {
            image_bytes,
            original_filename,
            percentage,
        } = request;
        let codec = Arc::clone(&self.codec);

        let pipeline = move || -> Result<_, ResizeError> {
            let intrinsic = codec.dimensions(&image_bytes)?;
            if intrinsic.width == 0 || intrinsic.height == 0 {
                return Err(ResizeError::MissingDimensions);
            }
            let bounds = percentage.scale_dimensions(intrinsic);
            let encoded_bytes = codec.resize(&image_bytes, bounds)?;
            Ok((intrinsic, bounds, encoded_bytes))
        };
        let (intrinsic, bounds, encoded_bytes) = tokio::task::spawn_blocking(pipeline).await??;

        tracing::info!(
            task = "image_resize",
            percentage = percentage.value(),
            original_width = intrinsic.width,
            original_height = intrinsic.height,
            target_width = bounds.width,
            target_height = bounds.height,
            output_bytes = encoded_bytes.len(),
        );

        Ok(ResizeResult {
            encoded_bytes,
            download_filename: filename::resized(&original_filename),
            bounds,
        })
    }
}
