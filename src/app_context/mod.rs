use crate::resize::codec::{ImageCodec, ImageCrateCodec};
use crate::resize::service::ResizeService;

pub struct AppContext<C> {
    pub resize_service: ResizeService<C>,
}

impl<C> Clone for AppContext<C> {
    fn clone(&self) -> Self {
        Self {
            resize_service: self.resize_service.clone(),
        }
    }
}

impl<C: ImageCodec> AppContext<C> {
    pub fn with_codec(codec: C) -> Self {
        Self {
            resize_service: ResizeService::new(codec),
        }
    }
}

pub fn init() -> AppContext<ImageCrateCodec> {
    AppContext::with_codec(ImageCrateCodec)
}
