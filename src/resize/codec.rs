use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, Rgb, RgbImage, Rgba};
use std::io::Cursor;
use thiserror::Error;

/// Quality of the re-encoded output. Every resized image leaves the service as JPEG.
pub const JPEG_QUALITY: u8 = 80;

/// Colour translucent pixels are composited onto before encoding.
pub const FLATTEN_BACKGROUND: [u8; 3] = [0, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

/// Decoding and resampling backend used by the resize service.
///
/// Both operations are CPU-bound and are expected to be called from the blocking thread pool.
pub trait ImageCodec: Send + Sync + 'static {
    /// Reads the intrinsic dimensions of an encoded image.
    fn dimensions(&self, bytes: &[u8]) -> Result<Dimensions, CodecError>;

    /// Scales the image to fit inside `bounds` without cropping and encodes the result as JPEG.
    fn resize(&self, bytes: &[u8], bounds: Dimensions) -> Result<Vec<u8>, CodecError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateCodec;

impl ImageCrateCodec {
    fn decode(bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?;
        Ok(image)
    }
}

impl ImageCodec for ImageCrateCodec {
    fn dimensions(&self, bytes: &[u8]) -> Result<Dimensions, CodecError> {
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Dimensions { width, height })
    }

    fn resize(&self, bytes: &[u8], bounds: Dimensions) -> Result<Vec<u8>, CodecError> {
        if bounds.width == 0 || bounds.height == 0 {
            return Err(CodecError::Other(format!(
                "Cannot resize into a {}x{} box",
                bounds.width, bounds.height
            )));
        }
        let image = Self::decode(bytes)?;
        // `DynamicImage::resize` keeps the aspect ratio and fits inside the box.
        let resized_image = image.resize(bounds.width, bounds.height, FilterType::Lanczos3);
        let rgb_image = flatten(&resized_image);

        // Roughly 3 bytes per pixel before compression is a generous upper bound.
        let estimated_size = (rgb_image.width() as usize) * (rgb_image.height() as usize) * 3;
        let mut resized_image_bytes_buffer = Vec::with_capacity(estimated_size);
        JpegEncoder::new_with_quality(&mut resized_image_bytes_buffer, JPEG_QUALITY)
            .encode_image(&rgb_image)?;

        Ok(resized_image_bytes_buffer)
    }
}

/// JPEG has no alpha channel, so alpha is blended into [`FLATTEN_BACKGROUND`].
fn flatten(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }
    let rgba_image = image.to_rgba8();
    RgbImage::from_fn(rgba_image.width(), rgba_image.height(), |x, y| {
        let Rgba([r, g, b, alpha]) = *rgba_image.get_pixel(x, y);
        let blend = |channel: u8, background: u8| {
            let alpha = u16::from(alpha);
            let mixed =
                u16::from(channel) * alpha + u16::from(background) * (255 - alpha) + 127;
            (mixed / 255) as u8
        };
        let [br, bg, bb] = FLATTEN_BACKGROUND;
        Rgb([blend(r, br), blend(g, bg), blend(b, bb)])
    })
}
