use crate::resize::filename;
use axum::body::Bytes;

pub const DEFAULT_PERCENTAGE: &str = "33";

#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    /// Already sanitized.
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizedImage {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Original,
    Resized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Resizing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Toast {
    fn info(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            destructive: false,
        }
    }

    fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            destructive: true,
        }
    }
}

/// Everything the user does, plus the outcomes of the effects the state machine asked for.
#[derive(Debug, Clone)]
pub enum Msg {
    FileSelected(SourceImage),
    PercentageChanged(String),
    ResizeRequested,
    ResizeSucceeded(Bytes),
    ResizeFailed(String),
    CopyRequested(ImageSlot),
    CopyFinished(Result<(), String>),
    DownloadRequested(ImageSlot),
    PreviewOpened(ImageSlot),
    PreviewClosed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSubmission {
    pub image: SourceImage,
    pub percentage: String,
}

/// Work the runtime has to perform on behalf of the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Submit(ResizeSubmission),
    CopyToClipboard(ImageSlot),
    Download { filename: String, bytes: Bytes },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizerState {
    pub source: Option<SourceImage>,
    pub percentage: String,
    pub in_flight: bool,
    pub result: Option<ResizedImage>,
    pub error: Option<String>,
    pub preview: Option<ImageSlot>,
    pub toasts: Vec<Toast>,
}

impl Default for ResizerState {
    fn default() -> Self {
        Self {
            source: None,
            percentage: String::from(DEFAULT_PERCENTAGE),
            in_flight: false,
            result: None,
            error: None,
            preview: None,
            toasts: Vec::new(),
        }
    }
}

impl ResizerState {
    pub fn phase(&self) -> Phase {
        match (&self.source, self.in_flight) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::Resizing,
            (Some(_), false) => Phase::FileSelected,
        }
    }

    pub fn can_resize(&self) -> bool {
        self.phase() == Phase::FileSelected
    }

    pub fn image(&self, slot: ImageSlot) -> Option<(&str, &Bytes)> {
        match slot {
            ImageSlot::Original => self
                .source
                .as_ref()
                .map(|source| (source.name.as_str(), &source.bytes)),
            ImageSlot::Resized => self
                .result
                .as_ref()
                .map(|result| (result.filename.as_str(), &result.bytes)),
        }
    }

    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::FileSelected(mut file) => {
                file.name = filename::sanitize(&file.name);
                self.source = Some(file);
                self.result = None;
                self.error = None;
                self.preview = None;
                None
            }
            Msg::PercentageChanged(percentage) => {
                self.percentage = percentage;
                None
            }
            Msg::ResizeRequested => {
                if !self.can_resize() {
                    return None;
                }
                let image = self.source.clone()?;
                self.in_flight = true;
                self.error = None;
                Some(Effect::Submit(ResizeSubmission {
                    image,
                    percentage: self.percentage.clone(),
                }))
            }
            Msg::ResizeSucceeded(bytes) => {
                self.in_flight = false;
                let original_name = self
                    .source
                    .as_ref()
                    .map(|source| source.name.as_str())
                    .unwrap_or(filename::FALLBACK_FILENAME);
                self.result = Some(ResizedImage {
                    filename: filename::resized(original_name),
                    bytes,
                });
                self.toasts.push(Toast::info(
                    "Image resized successfully!",
                    "Your image has been resized and is ready for download.",
                ));
                None
            }
            Msg::ResizeFailed(message) => {
                self.in_flight = false;
                self.toasts
                    .push(Toast::destructive("Error resizing image", &message));
                self.error = Some(message);
                None
            }
            Msg::CopyRequested(slot) => self
                .image(slot)
                .map(|_| Effect::CopyToClipboard(slot)),
            Msg::CopyFinished(Ok(())) => {
                self.toasts.push(Toast::info(
                    "URL copied!",
                    "The image URL has been copied to your clipboard.",
                ));
                None
            }
            Msg::CopyFinished(Err(reason)) => {
                tracing::warn!(reason = %reason, "Failed to copy image URL.");
                self.toasts.push(Toast::destructive(
                    "Failed to copy URL",
                    "There was an error copying the URL. Please try again.",
                ));
                None
            }
            Msg::DownloadRequested(slot) => {
                self.image(slot).map(|(filename, bytes)| Effect::Download {
                    filename: filename.to_string(),
                    bytes: bytes.clone(),
                })
            }
            Msg::PreviewOpened(slot) => {
                if self.image(slot).is_some() {
                    self.preview = Some(slot);
                }
                None
            }
            Msg::PreviewClosed => {
                self.preview = None;
                None
            }
        }
    }
}
