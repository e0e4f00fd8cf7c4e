//! Palm photo handles.
//!
//! A picked file is reduced to its name plus a `data:` URI preview that the
//! webview can render directly. Pixels are never decoded; the MIME type comes
//! from the file's magic bytes, falling back to its extension.

use std::fmt;
use std::path::Path;

use base64::Engine;
use image::ImageFormat;

use crate::error::{PalmistError, PalmistResult};

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A selected palm photo.
#[derive(Clone, PartialEq)]
pub struct PalmImage {
    file_name: String,
    preview: String,
}

impl PalmImage {
    /// Read a picked file and build its preview.
    pub fn from_path(path: impl AsRef<Path>) -> PalmistResult<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| PalmistError::InvalidImage(format!("no file name in {:?}", path)))?
            .to_string();

        let bytes = std::fs::read(path)?;
        let fallback = ImageFormat::from_path(path).ok();
        Self::build(file_name, &bytes, fallback)
    }

    /// Build from bytes already in memory.
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> PalmistResult<Self> {
        let file_name = file_name.into();
        let fallback = ImageFormat::from_path(&file_name).ok();
        Self::build(file_name, bytes, fallback)
    }

    fn build(
        file_name: String,
        bytes: &[u8],
        fallback: Option<ImageFormat>,
    ) -> PalmistResult<Self> {
        if bytes.is_empty() {
            return Err(PalmistError::InvalidImage(format!("{} is empty", file_name)));
        }

        let format = image::guess_format(bytes)
            .ok()
            .or(fallback)
            .ok_or_else(|| {
                PalmistError::InvalidImage(format!("{} is not a recognized image", file_name))
            })?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let preview = format!("data:{};base64,{}", format.to_mime_type(), encoded);

        tracing::debug!(
            file_name = %file_name,
            bytes = bytes.len(),
            mime = format.to_mime_type(),
            "Built palm preview"
        );

        Ok(Self {
            file_name,
            preview,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// `data:` URI suitable for an `img` `src` attribute.
    pub fn preview(&self) -> &str {
        &self.preview
    }
}

// The preview can be megabytes of base64; keep it out of logs.
impl fmt::Debug for PalmImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PalmImage")
            .field("file_name", &self.file_name)
            .field("preview_len", &self.preview.len())
            .finish()
    }
}
