//! Image upload rule.
//!
//! By default only the declared content type is checked, so a client can send
//! arbitrary bytes labelled `image/png`. [`ImagePolicy::strict`] additionally
//! bounds the size and compares the leading bytes against known image
//! signatures.

use serde::Serialize;
use validator::ValidationError;

use super::rule_error;

pub const MISSING_FILE_CODE: &str = "missing_file";
pub const MISSING_FILE_MESSAGE: &str = "Please select an image file to upload.";

pub const INVALID_CONTENT_TYPE_CODE: &str = "invalid_content_type";
pub const INVALID_CONTENT_TYPE_MESSAGE: &str = "Only image files are allowed.";

pub const FILE_TOO_LARGE_CODE: &str = "file_too_large";
pub const SIGNATURE_MISMATCH_CODE: &str = "signature_mismatch";

/// Size bound used by [`ImagePolicy::strict`].
pub const STRICT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A file received from a multipart upload.
///
/// Serializes as its name and content type only, so validation error params
/// never carry the uploaded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Image formats recognised by signature sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

impl ImageFormat {
    /// Detects the format from the file's leading bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            Some(ImageFormat::Webp)
        } else if data.starts_with(b"BM") {
            Some(ImageFormat::Bmp)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Bmp => "image/bmp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageFileError {
    #[error("{}", MISSING_FILE_MESSAGE)]
    Missing,

    #[error("{}", INVALID_CONTENT_TYPE_MESSAGE)]
    InvalidContentType(String),

    #[error("Image must not exceed {max} bytes (got {size}).")]
    TooLarge { size: usize, max: usize },

    #[error("File content does not match its declared type {declared}.")]
    SignatureMismatch { declared: String },
}

impl ImageFileError {
    pub fn code(&self) -> &'static str {
        match self {
            ImageFileError::Missing => MISSING_FILE_CODE,
            ImageFileError::InvalidContentType(_) => INVALID_CONTENT_TYPE_CODE,
            ImageFileError::TooLarge { .. } => FILE_TOO_LARGE_CODE,
            ImageFileError::SignatureMismatch { .. } => SIGNATURE_MISMATCH_CODE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImagePolicy {
    /// Upper size bound in bytes; `None` accepts any non-empty file.
    pub max_bytes: Option<usize>,
    /// Require the leading bytes to match a known image signature.
    pub sniff_signature: bool,
}

impl ImagePolicy {
    /// Size bound plus signature sniffing.
    pub fn strict() -> Self {
        Self {
            max_bytes: Some(STRICT_MAX_IMAGE_BYTES),
            sniff_signature: true,
        }
    }

    pub fn check(&self, file: Option<&UploadedFile>) -> Result<(), ImageFileError> {
        let file = match file {
            Some(file) if !file.is_empty() => file,
            _ => return Err(ImageFileError::Missing),
        };

        let declared = file.content_type.trim().to_ascii_lowercase();
        if !declared.starts_with("image/") {
            return Err(ImageFileError::InvalidContentType(file.content_type.clone()));
        }

        if let Some(max) = self.max_bytes
            && file.len() > max
        {
            return Err(ImageFileError::TooLarge {
                size: file.len(),
                max,
            });
        }

        if self.sniff_signature && ImageFormat::sniff(&file.data).is_none() {
            return Err(ImageFileError::SignatureMismatch {
                declared: file.content_type.clone(),
            });
        }

        Ok(())
    }
}

/// Image rule for `#[validate(custom(...))]`, using the default policy.
///
/// The derive only calls custom rules for present values; pair it with
/// `required(message = ...)` on `Option<UploadedFile>` fields.
pub fn validate_image_file(file: &UploadedFile) -> Result<(), ValidationError> {
    ImagePolicy::default()
        .check(Some(file))
        .map_err(|e| rule_error(e.code(), e.to_string()))
}
