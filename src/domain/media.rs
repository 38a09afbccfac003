// src/domain/media.rs
use crate::domain::errors::{DomainError, DomainResult};
use bytes::Bytes;
use std::fmt;

/// Opaque path of a stored image, relative to the image store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("image reference cannot be empty".into()));
        }
        if value.contains(['/', '\\']) || value.starts_with('.') {
            return Err(DomainError::Validation(format!(
                "invalid image reference: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepted image formats and the extension used when storing them.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/bmp", "bmp"),
    ("image/svg+xml", "svg"),
    ("image/webp", "webp"),
];

/// An uploaded file that has not been committed to the image store yet.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub const MAX_KILOBYTES: u64 = 2048;

    pub fn new(
        file_name: impl Into<String>,
        content_type: Option<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn exceeds_max_size(&self) -> bool {
        self.size_bytes() > Self::MAX_KILOBYTES * 1024
    }

    /// The declared content type, falling back to a guess from the file name
    /// when the client sent none or a generic binary type.
    pub fn mime(&self) -> Option<String> {
        let declared = self
            .content_type
            .as_deref()
            .map(|raw| raw.split(';').next().unwrap_or(raw).trim().to_ascii_lowercase())
            .filter(|essence| !essence.is_empty() && essence != "application/octet-stream");

        declared.or_else(|| {
            mime_guess::from_path(&self.file_name)
                .first_raw()
                .map(str::to_string)
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime()
            .is_some_and(|mime| IMAGE_TYPES.iter().any(|(known, _)| *known == mime))
    }

    /// File extension to store the image under, derived from its mime type.
    pub fn extension(&self) -> &'static str {
        self.mime()
            .and_then(|mime| {
                IMAGE_TYPES
                    .iter()
                    .find(|(known, _)| *known == mime)
                    .map(|(_, ext)| *ext)
            })
            .unwrap_or("bin")
    }
}
