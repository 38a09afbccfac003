// src/application/editor/fields.rs
use super::errors::SessionError;
use crate::domain::media::ImageUpload;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Addressable inputs of the article form. `new_category.*` paths belong to
/// the nested category sub-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldPath {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "slug")]
    Slug,
    #[serde(rename = "content")]
    Content,
    #[serde(rename = "category_id")]
    CategoryId,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "new_category.name")]
    NewCategoryName,
    #[serde(rename = "new_category.slug")]
    NewCategorySlug,
}

impl FieldPath {
    pub const ALL: [FieldPath; 7] = [
        FieldPath::Title,
        FieldPath::Slug,
        FieldPath::Content,
        FieldPath::CategoryId,
        FieldPath::Image,
        FieldPath::NewCategoryName,
        FieldPath::NewCategorySlug,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Slug => "slug",
            Self::Content => "content",
            Self::CategoryId => "category_id",
            Self::Image => "image",
            Self::NewCategoryName => "new_category.name",
            Self::NewCategorySlug => "new_category.slug",
        }
    }

    /// Human name used in error messages.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Slug | Self::NewCategorySlug => "slug",
            Self::Content => "content",
            Self::CategoryId => "category id",
            Self::Image => "image",
            Self::NewCategoryName => "name",
        }
    }

    pub fn is_category_subflow(self) -> bool {
        matches!(self, Self::NewCategoryName | Self::NewCategorySlug)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown field path: {0}")]
pub struct UnknownFieldPath(pub String);

impl FromStr for FieldPath {
    type Err = UnknownFieldPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| UnknownFieldPath(s.to_string()))
    }
}

/// Raw value coming from an input widget.
#[derive(Debug, Clone)]
pub enum FieldValue {
    Null,
    Text(String),
    Integer(i64),
    Image(ImageUpload),
}

impl FieldValue {
    pub(super) fn into_text(self, path: FieldPath) -> Result<String, SessionError> {
        match self {
            Self::Null => Ok(String::new()),
            Self::Text(text) => Ok(text),
            Self::Integer(value) => Ok(value.to_string()),
            Self::Image(_) => Err(SessionError::InvalidValue {
                path,
                expected: "text",
            }),
        }
    }

    pub(super) fn into_category_id(self, path: FieldPath) -> Result<Option<i64>, SessionError> {
        match self {
            Self::Null => Ok(None),
            Self::Integer(value) => Ok(Some(value)),
            Self::Text(text) if text.trim().is_empty() => Ok(None),
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| SessionError::InvalidValue {
                    path,
                    expected: "an integer id",
                }),
            Self::Image(_) => Err(SessionError::InvalidValue {
                path,
                expected: "an integer id",
            }),
        }
    }

    pub(super) fn into_image(self, path: FieldPath) -> Result<Option<ImageUpload>, SessionError> {
        match self {
            Self::Null => Ok(None),
            Self::Image(upload) => Ok(Some(upload)),
            Self::Text(_) | Self::Integer(_) => Err(SessionError::InvalidValue {
                path,
                expected: "an uploaded file",
            }),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<ImageUpload> for FieldValue {
    fn from(value: ImageUpload) -> Self {
        Self::Image(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
