// src/application/dto/flash.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where clients go after an article is saved or deleted.
pub const ARTICLES_INDEX: &str = "/api/v1/articles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BannerStyle {
    Success,
    Danger,
}

/// One-shot message shown after a successful mutation, plus the location the
/// client should navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Confirmation {
    pub message: String,
    pub style: BannerStyle,
    pub redirect_to: String,
}

impl Confirmation {
    pub fn success(message: impl Into<String>, redirect_to: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: BannerStyle::Success,
            redirect_to: redirect_to.into(),
        }
    }

    pub fn danger(message: impl Into<String>, redirect_to: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            style: BannerStyle::Danger,
            redirect_to: redirect_to.into(),
        }
    }
}
