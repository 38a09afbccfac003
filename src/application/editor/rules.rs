// src/application/editor/rules.rs
//! Store-independent validation rules. Rules that need a store lookup
//! (uniqueness, existence) run inside the session.
use super::{
    errors::{FieldError, Rule},
    fields::FieldPath,
};
use crate::domain::{
    article::{ArticleSlug, ArticleTitle},
    media::ImageUpload,
};

pub(super) fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub(super) fn title(value: &str) -> Vec<FieldError> {
    if !is_present(value) {
        return vec![FieldError::new(FieldPath::Title, Rule::Required)];
    }
    if ArticleTitle::is_long_enough(value) {
        Vec::new()
    } else {
        vec![FieldError::new(FieldPath::Title, Rule::Min)]
    }
}

/// Presence and character set of the slug; uniqueness is checked separately.
pub(super) fn slug_format(value: &str) -> Vec<FieldError> {
    if !is_present(value) {
        return vec![FieldError::new(FieldPath::Slug, Rule::Required)];
    }
    if ArticleSlug::is_alpha_dash(value.trim()) {
        Vec::new()
    } else {
        vec![FieldError::new(FieldPath::Slug, Rule::AlphaDash)]
    }
}

pub(super) fn content(value: &str) -> Vec<FieldError> {
    if is_present(value) {
        Vec::new()
    } else {
        vec![FieldError::new(FieldPath::Content, Rule::Required)]
    }
}

/// An image is mandatory until the article has one; a pending upload must be
/// an image no larger than the configured maximum.
pub(super) fn image(pending: Option<&ImageUpload>, has_stored_image: bool) -> Vec<FieldError> {
    let Some(upload) = pending else {
        return if has_stored_image {
            Vec::new()
        } else {
            vec![FieldError::new(FieldPath::Image, Rule::Required)]
        };
    };

    let mut errors = Vec::new();
    if !upload.is_image() {
        errors.push(FieldError::new(FieldPath::Image, Rule::Image));
    }
    if upload.exceeds_max_size() {
        errors.push(FieldError::new(FieldPath::Image, Rule::Max));
    }
    errors
}

pub(super) fn required(path: FieldPath, value: &str) -> Option<FieldError> {
    (!is_present(value)).then(|| FieldError::new(path, Rule::Required))
}
