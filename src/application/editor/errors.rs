// src/application/editor/errors.rs
use super::fields::FieldPath;
use crate::domain::{article::ArticleTitle, errors::DomainError, media::ImageUpload};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Kind of a failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Min,
    AlphaDash,
    Unique,
    Exists,
    Image,
    Max,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::AlphaDash => "alpha_dash",
            Self::Unique => "unique",
            Self::Exists => "exists",
            Self::Image => "image",
            Self::Max => "max",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub rule: Rule,
    pub message: String,
}

impl FieldError {
    pub fn new(path: FieldPath, rule: Rule) -> Self {
        let attribute = path.attribute();
        let message = match rule {
            Rule::Required => format!("The {attribute} field is required."),
            Rule::Min => format!(
                "The {attribute} must be at least {} characters.",
                ArticleTitle::MIN_CHARS
            ),
            Rule::AlphaDash => format!(
                "The {attribute} must only contain letters, numbers, dashes and underscores."
            ),
            Rule::Unique => format!("The {attribute} has already been taken."),
            Rule::Exists => format!("The selected {attribute} is invalid."),
            Rule::Image => format!("The {attribute} must be an image."),
            Rule::Max => format!(
                "The {attribute} must not be greater than {} kilobytes.",
                ImageUpload::MAX_KILOBYTES
            ),
        };
        Self { rule, message }
    }
}

/// Current validation failures, keyed by field path. A path is present only
/// while it has at least one failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FieldPath, Vec<FieldError>>);

impl FieldErrors {
    pub fn replace(&mut self, path: FieldPath, errors: Vec<FieldError>) {
        if errors.is_empty() {
            self.0.remove(&path);
        } else {
            self.0.insert(path, errors);
        }
    }

    pub fn get(&self, path: FieldPath) -> &[FieldError] {
        self.0.get(&path).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.0.contains_key(&path)
    }

    pub fn has(&self, path: FieldPath, rule: Rule) -> bool {
        self.get(path).iter().any(|error| error.rule == rule)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear_category_subflow(&mut self) {
        self.0.retain(|path, _| !path.is_category_subflow());
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &[FieldError])> {
        self.0.iter().map(|(path, errors)| (*path, errors.as_slice()))
    }
}

/// Failures of a session operation that are not field validation problems.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("the editing session has already been committed")]
    Committed,
    #[error("the category form is not open")]
    CategorySubflowClosed,
    #[error("invalid value for {path}: expected {expected}")]
    InvalidValue {
        path: FieldPath,
        expected: &'static str,
    },
    #[error(transparent)]
    Storage(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_with_empty_list_clears_path() {
        let mut errors = FieldErrors::default();
        errors.replace(FieldPath::Title, vec![FieldError::new(FieldPath::Title, Rule::Min)]);
        assert!(errors.has(FieldPath::Title, Rule::Min));

        errors.replace(FieldPath::Title, Vec::new());
        assert!(errors.is_empty());
        assert!(errors.get(FieldPath::Title).is_empty());
    }

    #[test]
    fn messages_use_human_attribute_names() {
        assert_eq!(
            FieldError::new(FieldPath::CategoryId, Rule::Required).message,
            "The category id field is required."
        );
        assert_eq!(
            FieldError::new(FieldPath::Title, Rule::Min).message,
            "The title must be at least 4 characters."
        );
        assert_eq!(
            FieldError::new(FieldPath::Image, Rule::Max).message,
            "The image must not be greater than 2048 kilobytes."
        );
    }

    #[test]
    fn clearing_subflow_keeps_article_errors() {
        let mut errors = FieldErrors::default();
        errors.replace(FieldPath::Slug, vec![FieldError::new(FieldPath::Slug, Rule::Unique)]);
        errors.replace(
            FieldPath::NewCategoryName,
            vec![FieldError::new(FieldPath::NewCategoryName, Rule::Required)],
        );

        errors.clear_category_subflow();

        assert!(errors.contains(FieldPath::Slug));
        assert!(!errors.contains(FieldPath::NewCategoryName));
    }

    #[test]
    fn serializes_as_path_keyed_object() {
        let mut errors = FieldErrors::default();
        errors.replace(
            FieldPath::NewCategorySlug,
            vec![FieldError::new(FieldPath::NewCategorySlug, Rule::Unique)],
        );
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["new_category.slug"][0]["rule"], "unique");
    }
}
