// src/application/dto/editor.rs
use crate::application::editor::{ArticleEditSession, FieldErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub rule: String,
    pub message: String,
}

/// Failures keyed by field path, e.g. `"title"` or `"new_category.name"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsDto {
    pub errors: BTreeMap<String, Vec<FieldErrorDto>>,
}

impl From<&FieldErrors> for ValidationErrorsDto {
    fn from(errors: &FieldErrors) -> Self {
        let errors = errors
            .iter()
            .map(|(path, failures)| {
                let failures = failures
                    .iter()
                    .map(|failure| FieldErrorDto {
                        rule: failure.rule.as_str().to_string(),
                        message: failure.message.clone(),
                    })
                    .collect();
                (path.as_str().to_string(), failures)
            })
            .collect();
        Self { errors }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDraftDto {
    pub id: Option<i64>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub image: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PendingImageDto {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDraftDto {
    pub name: String,
    pub slug: String,
}

/// Snapshot of an editing session for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditorSessionDto {
    pub token: String,
    pub state: String,
    pub creating: bool,
    pub draft: ArticleDraftDto,
    pub pending_image: Option<PendingImageDto>,
    pub category_subflow_open: bool,
    pub new_category: Option<CategoryDraftDto>,
    pub errors: BTreeMap<String, Vec<FieldErrorDto>>,
}

impl EditorSessionDto {
    pub fn from_session(token: impl Into<String>, session: &ArticleEditSession) -> Self {
        let draft = session.draft();
        Self {
            token: token.into(),
            state: session.state().as_str().to_string(),
            creating: session.is_creating(),
            draft: ArticleDraftDto {
                id: draft.id.map(Into::into),
                title: draft.title.clone(),
                slug: draft.slug.clone(),
                content: draft.content.clone(),
                category_id: draft.category_id,
                image: draft.image.as_ref().map(|image| image.as_str().to_string()),
                image_url: session.image_url(),
            },
            pending_image: session.pending_image().map(|upload| PendingImageDto {
                file_name: upload.file_name.clone(),
                content_type: upload.content_type.clone(),
                size_bytes: upload.size_bytes(),
            }),
            category_subflow_open: session.is_category_subflow_open(),
            new_category: session.category_draft().map(|draft| CategoryDraftDto {
                name: draft.name.clone(),
                slug: draft.slug.clone(),
            }),
            errors: ValidationErrorsDto::from(session.field_errors()).errors,
        }
    }
}
