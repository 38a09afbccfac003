// src/application/editor/category.rs
use super::{
    errors::{FieldError, FieldErrors, Rule, SessionError},
    fields::FieldPath,
    rules,
};
use crate::application::ports::util::SlugGenerator;
use crate::domain::{
    category::{Category, CategoryName, CategoryRepository, CategorySlug, NewCategory},
    errors::DomainResult,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub slug: String,
}

/// Nested "new category" form owned by an article editing session. It is
/// validated and committed on its own; the parent only receives the new id.
#[derive(Debug, Default)]
pub struct CategorySubflow {
    draft: Option<CategoryDraft>,
}

impl CategorySubflow {
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&CategoryDraft> {
        self.draft.as_ref()
    }

    pub(super) fn open(&mut self) {
        self.draft = Some(CategoryDraft::default());
    }

    pub(super) fn close(&mut self) {
        self.draft = None;
    }

    /// Editing the name re-derives the slug.
    pub(super) fn set(
        &mut self,
        path: FieldPath,
        value: String,
        slugger: &dyn SlugGenerator,
    ) -> Result<(), SessionError> {
        let draft = self
            .draft
            .as_mut()
            .ok_or(SessionError::CategorySubflowClosed)?;

        match path {
            FieldPath::NewCategoryName => {
                draft.slug = slugger.slugify(&value);
                draft.name = value;
            }
            FieldPath::NewCategorySlug => draft.slug = value,
            other => {
                return Err(SessionError::InvalidValue {
                    path: other,
                    expected: "a new_category field",
                });
            }
        }
        Ok(())
    }

    pub(super) async fn check(
        &self,
        path: FieldPath,
        repo: &dyn CategoryRepository,
    ) -> DomainResult<Vec<FieldError>> {
        let Some(draft) = &self.draft else {
            return Ok(Vec::new());
        };

        let (value, taken) = match path {
            FieldPath::NewCategoryName => {
                let value = draft.name.trim();
                (value, rules::is_present(value) && repo.exists_name(value).await?)
            }
            FieldPath::NewCategorySlug => {
                let value = draft.slug.trim();
                (value, rules::is_present(value) && repo.exists_slug(value).await?)
            }
            _ => return Ok(Vec::new()),
        };

        if let Some(missing) = rules::required(path, value) {
            return Ok(vec![missing]);
        }
        Ok(if taken {
            vec![FieldError::new(path, Rule::Unique)]
        } else {
            Vec::new()
        })
    }

    pub(super) async fn validate(&self, repo: &dyn CategoryRepository) -> DomainResult<FieldErrors> {
        let mut errors = FieldErrors::default();
        for path in [FieldPath::NewCategoryName, FieldPath::NewCategorySlug] {
            errors.replace(path, self.check(path, repo).await?);
        }
        Ok(errors)
    }

    pub(super) async fn commit(
        &self,
        repo: &dyn CategoryRepository,
        now: DateTime<Utc>,
    ) -> DomainResult<Category> {
        let draft = self.draft.clone().unwrap_or_default();
        let category = NewCategory {
            name: CategoryName::new(draft.name)?,
            slug: CategorySlug::new(draft.slug)?,
            created_at: now,
        };
        repo.insert(category).await
    }
}
