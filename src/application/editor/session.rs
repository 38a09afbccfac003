// src/application/editor/session.rs
use super::{
    EditorDependencies,
    category::{CategoryDraft, CategorySubflow},
    errors::{FieldError, FieldErrors, Rule, SessionError},
    fields::{FieldPath, FieldValue},
    rules,
};
use crate::application::dto::{ARTICLES_INDEX, Confirmation};
use crate::domain::{
    article::{
        Article, ArticleContent, ArticleId, ArticleSlug, ArticleTitle, ArticleUpdate, NewArticle,
    },
    category::{Category, CategoryId},
    errors::{DomainError, DomainResult},
    media::{ImageRef, ImageUpload},
    user::UserId,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Editing,
    Submitting,
    Committed,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Committed => "committed",
        }
    }
}

/// In-progress article values. Fields hold raw input so that invalid
/// intermediate states can be represented and reported.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub id: Option<ArticleId>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category_id: Option<i64>,
    pub image: Option<ImageRef>,
    pub owner_id: Option<UserId>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&Article> for ArticleDraft {
    fn from(article: &Article) -> Self {
        Self {
            id: Some(article.id),
            title: article.title.as_str().to_string(),
            slug: article.slug.as_str().to_string(),
            content: article.content.as_str().to_string(),
            category_id: article.category_id.map(i64::from),
            image: article.image.clone(),
            owner_id: Some(article.owner_id),
            created_at: Some(article.created_at),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Saved {
        article: Box<Article>,
        confirmation: Confirmation,
    },
    Invalid(FieldErrors),
}

#[derive(Debug, Clone)]
pub enum CategoryOutcome {
    Created(Category),
    Invalid(FieldErrors),
}

struct ValidatedFields {
    title: ArticleTitle,
    slug: ArticleSlug,
    content: ArticleContent,
    category_id: Option<CategoryId>,
}

/// One user's interaction with the article form, from opening it to a
/// successful save. Every operation validates synchronously and only
/// `save` and `save_category_subflow` write to the stores.
pub struct ArticleEditSession {
    deps: EditorDependencies,
    actor: UserId,
    draft: ArticleDraft,
    pending_image: Option<ImageUpload>,
    category: CategorySubflow,
    field_errors: FieldErrors,
    slug_overridden: bool,
    state: SessionState,
}

impl ArticleEditSession {
    /// Starts an empty form when `existing` is `None`, otherwise an edit form
    /// seeded with the article's current values.
    pub fn open(deps: EditorDependencies, actor: UserId, existing: Option<&Article>) -> Self {
        Self {
            deps,
            actor,
            draft: existing.map(ArticleDraft::from).unwrap_or_default(),
            pending_image: None,
            category: CategorySubflow::default(),
            field_errors: FieldErrors::default(),
            slug_overridden: false,
            state: SessionState::Editing,
        }
    }

    pub fn actor(&self) -> UserId {
        self.actor
    }

    pub fn draft(&self) -> &ArticleDraft {
        &self.draft
    }

    pub fn is_creating(&self) -> bool {
        self.draft.id.is_none()
    }

    pub fn pending_image(&self) -> Option<&ImageUpload> {
        self.pending_image.as_ref()
    }

    pub fn image_url(&self) -> String {
        self.deps.images.url_for(self.draft.image.as_ref())
    }

    pub fn is_category_subflow_open(&self) -> bool {
        self.category.is_open()
    }

    pub fn category_draft(&self) -> Option<&CategoryDraft> {
        self.category.draft()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn slug_overridden(&self) -> bool {
        self.slug_overridden
    }

    /// Applies one input change and re-validates that field. Editing the
    /// title re-derives the slug until the slug has been edited by hand.
    pub async fn set_field(
        &mut self,
        path: FieldPath,
        value: FieldValue,
    ) -> Result<&FieldErrors, SessionError> {
        self.ensure_editable()?;

        match path {
            FieldPath::Title => {
                let title = value.into_text(path)?;
                if !self.slug_overridden {
                    self.draft.slug = self.deps.slugger.slugify(&title);
                }
                self.draft.title = title;
            }
            FieldPath::Slug => {
                self.draft.slug = value.into_text(path)?;
                self.slug_overridden = true;
            }
            FieldPath::Content => self.draft.content = value.into_text(path)?,
            FieldPath::CategoryId => self.draft.category_id = value.into_category_id(path)?,
            FieldPath::Image => self.pending_image = value.into_image(path)?,
            FieldPath::NewCategoryName | FieldPath::NewCategorySlug => {
                let text = value.into_text(path)?;
                self.category.set(path, text, self.deps.slugger.as_ref())?;
            }
        }

        self.validate_field(path).await
    }

    /// Re-runs the rules scoped to `path` and replaces only that entry.
    pub async fn validate_field(&mut self, path: FieldPath) -> Result<&FieldErrors, SessionError> {
        self.ensure_editable()?;
        let errors = self.check(path).await?;
        debug!(field = %path, failures = errors.len(), "field validated");
        self.field_errors.replace(path, errors);
        Ok(&self.field_errors)
    }

    pub fn open_category_subflow(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.category.open();
        self.field_errors.clear_category_subflow();
        Ok(())
    }

    pub fn close_category_subflow(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;
        self.category.close();
        self.field_errors.clear_category_subflow();
        Ok(())
    }

    /// Validates and inserts the drafted category, then selects it for the
    /// article. On failure the sub-form stays open and nothing is written.
    pub async fn save_category_subflow(&mut self) -> Result<CategoryOutcome, SessionError> {
        self.ensure_editable()?;
        if !self.category.is_open() {
            return Err(SessionError::CategorySubflowClosed);
        }

        let repo = self.deps.categories.as_ref();
        let errors = self.category.validate(repo).await?;
        if !errors.is_empty() {
            return Ok(self.reject_category(errors));
        }

        let category = match self.category.commit(repo, self.deps.clock.now()).await {
            Ok(category) => category,
            Err(DomainError::Conflict(reason)) => {
                debug!(%reason, "category insert lost a uniqueness race");
                let mut errors = self.category.validate(repo).await?;
                if errors.is_empty() {
                    errors.replace(
                        FieldPath::NewCategoryName,
                        vec![FieldError::new(FieldPath::NewCategoryName, Rule::Unique)],
                    );
                }
                return Ok(self.reject_category(errors));
            }
            Err(other) => return Err(other.into()),
        };

        info!(category_id = %category.id, name = category.name.as_str(), "category created");
        self.draft.category_id = Some(i64::from(category.id));
        self.field_errors.replace(FieldPath::CategoryId, Vec::new());
        self.close_category_subflow()?;
        Ok(CategoryOutcome::Created(category))
    }

    /// Validates the whole form and, when it is clean, stores the pending
    /// image and persists the article. Store failures leave the session
    /// editable and the stores untouched.
    pub async fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        self.ensure_editable()?;
        self.state = SessionState::Submitting;

        let result = self.submit().await;
        self.state = match &result {
            Ok(SaveOutcome::Saved { .. }) => SessionState::Committed,
            _ => SessionState::Editing,
        };
        result
    }

    async fn submit(&mut self) -> Result<SaveOutcome, SessionError> {
        let mut errors = FieldErrors::default();
        for path in FieldPath::ALL {
            errors.replace(path, self.check(path).await?);
        }
        self.field_errors = errors;
        if !self.field_errors.is_empty() {
            debug!(fields = self.field_errors.len(), "article form rejected");
            return Ok(SaveOutcome::Invalid(self.field_errors.clone()));
        }

        let fields = self.validated_fields()?;
        let previous = self.draft.image.clone();
        let stored = match &self.pending_image {
            Some(upload) => Some(self.deps.images.store(upload).await?),
            None => None,
        };
        let image = stored.clone().or_else(|| previous.clone());

        let article = match self.persist(fields, image).await {
            Ok(article) => article,
            Err(err) => {
                if let Some(orphan) = &stored {
                    self.discard_image(orphan).await;
                }
                return self.recover_from_write_failure(err).await;
            }
        };

        if stored.is_some() {
            if let Some(old) = &previous {
                self.discard_image(old).await;
            }
        }

        info!(
            article_id = %article.id,
            slug = article.slug.as_str(),
            created = self.draft.id.is_none(),
            "article saved"
        );
        self.draft = ArticleDraft::from(&article);
        self.pending_image = None;

        Ok(SaveOutcome::Saved {
            article: Box::new(article),
            confirmation: Confirmation::success("Article saved.", ARTICLES_INDEX),
        })
    }

    async fn check(&self, path: FieldPath) -> DomainResult<Vec<FieldError>> {
        match path {
            FieldPath::Title => Ok(rules::title(&self.draft.title)),
            FieldPath::Slug => {
                let mut errors = rules::slug_format(&self.draft.slug);
                let slug = self.draft.slug.trim();
                if rules::is_present(slug)
                    && self
                        .deps
                        .article_read
                        .exists_slug_excluding(slug, self.draft.id)
                        .await?
                {
                    errors.push(FieldError::new(path, Rule::Unique));
                }
                Ok(errors)
            }
            FieldPath::Content => Ok(rules::content(&self.draft.content)),
            FieldPath::CategoryId => {
                let Some(raw) = self.draft.category_id else {
                    return Ok(vec![FieldError::new(path, Rule::Required)]);
                };
                if self.category_exists(raw).await? {
                    Ok(Vec::new())
                } else {
                    Ok(vec![FieldError::new(path, Rule::Exists)])
                }
            }
            FieldPath::Image => Ok(rules::image(
                self.pending_image.as_ref(),
                self.draft.image.is_some(),
            )),
            FieldPath::NewCategoryName | FieldPath::NewCategorySlug => {
                self.category
                    .check(path, self.deps.categories.as_ref())
                    .await
            }
        }
    }

    async fn category_exists(&self, raw: i64) -> DomainResult<bool> {
        match CategoryId::new(raw) {
            Ok(id) => self.deps.categories.exists_id(id).await,
            Err(_) => Ok(false),
        }
    }

    fn validated_fields(&self) -> DomainResult<ValidatedFields> {
        Ok(ValidatedFields {
            title: ArticleTitle::new(self.draft.title.as_str())?,
            slug: ArticleSlug::new(self.draft.slug.as_str())?,
            content: ArticleContent::new(self.draft.content.as_str())?,
            category_id: self.draft.category_id.map(CategoryId::new).transpose()?,
        })
    }

    async fn persist(
        &self,
        fields: ValidatedFields,
        image: Option<ImageRef>,
    ) -> DomainResult<Article> {
        let now = self.deps.clock.now();
        match self.draft.id {
            None => {
                let article = NewArticle {
                    title: fields.title,
                    slug: fields.slug,
                    content: fields.content,
                    category_id: fields.category_id,
                    image,
                    owner_id: self.draft.owner_id.unwrap_or(self.actor),
                    created_at: now,
                    updated_at: now,
                };
                self.deps.article_write.insert(article).await
            }
            Some(id) => {
                let update = ArticleUpdate {
                    id,
                    title: fields.title,
                    slug: fields.slug,
                    content: fields.content,
                    category_id: fields.category_id,
                    image,
                    updated_at: now,
                };
                self.deps.article_write.update(update).await
            }
        }
    }

    /// Maps store-level races onto the field they concern. Anything else is
    /// an infrastructure failure and goes back to the caller.
    async fn recover_from_write_failure(
        &mut self,
        err: DomainError,
    ) -> Result<SaveOutcome, SessionError> {
        let (path, rule) = match err {
            DomainError::Conflict(reason) => {
                debug!(%reason, "article write lost a slug uniqueness race");
                (FieldPath::Slug, Rule::Unique)
            }
            DomainError::NotFound(reason) => {
                let category_gone = match self.draft.category_id {
                    Some(raw) => !self.category_exists(raw).await?,
                    None => false,
                };
                if !category_gone {
                    return Err(DomainError::NotFound(reason).into());
                }
                (FieldPath::CategoryId, Rule::Exists)
            }
            other => return Err(other.into()),
        };

        self.field_errors
            .replace(path, vec![FieldError::new(path, rule)]);
        Ok(SaveOutcome::Invalid(self.field_errors.clone()))
    }

    fn reject_category(&mut self, errors: FieldErrors) -> CategoryOutcome {
        for path in [FieldPath::NewCategoryName, FieldPath::NewCategorySlug] {
            self.field_errors.replace(path, errors.get(path).to_vec());
        }
        CategoryOutcome::Invalid(errors)
    }

    async fn discard_image(&self, image: &ImageRef) {
        if let Err(err) = self.deps.images.delete(image).await {
            warn!(image = image.as_str(), error = %err, "failed to delete image");
        }
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        if self.state == SessionState::Committed {
            Err(SessionError::Committed)
        } else {
            Ok(())
        }
    }
}
