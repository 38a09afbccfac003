// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use article_desk::domain::article::*;
use article_desk::domain::category::CategoryId;
use article_desk::domain::media::{ImageRef, ImageUpload};
use article_desk::domain::user::UserId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    slug: String,
    content: String,
    category_id: Option<i64>,
    image: Option<String>,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Old Article".into(),
            slug: "old-slug".into(),
            content: "Old content".into(),
            category_id: None,
            image: None,
            owner_id: 1,
            created_at: fixed_now() - Duration::days(1),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn category(mut self, id: CategoryId) -> Self {
        self.category_id = Some(i64::from(id));
        self
    }

    pub fn image(mut self, image: &ImageRef) -> Self {
        self.image = Some(image.as_str().to_string());
        self
    }

    pub fn owner(mut self, owner_id: i64) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn created_minutes_ago(mut self, minutes: i64) -> Self {
        self.created_at = fixed_now() - Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
            category_id: self.category_id.map(|id| CategoryId::new(id).unwrap()),
            image: self.image.map(|image| ImageRef::new(image).unwrap()),
            owner_id: UserId::new(self.owner_id).unwrap(),
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

/// A tiny but valid PNG upload.
pub fn png_upload(name: &str) -> ImageUpload {
    ImageUpload::new(name, Some("image/png".into()), vec![0x89_u8, b'P', b'N', b'G'])
}

pub fn text_upload(name: &str) -> ImageUpload {
    ImageUpload::new(name, Some("text/plain".into()), b"not an image".to_vec())
}

/// One byte over the 2048 KB limit.
pub fn oversized_png(name: &str) -> ImageUpload {
    let size = (ImageUpload::MAX_KILOBYTES * 1024 + 1) as usize;
    ImageUpload::new(name, Some("image/png".into()), vec![0_u8; size])
}
