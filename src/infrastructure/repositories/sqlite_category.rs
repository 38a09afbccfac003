use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn exists(&self, sql: &str, value: i64) -> DomainResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(exists != 0)
    }

    async fn exists_text(&self, sql: &str, value: &str) -> DomainResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(exists != 0)
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
            slug: CategorySlug::new(row.slug)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at, updated_at FROM categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name, slug, created_at, updated_at FROM categories WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn exists_id(&self, id: CategoryId) -> DomainResult<bool> {
        self.exists(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?)",
            i64::from(id),
        )
        .await
    }

    async fn exists_name(&self, name: &str) -> DomainResult<bool> {
        self.exists_text("SELECT EXISTS(SELECT 1 FROM categories WHERE name = ?)", name)
            .await
    }

    async fn exists_slug(&self, slug: &str) -> DomainResult<bool> {
        self.exists_text("SELECT EXISTS(SELECT 1 FROM categories WHERE slug = ?)", slug)
            .await
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let NewCategory {
            name,
            slug,
            created_at,
        } = category;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, slug, created_at, updated_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, slug, created_at, updated_at",
        )
        .bind(name.into_inner())
        .bind(slug.into_inner())
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }
}
