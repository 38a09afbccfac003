use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListQuery, ArticleReadRepository, ArticleSlug,
    ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::ImageRef;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str =
    "id, title, slug, content, image, owner_id, category_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    image: Option<String>,
    owner_id: i64,
    category_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            category_id: row.category_id.map(CategoryId::new).transpose()?,
            image: row.image.map(ImageRef::new).transpose()?,
            owner_id: UserId::new(row.owner_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            category_id,
            image,
            owner_id,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, content, image, owner_id, category_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.into_inner())
        .bind(slug.into_inner())
        .bind(content.into_inner())
        .bind(image.map(ImageRef::into_inner))
        .bind(i64::from(owner_id))
        .bind(category_id.map(i64::from))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            slug,
            content,
            category_id,
            image,
            updated_at,
        } = update;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET title = ?, slug = ?, content = ?, image = ?, category_id = ?, updated_at = ?
             WHERE id = ?
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.into_inner())
        .bind(slug.into_inner())
        .bind(content.into_inner())
        .bind(image.map(ImageRef::into_inner))
        .bind(category_id.map(i64::from))
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/// Escapes LIKE wildcards so user input matches literally.
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for ch in search.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl SqliteArticleReadRepository {
    fn push_search<'a>(builder: &mut QueryBuilder<'a, Sqlite>, search: Option<&str>) {
        if let Some(search) = search {
            builder.push(" WHERE title LIKE ");
            builder.push_bind(like_pattern(search));
            builder.push(" ESCAPE '\\'");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn exists_slug_excluding(
        &self,
        slug: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = ? AND (? IS NULL OR id <> ?))",
        )
        .bind(slug)
        .bind(exclude.map(i64::from))
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(exists != 0)
    }

    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<(Vec<Article>, u64)> {
        let search = query.search.as_deref();

        let mut count: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::push_search(&mut count, search);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::push_search(&mut builder, search);
        // Column and direction come from closed enums, never from input.
        builder.push(format!(
            " ORDER BY {column} {direction}, id {direction} LIMIT ",
            column = query.sort.field.column(),
            direction = query.sort.direction.as_sql(),
        ));
        builder.push_bind(i64::from(query.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(query.offset));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
