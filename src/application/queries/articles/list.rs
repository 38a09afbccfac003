// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleListDto, OffsetPage},
        error::ApplicationResult,
    },
    domain::article::{ArticleListQuery, ArticleSort, ArticleSortField, SortDirection},
};

const DEFAULT_PER_PAGE: u32 = 5;
const MAX_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    /// Currently applied sort; defaults to newest first.
    pub sort: Option<ArticleSortField>,
    pub direction: Option<SortDirection>,
    /// Column the user clicked. Toggles relative to `sort`/`direction`.
    pub sort_by: Option<ArticleSortField>,
    pub page: u32,
    pub per_page: u32,
}

impl ListArticlesQuery {
    fn effective_sort(&self) -> ArticleSort {
        let current = match (self.sort, self.direction) {
            (None, None) => ArticleSort::default(),
            (field, direction) => {
                ArticleSort::new(field.unwrap_or_default(), direction.unwrap_or(SortDirection::Asc))
            }
        };
        match self.sort_by {
            Some(field) => current.toggled(field),
            None => current,
        }
    }
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListDto> {
        let sort = query.effective_sort();
        let per_page = match query.per_page {
            0 => DEFAULT_PER_PAGE,
            n => n.min(MAX_PER_PAGE),
        };
        let page = query.page.max(1);
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let list_query = ArticleListQuery {
            search: search.clone(),
            sort,
            offset: (page - 1).saturating_mul(per_page),
            limit: per_page,
        };
        let (records, total) = self.read_repo.list_page(&list_query).await?;

        let items = records
            .into_iter()
            .map(|article| ArticleDto::from_article(article, self.images.as_ref()))
            .collect();

        let articles = OffsetPage::new(items, page, per_page, total);
        Ok(ArticleListDto {
            has_more: articles.has_more(),
            articles,
            sort: sort.field.column().to_string(),
            direction: sort.direction.as_str().to_string(),
            search,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_field_without_direction_sorts_ascending() {
        let query = ListArticlesQuery {
            sort: Some(ArticleSortField::Title),
            ..Default::default()
        };
        assert_eq!(
            query.effective_sort(),
            ArticleSort::new(ArticleSortField::Title, SortDirection::Asc)
        );
    }

    #[test]
    fn sort_by_toggles_current_sort() {
        let query = ListArticlesQuery {
            sort: Some(ArticleSortField::Title),
            direction: Some(SortDirection::Asc),
            sort_by: Some(ArticleSortField::Title),
            ..Default::default()
        };
        assert_eq!(
            query.effective_sort(),
            ArticleSort::new(ArticleSortField::Title, SortDirection::Desc)
        );

        let fresh = ListArticlesQuery {
            sort_by: Some(ArticleSortField::CreatedAt),
            ..Default::default()
        };
        assert_eq!(
            fresh.effective_sort(),
            ArticleSort::new(ArticleSortField::CreatedAt, SortDirection::Asc)
        );
    }
}
