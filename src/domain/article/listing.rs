// src/domain/article/listing.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleSortField {
    Title,
    Slug,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl ArticleSortField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Slug => "slug",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Ordering of the dashboard listing. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArticleSort {
    pub field: ArticleSortField,
    pub direction: SortDirection,
}

impl ArticleSort {
    pub fn new(field: ArticleSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Clicking the column that is already sorted flips its direction;
    /// clicking another column sorts it ascending.
    #[must_use]
    pub fn toggled(self, field: ArticleSortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArticleListQuery {
    /// Case-insensitive substring matched against the title.
    pub search: Option<String>,
    pub sort: ArticleSort,
    pub offset: u32,
    pub limit: u32,
}
