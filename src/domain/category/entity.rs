// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName, CategorySlug};
use chrono::{DateTime, Utc};

/// Categories are immutable once created.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub created_at: DateTime<Utc>,
}

impl NewCategory {
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            slug: self.slug,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
