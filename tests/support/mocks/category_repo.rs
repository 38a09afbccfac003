// tests/support/mocks/category_repo.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use article_desk::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySlug, NewCategory,
};
use article_desk::domain::errors::{DomainError, DomainResult};

use super::time::fixed_now;

#[derive(Default)]
pub struct InMemoryCategories {
    rows: Mutex<Vec<Category>>,
    next_id: AtomicUsize,
    inserts: AtomicUsize,
    conflict_on_insert: AtomicBool,
}

impl InMemoryCategories {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str, slug: &str) -> Category {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let category = NewCategory {
            name: CategoryName::new(name).unwrap(),
            slug: CategorySlug::new(slug).unwrap(),
            created_at: fixed_now(),
        }
        .into_category(CategoryId::new(id).unwrap());
        self.rows.lock().unwrap().push(category.clone());
        category
    }

    pub fn remove(&self, id: CategoryId) {
        self.rows.lock().unwrap().retain(|c| c.id != id);
    }

    pub fn all(&self) -> Vec<Category> {
        self.rows.lock().unwrap().clone()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    /// Makes the next inserts fail as if another writer won the race.
    pub fn conflict_on_insert(&self) {
        self.conflict_on_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut rows = self.all();
        rows.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(rows)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.all().into_iter().find(|c| c.id == id))
    }

    async fn exists_id(&self, id: CategoryId) -> DomainResult<bool> {
        Ok(self.all().iter().any(|c| c.id == id))
    }

    async fn exists_name(&self, name: &str) -> DomainResult<bool> {
        Ok(self.all().iter().any(|c| c.name.as_str() == name))
    }

    async fn exists_slug(&self, slug: &str) -> DomainResult<bool> {
        Ok(self.all().iter().any(|c| c.slug.as_str() == slug))
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if self.conflict_on_insert.load(Ordering::SeqCst) {
            return Err(DomainError::Conflict("category name already exists".into()));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|c| {
            c.name.as_str() == category.name.as_str() || c.slug.as_str() == category.slug.as_str()
        }) {
            return Err(DomainError::Conflict("category already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let category = category.into_category(CategoryId::new(id)?);
        rows.push(category.clone());
        Ok(category)
    }
}
