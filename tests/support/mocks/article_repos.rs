// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use article_desk::domain::article::{
    Article, ArticleId, ArticleListQuery, ArticleReadRepository, ArticleSlug, ArticleSortField,
    ArticleUpdate, ArticleWriteRepository, NewArticle, SortDirection,
};
use article_desk::domain::errors::{DomainError, DomainResult};

/// Runs right before a write is applied; returning an error fails the write.
pub type WriteHook = Box<dyn Fn() -> Option<DomainError> + Send + Sync>;

/// Article store double implementing both repository traits. Enforces slug
/// uniqueness like the real table and counts write calls.
#[derive(Default)]
pub struct InMemoryArticles {
    rows: Mutex<BTreeMap<i64, Article>>,
    next_id: AtomicUsize,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    deletes: AtomicUsize,
    before_write: Mutex<Option<WriteHook>>,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, article: Article) -> Article {
        let id = i64::from(article.id);
        self.next_id.fetch_max(id as usize, Ordering::SeqCst);
        self.rows.lock().unwrap().insert(id, article.clone());
        article
    }

    pub fn all(&self) -> Vec<Article> {
        self.rows.lock().unwrap().values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.insert_calls() + self.update_calls()
    }

    pub fn set_before_write(&self, hook: WriteHook) {
        *self.before_write.lock().unwrap() = Some(hook);
    }

    fn run_hook(&self) -> DomainResult<()> {
        match self.before_write.lock().unwrap().as_ref().and_then(|hook| hook()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn slug_taken(rows: &BTreeMap<i64, Article>, slug: &str, exclude: Option<i64>) -> bool {
        rows.values()
            .any(|a| a.slug.as_str() == slug && Some(i64::from(a.id)) != exclude)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.run_hook()?;

        let mut rows = self.rows.lock().unwrap();
        if Self::slug_taken(&rows, article.slug.as_str(), None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let article = article.into_article(ArticleId::new(id)?);
        rows.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.run_hook()?;

        let mut rows = self.rows.lock().unwrap();
        let id = i64::from(update.id);
        if Self::slug_taken(&rows, update.slug.as_str(), Some(id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let article = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.apply(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|a| a.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn exists_slug_excluding(
        &self,
        slug: &str,
        exclude: Option<ArticleId>,
    ) -> DomainResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(Self::slug_taken(&rows, slug, exclude.map(i64::from)))
    }

    async fn list_page(&self, query: &ArticleListQuery) -> DomainResult<(Vec<Article>, u64)> {
        let needle = query.search.as_deref().map(str::to_lowercase);
        let mut matches: Vec<Article> = self
            .all()
            .into_iter()
            .filter(|a| match &needle {
                Some(needle) => a.title.as_str().to_lowercase().contains(needle),
                None => true,
            })
            .collect();

        matches.sort_by(|a, b| {
            let ordering = match query.sort.field {
                ArticleSortField::Title => a.title.as_str().cmp(b.title.as_str()),
                ArticleSortField::Slug => a.slug.as_str().cmp(b.slug.as_str()),
                ArticleSortField::CreatedAt => a.created_at.cmp(&b.created_at),
                ArticleSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            }
            .then(a.id.cmp(&b.id));
            match query.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect();
        Ok((page, total))
    }
}
