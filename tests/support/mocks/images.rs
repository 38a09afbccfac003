// tests/support/mocks/images.rs
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use article_desk::application::ports::media::ImageStore;
use article_desk::domain::errors::{DomainError, DomainResult};
use article_desk::domain::media::{ImageRef, ImageUpload};

pub const PLACEHOLDER_URL: &str = "/img/placeholder.png";

#[derive(Default)]
pub struct InMemoryImages {
    files: Mutex<BTreeSet<String>>,
    counter: AtomicUsize,
    fail_store: AtomicBool,
    fail_delete: AtomicBool,
}

impl InMemoryImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str) -> ImageRef {
        self.files.lock().unwrap().insert(name.to_string());
        ImageRef::new(name).unwrap()
    }

    pub fn contains(&self, image: &ImageRef) -> bool {
        self.files.lock().unwrap().contains(image.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn fail_store(&self) {
        self.fail_store.store(true, Ordering::SeqCst);
    }

    pub fn fail_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ImageStore for InMemoryImages {
    async fn store(&self, upload: &ImageUpload) -> DomainResult<ImageRef> {
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("disk full".into()));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let image = ImageRef::new(format!("upload-{n}.{}", upload.extension()))?;
        self.files.lock().unwrap().insert(image.as_str().to_string());
        Ok(image)
    }

    async fn delete(&self, image: &ImageRef) -> DomainResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("permission denied".into()));
        }
        self.files.lock().unwrap().remove(image.as_str());
        Ok(())
    }

    async fn exists(&self, image: &ImageRef) -> DomainResult<bool> {
        Ok(self.contains(image))
    }

    fn url_for(&self, image: Option<&ImageRef>) -> String {
        match image {
            Some(image) => format!("/media/{}", image.as_str()),
            None => PLACEHOLDER_URL.to_string(),
        }
    }
}
