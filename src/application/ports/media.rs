// src/application/ports/media.rs
use crate::domain::errors::DomainResult;
use crate::domain::media::{ImageRef, ImageUpload};
use async_trait::async_trait;

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Durably writes the upload and returns its reference. The file is
    /// complete on disk when this returns.
    async fn store(&self, upload: &ImageUpload) -> DomainResult<ImageRef>;
    /// Removes a stored image. Deleting a missing image is not an error.
    async fn delete(&self, image: &ImageRef) -> DomainResult<()>;
    async fn exists(&self, image: &ImageRef) -> DomainResult<bool>;
    /// Public URL of the image, or the placeholder URL when there is none.
    fn url_for(&self, image: Option<&ImageRef>) -> String;
}
