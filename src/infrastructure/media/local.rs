use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::application::ports::media::ImageStore;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{ImageRef, ImageUpload};

/// Stores images as flat files under `root`, served publicly below
/// `base_url`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    base_url: String,
    placeholder_url: String,
}

impl LocalImageStore {
    pub fn new(
        root: impl Into<PathBuf>,
        base_url: impl Into<String>,
        placeholder_url: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            placeholder_url: placeholder_url.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, image: &ImageRef) -> PathBuf {
        self.root.join(image.as_str())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, upload: &ImageUpload) -> DomainResult<ImageRef> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(DomainError::persistence)?;

        let image = ImageRef::new(format!("{}.{}", Uuid::new_v4().simple(), upload.extension()))?;
        let path = self.path_of(&image);

        let mut file = fs::File::create(&path)
            .await
            .map_err(DomainError::persistence)?;
        let written = async {
            file.write_all(&upload.bytes).await?;
            file.sync_all().await
        }
        .await;

        if let Err(err) = written {
            drop(file);
            let _ = fs::remove_file(&path).await;
            return Err(DomainError::persistence(err));
        }

        tracing::debug!(image = image.as_str(), bytes = upload.size_bytes(), "image stored");
        Ok(image)
    }

    async fn delete(&self, image: &ImageRef) -> DomainResult<()> {
        match fs::remove_file(self.path_of(image)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(DomainError::persistence(err)),
        }
    }

    async fn exists(&self, image: &ImageRef) -> DomainResult<bool> {
        fs::try_exists(self.path_of(image))
            .await
            .map_err(DomainError::persistence)
    }

    fn url_for(&self, image: Option<&ImageRef>) -> String {
        match image {
            Some(image) => format!("{}/{}", self.base_url, image.as_str()),
            None => self.placeholder_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> LocalImageStore {
        LocalImageStore::new(dir.path().join("articles"), "/media/", "/img/placeholder.png")
    }

    #[tokio::test]
    async fn stores_and_deletes_image_files() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir);
        let upload = ImageUpload::new("cover.png", Some("image/png".into()), vec![1_u8, 2, 3]);

        let image = images.store(&upload).await.unwrap();
        assert!(image.as_str().ends_with(".png"));
        assert!(images.exists(&image).await.unwrap());
        assert_eq!(std::fs::read(images.root().join(image.as_str())).unwrap(), vec![1, 2, 3]);

        images.delete(&image).await.unwrap();
        assert!(!images.exists(&image).await.unwrap());
        // Deleting twice is fine.
        images.delete(&image).await.unwrap();
    }

    #[tokio::test]
    async fn each_upload_gets_a_fresh_name() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir);
        let upload = ImageUpload::new("cover.jpg", None, vec![0_u8; 4]);

        let first = images.store(&upload).await.unwrap();
        let second = images.store(&upload).await.unwrap();
        assert_ne!(first, second);
        assert!(first.as_str().ends_with(".jpg"));
    }

    #[test]
    fn urls_fall_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let images = store(&dir);
        let image = ImageRef::new("abc.png").unwrap();

        assert_eq!(images.url_for(Some(&image)), "/media/abc.png");
        assert_eq!(images.url_for(None), "/img/placeholder.png");
    }
}
