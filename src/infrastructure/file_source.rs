use std::path::Path;

use async_trait::async_trait;

use crate::domain::error::{AppError, Result};
use crate::domain::upload::UploadedFile;

/// Where uploads are read from when the shell hands over a path
#[async_trait]
pub trait FileSource: Send + Sync {
    async fn read(&self, path: &Path) -> Result<UploadedFile>;
}

/// Reads from the local filesystem through tokio
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSource;

#[async_trait]
impl FileSource for TokioFileSource {
    async fn read(&self, path: &Path) -> Result<UploadedFile> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::ReadError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(UploadedFile::new(file_name, bytes))
    }
}
