//! Template files read from a directory.

use postcraft_error::{PostcraftResult, StorageError, StorageErrorKind};
use postcraft_interface::TemplateSource;
use std::path::{Component, Path, PathBuf};

/// Serves template files relative to a root directory.
///
/// Paths that are absolute or climb out of the root are rejected.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateSource {
    root: PathBuf,
}

impl DirectoryTemplateSource {
    /// Serve templates below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PostcraftResult<PathBuf> {
        let relative = Path::new(path.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidKey(path.to_string())).into());
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait::async_trait]
impl TemplateSource for DirectoryTemplateSource {
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, path: &str) -> PostcraftResult<String> {
        let full_path = self.resolve(path)?;
        let text = tokio::fs::read_to_string(&full_path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Read(format!(
                "{}: {}",
                full_path.display(),
                e
            )))
        })?;
        tracing::debug!(bytes = text.len(), "Fetched template");
        Ok(text)
    }
}
