use crate::core::{Catalog, CatalogSource};
use crate::utils::error::{ConfiguratorError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the catalog document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog file: {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        tracing::debug!("Read {} bytes", data.len());

        Catalog::from_json_slice(&data).map_err(|e| ConfiguratorError::CatalogLoadError {
            source_name: self.describe(),
            message: e.to_string(),
        })
    }
}
