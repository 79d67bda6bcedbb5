use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::storage::{validate_blob_name, BlobStore};

/// Stores each blob as `<root>/<name>.json`.
///
/// Writes go to a uniquely named sibling temp file first and are renamed into
/// place, so a crash mid-write never leaves a truncated blob.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create data directory {}", root.display()))?;
        info!("Blob store rooted at {}", root.display());
        Ok(Self { root })
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_blob_name(name)?;
        Ok(self.root.join(format!("{name}.json")))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, name: &str) -> Result<Option<Value>> {
        let path = self.path_for(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        let value = serde_json::from_slice(&bytes)
            .with_context(|| format!("Blob {} is not valid JSON", path.display()))?;
        Ok(Some(value))
    }

    async fn put(&self, name: &str, value: Value) -> Result<()> {
        let path = self.path_for(name)?;
        let root = self.root.clone();
        let bytes = serde_json::to_vec_pretty(&value)?;
        let len = bytes.len();

        // Each write gets its own temp file; overlapping puts to one blob
        // each rename a complete file into place and the last one wins.
        let prefix = format!("{name}.");
        tokio::task::spawn_blocking(move || -> Result<()> {
            let mut tmp = tempfile::Builder::new()
                .prefix(&prefix)
                .suffix(".tmp")
                .tempfile_in(&root)
                .with_context(|| format!("Failed to create temp file in {}", root.display()))?;
            tmp.write_all(&bytes)
                .with_context(|| format!("Failed to write {}", tmp.path().display()))?;
            tmp.persist(&path)
                .with_context(|| format!("Failed to move blob into {}", path.display()))?;
            Ok(())
        })
        .await
        .context("Blob write task panicked")??;

        debug!("Wrote blob '{name}' ({len} bytes)");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
        }
    }
}
