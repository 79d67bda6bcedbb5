//! Named-blob persistence.
//!
//! Everything the wizard keeps between sessions (the résumé document, cover
//! letters, device snapshots, autocomplete history) is one JSON blob under a
//! fixed name. Stores are injected through `AppState` as `Arc<dyn BlobStore>`.

pub mod file;
pub mod memory;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::warn;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

pub const RESUME_BLOB: &str = "resume_document";
pub const COVER_LETTERS_BLOB: &str = "cover_letters";
pub const DEVICE_FILES_BLOB: &str = "device_files";
pub const SUGGESTIONS_BLOB: &str = "suggestions";

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, name: &str) -> Result<Option<Value>>;
    async fn put(&self, name: &str, value: Value) -> Result<()>;
    /// Removing a blob that does not exist is not an error.
    async fn delete(&self, name: &str) -> Result<()>;
}

/// Blob names become file names, so only `[a-z0-9_-]` is accepted.
pub fn validate_blob_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !valid {
        bail!("Invalid blob name '{name}'");
    }
    Ok(())
}

/// Reads and decodes a blob. Decode failures are errors.
pub async fn load_json<T: DeserializeOwned>(store: &dyn BlobStore, name: &str) -> Result<Option<T>> {
    match store.get(name).await? {
        Some(value) => {
            let decoded = serde_json::from_value(value)
                .with_context(|| format!("Blob '{name}' has an unexpected shape"))?;
            Ok(Some(decoded))
        }
        None => Ok(None),
    }
}

/// Reads a blob, falling back to `T::default()` when it is missing or corrupt.
pub async fn load_or_default<T: DeserializeOwned + Default>(
    store: &dyn BlobStore,
    name: &str,
) -> Result<T> {
    let Some(value) = store.get(name).await? else {
        return Ok(T::default());
    };
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(decoded),
        Err(e) => {
            warn!("Discarding unreadable blob '{name}': {e}");
            Ok(T::default())
        }
    }
}

pub async fn save_json<T: Serialize>(store: &dyn BlobStore, name: &str, value: &T) -> Result<()> {
    let value = serde_json::to_value(value)
        .with_context(|| format!("Failed to encode blob '{name}'"))?;
    store.put(name, value).await
}
