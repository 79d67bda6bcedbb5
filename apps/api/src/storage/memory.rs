use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::storage::{validate_blob_name, BlobStore};

/// In-process store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, Value>>,
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, name: &str) -> Result<Option<Value>> {
        validate_blob_name(name)?;
        Ok(self.blobs.read().await.get(name).cloned())
    }

    async fn put(&self, name: &str, value: Value) -> Result<()> {
        validate_blob_name(name)?;
        self.blobs.write().await.insert(name.to_string(), value);
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        validate_blob_name(name)?;
        self.blobs.write().await.remove(name);
        Ok(())
    }
}
