// ==========================================
// Skill Assessment Suite - in-memory store implementations
// ==========================================
// Used by engine unit tests and anywhere a throwaway store is enough.
// Same contracts as the SQLite implementations.
// ==========================================

use crate::domain::{AttachmentRecord, Hospital};
use crate::repository::attachment_repo::AttachmentStore;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::record_repo::RecordStore;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryRecordStore {
    tree: Mutex<Vec<Hospital>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hospitals(hospitals: Vec<Hospital>) -> Self {
        Self {
            tree: Mutex::new(hospitals),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn read_all(&self) -> RepositoryResult<Vec<Hospital>> {
        let tree = self
            .tree
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(tree.clone())
    }

    async fn replace_all(&self, hospitals: &[Hospital]) -> RepositoryResult<()> {
        let mut tree = self
            .tree
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        *tree = hospitals.to_vec();
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryAttachmentStore {
    records: Mutex<BTreeMap<String, String>>,
}

impl MemoryAttachmentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttachmentStore for MemoryAttachmentStore {
    async fn put(&self, record: &AttachmentRecord) -> RepositoryResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        records.insert(record.id.clone(), record.data.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<AttachmentRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(records.get(id).map(|data| AttachmentRecord {
            id: id.to_string(),
            data: data.clone(),
        }))
    }

    async fn get_where_id_in(
        &self,
        ids: &HashSet<String>,
    ) -> RepositoryResult<Vec<AttachmentRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(records
            .iter()
            .filter(|(id, _)| ids.contains(*id))
            .map(|(id, data)| AttachmentRecord {
                id: id.clone(),
                data: data.clone(),
            })
            .collect())
    }

    async fn get_all(&self) -> RepositoryResult<Vec<AttachmentRecord>> {
        let records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        Ok(records
            .iter()
            .map(|(id, data)| AttachmentRecord {
                id: id.clone(),
                data: data.clone(),
            })
            .collect())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        records.remove(id);
        Ok(())
    }

    async fn clear(&self) -> RepositoryResult<()> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))?;
        records.clear();
        Ok(())
    }
}
