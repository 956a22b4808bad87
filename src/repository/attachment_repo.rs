// ==========================================
// Skill Assessment Suite - Attachment Store trait
// ==========================================
// Responsibility: key/value access to large binary payloads
// (files, images) addressed by generated string ids.
// Red line: payloads never travel through the Record Store.
// ==========================================

use crate::domain::AttachmentRecord;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use std::collections::HashSet;

// ==========================================
// AttachmentStore Trait
// ==========================================
// Implementors: SqliteAttachmentStore (persistent), MemoryAttachmentStore (tests)
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    /// Insert or overwrite a record (upsert by id).
    async fn put(&self, record: &AttachmentRecord) -> RepositoryResult<()>;

    /// Fetch a single record by id.
    async fn get(&self, id: &str) -> RepositoryResult<Option<AttachmentRecord>>;

    /// Fetch every record whose id is in `ids`. Ids without a stored
    /// record are silently skipped (dangling references are tolerated).
    async fn get_where_id_in(&self, ids: &HashSet<String>)
        -> RepositoryResult<Vec<AttachmentRecord>>;

    /// Fetch every record.
    async fn get_all(&self) -> RepositoryResult<Vec<AttachmentRecord>>;

    /// Delete a record by id. Deleting a missing id is a no-op.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// Delete every record.
    async fn clear(&self) -> RepositoryResult<()>;
}
