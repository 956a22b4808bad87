// ==========================================
// Skill Assessment Suite - data store layer
// ==========================================
// Responsibility: data access for the two stores of the system
// (structured record tree + attachment key/value store)
// Red line: repositories do data CRUD only, no business rules
// ==========================================

pub mod attachment_repo;
pub mod error;
pub mod memory;
pub mod record_repo;
pub mod sqlite;

pub use attachment_repo::AttachmentStore;
pub use error::{RepositoryError, RepositoryResult};
pub use memory::{MemoryAttachmentStore, MemoryRecordStore};
pub use record_repo::RecordStore;
pub use sqlite::{open_stores, SqliteAttachmentStore, SqliteRecordStore};
