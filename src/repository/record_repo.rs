// ==========================================
// Skill Assessment Suite - Record Store trait
// ==========================================
// Responsibility: whole-tree access to the hospital record tree.
// Red line: the tree is a single shared value with last-writer-wins
// full-replace semantics. No partial-field patching; every mutation is
// a read-modify-write of the whole tree through this interface.
// ==========================================

use crate::domain::Hospital;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// RecordStore Trait
// ==========================================
// Implementors: SqliteRecordStore (persistent), MemoryRecordStore (tests)
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the entire hospital tree.
    async fn read_all(&self) -> RepositoryResult<Vec<Hospital>>;

    /// Replace the entire hospital tree in one step.
    async fn replace_all(&self, hospitals: &[Hospital]) -> RepositoryResult<()>;
}
